use log::info;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod events;
mod router;
mod scroll_spy;
mod theme;
mod components {
    pub mod call_to_action;
    pub mod card;
    pub mod code;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod icons;
    pub mod menu;
}
mod pages {
    pub mod home;
    pub mod safety;
}

use components::{footer::Footer, header::Header};
use pages::{home::Home, safety::Safety};
use router::{use_link_interception, use_navigation, Route};
use theme::{apply_theme, Theme};

fn switch(route: Route) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Safety => {
            info!("Rendering Safety page");
            html! { <Safety /> }
        }
    }
}

/// Renders the page for the current location and keeps the URL canonical.
#[function_component(Pages)]
fn pages() -> Html {
    use_link_interception();
    let location = use_location();
    let navigator = use_navigator();
    let navigation = use_navigation();
    let route = navigation.route;

    let path = location
        .as_ref()
        .map(|l| l.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    // `/unknown` and `/safety/` render the home page; show `/` for them too.
    use_effect_with_deps(
        move |path: &String| {
            if let Some(navigator) = navigator {
                if path != route.canonical_path() {
                    info!("Normalising {} to {}", path, route.canonical_path());
                    navigator.replace(&route);
                }
            }
            || ()
        },
        path,
    );

    // Every navigation starts at the top, including a link to the current page
    use_effect_with_deps(
        |_| {
            if let Some(window) = window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        navigation,
    );

    switch(route)
}

#[function_component]
fn App() -> Html {
    let theme = use_state_eq(Theme::default);

    use_effect_with_deps(
        |theme: &Theme| {
            apply_theme(*theme);
            || ()
        },
        *theme,
    );

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set((*theme).toggled()))
    };

    html! {
        <BrowserRouter>
            <div class="app-shell">
                <Header theme={*theme} on_toggle_theme={toggle_theme} />
                <Pages />
                <Footer />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
