use web_sys::window;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::components::icons::{Icon, IconSvg, Logo};
use crate::components::menu::Menu;
use crate::config;
use crate::router::use_navigation;
use crate::theme::Theme;

fn set_body_overflow(value: &str) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", value);
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state_eq(|| false);
    let (_, scroll_y) = use_window_scroll();
    let navigation = use_navigation();

    // Lock page scrolling behind the open menu
    use_effect_with_deps(
        |open: &bool| {
            set_body_overflow(if *open { "hidden" } else { "" });
            || set_body_overflow("")
        },
        *menu_open,
    );

    // Any navigation closes the menu
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            navigation,
        );
    }

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(true))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let scrolled = scroll_y > config::HEADER_SCROLL_THRESHOLD;
    let theme_icon = if props.theme.is_dark() { Icon::Sun } else { Icon::Moon };

    html! {
        <>
            <header class={classes!("site-header", scrolled.then_some("scrolled"))}>
                <div class="header-inner">
                    <a href="/" class="header-logo" aria-label={format!("{} Homepage", config::BRAND)}>
                        <Logo class="logo" />
                    </a>
                    <div class="header-actions">
                        <button class="header-button" onclick={toggle_theme} aria-label="Toggle theme">
                            <IconSvg icon={theme_icon} class="icon-md" />
                        </button>
                        <button class="header-button" onclick={open_menu} aria-label="Open menu">
                            <IconSvg icon={Icon::Menu} class="icon-lg" />
                        </button>
                    </div>
                </div>
            </header>
            <Menu is_open={*menu_open} on_close={close_menu} />

            <style>
                {r#"
                .site-header {
                    position: sticky;
                    top: 0;
                    z-index: 40;
                    background: transparent;
                    transition: all 0.3s;
                }
                .site-header.scrolled {
                    background: var(--bg-translucent);
                    backdrop-filter: blur(24px);
                    border-bottom: 1px solid var(--border);
                }
                .header-inner {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    height: 5rem;
                    padding: 0 1rem;
                }
                @media (min-width: 768px) { .header-inner { padding: 0 2rem; } }
                @media (min-width: 1280px) { .header-inner { padding: 0 6rem; } }
                .header-logo .logo { height: 2.25rem; width: auto; }
                html:not(.dark) .header-logo .logo { filter: invert(1); }
                .header-actions { display: flex; align-items: center; gap: 0.5rem; }
                .header-button {
                    background: none;
                    border: none;
                    color: var(--fg-strong);
                    padding: 0.625rem;
                    border-radius: 9999px;
                    cursor: pointer;
                }
                .header-button:hover { background: var(--hover); }
                "#}
            </style>
        </>
    }
}
