use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlAnchorElement, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::events::EventSubscription;

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/safety")]
    Safety,
}

impl Route {
    /// Maps a raw location to a page. Never fails: anything that is not
    /// exactly `/safety` renders the home page.
    ///
    /// A leading `#` is accepted so hash-style locations (`#/safety`) resolve
    /// the same way; query strings and fragments are ignored.
    pub fn resolve(location: &str) -> Route {
        let path = location.strip_prefix('#').unwrap_or(location);
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path {
            "/safety" => Route::Safety,
            _ => Route::Home,
        }
    }

    pub fn canonical_path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Safety => "/safety",
        }
    }
}

/// One entry of the navigation history: the page it resolves to and the id
/// the history assigned it. Pushing the current path again gives a new entry,
/// so effects keyed on a `Navigation` re-run even when the route is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    pub entry: Option<u32>,
}

impl Navigation {
    pub fn new(path: &str, entry: Option<u32>) -> Self {
        Self {
            route: Route::resolve(path),
            entry,
        }
    }
}

/// The current navigation. Components calling this re-render on every
/// navigation, whether it came from history or from an intercepted link.
#[hook]
pub fn use_navigation() -> Navigation {
    let location = use_location();
    match location {
        Some(location) => Navigation::new(location.path(), location.id()),
        None => Navigation::new("/", None),
    }
}

/// What the interceptor needs to know about a clicked anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkClick<'a> {
    /// The `href` attribute as written in the markup.
    pub href: &'a str,
    /// The absolute URL the browser resolved `href` to.
    pub resolved: &'a str,
    pub target: &'a str,
    pub download: bool,
    pub button: i16,
    pub modified: bool,
}

/// Decides whether a click on an anchor should be handled in-app.
///
/// Returns the route to push, or `None` to let the browser follow the link.
pub fn intercept_target(click: &LinkClick<'_>, origin: &str) -> Option<Route> {
    if click.button != 0 || click.modified || click.download {
        return None;
    }
    if !click.target.is_empty() && click.target != "_self" {
        return None;
    }
    // Fragment links scroll within the page.
    if click.href.is_empty() || click.href.starts_with('#') {
        return None;
    }

    let rest = click.resolved.strip_prefix(origin)?;
    if !(rest.is_empty() || rest.starts_with(['/', '?', '#'])) {
        return None;
    }
    let path = if rest.starts_with('/') { rest } else { "/" };
    Some(Route::resolve(path))
}

fn anchor_for(event: &MouseEvent) -> Option<HtmlAnchorElement> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest("a")
        .ok()??
        .dyn_into::<HtmlAnchorElement>()
        .ok()
}

/// Routes same-origin `<a href>` clicks through the history stack instead of
/// letting the browser reload the page.
#[hook]
pub fn use_link_interception() {
    let navigator = use_navigator();

    use_effect_with_deps(
        move |_| {
            let subscription = navigator.and_then(|navigator| {
                let window = window()?;
                let origin = window.location().origin().ok()?;
                let document = window.document()?;

                Some(EventSubscription::new(&document, "click", move |event: MouseEvent| {
                    if event.default_prevented() {
                        return;
                    }
                    let Some(anchor) = anchor_for(&event) else {
                        return;
                    };
                    let href = anchor.get_attribute("href").unwrap_or_default();
                    let resolved = anchor.href();
                    let target = anchor.target();
                    let click = LinkClick {
                        href: &href,
                        resolved: &resolved,
                        target: &target,
                        download: anchor.has_attribute("download"),
                        button: event.button(),
                        modified: event.meta_key()
                            || event.ctrl_key()
                            || event.shift_key()
                            || event.alt_key(),
                    };

                    if let Some(route) = intercept_target(&click, &origin) {
                        event.prevent_default();
                        debug!("Intercepted link to {}", route.canonical_path());
                        navigator.push(&route);
                    }
                }))
            });

            move || drop(subscription)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ORIGIN: &str = "https://webspaceai.in";

    fn click<'a>(href: &'a str, resolved: &'a str) -> LinkClick<'a> {
        LinkClick {
            href,
            resolved,
            target: "",
            download: false,
            button: 0,
            modified: false,
        }
    }

    #[test]
    fn resolves_known_paths() {
        assert_eq!(Route::resolve("/safety"), Route::Safety);
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
    }

    #[test]
    fn unknown_and_trailing_slash_fall_back_home() {
        assert_eq!(Route::resolve("/safety/"), Route::Home);
        assert_eq!(Route::resolve("/unknown"), Route::Home);
        assert_eq!(Route::resolve("/SAFETY"), Route::Home);
        assert_eq!(Route::resolve("safety"), Route::Home);
    }

    #[test]
    fn hash_prefix_query_and_fragment_are_stripped() {
        assert_eq!(Route::resolve("#/safety"), Route::Safety);
        assert_eq!(Route::resolve("#/"), Route::Home);
        assert_eq!(Route::resolve("/safety?ref=menu"), Route::Safety);
        assert_eq!(Route::resolve("/safety#conclusion"), Route::Safety);
    }

    #[test]
    fn canonical_paths_resolve_to_themselves() {
        for route in [Route::Home, Route::Safety] {
            assert_eq!(Route::resolve(route.canonical_path()), route);
            assert_eq!(route.to_path(), route.canonical_path());
        }
    }

    #[test]
    fn pushing_the_current_route_is_a_new_navigation() {
        let first = Navigation::new("/safety", Some(3));
        let again = Navigation::new("/safety", Some(4));
        assert_eq!(first.route, again.route);
        assert_ne!(first, again);

        // Re-rendering the same history entry is not a navigation.
        assert_eq!(first, Navigation::new("/safety", Some(3)));
    }

    #[test]
    fn same_origin_link_is_intercepted() {
        let c = click("/safety", "https://webspaceai.in/safety");
        assert_eq!(intercept_target(&c, ORIGIN), Some(Route::Safety));

        let c = click("/", "https://webspaceai.in/");
        assert_eq!(intercept_target(&c, ORIGIN), Some(Route::Home));
    }

    #[test]
    fn unknown_same_origin_path_goes_home() {
        let c = click("/careers", "https://webspaceai.in/careers");
        assert_eq!(intercept_target(&c, ORIGIN), Some(Route::Home));
    }

    #[test]
    fn fragment_links_are_left_alone() {
        let c = click("#", "https://webspaceai.in/#");
        assert_eq!(intercept_target(&c, ORIGIN), None);

        let c = click("#conclusion", "https://webspaceai.in/safety#conclusion");
        assert_eq!(intercept_target(&c, ORIGIN), None);
    }

    #[test]
    fn other_origins_are_left_alone() {
        let c = click("https://example.com/safety", "https://example.com/safety");
        assert_eq!(intercept_target(&c, ORIGIN), None);

        // Same prefix, different host.
        let c = click("https://webspaceai.in.evil/safety", "https://webspaceai.in.evil/safety");
        assert_eq!(intercept_target(&c, ORIGIN), None);
    }

    #[test]
    fn new_context_and_modified_clicks_are_left_alone() {
        let mut c = click("/safety", "https://webspaceai.in/safety");
        c.target = "_blank";
        assert_eq!(intercept_target(&c, ORIGIN), None);

        let mut c = click("/safety", "https://webspaceai.in/safety");
        c.modified = true;
        assert_eq!(intercept_target(&c, ORIGIN), None);

        let mut c = click("/safety", "https://webspaceai.in/safety");
        c.button = 1;
        assert_eq!(intercept_target(&c, ORIGIN), None);

        let mut c = click("/safety", "https://webspaceai.in/safety");
        c.download = true;
        assert_eq!(intercept_target(&c, ORIGIN), None);
    }

    #[test]
    fn explicit_self_target_is_intercepted() {
        let mut c = click("/safety", "https://webspaceai.in/safety");
        c.target = "_self";
        assert_eq!(intercept_target(&c, ORIGIN), Some(Route::Safety));
    }

    proptest! {
        #[test]
        fn resolve_is_total_and_deterministic(location in ".*") {
            let first = Route::resolve(&location);
            prop_assert!(matches!(first, Route::Home | Route::Safety));
            prop_assert_eq!(first, Route::resolve(&location));
        }

        #[test]
        fn only_the_safety_path_resolves_to_safety(path in "/[a-z/-]{0,12}") {
            let expected = if path == "/safety" { Route::Safety } else { Route::Home };
            prop_assert_eq!(Route::resolve(&path), expected);
        }
    }
}
