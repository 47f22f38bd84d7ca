use web_sys::{window, KeyboardEvent};
use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::content::MENU_LINKS;
use crate::events::EventSubscription;

#[derive(Properties, PartialEq)]
pub struct MenuProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(Menu)]
pub fn menu(props: &MenuProps) -> Html {
    // Escape closes the menu; only listen while it is open.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |is_open: &bool| {
                let subscription = if *is_open {
                    window().and_then(|w| w.document()).map(|document| {
                        EventSubscription::new(&document, "keydown", move |event: KeyboardEvent| {
                            if event.key() == "Escape" {
                                on_close.emit(());
                            }
                        })
                    })
                } else {
                    None
                };
                move || drop(subscription)
            },
            props.is_open,
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            id="menu-overlay"
            class={classes!("menu-overlay", props.is_open.then_some("open"))}
            role="dialog"
            aria-modal="true"
        >
            <button class="menu-close" onclick={close} aria-label="Close menu">
                <IconSvg icon={Icon::Close} class="icon-lg" />
            </button>

            <div class="menu-body">
                <div class="menu-columns">
                    { for MENU_LINKS.iter().map(|column| html! {
                        <div key={column.title}>
                            <h3 class="menu-column-title">{column.title}</h3>
                            <ul class="menu-links">
                                { for column.links.iter().map(|link| html! {
                                    <li key={link.text}>
                                        <a href={link.href} class="menu-link">
                                            <span>{link.text}</span>
                                            <IconSvg icon={Icon::ArrowRight} class="menu-link-arrow icon-sm" />
                                        </a>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .menu-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    background: var(--overlay);
                    backdrop-filter: blur(16px);
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.3s;
                }
                .menu-overlay.open { opacity: 1; pointer-events: auto; }
                .menu-close {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    background: none;
                    border: none;
                    color: var(--fg-strong);
                    cursor: pointer;
                }
                .menu-body {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    height: 100%;
                    padding: 0 2rem;
                }
                .menu-columns {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 4rem;
                    width: 100%;
                    max-width: 64rem;
                }
                @media (max-width: 768px) {
                    .menu-columns { grid-template-columns: repeat(2, 1fr); gap: 2rem; }
                }
                .menu-column-title { font-size: 1.25rem; font-weight: 600; margin-bottom: 1.5rem; }
                .menu-links { list-style: none; padding: 0; display: grid; gap: 1rem; }
                .menu-link {
                    display: flex;
                    align-items: center;
                    font-size: 1.125rem;
                    color: var(--fg-muted);
                    text-decoration: none;
                }
                .menu-link:hover { color: var(--fg-strong); }
                .menu-link-arrow { margin-left: 0.5rem; opacity: 0; transition: opacity 0.2s; }
                .menu-link:hover .menu-link-arrow { opacity: 1; }
                "#}
            </style>
        </div>
    }
}
