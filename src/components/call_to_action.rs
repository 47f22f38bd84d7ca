use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <section class="cta">
            <h2>{"Instant answers. Greater productivity. Endless inspiration."}</h2>
            <button class="cta-button">
                <span>{"Try our Product"}</span>
                <IconSvg icon={Icon::ArrowRight} class="icon-md" />
            </button>

            <style>
                {r#"
                .cta { text-align: center; padding: 8rem 0; }
                .cta h2 {
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    font-weight: 700;
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                    line-height: 1.2;
                    color: var(--fg-strong);
                }
                .cta-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: var(--fg-strong);
                    color: var(--bg);
                    border: none;
                    border-radius: 9999px;
                    padding: 0.75rem 1.5rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                "#}
            </style>
        </section>
    }
}
