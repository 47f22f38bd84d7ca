use yew::prelude::*;

use crate::components::call_to_action::CallToAction;
use crate::components::card::{Card, CardLayout};
use crate::components::hero::Hero;
use crate::components::icons::{Icon, IconSvg};
use crate::content::{CardData, NEWS_CARDS, PRODUCT_CARDS, RESEARCH_CARDS};

#[derive(Properties, PartialEq)]
struct HorizontalSectionProps {
    title: &'static str,
    cards: &'static [CardData],
}

#[function_component(HorizontalSection)]
fn horizontal_section(props: &HorizontalSectionProps) -> Html {
    html! {
        <section class="card-row">
            <div class="card-row-header">
                <h2>{props.title}</h2>
                <a href="#" class="view-all">
                    <span>{"View all"}</span>
                    <IconSvg icon={Icon::ArrowRight} class="icon-sm" />
                </a>
            </div>
            <div class="card-row-track">
                { for props.cards.iter().map(|card| html! {
                    <Card data={card} layout={CardLayout::Horizontal} />
                }) }
                <div class="card-row-end"></div>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home-page">
            <Hero />
            <HorizontalSection title="Product" cards={PRODUCT_CARDS} />
            <HorizontalSection title="Research" cards={RESEARCH_CARDS} />
            <HorizontalSection title="News" cards={NEWS_CARDS} />
            <CallToAction />

            <style>
                {r#"
                .home-page { padding: 0 1rem; }
                @media (min-width: 768px) { .home-page { padding: 0 2rem; } }
                @media (min-width: 1280px) { .home-page { padding: 0 6rem; } }
                .card-row { padding: 3rem 0; }
                .card-row-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1.5rem;
                }
                .card-row-header h2 { font-size: 1.5rem; font-weight: 700; color: var(--fg-strong); }
                .view-all {
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: var(--fg-muted);
                    text-decoration: none;
                }
                .view-all:hover { color: var(--fg-strong); }
                .card-row-track {
                    display: flex;
                    gap: 1.5rem;
                    overflow-x: auto;
                    padding: 0 0.25rem 1.5rem;
                    margin-bottom: -1.5rem;
                }
                .card-row-end { flex-shrink: 0; width: 0.25rem; }
                "#}
            </style>
        </main>
    }
}
