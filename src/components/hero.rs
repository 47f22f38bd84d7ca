use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::config;
use crate::content::HERO_SLIDES;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: usize,
}

pub enum CarouselAction {
    Advance,
    Select(usize),
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn apply(self, action: CarouselAction) -> Self {
        match action {
            CarouselAction::Advance if self.len > 0 => Self {
                current: (self.current + 1) % self.len,
                ..self
            },
            CarouselAction::Select(index) if index < self.len => Self {
                current: index,
                ..self
            },
            _ => self,
        }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let carousel = use_reducer_eq(|| Carousel::new(HERO_SLIDES.len()));

    // Auto-advance for as long as the hero is mounted
    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::HERO_INTERVAL_MS, move || {
                    carousel.dispatch(CarouselAction::Advance);
                });
                move || drop(interval)
            },
            (),
        );
    }

    let current = carousel.current();
    let Some(slide) = HERO_SLIDES.get(current) else {
        return html! {};
    };

    html! {
        <section class="hero">
            <div class="hero-backgrounds">
                { for HERO_SLIDES.iter().enumerate().map(|(index, s)| {
                    let active = index == current;
                    html! {
                        <div class={classes!("hero-slide", active.then_some("active"))}>
                            <div
                                class={classes!("hero-image", active.then_some("zooming"))}
                                style={format!("background-image: url({});", s.image_url)}
                            ></div>
                        </div>
                    }
                }) }
            </div>
            <div class="hero-shade"></div>

            <div class="hero-content">
                <h1 key={format!("title-{}", current)} class="hero-title rise">{slide.title}</h1>
                <p key={format!("desc-{}", current)} class="hero-description rise delay-1">{slide.description}</p>
                <div key={format!("btn-{}", current)} class="rise delay-2">
                    <button class="hero-button">
                        <span>{slide.button_text}</span>
                        <IconSvg icon={Icon::ArrowRight} class="icon-md" />
                    </button>
                </div>
            </div>

            <div class="hero-indicators">
                { for (0..HERO_SLIDES.len()).map(|index| {
                    let onclick = {
                        let carousel = carousel.clone();
                        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Select(index)))
                    };
                    let active = index == current;
                    html! {
                        <button
                            class={classes!("hero-indicator", active.then_some("active"))}
                            aria-label={format!("Go to slide {}", index + 1)}
                            {onclick}
                        >
                            if active {
                                <div class="hero-progress"></div>
                            }
                        </button>
                    }
                }) }
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 75vh;
                    margin: 1rem 0;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    background: #000;
                }
                .hero-slide {
                    position: absolute;
                    inset: 0;
                    opacity: 0;
                    transition: opacity 1s ease-in-out;
                }
                .hero-slide.active { opacity: 1; z-index: 1; }
                .hero-image {
                    width: 100%;
                    height: 100%;
                    background-size: cover;
                    background-position: center;
                }
                .hero-image.zooming { animation: subtle-zoom 20s ease-in-out infinite alternate; }
                .hero-shade {
                    position: absolute;
                    inset: 0;
                    z-index: 2;
                    pointer-events: none;
                    background: linear-gradient(to top, rgba(0,0,0,0.8), rgba(0,0,0,0.4), rgba(0,0,0,0.3));
                }
                .hero-content {
                    position: absolute;
                    inset: 0;
                    z-index: 3;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    color: #fff;
                    padding: 1.5rem;
                }
                .hero-title { font-size: clamp(3rem, 7vw, 6rem); font-weight: 700; margin-bottom: 1.5rem; }
                .hero-description { font-size: 1.5rem; font-weight: 300; color: #e5e7eb; max-width: 42rem; margin-bottom: 2.5rem; }
                .hero-button {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #fff;
                    color: #000;
                    border: none;
                    border-radius: 9999px;
                    padding: 1rem 2rem;
                    font-weight: 500;
                    cursor: pointer;
                }
                .rise { opacity: 0; animation: slide-up-fade 0.8s cubic-bezier(0.2, 0.8, 0.2, 1) forwards; }
                .rise.delay-1 { animation-delay: 0.15s; }
                .rise.delay-2 { animation-delay: 0.3s; }
                .hero-indicators {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    gap: 0.75rem;
                    z-index: 4;
                }
                .hero-indicator {
                    position: relative;
                    width: 24px;
                    height: 6px;
                    border: none;
                    border-radius: 9999px;
                    overflow: hidden;
                    background: rgba(255,255,255,0.3);
                    transition: width 0.5s ease-out;
                    cursor: pointer;
                }
                .hero-indicator.active { width: 48px; }
                .hero-progress {
                    position: absolute;
                    inset: 0;
                    background: #fff;
                    transform-origin: left;
                    animation: progress 6s linear;
                }
                @keyframes subtle-zoom {
                    0% { transform: scale(1) translate(0, 0); }
                    100% { transform: scale(1.1) translate(-1%, -1%); }
                }
                @keyframes slide-up-fade {
                    0% { opacity: 0; transform: translateY(30px) scale(0.98); filter: blur(8px); }
                    100% { opacity: 1; transform: translateY(0) scale(1); filter: blur(0); }
                }
                @keyframes progress {
                    from { transform: scaleX(0); }
                    to { transform: scaleX(1); }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_around() {
        let mut carousel = Carousel::new(3);
        for expected in [1, 2, 0, 1] {
            carousel = carousel.apply(CarouselAction::Advance);
            assert_eq!(carousel.current(), expected);
        }
    }

    #[test]
    fn select_jumps_and_ignores_out_of_range() {
        let carousel = Carousel::new(4).apply(CarouselAction::Select(2));
        assert_eq!(carousel.current(), 2);
        assert_eq!(carousel.apply(CarouselAction::Select(4)).current(), 2);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let carousel = Carousel::new(0).apply(CarouselAction::Advance);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn hero_table_is_not_empty() {
        assert!(!HERO_SLIDES.is_empty());
    }
}
