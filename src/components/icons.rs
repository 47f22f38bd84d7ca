use yew::prelude::*;

use crate::config;

/// Every glyph the site draws. Rendering goes through [`Icon::shapes`], so
/// adding a variant without drawing it does not compile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Menu,
    Close,
    ArrowRight,
    Sun,
    Moon,
    ChevronDown,
    Story,
    CapabilityRisk,
    Thresholds,
    Safeguards,
    Evaluation,
    Governance,
    Monitoring,
    Reporting,
    Research,
    X,
    LinkedIn,
    GitHub,
    YouTube,
}

enum Shape {
    Path(&'static str),
    Circle { cx: &'static str, cy: &'static str, r: &'static str },
    Line { x1: &'static str, y1: &'static str, x2: &'static str, y2: &'static str },
    Polyline(&'static str),
    Rect { x: &'static str, y: &'static str, width: &'static str, height: &'static str },
}

use Shape::*;

impl Icon {
    fn view_box(self) -> &'static str {
        match self {
            Icon::Story => "0 0 82 50",
            _ => "0 0 24 24",
        }
    }

    fn shapes(self) -> &'static [Shape] {
        match self {
            Icon::Menu => &[
                Line { x1: "4", y1: "8", x2: "20", y2: "8" },
                Line { x1: "4", y1: "16", x2: "20", y2: "16" },
            ],
            Icon::Close | Icon::X => &[Path("M18 6 6 18"), Path("m6 6 12 12")],
            Icon::ArrowRight => &[Path("M5 12H19"), Path("M12 5L19 12L12 19")],
            Icon::Sun => &[
                Circle { cx: "12", cy: "12", r: "4" },
                Path("M12 2v2"),
                Path("M12 20v2"),
                Path("m4.93 4.93 1.41 1.41"),
                Path("m17.66 17.66 1.41 1.41"),
                Path("M2 12h2"),
                Path("M20 12h2"),
                Path("m6.34 17.66-1.41 1.41"),
                Path("m19.07 4.93-1.41 1.41"),
            ],
            Icon::Moon => &[Path("M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z")],
            Icon::ChevronDown => &[Path("m6 9 6 6 6-6")],
            Icon::Story => &[
                Path("M41 50C41 46.67 39.5 41.5 35.5 38C31.5 34.5 25.67 32.67 21.5 31.5C17.33 30.33 11.83 29.5 8 29C4.17 28.5 0.5 27.83 0.5 25C0.5 22.17 4.17 21.5 8 21C11.83 20.5 17.33 19.67 21.5 18.5C25.67 17.33 31.5 15.5 35.5 12C39.5 8.5 41 3.33 41 0"),
                Path("M41 50C41 46.67 42.5 41.5 46.5 38C50.5 34.5 56.33 32.67 60.5 31.5C64.67 30.33 70.17 29.5 74 29C77.83 28.5 81.5 27.83 81.5 25C81.5 22.17 77.83 21.5 74 21C70.17 20.5 64.67 19.67 60.5 18.5C56.33 17.33 50.5 15.5 46.5 12C42.5 8.5 41 3.33 41 0"),
            ],
            Icon::CapabilityRisk => &[Path("M12 3v18M3 6h18M3 18h18M4 6l8 6 8-6M4 18l8-6 8 6")],
            Icon::Thresholds => &[Path("M22 12h-4l-3 9L9 3l-3 9H2")],
            Icon::Safeguards => &[Path("M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z")],
            Icon::Evaluation => &[
                Circle { cx: "11", cy: "11", r: "8" },
                Line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" },
            ],
            Icon::Governance => &[Path(
                "m13 2-3 3 3 3 3-3-3-3zM6 8l-4 4 4 4 4-4-4-4zM13 19l-3 3 3 3 3-3-3-3zM18 8l4 4-4 4-4-4 4-4z",
            )],
            Icon::Monitoring => &[
                Path("M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"),
                Circle { cx: "12", cy: "12", r: "3" },
            ],
            Icon::Reporting => &[
                Path("M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"),
                Polyline("14 2 14 8 20 8"),
                Line { x1: "16", y1: "13", x2: "8", y2: "13" },
                Line { x1: "16", y1: "17", x2: "8", y2: "17" },
                Polyline("10 9 9 9 8 9"),
            ],
            Icon::Research => &[
                Path("M4 19.5A2.5 2.5 0 0 1 6.5 17H20"),
                Path("M6.5 2H20v15H6.5A2.5 2.5 0 0 1 4 14.5V4A2.5 2.5 0 0 1 6.5 2z"),
            ],
            Icon::LinkedIn => &[
                Path("M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"),
                Rect { x: "2", y: "9", width: "4", height: "12" },
                Circle { cx: "4", cy: "4", r: "2" },
            ],
            Icon::GitHub => &[
                Path("M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"),
                Path("M9 18c-4.51 2-5-2-7-2"),
            ],
            Icon::YouTube => &[
                Path("M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17Z"),
                Path("m10 15 5-3-5-3z"),
            ],
        }
    }
}

fn render_shape(shape: &Shape) -> Html {
    match *shape {
        Path(d) => html! { <path d={d} /> },
        Circle { cx, cy, r } => html! { <circle cx={cx} cy={cy} r={r} /> },
        Line { x1, y1, x2, y2 } => html! { <line x1={x1} y1={y1} x2={x2} y2={y2} /> },
        Polyline(points) => html! { <polyline points={points} /> },
        Rect { x, y, width, height } => html! { <rect x={x} y={y} width={width} height={height} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconSvg)]
pub fn icon_svg(props: &IconProps) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class={props.class.clone()}
            viewBox={props.icon.view_box()}
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.shapes().iter().map(render_shape) }
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <img src={config::LOGO_URL} alt={format!("{} Logo", config::BRAND)} class={props.class.clone()} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Icon; 19] = [
        Icon::Menu,
        Icon::Close,
        Icon::ArrowRight,
        Icon::Sun,
        Icon::Moon,
        Icon::ChevronDown,
        Icon::Story,
        Icon::CapabilityRisk,
        Icon::Thresholds,
        Icon::Safeguards,
        Icon::Evaluation,
        Icon::Governance,
        Icon::Monitoring,
        Icon::Reporting,
        Icon::Research,
        Icon::X,
        Icon::LinkedIn,
        Icon::GitHub,
        Icon::YouTube,
    ];

    #[test]
    fn every_icon_draws_something() {
        for icon in ALL {
            assert!(!icon.shapes().is_empty(), "{:?} has no shapes", icon);
            assert_eq!(icon.view_box().split(' ').count(), 4);
        }
    }
}
