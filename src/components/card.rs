use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::components::code::CodeBlock;
use crate::components::icons::{Icon, IconSvg};
use crate::config;
use crate::content::{CardData, CardLogo};

/// Card rotation for a pointer position inside the card's box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    /// Glow centre as a percentage of the card's width and height.
    pub glow_x: f64,
    pub glow_y: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
        glow_x: 50.0,
        glow_y: 50.0,
    };

    /// `x`/`y` are relative to the card's top-left corner. The card leans
    /// towards the pointer, at most `TILT_MAX_DEGREES` at the edges.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Tilt {
        if width <= 0.0 || height <= 0.0 {
            return Tilt::NEUTRAL;
        }
        let center_x = width / 2.0;
        let center_y = height / 2.0;

        Tilt {
            rotate_x: ((y - center_y) / center_y) * -config::TILT_MAX_DEGREES,
            rotate_y: ((x - center_x) / center_x) * config::TILT_MAX_DEGREES,
            glow_x: x / width * 100.0,
            glow_y: y / height * 100.0,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d({s}, {s}, {s})",
            config::TILT_PERSPECTIVE_PX,
            self.rotate_x,
            self.rotate_y,
            s = config::TILT_SCALE,
        )
    }
}

#[derive(Properties, PartialEq)]
struct TiltCardProps {
    #[prop_or_default]
    class: Classes,
    children: Children,
}

#[function_component(TiltCard)]
fn tilt_card(props: &TiltCardProps) -> Html {
    let card_ref = use_node_ref();
    let tilt = use_state_eq(|| None::<Tilt>);

    let onmousemove = {
        let card_ref = card_ref.clone();
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(card) = card_ref.cast::<HtmlElement>() {
                let rect = card.get_bounding_client_rect();
                let next = Tilt::from_pointer(
                    e.client_x() as f64 - rect.left(),
                    e.client_y() as f64 - rect.top(),
                    rect.width(),
                    rect.height(),
                );
                let style = card.style();
                let _ = style.set_property("--glow-x", &format!("{}%", next.glow_x));
                let _ = style.set_property("--glow-y", &format!("{}%", next.glow_y));
                tilt.set(Some(next));
            }
        })
    };

    let onmouseleave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set(None))
    };

    let transform = match *tilt {
        Some(t) => format!("transform: {};", t.transform()),
        None => String::new(),
    };

    html! {
        <div
            ref={card_ref}
            class={classes!("tilt-card", props.class.clone())}
            style={transform}
            {onmousemove}
            {onmouseleave}
        >
            <div class={classes!("tilt-glow", tilt.is_some().then_some("visible"))}></div>
            { for props.children.iter() }
        </div>
    }
}

fn render_logo(logo: CardLogo) -> Html {
    match logo {
        CardLogo::Story => html! { <IconSvg icon={Icon::Story} class="card-logo-story" /> },
        CardLogo::Moderna => html! {
            <div class="card-logo-moderna">
                <span class="wordmark">{"moderna"}</span>
                <span class="rule">{"---------"}</span>
            </div>
        },
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardLayout {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub data: &'static CardData,
    #[prop_or_default]
    pub layout: CardLayout,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let data = props.data;
    let has_image = data.image_url.is_some();

    let layout_class = match props.layout {
        CardLayout::Horizontal => "card-horizontal",
        CardLayout::Vertical => "card-vertical",
    };

    let tilt_card = html! {
        <TiltCard class={classes!("card", layout_class, has_image.then_some("has-image"))}>
            if let Some(url) = data.image_url {
                <div class="card-image" style={format!("background-image: url({});", url)}></div>
                <div class="card-shade"></div>
            }
            <div class="card-body">
                <div class="card-top">
                    <div class="card-meta">
                        <p class="card-category">{data.category.unwrap_or_default()}</p>
                        if let Some(date) = data.date.and_then(|d| d.display()) {
                            <p class="card-date">{date}</p>
                        }
                    </div>
                    if data.shows_arrow() {
                        <div class="card-arrow">
                            <IconSvg icon={Icon::ArrowRight} class="icon-sm" />
                        </div>
                    }
                </div>

                if let Some(logo) = data.logo {
                    <div class="card-logo">{render_logo(logo)}</div>
                }

                if let Some(snippet) = &data.code_snippet {
                    <CodeBlock lang={snippet.lang} code={snippet.code} />
                }

                <div class={classes!("card-bottom", data.logo.is_some().then_some("centered"))}>
                    <h3 class="card-title">{data.title}</h3>
                    if let Some(text) = data.link_text.filter(|t| !t.is_empty()) {
                        <span class="card-link">{text}</span>
                    }
                </div>
            </div>
        </TiltCard>
    };

    match props.layout {
        CardLayout::Horizontal => tilt_card,
        CardLayout::Vertical => html! { <div class="card-vertical-frame">{tilt_card}</div> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn centre_is_flat() {
        let tilt = Tilt::from_pointer(100.0, 50.0, 200.0, 100.0);
        assert!(approx(tilt.rotate_x, 0.0));
        assert!(approx(tilt.rotate_y, 0.0));
        assert!(approx(tilt.glow_x, 50.0));
        assert!(approx(tilt.glow_y, 50.0));
    }

    #[test]
    fn corners_reach_the_limit() {
        let top_left = Tilt::from_pointer(0.0, 0.0, 200.0, 100.0);
        assert!(approx(top_left.rotate_x, 3.0));
        assert!(approx(top_left.rotate_y, -3.0));
        assert!(approx(top_left.glow_x, 0.0));

        let bottom_right = Tilt::from_pointer(200.0, 100.0, 200.0, 100.0);
        assert!(approx(bottom_right.rotate_x, -3.0));
        assert!(approx(bottom_right.rotate_y, 3.0));
        assert!(approx(bottom_right.glow_y, 100.0));
    }

    #[test]
    fn empty_box_is_neutral() {
        assert_eq!(Tilt::from_pointer(10.0, 10.0, 0.0, 100.0), Tilt::NEUTRAL);
    }

    #[test]
    fn transform_string() {
        let tilt = Tilt::from_pointer(0.0, 0.0, 200.0, 100.0);
        assert_eq!(
            tilt.transform(),
            "perspective(1000px) rotateX(3.00deg) rotateY(-3.00deg) scale3d(1.02, 1.02, 1.02)"
        );
    }
}
