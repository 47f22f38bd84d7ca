//! Static copy and card tables rendered by the pages.

use chrono::NaiveDate;

use crate::components::icons::Icon;

#[derive(Debug, PartialEq)]
pub struct HeroSlide {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub button_text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CardDate {
    /// `May 13, 2024`. `None` for a date that does not exist.
    pub fn display(&self) -> Option<String> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .map(|date| date.format("%b %-d, %Y").to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardLogo {
    Story,
    Moderna,
}

#[derive(Debug, PartialEq)]
pub struct CodeSnippet {
    pub lang: &'static str,
    pub code: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct CardData {
    pub category: Option<&'static str>,
    pub date: Option<CardDate>,
    pub title: &'static str,
    pub image_url: Option<&'static str>,
    pub logo: Option<CardLogo>,
    pub code_snippet: Option<CodeSnippet>,
    pub link_text: Option<&'static str>,
}

impl CardData {
    const EMPTY: CardData = CardData {
        category: None,
        date: None,
        title: "",
        image_url: None,
        logo: None,
        code_snippet: None,
        link_text: None,
    };

    /// The arrow badge shows unless the card explicitly has no link text.
    pub fn shows_arrow(&self) -> bool {
        self.link_text != Some("")
    }
}

#[derive(Debug, PartialEq)]
pub struct Link {
    pub text: &'static str,
    pub href: &'static str,
    pub external: bool,
}

#[derive(Debug, PartialEq)]
pub struct LinkColumn {
    pub title: &'static str,
    pub links: &'static [Link],
}

#[derive(Debug, PartialEq)]
pub struct Principle {
    pub title: &'static str,
    pub text: &'static str,
    pub icon: Icon,
}

#[derive(Debug, PartialEq)]
pub struct SafetyLevel {
    pub level: u8,
    pub title: &'static str,
    pub objective: &'static str,
    pub applicability: &'static [&'static str],
    pub measures: &'static [&'static str],
    pub case_study: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Step {
    pub title: &'static str,
    pub text: &'static str,
}

const fn link(text: &'static str, href: &'static str) -> Link {
    Link { text, href, external: false }
}

const fn external(text: &'static str, href: &'static str) -> Link {
    Link { text, href, external: true }
}

const fn date(year: i32, month: u32, day: u32) -> Option<CardDate> {
    Some(CardDate { year, month, day })
}

pub static HERO_SLIDES: &[HeroSlide] = &[
    HeroSlide {
        title: "Spring Update",
        description: "Introducing GPT-4o and making more capabilities available for free in our Product.",
        image_url: "/assets/images/image1.png",
        button_text: "Learn more",
    },
    HeroSlide {
        title: "Explore Our Research",
        description: "Advancing AI to benefit all of humanity.",
        image_url: "/assets/images/image2.png",
        button_text: "See publications",
    },
    HeroSlide {
        title: "AI for Business",
        description: "Deploy the world's most capable models in your own applications.",
        image_url: "/assets/images/image3.png",
        button_text: "Discover our APIs",
    },
    HeroSlide {
        title: "Join Our Team",
        description: "Help us build the future of artificial intelligence.",
        image_url: "https://picsum.photos/seed/team/1200/600",
        button_text: "View careers",
    },
];

pub static PRODUCT_CARDS: &[CardData] = &[
    CardData {
        category: Some("For Everyone"),
        title: "WEBSPACEAI",
        image_url: Some("/assets/images/gemini_generated.jpg"),
        ..CardData::EMPTY
    },
    CardData {
        category: Some("For Everyone"),
        title: "ONE",
        image_url: Some("/assets/images/image4.jpeg"),
        ..CardData::EMPTY
    },
    CardData {
        category: Some("For Developers"),
        title: "Build with the API",
        code_snippet: Some(CodeSnippet {
            lang: "python",
            code: "1 from webspaceai import Client\n\
                   2 client = Client()\n\
                   3 reply = client.chat(\n\
                   4 model=\"one\",\n\
                   5 messages=[{\"role\": \"user\", \"content\": \"Hello\"}]\n\
                   6 )",
        }),
        link_text: Some("Read the docs"),
        ..CardData::EMPTY
    },
    CardData {
        category: Some("Customer story"),
        title: "Moderna scales research with ONE",
        logo: Some(CardLogo::Moderna),
        ..CardData::EMPTY
    },
];

pub static RESEARCH_CARDS: &[CardData] = &[
    CardData {
        category: Some("GPT-4o"),
        date: date(2024, 5, 13),
        title: "Hello GPT-4o",
        image_url: Some("https://picsum.photos/seed/gpt4o/600/800"),
        ..CardData::EMPTY
    },
    CardData {
        category: Some("Sora"),
        title: "Video generation models as world simulators",
        image_url: Some("https://picsum.photos/seed/sora/600/800"),
        ..CardData::EMPTY
    },
    CardData {
        category: Some("Safety"),
        date: date(2023, 12, 18),
        title: "Weak-to-strong generalization in LLMs",
        image_url: Some("https://picsum.photos/seed/safety_research/600/800"),
        ..CardData::EMPTY
    },
    CardData {
        category: Some("Multi-modal"),
        date: date(2023, 10, 25),
        title: "Unified reasoning across text and vision",
        image_url: Some("https://picsum.photos/seed/multimodal/600/800"),
        ..CardData::EMPTY
    },
];

pub static NEWS_CARDS: &[CardData] = &[
    CardData {
        category: Some("Company"),
        date: date(2024, 6, 10),
        title: "WEBSPACEAI and Apple announce partnership",
        image_url: Some("https://picsum.photos/seed/apple/600/600"),
        ..CardData::EMPTY
    },
    CardData {
        category: Some("Company"),
        date: date(2024, 5, 8),
        title: "Introducing the Model Spec",
        image_url: Some("https://picsum.photos/seed/modelspec/600/600"),
        ..CardData::EMPTY
    },
    CardData {
        category: Some("Stories"),
        title: "Writing the next chapter together",
        logo: Some(CardLogo::Story),
        link_text: Some(""),
        ..CardData::EMPTY
    },
];

pub static MENU_LINKS: &[LinkColumn] = &[
    LinkColumn {
        title: "Research",
        links: &[link("Overview", "#"), link("Index", "#"), link("GPT-4o", "#"), link("Sora", "#")],
    },
    LinkColumn {
        title: "Products",
        links: &[
            link("Our Product", "#"),
            link("API", "#"),
            link("Pricing", "#"),
            link("For Business", "#"),
        ],
    },
    LinkColumn {
        title: "Company",
        links: &[link("About us", "#"), link("News", "#"), link("Careers", "#"), link("Security", "#")],
    },
    LinkColumn {
        title: "Safety",
        links: &[link("Safety Framework", "/safety"), link("Safety Standards", "#")],
    },
];

pub static FOOTER_LINKS: &[LinkColumn] = &[
    LinkColumn {
        title: "Research",
        links: &[
            link("Overview", "#"),
            link("Index", "#"),
            link("Latest advancements", "#"),
            link("GPT-4", "#"),
            link("DALL·E 3", "#"),
            link("Sora", "#"),
        ],
    },
    LinkColumn {
        title: "Product",
        links: &[
            link("For Everyone", "#"),
            link("For Teams", "#"),
            link("For Enterprises", "#"),
            external("Product login", "#"),
        ],
    },
    LinkColumn {
        title: "API",
        links: &[
            link("Platform overview", "#"),
            link("Pricing", "#"),
            external("Documentation", "#"),
            external("API login", "#"),
        ],
    },
    LinkColumn {
        title: "Explore more",
        links: &[link("WEBSPACEAI for business", "#"), link("Stories", "#")],
    },
    LinkColumn {
        title: "Safety",
        links: &[link("Safety Framework", "/safety"), link("Safety standards", "#")],
    },
    LinkColumn {
        title: "Teams",
        links: &[link("Safety Systems", "#"), link("Preparedness", "#"), link("Superalignment", "#")],
    },
    LinkColumn {
        title: "Company",
        links: &[
            link("About us", "#"),
            link("News", "#"),
            link("Our Charter", "#"),
            link("Security", "#"),
            link("Residency", "#"),
            link("Careers", "#"),
        ],
    },
    LinkColumn {
        title: "Terms & policies",
        links: &[
            link("Terms of use", "#"),
            link("Privacy policy", "#"),
            link("Brand guidelines", "#"),
            link("Other policies", "#"),
        ],
    },
];

pub static SOCIAL_LINKS: &[(Icon, &str, &str)] = &[
    (Icon::X, "X", "#"),
    (Icon::LinkedIn, "LinkedIn", "#"),
    (Icon::GitHub, "GitHub", "#"),
    (Icon::YouTube, "YouTube", "#"),
];

pub static PRINCIPLES: &[Principle] = &[
    Principle {
        title: "Capability‑Risk Alignment",
        text: "Safety requirements scale with model capability.",
        icon: Icon::CapabilityRisk,
    },
    Principle {
        title: "Clear Thresholds",
        text: "Measurable triggers signal transitions to the next safety tier.",
        icon: Icon::Thresholds,
    },
    Principle {
        title: "Layered Safeguards",
        text: "Combine technical, procedural, and organizational measures.",
        icon: Icon::Safeguards,
    },
    Principle {
        title: "Rigorous Evaluation",
        text: "Formalize testing, including adversarial probes and red teaming.",
        icon: Icon::Evaluation,
    },
    Principle {
        title: "Accountable Governance",
        text: "Establish oversight bodies to review and approve deployments.",
        icon: Icon::Governance,
    },
    Principle {
        title: "Continuous Monitoring",
        text: "Deploy real‑time telemetry to track model behavior.",
        icon: Icon::Monitoring,
    },
    Principle {
        title: "Transparent Reporting",
        text: "Document assessments, incidents, and mitigation steps.",
        icon: Icon::Reporting,
    },
    Principle {
        title: "Research Integration",
        text: "Stay current with AI safety research and incorporate it.",
        icon: Icon::Research,
    },
];

pub static SAFETY_LEVELS: &[SafetyLevel] = &[
    SafetyLevel {
        level: 1,
        title: "Foundational Safety",
        objective: "Implement basic controls to prevent trivial failures and obvious misuse in narrow, low-impact systems.",
        applicability: &[
            "Rule-based classification APIs",
            "Simple Q&A bots with closed knowledge bases",
            "Recommendation engines with limited scope",
        ],
        measures: &[
            "Input Validation & Output Constraints",
            "Access Controls & Authentication",
            "Unit Tests & Manual Reviews",
            "Documentation & Onboarding",
        ],
        case_study: "A retail company deploys a Level 1 sentiment analysis API to filter customer reviews. By enforcing profanity filters, logging every API call, and limiting access to internal clients, the team prevents both malicious inputs and accidental leakage of user data.",
    },
    SafetyLevel {
        level: 2,
        title: "Enhanced Safety for Interactive Systems",
        objective: "Introduce moderate adversarial defenses and basic monitoring to address common risks in interactive, generative, or conversational applications.",
        applicability: &[
            "Entry‑level chatbots with domain constraints",
            "Constrained virtual assistants",
            "Simple generative tools",
        ],
        measures: &[
            "Robust Filtering & Refusal Triggers",
            "Sandboxing & Anomaly Detection",
            "Basic Red Teaming",
            "Incident Response Planning",
        ],
        case_study: "A financial services chatbot at Level 2 employs semantic detection to refuse queries requesting investment advice. All code snippets are sandboxed, and alerts notify security if anomalous resource consumption occurs. Basic red teaming uncovers a prompt bypass; the fix is rolled out within 48 hours.",
    },
    SafetyLevel {
        level: 3,
        title: "Substantial Safety for Capable Systems",
        objective: "Defend against sophisticated misuse, integrate human oversight for high‑stakes actions, and deepen adversarial resilience.",
        applicability: &[
            "Advanced conversational agents",
            "Media and code generation tools",
            "Systems accessing external data",
        ],
        measures: &[
            "Constitutional‑Style Jailbreak Defenses",
            "Behavioral Monitoring",
            "Expert Red Teaming & Ethical Review",
            "Formal Safety Cases",
        ],
        case_study: "A healthcare assistant at Level 3 provides medical literature summaries. Using a constitutional AI approach, it refuses requests for personalized diagnoses. An external panel of medical and AI safety experts reviews test logs and endorses the system’s safety case before it goes live.",
    },
    SafetyLevel {
        level: 4,
        title: "Advanced Safety for Near‑Frontier Systems",
        objective: "Anticipate and mitigate emergent behaviors in general‑purpose systems nearing human‑level performance.",
        applicability: &[
            "Multi‑modal models (text, vision, audio)",
            "Large foundation models",
            "Experimental agentic systems",
        ],
        measures: &[
            "Scaled Constitutional AI & RLHF",
            "Mechanistic Interpretability",
            "External Expert Validation",
            "Regulatory Coordination",
        ],
        case_study: "A lab's multimodal reasoning engine reaches near-human benchmarks. Mechanistic interpretability reveals potential corruption of planning circuits; predictive detectors flag these cases. After an external AI safety audit, the team updates RLHF policies and secures compliance certification.",
    },
    SafetyLevel {
        level: 5,
        title: "AGI‑Level Safety",
        objective: "Manage existential and systemic risks posed by systems at or beyond human intelligence—ensuring provable control and global governance.",
        applicability: &[
            "Experimental AGI prototypes",
            "Agentic systems with strategic planning",
            "Large-scale multi‑agent ecosystems",
        ],
        measures: &[
            "Provably Robust Alignment",
            "Hardware & Network Failsafes",
            "AI‑Assisted Oversight",
            "Global Governance",
        ],
        case_study: "A consortium collaborates on an AGI testbed. Formal methods verify the system cannot override shutdown commands. Red team exercises simulate strategic scenarios, revealing hidden incentives that are then mathematically neutralized. A global governance council reviews logs, ensuring transparency.",
    },
];

pub static GETTING_STARTED: &[Step] = &[
    Step {
        title: "Capability Assessment",
        text: "Catalog your AI projects and map each to the corresponding safety level.",
    },
    Step {
        title: "Gap Analysis",
        text: "List required safety measures that are not yet implemented and prioritize them by risk.",
    },
    Step {
        title: "Roadmap Development",
        text: "Create a timeline for implementing missing safeguards, starting with the highest-risk projects.",
    },
    Step {
        title: "Governance Structure",
        text: "Establish safety review committees with clear roles, responsibilities, and decision-rights.",
    },
    Step {
        title: "Measurement & Monitoring",
        text: "Build dashboards to track key safety metrics and set up alerting thresholds.",
    },
    Step {
        title: "Training & Culture",
        text: "Educate all teams on the framework and foster a culture of “safety by design.”",
    },
    Step {
        title: "Iterate & Evolve",
        text: "Review framework thresholds and measures quarterly, incorporating new safety research and lessons learned.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_dates_render_short_month() {
        assert_eq!(date(2024, 5, 13).and_then(|d| d.display()).as_deref(), Some("May 13, 2024"));
        assert_eq!(date(2024, 5, 8).and_then(|d| d.display()).as_deref(), Some("May 8, 2024"));
        assert_eq!(CardDate { year: 2024, month: 2, day: 30 }.display(), None);
    }

    #[test]
    fn arrow_hidden_only_for_empty_link_text() {
        assert!(CardData::EMPTY.shows_arrow());
        let card = CardData { link_text: Some(""), ..CardData::EMPTY };
        assert!(!card.shows_arrow());
        let card = CardData { link_text: Some("Read"), ..CardData::EMPTY };
        assert!(card.shows_arrow());
    }

    #[test]
    fn safety_levels_are_numbered_in_order() {
        let levels: Vec<u8> = SAFETY_LEVELS.iter().map(|l| l.level).collect();
        assert_eq!(levels, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn menu_and_footer_link_to_the_safety_page() {
        for columns in [MENU_LINKS, FOOTER_LINKS] {
            assert!(columns
                .iter()
                .flat_map(|c| c.links.iter())
                .any(|l| l.href == "/safety"));
        }
    }
}
