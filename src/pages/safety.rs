use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::content::{Principle, SafetyLevel, GETTING_STARTED, PRINCIPLES, SAFETY_LEVELS};
use crate::scroll_spy::{scroll_to_section, use_scroll_spy, SectionId};

/// Accordion rule: opening a level closes the others, clicking the open one
/// collapses it.
pub fn toggle_level(expanded: Option<u8>, clicked: u8) -> Option<u8> {
    if expanded == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    id: SectionId,
    #[prop_or_default]
    class: Classes,
    children: Children,
}

#[function_component(Section)]
fn section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id.key()} class={classes!("framework-section", props.class.clone())}>
            <h2 class="section-title">{props.id.label()}</h2>
            { for props.children.iter() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct PrincipleCardProps {
    principle: &'static Principle,
}

#[function_component(PrincipleCard)]
fn principle_card(props: &PrincipleCardProps) -> Html {
    let principle = props.principle;
    html! {
        <div class="principle-card">
            <div class="principle-icon">
                <IconSvg icon={principle.icon} class="icon-md" />
            </div>
            <h3>{principle.title}</h3>
            <p>{principle.text}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct LevelItemProps {
    level: &'static SafetyLevel,
    is_open: bool,
    on_toggle: Callback<u8>,
}

#[function_component(LevelAccordionItem)]
fn level_accordion_item(props: &LevelItemProps) -> Html {
    let level = props.level;
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let number = level.level;
        Callback::from(move |_: MouseEvent| on_toggle.emit(number))
    };

    html! {
        <div class={classes!("level-item", props.is_open.then_some("open"))}>
            <button class="level-toggle" {onclick}>
                <div class="level-heading">
                    <span class="level-number">{level.level.to_string()}</span>
                    <span class="level-title">{level.title}</span>
                </div>
                <IconSvg icon={Icon::ChevronDown} class="level-chevron icon-md" />
            </button>
            <div class="level-panel">
                <div class="level-details">
                    <div>
                        <h4>{"Objective"}</h4>
                        <p>{level.objective}</p>
                    </div>
                    <div class="level-lists">
                        <div>
                            <h4>{"Applicability"}</h4>
                            <ul>
                                { for level.applicability.iter().map(|item| html! { <li key={*item}>{*item}</li> }) }
                            </ul>
                        </div>
                        <div>
                            <h4>{"Measures"}</h4>
                            <ul>
                                { for level.measures.iter().map(|item| html! { <li key={*item}>{*item}</li> }) }
                            </ul>
                        </div>
                    </div>
                    <div class="case-study">
                        <h4>{"Case Study"}</h4>
                        <p>{level.case_study}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(TableOfContents)]
fn table_of_contents() -> Html {
    let active = use_scroll_spy(&SectionId::ALL);

    html! {
        <aside class="framework-toc">
            <nav>
                <ul>
                    { for SectionId::ALL.iter().map(|&section| {
                        let onclick = Callback::from(move |_: MouseEvent| scroll_to_section(section));
                        html! {
                            <li key={section.key()}>
                                <button
                                    class={classes!("toc-entry", (active == Some(section)).then_some("active"))}
                                    {onclick}
                                >
                                    {section.label()}
                                </button>
                            </li>
                        }
                    }) }
                </ul>
            </nav>
        </aside>
    }
}

#[function_component(Safety)]
pub fn safety() -> Html {
    let expanded = use_state_eq(|| Some(1u8));

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |level: u8| expanded.set(toggle_level(*expanded, level)))
    };

    html! {
        <main class="framework-page">
            <div class="framework-intro">
                <h1>{"The AI Safety Framework"}</h1>
                <p>{"A comprehensive, scalable model for managing AI risks—designed to evolve alongside AI capabilities."}</p>
            </div>

            <div class="framework-layout">
                <TableOfContents />

                <div class="framework-content">
                    <Section id={SectionId::Introduction} class="first">
                        <div class="prose">
                            <p>{"Artificial intelligence (AI) continues to transform industries, drive innovation, and reshape the way we live and work. From personalized recommendations on e‑commerce sites to sophisticated autonomous agents assisting with complex tasks, AI’s potential is vast. Yet, as capability grows, so too do risks—ranging from benign malfunctions to adversarial exploitation and, in the extreme, existential threats to humanity. Organizations that lead in AI development must therefore embrace a safety-first mindset, ensuring that every new model, tool, or deployment includes appropriate guardrails."}</p>
                            <p>{"This Five-Level AI Safety Framework offers a structured approach to scaling safety measures in lockstep with AI capabilities. Rather than a one-size-fits-all checklist, it provides explicit thresholds, layered safeguards, and governance processes that grow more rigorous as AI systems become more powerful. Whether you are launching a simple classifier, integrating a generative assistant into customer service, or developing near-human-level general-purpose models, this framework delivers clear guidance on what controls, monitoring, and oversight are required."}</p>
                        </div>
                    </Section>

                    <Section id={SectionId::CorePrinciples}>
                        <div class="principle-grid">
                            { for PRINCIPLES.iter().map(|principle| html! {
                                <PrincipleCard key={principle.title} {principle} />
                            }) }
                        </div>
                    </Section>

                    <Section id={SectionId::TheFiveLevels}>
                        <div class="level-list">
                            { for SAFETY_LEVELS.iter().map(|level| html! {
                                <LevelAccordionItem
                                    key={level.title}
                                    {level}
                                    is_open={*expanded == Some(level.level)}
                                    on_toggle={on_toggle.clone()}
                                />
                            }) }
                        </div>
                    </Section>

                    <Section id={SectionId::GettingStarted}>
                        <ol class="step-list">
                            { for GETTING_STARTED.iter().enumerate().map(|(index, step)| html! {
                                <li key={step.title} class="step">
                                    <div class="step-number">{(index + 1).to_string()}</div>
                                    <div>
                                        <h4>{step.title}</h4>
                                        <p>{step.text}</p>
                                    </div>
                                </li>
                            }) }
                        </ol>
                    </Section>

                    <Section id={SectionId::Conclusion} class="closing">
                        <div class="prose">
                            <p>{"The Five-Level AI Safety Framework empowers organizations to navigate the advancing frontier of AI responsibly. By aligning safety requirements with capability, establishing clear thresholds, layered complementary defenses, and embedding rigorous governance, teams can innovate at pace without sacrificing security or ethical integrity. From foundational safeguards for simple models to provably robust controls for AGI, this tiered approach fosters clarity, accountability, and resilience."}</p>
                            <p>{"Adopting the framework is not a one‑off project but an ongoing commitment—requiring continuous monitoring, regular audits, and a culture that embraces safety as a core priority. With this holistic model, organizations can harness the transformative potential of AI while safeguarding against its risks, ensuring that technological progress remains firmly in service of human well‑being."}</p>
                        </div>
                    </Section>
                </div>
            </div>

            <style>
                {r#"
                .framework-page { max-width: 80rem; margin: 0 auto; padding: 5rem 1.5rem; }
                .framework-intro { margin-bottom: 5rem; }
                .framework-intro h1 {
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    font-weight: 700;
                    color: var(--fg-strong);
                    margin-bottom: 1.5rem;
                }
                .framework-intro p { font-size: 1.25rem; color: var(--fg-muted); max-width: 48rem; line-height: 1.6; }
                .framework-layout { display: flex; gap: 6rem; }
                .framework-toc { width: 16rem; flex-shrink: 0; position: sticky; top: 6rem; align-self: flex-start; }
                @media (max-width: 1024px) { .framework-toc { display: none; } }
                .framework-toc ul { list-style: none; padding: 0; display: grid; gap: 0.25rem; }
                .toc-entry {
                    width: 100%;
                    text-align: left;
                    padding: 0.5rem 0.75rem;
                    font-size: 0.875rem;
                    border: none;
                    border-radius: 0.375rem;
                    background: none;
                    color: var(--fg-muted);
                    cursor: pointer;
                    transition: background 0.2s, color 0.2s;
                }
                .toc-entry:hover { color: var(--fg-strong); background: var(--hover); }
                .toc-entry.active { color: var(--fg-strong); background: var(--surface); font-weight: 500; }
                .framework-content { flex: 1; min-width: 0; }
                .framework-section { scroll-margin-top: 6rem; padding: 3rem 0; }
                .framework-section.first { padding-top: 0; padding-bottom: 4rem; }
                .framework-section.closing { padding: 4rem 0; margin-top: 4rem; border-top: 1px solid var(--border); }
                .section-title { font-size: 1.5rem; font-weight: 600; color: var(--fg-strong); margin-bottom: 2rem; }
                .prose p { font-size: 1.125rem; line-height: 1.7; color: var(--fg-muted); margin-bottom: 1.5rem; }
                .principle-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; }
                @media (max-width: 768px) { .principle-grid { grid-template-columns: 1fr; } }
                .principle-card {
                    padding: 1.5rem;
                    border: 1px solid var(--border);
                    border-radius: 0.5rem;
                    background: var(--bg);
                    transition: border-color 0.2s;
                }
                .principle-card:hover { border-color: var(--fg-muted); }
                .principle-icon { width: fit-content; padding: 0.5rem; margin-bottom: 1rem; border-radius: 0.375rem; background: var(--surface); color: var(--fg-strong); }
                .principle-card h3 { font-weight: 600; color: var(--fg-strong); margin-bottom: 0.5rem; }
                .principle-card p { font-size: 0.875rem; color: var(--fg-muted); line-height: 1.6; }
                .level-list { border-top: 1px solid var(--border); }
                .level-item { border-bottom: 1px solid var(--border); }
                .level-item:last-child { border-bottom: none; }
                .level-toggle {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1.5rem 0;
                    background: none;
                    border: none;
                    text-align: left;
                    color: inherit;
                    cursor: pointer;
                }
                .level-heading { display: flex; align-items: center; gap: 1rem; }
                .level-number {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 9999px;
                    border: 1px solid var(--border);
                    font-size: 0.875rem;
                    color: var(--fg-muted);
                }
                .level-item.open .level-number { background: var(--fg-strong); color: var(--bg); border-color: var(--fg-strong); }
                .level-title { font-size: 1.125rem; font-weight: 500; color: var(--fg-muted); }
                .level-item.open .level-title { color: var(--fg-strong); }
                .level-chevron { color: var(--fg-muted); transition: transform 0.2s; }
                .level-item.open .level-chevron { transform: rotate(180deg); }
                .level-panel { max-height: 0; opacity: 0; overflow: hidden; transition: all 0.3s ease-in-out; }
                .level-item.open .level-panel { max-height: 800px; opacity: 1; margin-bottom: 2rem; }
                .level-details { display: grid; gap: 2rem; padding: 0 1rem 0 3rem; font-size: 0.875rem; }
                .level-details h4 { font-weight: 600; color: var(--fg-strong); margin-bottom: 0.5rem; }
                .level-details p, .level-details li { color: var(--fg-muted); line-height: 1.6; }
                .level-lists { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2rem; }
                .case-study { background: var(--surface); padding: 1rem; border-radius: 0.5rem; border: 1px solid var(--border); }
                .case-study p { font-style: italic; }
                .step-list { list-style: none; padding: 0; display: grid; gap: 2rem; }
                .step { display: flex; gap: 1rem; }
                .step-number {
                    flex-shrink: 0;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 9999px;
                    background: var(--surface);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: var(--fg-strong);
                }
                .step h4 { font-weight: 500; color: var(--fg-strong); margin-bottom: 0.25rem; }
                .step p { color: var(--fg-muted); line-height: 1.6; }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_a_level_closes_the_open_one() {
        assert_eq!(toggle_level(Some(1), 3), Some(3));
        assert_eq!(toggle_level(None, 2), Some(2));
    }

    #[test]
    fn clicking_the_open_level_collapses_it() {
        assert_eq!(toggle_level(Some(4), 4), None);
    }
}
