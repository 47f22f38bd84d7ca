use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg, Logo};
use crate::config;
use crate::content::{FOOTER_LINKS, SOCIAL_LINKS};

#[function_component(SocialIcons)]
fn social_icons() -> Html {
    html! {
        <div class="social-icons">
            { for SOCIAL_LINKS.iter().map(|(icon, label, href)| html! {
                <a href={*href} target="_blank" rel="noopener noreferrer" aria-label={*label} class="social-link">
                    <IconSvg icon={*icon} class="icon-social" />
                </a>
            }) }
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-columns">
                { for FOOTER_LINKS.iter().map(|column| html! {
                    <div key={column.title}>
                        <h3 class="footer-column-title">{column.title}</h3>
                        <ul class="footer-links">
                            { for column.links.iter().map(|link| html! {
                                <li key={link.text}>
                                    <a href={link.href} class="footer-link">
                                        <span>{link.text}</span>
                                        if link.external {
                                            <IconSvg icon={Icon::ArrowRight} class="footer-external icon-xs" />
                                        }
                                    </a>
                                </li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>

            <div class="footer-bottom">
                <div class="footer-brand">
                    <Logo class="footer-logo" />
                    <span>{format!("{} © {}", config::BRAND, year)}</span>
                </div>
                <SocialIcons />
            </div>

            <style>
                {r#"
                .site-footer {
                    background: var(--bg-footer);
                    color: var(--fg-muted);
                    border-top: 1px solid var(--border);
                    padding: 6rem 1rem 3rem;
                }
                @media (min-width: 768px) { .site-footer { padding-left: 2rem; padding-right: 2rem; } }
                @media (min-width: 1280px) { .site-footer { padding-left: 6rem; padding-right: 6rem; } }
                .footer-columns {
                    display: grid;
                    grid-template-columns: repeat(8, 1fr);
                    gap: 3rem 2rem;
                    margin-bottom: 5rem;
                }
                @media (max-width: 1024px) { .footer-columns { grid-template-columns: repeat(4, 1fr); } }
                @media (max-width: 640px) { .footer-columns { grid-template-columns: repeat(2, 1fr); } }
                .footer-column-title { color: var(--fg-strong); font-weight: 600; margin-bottom: 1.25rem; }
                .footer-links { list-style: none; padding: 0; display: grid; gap: 0.75rem; }
                .footer-link {
                    display: flex;
                    align-items: center;
                    font-size: 0.875rem;
                    color: inherit;
                    text-decoration: none;
                }
                .footer-link:hover { color: var(--fg-strong); }
                .footer-external { margin-left: 0.25rem; opacity: 0.6; }
                .footer-bottom {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2rem;
                    border-top: 1px solid var(--border);
                    padding-top: 2.5rem;
                }
                .footer-brand { display: flex; align-items: center; gap: 1rem; font-size: 0.875rem; }
                .footer-logo { height: 1.5rem; width: auto; opacity: 0.8; }
                html:not(.dark) .footer-logo { filter: invert(1); }
                .social-icons { display: flex; align-items: center; gap: 1.5rem; }
                .social-link { color: var(--fg-muted); }
                .social-link:hover { color: var(--fg-strong); }
                "#}
            </style>
        </footer>
    }
}
