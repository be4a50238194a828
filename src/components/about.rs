//! About section (`#About`).

use dioxus::prelude::*;
use portfolio_core::site::tech_stacks;
use portfolio_ui::{Button, ButtonVariant};

use crate::browser::use_page_navigator;
use crate::context::{use_portfolio, use_site_config};

/// Counters shown under the introduction.
#[derive(Clone, Debug, PartialEq)]
struct Stat {
    label: &'static str,
    value: usize,
    description: &'static str,
}

fn stats(projects: usize, certificates: usize, technologies: usize) -> [Stat; 3] {
    [
        Stat {
            label: "Total Projects",
            value: projects,
            description: "Innovative web solutions crafted",
        },
        Stat {
            label: "Certificates",
            value: certificates,
            description: "Professional skills validated",
        },
        Stat {
            label: "Technologies",
            value: technologies,
            description: "Tools in the everyday stack",
        },
    ]
}

#[component]
pub fn About() -> Element {
    let config = use_site_config();
    let portfolio = use_portfolio();
    let mut nav = use_page_navigator();

    let (projects, certificates) = portfolio
        .read()
        .as_ref()
        .map(|loaded| {
            let data = loaded.data();
            (data.projects.len(), data.certificates.len())
        })
        .unwrap_or((0, 0));
    let avatar = initials(&config.profile.owner);
    let cards = stats(projects, certificates, tech_stacks().len());

    rsx! {
        section { id: "About", class: "about section",
            div { class: "section-heading",
                h2 { class: "gradient-text", "About Me" }
                p { class: "section-subtitle", "Transforming ideas into digital experiences" }
            }

            div { class: "about-body",
                div { class: "about-text",
                    h3 { class: "about-greeting",
                        "Hello, I'm "
                        span { class: "gradient-text", "{config.profile.owner}" }
                    }
                    p {
                        "A {config.profile.role} working across the {config.profile.tagline} stack. "
                        "I design APIs, ship React front ends and automate the infrastructure they run on."
                    }
                    blockquote { class: "about-quote",
                        "Leveraging code to build reliable systems people enjoy using."
                    }
                    div { class: "about-actions",
                        Button {
                            variant: ButtonVariant::Gradient,
                            onclick: move |_| nav.navigate("Contact"),
                            "Get in Touch"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| nav.navigate("Portofolio"),
                            "View Projects"
                        }
                    }
                }

                div { class: "about-avatar",
                    div { class: "avatar-ring" }
                    span { class: "avatar-initials", "{avatar}" }
                }
            }

            div { class: "about-stats",
                for stat in cards {
                    div { key: "{stat.label}", class: "stat-card",
                        span { class: "stat-value", "{stat.value}" }
                        span { class: "stat-label", "{stat.label}" }
                        span { class: "stat-description", "{stat.description}" }
                    }
                }
            }
        }
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
