//! Hero section (`#Home`).

use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::site::social_links;
use portfolio_core::Typewriter;
use portfolio_ui::{Button, ButtonVariant};

use crate::browser::use_page_navigator;
use crate::context::use_site_config;

const WORD_HOLD: Duration = Duration::from_millis(2000);
const TYPE_TICK: Duration = Duration::from_millis(100);

#[component]
pub fn Hero() -> Element {
    let config = use_site_config();
    let mut nav = use_page_navigator();
    let mut typed = use_signal(String::new);

    // Cycle through the tagline parts ("MERN", "AWS", ...)
    let words = tagline_words(&config.profile.tagline);
    use_hook(move || {
        spawn(async move {
            if words.is_empty() {
                return;
            }
            for word in words.iter().cycle() {
                let mut writer = Typewriter::new(word.as_str());
                while let Some(visible) = writer.tick() {
                    typed.set(visible.to_string());
                    tokio::time::sleep(TYPE_TICK).await;
                }
                tokio::time::sleep(WORD_HOLD).await;
            }
        });
    });

    let links = social_links();
    let title_lead = first_word(&config.profile.role).to_string();
    let title_rest = rest_words(&config.profile.role).to_string();

    rsx! {
        section { id: "Home", class: "hero section",
            div { class: "hero-content",
                div { class: "hero-badge",
                    span { class: "hero-badge-dot" }
                    "Ready to Innovate"
                }

                h1 { class: "hero-title",
                    span { class: "hero-title-line", "{title_lead}" }
                    span { class: "hero-title-line gradient-text", "{title_rest}" }
                }

                p { class: "hero-typed",
                    span { "{typed}" }
                    span { class: "typing-cursor", "|" }
                }

                p { class: "hero-description",
                    "Building scalable web applications and cloud infrastructure, from the first commit to production."
                }

                div { class: "hero-actions",
                    Button {
                        variant: ButtonVariant::Gradient,
                        onclick: move |_| nav.navigate("Portofolio"),
                        "Projects"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| nav.navigate("Contact"),
                        "Contact"
                    }
                }

                div { class: "hero-socials",
                    for link in links {
                        a {
                            key: "{link.name}",
                            class: "hero-social",
                            href: "{link.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": "{link.name}",
                            "{link.name}"
                        }
                    }
                }
            }

            div { class: "hero-visual",
                div { class: "hero-orb" }
                div { class: "hero-orb secondary" }
            }
        }
    }
}

/// Tagline split on its bullet separators.
fn tagline_words(tagline: &str) -> Vec<String> {
    tagline
        .split('•')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

fn first_word(text: &str) -> &str {
    text.split_whitespace().next().unwrap_or(text)
}

fn rest_words(text: &str) -> &str {
    text.split_once(' ').map(|(_, rest)| rest).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagline_splits_on_bullets() {
        assert_eq!(
            tagline_words("MERN • AWS • DevOps • Web3"),
            vec!["MERN", "AWS", "DevOps", "Web3"]
        );
        assert!(tagline_words(" • ").is_empty());
    }

    #[test]
    fn role_is_split_for_two_line_title() {
        assert_eq!(first_word("Full Stack Developer"), "Full");
        assert_eq!(rest_words("Full Stack Developer"), "Stack Developer");
        assert_eq!(rest_words("Developer"), "");
    }
}
