//! Social Links Component
//!
//! Primary link (LinkedIn) as a wide card, the others in a two-column grid.

use dioxus::prelude::*;
use portfolio_core::site::social_links;
use portfolio_core::SocialLink;

#[component]
pub fn SocialLinks() -> Element {
    let (primary, others): (Vec<SocialLink>, Vec<SocialLink>) =
        social_links().into_iter().partition(|link| link.primary);

    rsx! {
        div { class: "social-links",
            h3 { class: "social-links-title", "Connect With Me" }

            for link in primary {
                SocialCard { key: "{link.name}", link, wide: true }
            }

            div { class: "social-links-grid",
                for link in others {
                    SocialCard { key: "{link.name}", link, wide: false }
                }
            }
        }
    }
}

#[component]
fn SocialCard(link: SocialLink, wide: bool) -> Element {
    let icon_class = format!("social-icon social-{}", link.name.to_lowercase());

    rsx! {
        a {
            class: if wide { "social-card wide" } else { "social-card" },
            href: "{link.url}",
            target: "_blank",
            rel: "noopener noreferrer",
            span { class: "{icon_class}",
                {render_social_icon(&link.name)}
            }
            span { class: "social-text",
                span { class: "social-name", "{link.display_name}" }
                span { class: "social-sub", "{link.sub_text}" }
            }
        }
    }
}

/// Lucide brand icons by network name
fn render_social_icon(name: &str) -> Element {
    match name {
        "LinkedIn" => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "22",
                height: "22",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" }
                rect { width: "4", height: "12", x: "2", y: "9" }
                circle { cx: "4", cy: "4", r: "2" }
            }
        },
        "Instagram" => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "22",
                height: "22",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                rect { width: "20", height: "20", x: "2", y: "2", rx: "5", ry: "5" }
                path { d: "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" }
                line { x1: "17.5", x2: "17.51", y1: "6.5", y2: "6.5" }
            }
        },
        _ => rsx! {
            // Lucide github icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "22",
                height: "22",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
                path { d: "M9 18c-4.51 2-5-2-7-2" }
            }
        },
    }
}
