//! Project Card Component
//!
//! Glass card with image, title, description and two actions: the live demo
//! link and the detail page link. Missing targets render as a disabled label.

use dioxus::prelude::*;
use portfolio_core::Project;

use crate::app::Route;

#[component]
pub fn ProjectCard(project: Project) -> Element {
    let live = project.live_link().map(str::to_string);
    let details = project.has_details().then(|| project.id.clone());

    rsx! {
        article { class: "project-card",
            div { class: "project-card-glow" }
            div { class: "project-card-image",
                img {
                    src: "{project.img}",
                    alt: "{project.title}",
                    loading: "lazy",
                }
            }
            div { class: "project-card-body",
                h3 { class: "project-card-title gradient-text", "{project.title}" }
                p { class: "project-card-description", "{project.description}" }

                div { class: "project-card-actions",
                    if let Some(url) = live {
                        a {
                            class: "project-card-demo",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Live Demo"
                            {render_external_icon()}
                        }
                    } else {
                        span { class: "project-card-unavailable", "Demo Not Available" }
                    }

                    if let Some(id) = details {
                        Link {
                            class: "project-card-details",
                            to: Route::ProjectDetail { id },
                            "Details"
                            {render_arrow_icon()}
                        }
                    } else {
                        span { class: "project-card-unavailable", "Details Not Available" }
                    }
                }
            }
        }
    }
}

/// Lucide external-link icon
fn render_external_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M15 3h6v6" }
            path { d: "M10 14 21 3" }
            path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
        }
    }
}

/// Lucide arrow-right icon
fn render_arrow_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M5 12h14" }
            path { d: "m12 5 7 7-7 7" }
        }
    }
}
