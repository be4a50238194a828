//! Project detail page.
//!
//! Resolves the project from the loaded portfolio first and the offline
//! cache second, so the page also works when opened before (or without) a
//! successful fetch.

use dioxus::prelude::*;
use portfolio_core::{Loaded, PortfolioData, Project};

use crate::app::Route;
use crate::context::{project_cache, use_portfolio};

#[component]
pub fn ProjectDetail(id: String) -> Element {
    let portfolio = use_portfolio();

    let project = resolve_project(&portfolio.read(), &id);

    // Open at the top of the page
    use_hook(|| {
        let _ = document::eval("window.scrollTo(0, 0);");
    });

    let Some(project) = project else {
        tracing::debug!(project = %id, "Project not found");
        return rsx! {
            div { class: "project-detail not-found",
                h2 { class: "gradient-text", "Project not found" }
                Link { class: "btn-gradient", to: Route::Landing {}, "Back to Home" }
            }
        };
    };

    rsx! {
        div { class: "project-detail",
            div { class: "landing-background",
                div { class: "blob blob-1" }
                div { class: "blob blob-2" }
            }

            div { class: "project-detail-inner",
                nav { class: "breadcrumb",
                    Link { class: "back-button", to: Route::Landing {}, "← Back" }
                    span { class: "breadcrumb-sep", "/" }
                    span { "Projects" }
                    span { class: "breadcrumb-sep", "/" }
                    span { class: "breadcrumb-current", "{project.title}" }
                }

                div { class: "project-detail-grid",
                    ProjectSummary { project: project.clone() }

                    div { class: "project-detail-media",
                        img { src: "{project.img}", alt: "{project.title}" }

                        div { class: "project-features",
                            h3 { "Key Features" }
                            if project.features.is_empty() {
                                p { class: "muted", "No features added." }
                            } else {
                                ul {
                                    for (index, feature) in project.features.iter().enumerate() {
                                        li { key: "{index}", "{feature}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn resolve_project(loaded: &Option<Loaded<PortfolioData>>, id: &str) -> Option<Project> {
    let in_memory = loaded
        .as_ref()
        .and_then(|loaded| loaded.data().find_project(id).cloned());
    in_memory.or_else(|| match project_cache().find_project(id) {
        Ok(found) => found,
        Err(e) => {
            tracing::warn!(project = %id, "Failed to read project cache: {}", e);
            None
        }
    })
}

#[component]
fn ProjectSummary(project: Project) -> Element {
    rsx! {
        div { class: "project-summary",
            h1 { class: "gradient-text", "{project.title}" }
            div { class: "title-rule" }
            p { class: "project-description", "{project.description}" }

            div { class: "project-stats",
                div { class: "stat-card",
                    span { class: "stat-value", "{project.tech_stack.len()}" }
                    span { class: "stat-label", "Total Technologies" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "{project.features.len()}" }
                    span { class: "stat-label", "Key Features" }
                }
            }

            div { class: "project-links",
                if let Some(url) = project.live_link() {
                    a {
                        class: "btn-gradient",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Live Demo"
                    }
                }
                if let Some(url) = project.github_link() {
                    a {
                        class: "btn-outline",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Github"
                    }
                }
            }

            div { class: "project-tech",
                h3 { "Technologies Used" }
                if project.tech_stack.is_empty() {
                    p { class: "muted", "No technologies added." }
                } else {
                    div { class: "tech-badges",
                        for tech in project.tech_stack.iter() {
                            span { key: "{tech}", class: "tech-badge", "{tech}" }
                        }
                    }
                }
            }
        }
    }
}
