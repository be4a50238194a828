//! Portfolio Showcase (`#Portofolio`)
//!
//! Three tabbed panels (projects, certificates, tech stack). Each grid starts
//! collapsed to a viewport-dependent count and expands with "See More".
//! Horizontal swipes on the panel move between tabs.

use dioxus::prelude::*;
use portfolio_core::site::tech_stacks;
use portfolio_core::{ShowcaseCollection, ShowcaseState, ShowcaseTab, SwipeDirection};
use portfolio_ui::{SeeMoreButton, TabBar};

use crate::browser::use_page_navigator;
use crate::components::{CertificateCard, ProjectCard, TechStackIcon};
use crate::context::use_portfolio;

/// Minimum horizontal travel, in pixels, that counts as a swipe.
const SWIPE_DISTANCE: f64 = 50.0;

fn swipe_direction(start_x: f64, end_x: f64) -> Option<SwipeDirection> {
    let delta = end_x - start_x;
    if delta <= -SWIPE_DISTANCE {
        Some(SwipeDirection::Left)
    } else if delta >= SWIPE_DISTANCE {
        Some(SwipeDirection::Right)
    } else {
        None
    }
}

#[component]
pub fn Showcase() -> Element {
    let nav = use_page_navigator();
    let portfolio = use_portfolio();
    let mut state = use_signal(ShowcaseState::default);
    let mut swipe_start: Signal<Option<f64>> = use_signal(|| None);

    // Only changes when the viewport crosses the breakpoint
    let viewport = use_memo(move || nav.viewport());
    use_effect(move || {
        let viewport = viewport();
        if state.peek().viewport() != viewport {
            state.write().set_viewport(viewport);
        }
    });

    let loaded = portfolio.read().clone();
    let loading = loaded.is_none();
    let (projects, certificates) = loaded
        .map(|loaded| {
            let data = loaded.into_data();
            (data.projects, data.certificates)
        })
        .unwrap_or_default();
    let stacks = tech_stacks();

    let current = state.read().clone();
    let tab = current.tab();

    rsx! {
        section { id: "Portofolio", class: "showcase section",
            div { class: "section-heading",
                h2 { class: "gradient-text", "Portfolio Showcase" }
                p { class: "section-subtitle",
                    "Explore my journey through projects, certifications, and technical expertise."
                }
            }

            TabBar {
                selected: tab,
                on_select: move |t: ShowcaseTab| state.write().select(t),
            }

            div {
                class: "showcase-panels",
                onpointerdown: move |e| swipe_start.set(Some(e.client_coordinates().x)),
                onpointerup: move |e| {
                    if let Some(start) = swipe_start.write().take() {
                        if let Some(direction) = swipe_direction(start, e.client_coordinates().x) {
                            let tab = state.write().swipe(direction);
                            tracing::debug!(tab = ?tab, "Showcase swiped");
                        }
                    }
                },

                div {
                    id: "{tab.panel_id()}",
                    class: "showcase-panel",
                    role: "tabpanel",
                    "aria-labelledby": "{tab.dom_id()}",

                    {match tab {
                        ShowcaseTab::Projects => rsx! {
                            if loading {
                                p { class: "showcase-empty", "Loading projects..." }
                            } else if projects.is_empty() {
                                p { class: "showcase-empty", "No projects to show right now." }
                            }
                            div { class: "project-grid",
                                for project in current.visible(ShowcaseCollection::Projects, &projects).iter().cloned() {
                                    ProjectCard { key: "{project.id}", project }
                                }
                            }
                            if current.has_more(ShowcaseCollection::Projects, projects.len()) {
                                SeeMoreButton {
                                    expanded: current.is_expanded(ShowcaseCollection::Projects),
                                    onclick: move |_| {
                                        state.write().toggle_expanded(ShowcaseCollection::Projects);
                                    },
                                }
                            }
                        },
                        ShowcaseTab::Certificates => rsx! {
                            div { class: "certificate-grid",
                                for (index, certificate) in current.visible(ShowcaseCollection::Certificates, &certificates).iter().cloned().enumerate() {
                                    CertificateCard { key: "{index}", certificate }
                                }
                            }
                            if current.has_more(ShowcaseCollection::Certificates, certificates.len()) {
                                SeeMoreButton {
                                    expanded: current.is_expanded(ShowcaseCollection::Certificates),
                                    onclick: move |_| {
                                        state.write().toggle_expanded(ShowcaseCollection::Certificates);
                                    },
                                }
                            }
                        },
                        ShowcaseTab::TechStack => rsx! {
                            div { class: "tech-grid",
                                for stack in current.visible(ShowcaseCollection::TechStacks, &stacks).iter().cloned() {
                                    TechStackIcon { key: "{stack.language}", stack }
                                }
                            }
                            if current.has_more(ShowcaseCollection::TechStacks, stacks.len()) {
                                SeeMoreButton {
                                    expanded: current.is_expanded(ShowcaseCollection::TechStacks),
                                    onclick: move |_| {
                                        state.write().toggle_expanded(ShowcaseCollection::TechStacks);
                                    },
                                }
                            }
                        },
                    }}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_drags_are_not_swipes() {
        assert_eq!(swipe_direction(100.0, 120.0), None);
        assert_eq!(swipe_direction(100.0, 60.0), None);
    }

    #[test]
    fn drag_left_advances() {
        assert_eq!(swipe_direction(300.0, 200.0), Some(SwipeDirection::Left));
        assert_eq!(swipe_direction(200.0, 300.0), Some(SwipeDirection::Right));
    }
}
