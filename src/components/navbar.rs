//! Navigation Bar Component
//!
//! Desktop: fixed header with owner name, section links and theme toggle.
//! Mobile: burger button opening a full-height overlay menu; page scrolling
//! is locked while it is open.

use dioxus::prelude::*;
use portfolio_core::NavItem;
use portfolio_ui::{IconButton, ThemeToggle};

use crate::browser::use_page_navigator;
use crate::context::{use_site_config, use_theme};

/// Navigation bar for the landing page.
///
/// Highlights the link of the active section and blurs its background once
/// the page has scrolled.
#[component]
pub fn Navbar() -> Element {
    let mut nav = use_page_navigator();
    let mut theme = use_theme();
    let config = use_site_config();

    let items = nav.items();
    let state = nav.state();
    let active = state
        .as_ref()
        .map(|s| s.active_section_id.clone())
        .unwrap_or_default();
    let menu_open = state.as_ref().is_some_and(|s| s.is_menu_open);
    let scrolled = state.as_ref().is_some_and(|s| s.is_scrolled);

    // Overlay links slide in one after another
    let menu_entries: Vec<(NavItem, usize)> = items
        .iter()
        .enumerate()
        .map(|(index, item)| (item.clone(), index * 100))
        .collect();

    let header_class = match (scrolled, menu_open) {
        (_, true) => "navbar menu-open",
        (true, false) => "navbar scrolled",
        (false, false) => "navbar",
    };

    rsx! {
        nav { class: "{header_class}",
            div { class: "navbar-inner",
                // Left: owner name, scrolls back to the top section
                a {
                    class: "navbar-brand",
                    href: "#Home",
                    onclick: move |e| {
                        e.prevent_default();
                        nav.navigate("Home");
                    },
                    "{config.profile.owner}"
                }

                // Center: section links (desktop)
                div { class: "navbar-links",
                    for item in items.iter() {
                        NavLink {
                            key: "{item.id}",
                            item: item.clone(),
                            active: item.id == active,
                            class_prefix: "navbar-link",
                        }
                    }
                }

                div { class: "navbar-actions",
                    ThemeToggle {
                        mode: theme(),
                        on_toggle: move |_| {
                            let next = theme().toggle();
                            tracing::debug!(theme = ?next, "Theme toggled");
                            theme.set(next);
                        },
                    }

                    IconButton {
                        class: "navbar-burger".to_string(),
                        aria_label: if menu_open { "Close menu".to_string() } else { "Open menu".to_string() },
                        onclick: move |_| nav.toggle_menu(),
                        {render_burger_icon(menu_open)}
                    }
                }
            }
        }

        // Mobile overlay menu (hidden on desktop via CSS)
        div {
            class: if menu_open { "mobile-menu open" } else { "mobile-menu" },
            "aria-hidden": if menu_open { "false" } else { "true" },
            div { class: "mobile-menu-links",
                for (item, delay) in menu_entries.iter() {
                    div {
                        key: "{item.id}",
                        class: "mobile-menu-item",
                        style: "transition-delay: {delay}ms;",
                        NavLink {
                            item: item.clone(),
                            active: item.id == active,
                            class_prefix: "mobile-menu-link",
                        }
                    }
                }
            }
        }
    }
}

/// A single section link; clicking scrolls instead of jumping.
#[component]
fn NavLink(item: NavItem, active: bool, class_prefix: &'static str) -> Element {
    let mut nav = use_page_navigator();
    let class = if active {
        format!("{} active", class_prefix)
    } else {
        class_prefix.to_string()
    };
    let id = item.id.clone();

    rsx! {
        a {
            class: "{class}",
            href: "{item.anchor()}",
            "aria-current": if active { "true" } else { "false" },
            onclick: move |e| {
                e.prevent_default();
                nav.navigate(&id);
            },
            span { class: "nav-link-label", "{item.label}" }
            span { class: "nav-link-underline" }
        }
    }
}

/// Lucide menu / x icon
fn render_burger_icon(open: bool) -> Element {
    if open {
        rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M18 6 6 18" }
                path { d: "m6 6 12 12" }
            }
        }
    } else {
        rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                line { x1: "4", x2: "20", y1: "12", y2: "12" }
                line { x1: "4", x2: "20", y1: "6", y2: "6" }
                line { x1: "4", x2: "20", y1: "18", y2: "18" }
            }
        }
    }
}
