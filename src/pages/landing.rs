//! Landing page - every section of the site on one scrolling page.
//!
//! Shows the welcome screen first (once per session), then the navbar and
//! the Home, About, Portofolio and Contact sections.

use dioxus::prelude::*;
use portfolio_core::default_nav_items;

use crate::browser::use_section_navigator;
use crate::components::{About, ContactSection, Footer, Hero, Navbar, Showcase, WelcomeScreen};
use crate::context::{use_portfolio, use_welcome_pending};

#[component]
pub fn Landing() -> Element {
    let mut welcome_pending = use_welcome_pending();
    let portfolio = use_portfolio();

    // Navigator lives as long as the page
    use_section_navigator(default_nav_items());

    let degraded = portfolio
        .read()
        .as_ref()
        .and_then(|loaded| loaded.reason().map(str::to_string));

    if welcome_pending() {
        return rsx! {
            WelcomeScreen {
                on_complete: move |_| welcome_pending.set(false),
            }
        };
    }

    rsx! {
        div { class: "landing",
            div { class: "landing-background",
                div { class: "blob blob-1" }
                div { class: "blob blob-2" }
                div { class: "blob blob-3" }
            }

            Navbar {}

            main { class: "landing-sections",
                Hero {}
                About {}
                Showcase {}
                ContactSection {}
            }

            if let Some(reason) = degraded {
                div { class: "offline-banner", title: "{reason}",
                    "Projects could not be loaded. Showing offline content."
                }
            }

            Footer {}
        }
    }
}
