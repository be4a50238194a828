use dioxus::prelude::*;
use portfolio_core::TechStack;

/// One tile of the tech stack grid.
#[component]
pub fn TechStackIcon(stack: TechStack) -> Element {
    rsx! {
        div { class: "tech-tile",
            img {
                class: "tech-tile-icon",
                src: "{stack.icon}",
                alt: "{stack.language} icon",
                loading: "lazy",
            }
            span { class: "tech-tile-label", "{stack.language}" }
        }
    }
}
