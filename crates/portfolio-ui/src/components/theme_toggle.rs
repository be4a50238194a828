//! Theme Toggle Component
//!
//! Sun/moon button that flips between the dark and light palettes.
//! Shows the sun while dark (switch to light) and the moon while light.

use dioxus::prelude::*;
use portfolio_core::ThemeMode;

use super::IconButton;

#[component]
pub fn ThemeToggle(mode: ThemeMode, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: move |_| {
                tracing::debug!(dark = !mode.is_dark(), "Theme toggled");
                on_toggle.call(());
            },
            aria_label: mode.toggle_label().to_string(),
            class: "theme-toggle".to_string(),
            if mode.is_dark() {
                // Lucide sun
                svg {
                    xmlns: "http://www.w3.org/2000/svg",
                    width: "20",
                    height: "20",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    circle { cx: "12", cy: "12", r: "4" }
                    path { d: "M12 2v2" }
                    path { d: "M12 20v2" }
                    path { d: "m4.93 4.93 1.41 1.41" }
                    path { d: "m17.66 17.66 1.41 1.41" }
                    path { d: "M2 12h2" }
                    path { d: "M20 12h2" }
                    path { d: "m6.34 17.66-1.41 1.41" }
                    path { d: "m19.07 4.93-1.41 1.41" }
                }
            } else {
                // Lucide moon
                svg {
                    xmlns: "http://www.w3.org/2000/svg",
                    width: "20",
                    height: "20",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
                }
            }
        }
    }
}
