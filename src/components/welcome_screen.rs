//! Welcome Screen
//!
//! Full-window intro shown once per session before the landing content
//! mounts. Fades in, types the tagline, then fades out.

use dioxus::prelude::*;
use portfolio_core::welcome::TAGLINE_TICK;
use portfolio_core::{Typewriter, WelcomePhase, WelcomeTimeline};

use crate::context::use_site_config;

#[component]
pub fn WelcomeScreen(on_complete: EventHandler<()>) -> Element {
    let config = use_site_config();
    let mut phase = use_signal(|| WelcomePhase::Loading);
    let mut tagline = use_signal(String::new);

    // Phase timer
    use_hook(move || {
        let timeline = WelcomeTimeline::default();
        spawn(async move {
            tokio::time::sleep(timeline.loading).await;
            phase.set(WelcomePhase::Exiting);
            tokio::time::sleep(timeline.exit).await;
            phase.set(WelcomePhase::Done);
            tracing::debug!("Welcome screen finished");
            on_complete.call(());
        });
    });

    // Typewriter
    let text = config.profile.tagline.clone();
    use_hook(move || {
        spawn(async move {
            let mut writer = Typewriter::new(text);
            while let Some(visible) = writer.tick() {
                tagline.set(visible.to_string());
                tokio::time::sleep(TAGLINE_TICK).await;
            }
        });
    });

    let class = match phase() {
        WelcomePhase::Loading => "welcome-screen",
        WelcomePhase::Exiting | WelcomePhase::Done => "welcome-screen exiting",
    };

    rsx! {
        div { class: "{class}",
            div { class: "welcome-glow" }
            div { class: "welcome-content",
                div { class: "welcome-icons",
                    for (index, icon) in WELCOME_ICONS.iter().enumerate() {
                        span {
                            key: "{index}",
                            class: "welcome-icon",
                            {render_welcome_icon(*icon)}
                        }
                    }
                }

                h1 { class: "welcome-title",
                    span { class: "welcome-word", "Welcome" }
                    span { class: "welcome-word", "To" }
                    span { class: "welcome-word", "My" }
                    span { class: "welcome-word gradient-text", "Portfolio" }
                    span { class: "welcome-word gradient-text", "Website" }
                }

                p { class: "welcome-tagline",
                    span { class: "welcome-typed", "{tagline}" }
                    span { class: "typing-cursor", "|" }
                }

                p { class: "welcome-owner", "{config.profile.owner}" }
            }
        }
    }
}

#[derive(Clone, Copy)]
enum WelcomeIcon {
    Code,
    User,
    Github,
}

const WELCOME_ICONS: [WelcomeIcon; 3] = [WelcomeIcon::Code, WelcomeIcon::User, WelcomeIcon::Github];

fn render_welcome_icon(icon: WelcomeIcon) -> Element {
    match icon {
        WelcomeIcon::Code => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "28",
                height: "28",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                polyline { points: "16 18 22 12 16 6" }
                polyline { points: "8 6 2 12 8 18" }
            }
        },
        WelcomeIcon::User => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "28",
                height: "28",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle { cx: "12", cy: "8", r: "5" }
                path { d: "M20 21a8 8 0 0 0-16 0" }
            }
        },
        WelcomeIcon::Github => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "28",
                height: "28",
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
