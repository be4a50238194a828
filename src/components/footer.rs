use chrono::Datelike;
use dioxus::prelude::*;

use crate::context::use_site_config;

#[component]
pub fn Footer() -> Element {
    let config = use_site_config();
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "footer",
            hr { class: "footer-rule" }
            p { class: "footer-copy",
                "© {year} "
                span { class: "gradient-text", "{config.profile.owner}" }
                ". All rights reserved."
            }
            p { class: "footer-line", "{config.profile.footer_line()}" }
        }
    }
}
