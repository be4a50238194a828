//! Certificate Card Component
//!
//! Thumbnail that opens the full certificate in a lightbox.

use dioxus::prelude::*;
use portfolio_core::Certificate;

#[component]
pub fn CertificateCard(certificate: Certificate) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "certificate-card",
            button {
                r#type: "button",
                class: "certificate-thumb",
                "aria-label": "View certificate",
                onclick: move |_| open.set(true),
                img { src: "{certificate.img}", alt: "Certificate", loading: "lazy" }
                span { class: "certificate-overlay", "View Certificate" }
            }
        }

        if open() {
            div {
                class: "lightbox",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |_| open.set(false),
                img {
                    class: "lightbox-image",
                    src: "{certificate.img}",
                    alt: "Certificate full view",
                    onclick: move |e| e.stop_propagation(),
                }
                button {
                    r#type: "button",
                    class: "lightbox-close",
                    "aria-label": "Close",
                    onclick: move |_| open.set(false),
                    "×"
                }
            }
        }
    }
}
