//! Contact section (`#Contact`)
//!
//! Contact channel cards, social links and the message form. The form is
//! posted through the email relay; once a valid form has been sent the
//! success notice is always shown and the fields are cleared.

use dioxus::prelude::*;
use portfolio_core::contact::SUCCESS_TITLE;
use portfolio_core::{ContactChannel, ContactForm, FormRelay, SUCCESS_MESSAGE};
use portfolio_ui::{Button, ButtonVariant, Input, TextArea};

use crate::components::SocialLinks;
use crate::context::use_site_config;

/// Form status shown under the send button.
#[derive(Clone, Debug, PartialEq)]
enum FormStatus {
    Idle,
    Sending,
    Sent,
    Invalid(String),
}

impl FormStatus {
    fn is_sending(&self) -> bool {
        matches!(self, FormStatus::Sending)
    }

    fn button_label(&self) -> &'static str {
        if self.is_sending() {
            "Sending..."
        } else {
            "Send Message"
        }
    }
}

#[component]
pub fn ContactSection() -> Element {
    let config = use_site_config();
    let channels = config.profile.contact_channels();
    let schedule_href = config.profile.schedule_call_href();

    rsx! {
        section { id: "Contact", class: "contact section",
            div { class: "section-heading",
                h2 { class: "gradient-text", "Contact Me" }
                p { class: "section-subtitle",
                    "Got a question? Send me a message, and I'll get back to you soon."
                }
            }

            div { class: "contact-layout",
                div { class: "contact-info",
                    for channel in channels {
                        ChannelCard { key: "{channel.title}", channel }
                    }

                    div { class: "contact-quick-actions",
                        a { class: "btn-outline", href: "{schedule_href}", "Schedule a Call" }
                        a { class: "btn-ghost", href: "mailto:{config.profile.email}", "Send Email" }
                    }

                    SocialLinks {}
                }

                ContactFormPanel {}
            }
        }
    }
}

#[component]
fn ChannelCard(channel: ContactChannel) -> Element {
    rsx! {
        a {
            class: "channel-card",
            href: "{channel.href}",
            target: if channel.href.starts_with("http") { "_blank" } else { "_self" },
            div { class: "channel-text",
                span { class: "channel-title", "{channel.title}" }
                span { class: "channel-caption", "{channel.caption}" }
                span { class: "channel-value", "{channel.value}" }
            }
        }
    }
}

#[component]
fn ContactFormPanel() -> Element {
    let config = use_site_config();
    let mut form = use_signal(ContactForm::default);
    let mut status = use_signal(|| FormStatus::Idle);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if status().is_sending() {
            return;
        }

        let submission = form();
        if let Err(err) = submission.validate() {
            status.set(FormStatus::Invalid(err.to_string()));
            return;
        }

        status.set(FormStatus::Sending);
        let config = config.clone();
        spawn(async move {
            match FormRelay::new(&config) {
                Ok(relay) => match relay.submit(&submission).await {
                    Ok(outcome) => {
                        tracing::info!(confirmed = outcome.is_confirmed(), "Contact form submitted");
                    }
                    Err(e) => {
                        status.set(FormStatus::Invalid(e.to_string()));
                        return;
                    }
                },
                Err(e) => {
                    tracing::error!("Failed to create form relay: {}", e);
                }
            }
            form.write().clear();
            status.set(FormStatus::Sent);
        });
    };

    let current = status();

    rsx! {
        div { class: "contact-form-panel",
            h3 { class: "gradient-text", "Send a Message" }

            form { class: "contact-form", onsubmit: on_submit,
                Input {
                    name: "name".to_string(),
                    value: form().name,
                    placeholder: "Your Name".to_string(),
                    required: true,
                    disabled: current.is_sending(),
                    oninput: move |v: String| form.write().name = v,
                }
                Input {
                    name: "email".to_string(),
                    input_type: "email".to_string(),
                    value: form().email,
                    placeholder: "Your Email".to_string(),
                    required: true,
                    disabled: current.is_sending(),
                    oninput: move |v: String| form.write().email = v,
                }
                TextArea {
                    name: "message".to_string(),
                    value: form().message,
                    placeholder: "Your Message".to_string(),
                    required: true,
                    disabled: current.is_sending(),
                    oninput: move |v: String| form.write().message = v,
                }

                Button {
                    variant: ButtonVariant::Gradient,
                    button_type: "submit".to_string(),
                    disabled: current.is_sending(),
                    class: "contact-submit".to_string(),
                    "{current.button_label()}"
                }
            }

            {match current {
                FormStatus::Sent => rsx! {
                    div { class: "form-notice success", role: "status",
                        strong { "{SUCCESS_TITLE}" }
                        p { "{SUCCESS_MESSAGE}" }
                        button {
                            r#type: "button",
                            class: "btn-ghost",
                            onclick: move |_| status.set(FormStatus::Idle),
                            "OK"
                        }
                    }
                },
                FormStatus::Invalid(message) => rsx! {
                    div { class: "form-notice error", role: "alert", "{message}" }
                },
                FormStatus::Idle | FormStatus::Sending => rsx! {},
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_label_follows_sending_state() {
        assert_eq!(FormStatus::Idle.button_label(), "Send Message");
        assert_eq!(FormStatus::Sending.button_label(), "Sending...");
        assert!(!FormStatus::Sent.is_sending());
    }
}
