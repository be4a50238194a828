//! Contact form and the email relay it posts to.
//!
//! The relay (FormSubmit) answers with an HTML page or a redirect rather than
//! a machine-readable result, and it usually forwards the email even when
//! the response never arrives. The page therefore treats every completed
//! submission as sent, and a network failure too: [`FormRelay::submit`]
//! never returns an error once the form is valid. The two cases stay
//! distinguishable through [`SubmissionOutcome`].

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::error::{PortfolioError, PortfolioResult};

pub const SUCCESS_TITLE: &str = "Success!";
pub const SUCCESS_MESSAGE: &str =
    "Your message has been sent successfully! I'll get back to you soon.";
pub const SUBJECT: &str = "New Contact Form Submission - Portfolio";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// All fields required; email must look like `local@domain`.
    pub fn validate(&self) -> PortfolioResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(PortfolioError::InvalidForm(format!("{} is required", field)));
            }
        }

        let email = self.email.trim();
        let valid_email = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !email.contains(char::is_whitespace)
            }
            None => false,
        };
        if !valid_email {
            return Err(PortfolioError::InvalidForm(format!(
                "{:?} is not an email address",
                email
            )));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The relay answered. `accepted` is false for 4xx/5xx answers, which
    /// are still reported to the user as sent.
    Delivered { status: u16, accepted: bool },
    /// The request failed in transit; the relay may still have sent the mail
    AssumedDelivered { reason: String },
}

impl SubmissionOutcome {
    /// Whether the user sees the success notice. Always true.
    pub fn shows_success(&self) -> bool {
        true
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, SubmissionOutcome::Delivered { accepted: true, .. })
    }
}

/// Status codes the relay uses for a handled submission (including its
/// redirect to the thank-you page).
fn accepted_status(status: u16) -> bool {
    status == 0 || (200..400).contains(&status)
}

/// Client for the form relay endpoint.
#[derive(Clone, Debug)]
pub struct FormRelay {
    http: reqwest::Client,
    endpoint: String,
    next_url: String,
}

impl FormRelay {
    pub fn new(config: &SiteConfig) -> PortfolioResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            // A redirect to `_next` is the relay's success answer.
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self {
            http,
            endpoint: format!(
                "{}/{}",
                config.relay_url.trim_end_matches('/'),
                config.contact_email
            ),
            next_url: format!("{}/", config.site_origin.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Form fields posted to the relay, hidden relay options included.
    pub fn form_fields<'a>(&'a self, form: &'a ContactForm) -> Vec<(&'static str, &'a str)> {
        vec![
            ("_template", "table"),
            ("_captcha", "false"),
            ("_next", self.next_url.as_str()),
            ("_subject", SUBJECT),
            ("name", form.name.trim()),
            ("email", form.email.trim()),
            ("message", form.message.as_str()),
        ]
    }

    /// Validate and post the form.
    ///
    /// Fails only on invalid input. Transport failures become
    /// [`SubmissionOutcome::AssumedDelivered`].
    pub async fn submit(&self, form: &ContactForm) -> PortfolioResult<SubmissionOutcome> {
        form.validate()?;

        let result = self
            .http
            .post(&self.endpoint)
            .form(&self.form_fields(form))
            .send()
            .await;

        let outcome = match result {
            Ok(resp) => {
                let status = resp.status().as_u16();
                let accepted = accepted_status(status);
                if accepted {
                    tracing::info!(status, "Contact form delivered to relay");
                } else {
                    tracing::warn!(status, "Relay answered with an error status");
                }
                SubmissionOutcome::Delivered { status, accepted }
            }
            Err(e) => {
                tracing::error!(error = %e, "Form submission error, reporting as sent");
                SubmissionOutcome::AssumedDelivered {
                    reason: e.to_string(),
                }
            }
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactForm {
        ContactForm::new("Ada", "ada@example.com", "Hello there")
    }

    #[test]
    fn valid_form_passes() {
        valid().validate().unwrap();
    }

    #[test]
    fn blank_fields_are_rejected() {
        let mut form = valid();
        form.message = "   ".into();
        let err = form.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid contact form: message is required");
    }

    #[test]
    fn bad_emails_are_rejected() {
        for email in ["ada", "@example.com", "ada@", "a@b@c", "a da@example.com"] {
            let form = ContactForm::new("Ada", email, "Hi");
            assert!(
                matches!(form.validate(), Err(PortfolioError::InvalidForm(_))),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut form = valid();
        form.clear();
        assert!(form.is_empty());
    }

    #[test]
    fn accepted_statuses() {
        assert!(accepted_status(0));
        assert!(accepted_status(200));
        assert!(accepted_status(302));
        assert!(!accepted_status(404));
        assert!(!accepted_status(500));
    }

    #[test]
    fn every_outcome_shows_success() {
        let outcomes = [
            SubmissionOutcome::Delivered {
                status: 200,
                accepted: true,
            },
            SubmissionOutcome::Delivered {
                status: 500,
                accepted: false,
            },
            SubmissionOutcome::AssumedDelivered {
                reason: "timeout".into(),
            },
        ];
        assert!(outcomes.iter().all(SubmissionOutcome::shows_success));
        assert!(outcomes[0].is_confirmed());
        assert!(!outcomes[2].is_confirmed());
    }

    #[test]
    fn relay_fields_and_endpoint() {
        let config = SiteConfig {
            relay_url: "https://relay.example/".into(),
            contact_email: "me@example.com".into(),
            site_origin: "https://me.example".into(),
            ..SiteConfig::default()
        };
        let relay = FormRelay::new(&config).unwrap();
        assert_eq!(relay.endpoint(), "https://relay.example/me@example.com");

        let form = valid();
        let fields = relay.form_fields(&form);
        assert!(fields.contains(&("_next", "https://me.example/")));
        assert!(fields.contains(&("_captcha", "false")));
        assert!(fields.contains(&("email", "ada@example.com")));
    }

    #[tokio::test]
    async fn invalid_form_is_not_sent() {
        let relay = FormRelay::new(&SiteConfig::default()).unwrap();
        let result = relay.submit(&ContactForm::default()).await;
        assert!(matches!(result, Err(PortfolioError::InvalidForm(_))));
    }
}
