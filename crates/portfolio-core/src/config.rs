//! Site configuration.
//!
//! Loaded from an optional JSON file; every field has a working default so
//! the site runs without one. Binaries layer command-line flags on top.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};
use crate::site::SiteProfile;

pub const DEFAULT_STORE_URL: &str = "https://firestore.googleapis.com";
pub const DEFAULT_PROJECT_ID: &str = "portfolio-monu";
pub const DEFAULT_RELAY_URL: &str = "https://formsubmit.co";
pub const DEFAULT_SITE_ORIGIN: &str = "http://localhost";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub profile: SiteProfile,
    /// Base URL of the document store REST API
    pub store_url: String,
    /// Document store project id
    pub project_id: String,
    /// Base URL of the form relay
    pub relay_url: String,
    /// Address the relay forwards contact messages to
    pub contact_email: String,
    /// Origin used for the relay's post-submit redirect
    pub site_origin: String,
    /// Timeout for store and relay requests, in seconds
    pub request_timeout_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let profile = SiteProfile::default();
        let contact_email = profile.email.clone();
        Self {
            profile,
            store_url: DEFAULT_STORE_URL.to_string(),
            project_id: DEFAULT_PROJECT_ID.to_string(),
            relay_url: DEFAULT_RELAY_URL.to_string(),
            contact_email,
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            request_timeout_secs: 15,
        }
    }
}

impl SiteConfig {
    pub fn load(path: &Path) -> PortfolioResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> PortfolioResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> PortfolioResult<()> {
        for (name, value) in [
            ("store_url", &self.store_url),
            ("relay_url", &self.relay_url),
        ] {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(PortfolioError::Config(format!(
                    "{} must be an http(s) URL, got {:?}",
                    name, value
                )));
            }
        }
        if self.project_id.trim().is_empty() {
            return Err(PortfolioError::Config("project_id is empty".into()));
        }
        if !self.contact_email.contains('@') {
            return Err(PortfolioError::Config(format!(
                "contact_email {:?} is not an address",
                self.contact_email
            )));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}
