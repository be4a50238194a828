//! Project and certificate data.
//!
//! Projects come from a hosted document store at startup. A failed fetch
//! never takes the page down: [`load_portfolio`] reports it as
//! [`Loaded::Degraded`] with an empty project list and the bundled
//! certificates.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! ├── projects.json       # last successful project fetch
//! ├── certificates.json   # last certificate list shown
//! └── preferences.json    # theme (see crate::theme)
//! ```

mod cache;
mod firestore;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::PortfolioResult;
use crate::site::Certificate;

pub use cache::ProjectCache;
pub use firestore::{decode_documents, FirestoreSource};

/// A project record as stored remotely.
///
/// Field names follow the remote documents so cached JSON stays compatible.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Img", default)]
    pub img: String,
    #[serde(rename = "Link", default)]
    pub link: String,
    #[serde(rename = "Github", default)]
    pub github: String,
    #[serde(rename = "TechStack", default)]
    pub tech_stack: Vec<String>,
    #[serde(rename = "Features", default)]
    pub features: Vec<String>,
}

impl Project {
    /// Live demo URL, if the project has one.
    pub fn live_link(&self) -> Option<&str> {
        non_empty(&self.link)
    }

    pub fn github_link(&self) -> Option<&str> {
        non_empty(&self.github)
    }

    /// Whether the detail page can be opened for this project.
    pub fn has_details(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Everything the showcase renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PortfolioData {
    pub projects: Vec<Project>,
    pub certificates: Vec<Certificate>,
}

impl PortfolioData {
    pub fn find_project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

/// Data with a record of whether it came from the normal path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Loaded<T> {
    Fresh(T),
    /// Fallback data; `reason` says what went wrong
    Degraded { data: T, reason: String },
}

impl<T> Loaded<T> {
    pub fn data(&self) -> &T {
        match self {
            Loaded::Fresh(data) | Loaded::Degraded { data, .. } => data,
        }
    }

    pub fn into_data(self) -> T {
        match self {
            Loaded::Fresh(data) | Loaded::Degraded { data, .. } => data,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Loaded::Degraded { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Loaded::Fresh(_) => None,
            Loaded::Degraded { reason, .. } => Some(reason),
        }
    }
}

/// Anything that can list projects.
pub trait ProjectSource {
    fn fetch_projects(&self) -> impl Future<Output = PortfolioResult<Vec<Project>>> + Send;
}

/// Fetch projects and resolve certificates, degrading on failure.
///
/// Certificates come from `bundled` whenever it is non-empty (and are cached);
/// otherwise from the cache. Successful project fetches are cached.
pub async fn load_portfolio<S>(
    source: &S,
    cache: Option<&ProjectCache>,
    bundled: &[Certificate],
) -> Loaded<PortfolioData>
where
    S: ProjectSource,
{
    let certificates = resolve_certificates(cache, bundled);

    match source.fetch_projects().await {
        Ok(projects) => {
            tracing::info!(count = projects.len(), "Loaded projects");
            if let Some(cache) = cache {
                if let Err(e) = cache.store_projects(&projects) {
                    tracing::warn!(error = %e, "Failed to cache projects");
                }
            }
            Loaded::Fresh(PortfolioData {
                projects,
                certificates,
            })
        }
        Err(e) => {
            tracing::warn!(error = %e, "Error fetching projects, using fallback data");
            Loaded::Degraded {
                data: PortfolioData {
                    projects: Vec::new(),
                    certificates,
                },
                reason: e.to_string(),
            }
        }
    }
}

fn resolve_certificates(cache: Option<&ProjectCache>, bundled: &[Certificate]) -> Vec<Certificate> {
    if !bundled.is_empty() {
        if let Some(cache) = cache {
            if let Err(e) = cache.store_certificates(bundled) {
                tracing::warn!(error = %e, "Failed to cache certificates");
            }
        }
        return bundled.to_vec();
    }

    match cache.map(|c| c.load_certificates()) {
        Some(Ok(certs)) => certs,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Failed to read cached certificates");
            Vec::new()
        }
        None => Vec::new(),
    }
}
