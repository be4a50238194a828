//! App-wide context for the portfolio.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let config = use_site_config();
//! let portfolio = use_portfolio();
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use portfolio_core::{Loaded, PortfolioData, ProjectCache, SiteConfig, ThemeMode};

/// Remote data as seen by the page.
///
/// `None` until the first load finishes.
pub type PortfolioSlot = Signal<Option<Loaded<PortfolioData>>>;

/// Get the data directory for the application.
pub fn get_data_dir() -> PathBuf {
    crate::get_settings().data_dir
}

/// Offline cache in the data directory.
pub fn project_cache() -> ProjectCache {
    ProjectCache::new(get_data_dir())
}

/// Whether the welcome screen is still pending for this session.
#[derive(Clone, Copy)]
pub struct WelcomePending(pub Signal<bool>);

pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

pub fn use_theme() -> Signal<ThemeMode> {
    use_context::<Signal<ThemeMode>>()
}

/// Hook to access the loaded portfolio data.
///
/// Returns `None` while the first fetch is still running.
pub fn use_portfolio() -> PortfolioSlot {
    use_context::<PortfolioSlot>()
}

pub fn use_welcome_pending() -> Signal<bool> {
    use_context::<WelcomePending>().0
}
