//! Portfolio Core Library
//!
//! Everything behind the portfolio site that is not a view: the
//! scroll-synchronized section navigator, showcase tab state, the welcome
//! screen timeline, theme preference, bundled site content, the remote
//! project store and the contact form relay.
//!
//! ## Overview
//!
//! The site is a single page of vertically stacked sections (Home, About,
//! Portofolio, Contact) plus a project detail route. The only component with
//! real state invariants is the [`SectionNavigator`], which keeps the
//! highlighted nav link in step with the scroll position. The rest of the
//! crate talks to external collaborators and degrades instead of failing:
//!
//! - **Remote store**: a failed fetch yields [`Loaded::Degraded`] with the
//!   bundled certificate list.
//! - **Contact relay**: a failed POST yields
//!   [`SubmissionOutcome::AssumedDelivered`]; the page still reports success.
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{default_nav_items, SectionNavigator};
//!
//! let mut nav = SectionNavigator::new(default_nav_items(), host, lock)?;
//!
//! // On every scroll event
//! nav.evaluate(window_scroll_y, &document);
//!
//! // On a nav link click
//! nav.navigate_to("Contact", &document);
//! ```

pub mod config;
pub mod contact;
pub mod error;
pub mod navigator;
pub mod showcase;
pub mod site;
pub mod store;
pub mod theme;
pub mod welcome;

// Re-exports
pub use config::SiteConfig;
pub use contact::{ContactForm, FormRelay, SubmissionOutcome, SUCCESS_MESSAGE};
pub use error::{PortfolioError, PortfolioResult};
pub use navigator::{
    default_nav_items, Evaluation, ListenerGuard, NavItem, NavigateOutcome, NavigatorState,
    OverlapPolicy, ScrollBehavior, ScrollHost, ScrollLock, SectionBounds, SectionGeometry,
    SectionLocator, SectionNavigator,
};
pub use showcase::{ShowcaseCollection, ShowcaseState, ShowcaseTab, SwipeDirection, Viewport};
pub use site::{Certificate, ContactChannel, SiteProfile, SocialLink, TechStack};
pub use store::{
    load_portfolio, FirestoreSource, Loaded, PortfolioData, Project, ProjectCache, ProjectSource,
};
pub use theme::{Preferences, ThemeMode};
pub use welcome::{Typewriter, WelcomePhase, WelcomeTimeline};
