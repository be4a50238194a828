use dioxus::prelude::*;
use portfolio_core::site::local_certificates;
use portfolio_core::{
    load_portfolio, FirestoreSource, Loaded, PortfolioData, Preferences, SiteConfig, ThemeMode,
};

use crate::context::{get_data_dir, project_cache, PortfolioSlot, WelcomePending};
use crate::pages::{Landing, ProjectDetail};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with all sections
/// - `/project/:id` - Detail page for one project
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/project/:id")]
    ProjectDetail { id: String },
}

/// Root application component.
///
/// Provides global styles, site context, and routing.
#[component]
pub fn App() -> Element {
    let settings = crate::get_settings();
    let config = settings.config.clone();

    let theme: Signal<ThemeMode> = use_signal(|| Preferences::load(&get_data_dir()).theme);
    let portfolio: PortfolioSlot = use_signal(|| None);
    let welcome_pending = use_signal(|| !settings.skip_welcome);

    use_context_provider(|| config.clone());
    use_context_provider(|| theme);
    use_context_provider(|| portfolio);
    use_context_provider(|| WelcomePending(welcome_pending));

    // Load projects on mount
    use_hook(move || {
        let mut portfolio = portfolio;
        spawn(async move {
            let loaded = fetch_portfolio(&config).await;
            if let Some(reason) = loaded.reason() {
                tracing::warn!(reason, "Showing fallback portfolio data");
            }
            portfolio.set(Some(loaded));
        });
    });

    // Persist theme changes
    use_effect(move || {
        let prefs = Preferences { theme: theme() };
        if let Err(e) = prefs.save(&get_data_dir()) {
            tracing::warn!("Failed to save preferences: {}", e);
        }
    });

    let root_class = format!("app-root {}", theme().class());

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "{root_class}",
            Router::<Route> {}
        }
    }
}

async fn fetch_portfolio(config: &SiteConfig) -> Loaded<PortfolioData> {
    let cache = project_cache();
    let certificates = local_certificates();

    match FirestoreSource::new(config) {
        Ok(source) => load_portfolio(&source, Some(&cache), &certificates).await,
        Err(e) => {
            tracing::error!("Failed to create project source: {}", e);
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
