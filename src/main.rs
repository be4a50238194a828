#![allow(non_snake_case)]

mod app;
mod browser;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::SiteConfig;
use tracing_subscriber::EnvFilter;

/// Settings resolved from the command line, read by the app through context.
#[derive(Clone, Debug)]
pub struct AppSettings {
    pub config: SiteConfig,
    pub data_dir: PathBuf,
    pub skip_welcome: bool,
}

static SETTINGS: OnceLock<AppSettings> = OnceLock::new();

/// Get the launch settings (set from command line or defaults)
pub fn get_settings() -> AppSettings {
    SETTINGS.get().cloned().unwrap_or_else(|| AppSettings {
        config: SiteConfig::default(),
        data_dir: default_data_dir(),
        skip_welcome: false,
    })
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portfolio")
}

/// Portfolio - personal site as a desktop app
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Portfolio - projects, certificates and contact in one window")]
struct Args {
    /// Data directory for preferences and the offline cache
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Site configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Go straight to the page without the welcome animation
    #[arg(long)]
    skip_welcome: bool,

    /// Document store project id
    #[arg(long, env = "PORTFOLIO_PROJECT_ID")]
    project_id: Option<String>,

    /// Address contact messages are forwarded to
    #[arg(long, env = "PORTFOLIO_CONTACT_EMAIL")]
    contact_email: Option<String>,

    /// Base URL of the document store API
    #[arg(long, env = "PORTFOLIO_STORE_URL")]
    store_url: Option<String>,
}

impl Args {
    fn resolve(self) -> anyhow::Result<AppSettings> {
        let mut config = SiteConfig::load_or_default(self.config.as_deref())
            .with_context(|| format!("loading config {:?}", self.config))?;

        if let Some(project_id) = self.project_id {
            config.project_id = project_id;
        }
        if let Some(email) = self.contact_email {
            config.contact_email = email;
        }
        if let Some(url) = self.store_url {
            config.store_url = url;
        }
        config.validate().context("invalid site configuration")?;

        Ok(AppSettings {
            config,
            data_dir: self.data_dir.unwrap_or_else(default_data_dir),
            skip_welcome: self.skip_welcome,
        })
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Args::parse().resolve()?;
    let title = format!("{} - Portfolio", settings.config.profile.owner);

    tracing::info!(
        data_dir = ?settings.data_dir,
        project = %settings.config.project_id,
        "Starting portfolio"
    );

    // Store settings globally
    let _ = SETTINGS.set(settings);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
