//! Portfolio CLI
//!
//! Thin wrapper around portfolio-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Show the resolved configuration
//! portfolio info
//!
//! # Fetch projects from the document store (cached for offline use)
//! portfolio projects
//!
//! # List certificates
//! portfolio certificates
//!
//! # Show one cached project
//! portfolio project <id>
//!
//! # Send a message through the contact relay
//! portfolio contact --name "Ada" --email ada@example.com --message "Hello"
//!
//! # List the page sections and their anchors
//! portfolio sections
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use portfolio_core::contact::SUCCESS_TITLE;
use portfolio_core::site::local_certificates;
use portfolio_core::{
    default_nav_items, load_portfolio, ContactForm, FirestoreSource, FormRelay, Loaded, Project,
    ProjectCache, SiteConfig, SubmissionOutcome, SUCCESS_MESSAGE,
};

/// Portfolio - headless access to the site's data
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(version = "0.1.0")]
#[command(about = "Portfolio - projects, certificates and contact relay")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Data directory for the offline cache
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Site configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Document store project id
    #[arg(long, env = "PORTFOLIO_PROJECT_ID", global = true)]
    project_id: Option<String>,

    /// Address contact messages are forwarded to
    #[arg(long, env = "PORTFOLIO_CONTACT_EMAIL", global = true)]
    contact_email: Option<String>,

    /// Base URL of the document store API
    #[arg(long, env = "PORTFOLIO_STORE_URL", global = true)]
    store_url: Option<String>,

    /// Base URL of the form relay
    #[arg(long, global = true)]
    relay_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolved configuration and data directory
    Info,

    /// Fetch and list projects
    Projects {
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },

    /// List certificate images
    Certificates,

    /// Show a cached project
    Project {
        /// Project id
        id: String,
    },

    /// Send a message through the contact relay
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },

    /// List page sections and their anchors
    Sections,
}

impl Cli {
    fn site_config(&self) -> Result<SiteConfig> {
        let mut config = SiteConfig::load_or_default(self.config.as_deref())
            .with_context(|| format!("loading config {:?}", self.config))?;

        if let Some(project_id) = &self.project_id {
            config.project_id = project_id.clone();
        }
        if let Some(email) = &self.contact_email {
            config.contact_email = email.clone();
        }
        if let Some(url) = &self.store_url {
            config.store_url = url.clone();
        }
        if let Some(url) = &self.relay_url {
            config.relay_url = url.clone();
        }
        config.validate().context("invalid site configuration")?;
        Ok(config)
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Get the default data directory (shared with the desktop app)
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portfolio")
}

fn print_project_line(project: &Project) {
    println!("  {} ({})", project.title, project.id);
    match project.live_link() {
        Some(url) => println!("    Demo: {}", url),
        None => println!("    Demo: Not Available"),
    }
}

fn print_project(project: &Project) {
    println!("{}", project.title);
    println!("  ID: {}", project.id);
    println!();
    println!("{}", project.description);
    println!();
    println!("Live demo: {}", project.live_link().unwrap_or("Not Available"));
    println!("Github: {}", project.github_link().unwrap_or("Not Available"));
    if !project.tech_stack.is_empty() {
        println!("Technologies ({}): {}", project.tech_stack.len(), project.tech_stack.join(", "));
    }
    if !project.features.is_empty() {
        println!("Key features ({}):", project.features.len());
        for feature in &project.features {
            println!("  - {}", feature);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = cli.site_config()?;
    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    let cache = ProjectCache::new(&data_dir);

    match cli.command {
        Commands::Info => {
            println!("Portfolio v0.1.0");
            println!();
            println!("Owner: {}", config.profile.owner);
            println!("  Role: {}", config.profile.role);
            println!("  Tagline: {}", config.profile.tagline);
            println!();
            println!("Store:");
            println!("  URL: {}", config.store_url);
            println!("  Project: {}", config.project_id);
            println!();
            println!("Contact relay:");
            println!("  URL: {}", config.relay_url);
            println!("  Recipient: {}", config.contact_email);
            println!();
            println!("Data directory: {}", data_dir.display());
        }

        Commands::Projects { json } => {
            let source = FirestoreSource::new(&config)?;
            let loaded = load_portfolio(&source, Some(&cache), &local_certificates()).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&loaded.data().projects)?);
                return Ok(());
            }

            if let Loaded::Degraded { reason, .. } = &loaded {
                println!("Could not fetch projects: {}", reason);
                println!("Showing fallback data.");
                println!();
            }

            let projects = &loaded.data().projects;
            if projects.is_empty() {
                println!("No projects found.");
            } else {
                println!("Projects ({}):", projects.len());
                for project in projects {
                    print_project_line(project);
                }
            }
        }

        Commands::Certificates => {
            let mut certificates = local_certificates();
            if certificates.is_empty() {
                certificates = cache.load_certificates()?;
            }

            if certificates.is_empty() {
                println!("No certificates found.");
            } else {
                println!("Certificates ({}):", certificates.len());
                for certificate in &certificates {
                    println!("  {}", certificate.img);
                }
            }
        }

        Commands::Project { id } => match cache.find_project(&id)? {
            Some(project) => print_project(&project),
            None => {
                anyhow::bail!("Project not found: {} (run `portfolio projects` to refresh the cache)", id);
            }
        },

        Commands::Contact {
            name,
            email,
            message,
        } => {
            let form = ContactForm::new(name, email, message);
            let relay = FormRelay::new(&config)?;
            let outcome = relay.submit(&form).await.context("invalid contact form")?;

            match &outcome {
                SubmissionOutcome::Delivered { status, accepted } => {
                    tracing::info!(status, accepted, "Relay answered");
                }
                SubmissionOutcome::AssumedDelivered { reason } => {
                    tracing::warn!(reason = %reason, "Relay unreachable");
                }
            }

            if outcome.shows_success() {
                println!("{}", SUCCESS_TITLE);
                println!("{}", SUCCESS_MESSAGE);
            }
        }

        Commands::Sections => {
            println!("Sections:");
            for item in default_nav_items() {
                println!("  {:<12} {}", item.label, item.anchor());
            }
        }
    }

    Ok(())
}
