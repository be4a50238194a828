//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! Network-facing commands are pointed at a closed local port so they
//! exercise the fallback paths without leaving the machine.

use std::net::TcpListener;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command with a temporary data directory
fn cli_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("portfolio").expect("Failed to find portfolio binary");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd.env_remove("PORTFOLIO_PROJECT_ID")
        .env_remove("PORTFOLIO_CONTACT_EMAIL")
        .env_remove("PORTFOLIO_STORE_URL");
    cmd
}

/// URL of a local port nothing listens on
fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn write_cached_projects(data_dir: &TempDir) {
    let projects = serde_json::json!([
        {
            "id": "weather-app",
            "Title": "Weather App",
            "Description": "Forecasts with a map view",
            "Img": "https://example.com/weather.png",
            "Link": "https://weather.example.com",
            "Github": "",
            "TechStack": ["React", "Node.js"],
            "Features": ["Hourly forecast", "Saved cities"]
        }
    ]);
    std::fs::write(
        data_dir.path().join("projects.json"),
        serde_json::to_vec_pretty(&projects).unwrap(),
    )
    .unwrap();
}

// ============================================================================
// Info Command Tests
// ============================================================================

#[test]
fn test_info_command() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Portfolio v0.1.0"))
        .stdout(predicate::str::contains("Monu Prajapat"))
        .stdout(predicate::str::contains("https://formsubmit.co"));
}

#[test]
fn test_info_shows_data_directory() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(data_dir.path().to_string_lossy().as_ref()));
}

#[test]
fn test_flags_override_config_file() {
    let data_dir = TempDir::new().unwrap();
    let config_path = data_dir.path().join("site.json");
    std::fs::write(&config_path, r#"{ "project_id": "from-file" }"#).unwrap();

    cli_cmd(&data_dir)
        .arg("--config")
        .arg(&config_path)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project: from-file"));

    cli_cmd(&data_dir)
        .arg("--config")
        .arg(&config_path)
        .args(["--project-id", "from-flag", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project: from-flag"));
}

#[test]
fn test_env_overrides_project_id() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .env("PORTFOLIO_PROJECT_ID", "from-env")
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project: from-env"));
}

#[test]
fn test_invalid_config_fails() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["--store-url", "ftp://nope", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("store_url"));
}

// ============================================================================
// Sections Command Tests
// ============================================================================

#[test]
fn test_sections_lists_anchors_in_page_order() {
    let data_dir = TempDir::new().unwrap();

    let output = cli_cmd(&data_dir)
        .arg("sections")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let positions: Vec<usize> = ["#Home", "#About", "#Portofolio", "#Contact"]
        .iter()
        .map(|anchor| stdout.find(anchor).expect("anchor missing"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

// ============================================================================
// Projects & Certificates Tests
// ============================================================================

#[test]
fn test_projects_unreachable_store_degrades() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["--store-url", &dead_url(), "projects"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not fetch projects"))
        .stdout(predicate::str::contains("No projects found."));
}

#[test]
fn test_projects_json_is_empty_array_on_failure() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["--store-url", &dead_url(), "projects", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_certificates_lists_bundled_images() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("certificates")
        .assert()
        .success()
        .stdout(predicate::str::contains("Certificates (5):"))
        .stdout(predicate::str::contains("/courses/blockchain.png"));
}

// ============================================================================
// Project Detail Tests
// ============================================================================

#[test]
fn test_project_reads_from_cache() {
    let data_dir = TempDir::new().unwrap();
    write_cached_projects(&data_dir);

    cli_cmd(&data_dir)
        .args(["project", "weather-app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weather App"))
        .stdout(predicate::str::contains("Live demo: https://weather.example.com"))
        .stdout(predicate::str::contains("Github: Not Available"))
        .stdout(predicate::str::contains("Technologies (2): React, Node.js"))
        .stdout(predicate::str::contains("- Saved cities"));
}

#[test]
fn test_unknown_project_fails() {
    let data_dir = TempDir::new().unwrap();
    write_cached_projects(&data_dir);

    cli_cmd(&data_dir)
        .args(["project", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project not found: nope"));
}

// ============================================================================
// Contact Command Tests
// ============================================================================

#[test]
fn test_contact_rejects_invalid_email() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["--relay-url", &dead_url()])
        .args(["contact", "--name", "Ada", "--email", "not-an-email", "--message", "Hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid contact form"));
}

#[test]
fn test_contact_rejects_blank_message() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["--relay-url", &dead_url()])
        .args(["contact", "--name", "Ada", "--email", "ada@example.com", "--message", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("message is required"));
}

#[test]
fn test_contact_reports_success_when_relay_unreachable() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["--relay-url", &dead_url()])
        .args(["contact", "--name", "Ada", "--email", "ada@example.com", "--message", "Hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success!"))
        .stdout(predicate::str::contains("sent successfully"));
}
