//! Light/dark theme preference.
//!
//! The mode only drives styling. It is persisted as `preferences.json` in the
//! data directory so the choice survives restarts.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PortfolioResult;

const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Class put on the root element; the stylesheet keys colors off it.
    pub fn class(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "theme-dark",
            ThemeMode::Light => "theme-light",
        }
    }

    /// Accessible label for the toggle button.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "Switch to light theme",
            ThemeMode::Light => "Switch to dark theme",
        }
    }
}

/// User preferences stored in the data directory.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: ThemeMode,
}

impl Preferences {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(PREFERENCES_FILE)
    }

    /// Load preferences, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn load(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable preferences");
                Self::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read preferences");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) -> PortfolioResult<()> {
        std::fs::create_dir_all(data_dir)?;
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(Self::path(data_dir), raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggle().toggle(), ThemeMode::Dark);
        assert!(ThemeMode::default().is_dark());
    }

    #[test]
    fn classes() {
        assert_eq!(ThemeMode::Dark.class(), "theme-dark");
        assert_eq!(ThemeMode::Light.class(), "theme-light");
    }

    #[test]
    fn missing_file_gives_default() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Preferences::load(dir.path()), Preferences::default());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let prefs = Preferences {
            theme: ThemeMode::Light,
        };
        prefs.save(dir.path()).unwrap();
        assert_eq!(Preferences::load(dir.path()), prefs);
    }

    #[test]
    fn corrupt_file_gives_default() {
        let dir = TempDir::new().unwrap();
        std::fs::write(Preferences::path(dir.path()), "not json").unwrap();
        assert_eq!(Preferences::load(dir.path()).theme, ThemeMode::Dark);
    }
}
