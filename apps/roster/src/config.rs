//! # Settings
//!
//! Optional TOML settings file. Every field has a default, so an absent
//! file and an empty file mean the same thing.
//!
//! ```toml
//! [logging]
//! format = "json"          # "text" (default) or "json"
//! filter = "roster=debug"  # RUST_LOG still wins when set
//!
//! [auto]
//! destination = "test"
//! ```
//!
//! `ROSTER_LOG_FORMAT` overrides `logging.format`.

use roster_core::RosterError;
use roster_core::primitives::DEFAULT_AUTO_DESTINATION;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the log output format.
pub const LOG_FORMAT_ENV: &str = "ROSTER_LOG_FORMAT";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Parse a format name; anything but "json" means text.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub format: LogFormat,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AutoSettings {
    /// Where the `auto` command writes its demonstration roster.
    pub destination: PathBuf,
}

impl Default for AutoSettings {
    fn default() -> Self {
        Self {
            destination: PathBuf::from(DEFAULT_AUTO_DESTINATION),
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub auto: AutoSettings,
}

impl Settings {
    /// Load settings from an optional file, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, RosterError> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        settings.apply_log_format_override(std::env::var(LOG_FORMAT_ENV).ok().as_deref());
        Ok(settings)
    }

    /// Read and parse a TOML settings file.
    pub fn from_file(path: &Path) -> Result<Self, RosterError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RosterError::Config(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, RosterError> {
        toml::from_str(content).map_err(|e| RosterError::Config(format!("TOML parsing error: {}", e)))
    }

    /// Apply the value of `ROSTER_LOG_FORMAT`, if any.
    pub fn apply_log_format_override(&mut self, value: Option<&str>) {
        if let Some(name) = value {
            self.logging.format = LogFormat::from_name(name);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let settings = Settings::from_toml_str("").expect("parse");
        assert_eq!(settings.logging.format, LogFormat::Text);
        assert!(settings.logging.filter.is_none());
        assert_eq!(settings.auto.destination, PathBuf::from("test"));
    }

    #[test]
    fn full_file_parses() {
        let settings = Settings::from_toml_str(
            r#"
            [logging]
            format = "json"
            filter = "roster=debug"

            [auto]
            destination = "demo.roster"
            "#,
        )
        .expect("parse");

        assert_eq!(settings.logging.format, LogFormat::Json);
        assert_eq!(settings.logging.filter.as_deref(), Some("roster=debug"));
        assert_eq!(settings.auto.destination, PathBuf::from("demo.roster"));
    }

    #[test]
    fn unknown_format_rejected() {
        let result = Settings::from_toml_str("[logging]\nformat = \"xml\"\n");
        assert!(matches!(result, Err(RosterError::Config(_))));
    }

    #[test]
    fn env_override_replaces_format() {
        let mut settings = Settings::default();
        settings.apply_log_format_override(Some("JSON"));
        assert_eq!(settings.logging.format, LogFormat::Json);

        settings.apply_log_format_override(None);
        assert_eq!(settings.logging.format, LogFormat::Json);

        settings.apply_log_format_override(Some("text"));
        assert_eq!(settings.logging.format, LogFormat::Text);
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = Settings::load(Some(&dir.path().join("roster.toml")));
        assert!(matches!(result, Err(RosterError::Config(_))));
    }
}
