//! Configuration file loading.
//!
//! The config is an optional TOML file. Every key has a default, so an
//! empty file (or no file at all) is a valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::input::RawInput;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "huella.toml";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub display: DisplayConfig,
    /// Initial form contents, as raw text.
    pub defaults: RawInput,
    pub logging: LoggingConfig,
}

/// Display options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Character used to group thousands in the displayed total.
    pub thousands_separator: char,
}

/// Logging options. Both may be overridden on the command line.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. "debug".
    pub level: Option<String>,
    /// Where to write logs. No file means no logging in the TUI.
    pub file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            defaults: default_form(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            thousands_separator: ',',
        }
    }
}

/// Form contents used when the config has no `[defaults]` section.
fn default_form() -> RawInput {
    RawInput {
        transport: "car".to_string(),
        shopping: "average".to_string(),
        meat: "weekly".to_string(),
        ..RawInput::default()
    }
}

impl Config {
    /// Parses a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid config file")
    }

    /// Loads the config.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// used if present, and the built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    debug!("No {DEFAULT_CONFIG_FILE} found, using built-in defaults");
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("Failed to load config file {}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_default_form_prefills_choices() {
        let config = Config::default();
        assert_eq!(config.defaults.transport, "car");
        assert_eq!(config.defaults.shopping, "average");
        assert_eq!(config.defaults.meat, "weekly");
        assert!(config.defaults.weekly_distance.is_empty());
        assert_eq!(config.display.thousands_separator, ',');
    }

    #[test]
    fn test_full_file() {
        let config = Config::from_toml(
            r#"
            [display]
            thousands_separator = "."

            [defaults]
            transport = "train"
            weekly_distance = "100"
            monthly_electricity = "300"
            monthly_gas = "20"
            shopping = "minimalist"
            meat = "vegetarian"
            daily_hvac_hours = "2"

            [logging]
            level = "debug"
            file = "/tmp/huella.log"
            "#,
        )
        .unwrap();

        assert_eq!(config.display.thousands_separator, '.');
        assert_eq!(config.defaults.transport, "train");
        assert_eq!(config.defaults.daily_hvac_hours, "2");
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/huella.log")));
    }

    #[test]
    fn test_partial_defaults_leave_other_fields_empty() {
        let config = Config::from_toml("[defaults]\nweekly_distance = \"40\"\n").unwrap();
        assert_eq!(config.defaults.weekly_distance, "40");
        assert!(config.defaults.transport.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(Config::from_toml("[display]\ncolour = \"red\"\n").is_err());
        assert!(Config::from_toml("[defaults]\nbike_km = \"3\"\n").is_err());
    }

    #[test]
    fn test_multi_char_separator_is_rejected() {
        assert!(Config::from_toml("[display]\nthousands_separator = \"ab\"\n").is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let result = Config::load(Some(Path::new("/nonexistent/huella.toml")));
        assert!(result.is_err());
    }
}
