//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Application configuration. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    log_filter: String,

    /// File that receives log output.
    log_file: PathBuf,

    /// Show the 1-9 key for each empty cell.
    show_hints: bool,

    /// Colors used for the marks.
    theme: Theme,
}

/// Mark colors, as names or `#rrggbb` strings understood by ratatui.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Color of X marks.
    x_color: String,
    /// Color of O marks.
    o_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x_color: "blue".to_string(),
            o_color: "red".to_string(),
        }
    }
}

impl Theme {
    /// Resolved color for X marks.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the name is not a known color.
    pub fn x(&self) -> Result<Color, ConfigError> {
        parse_color(&self.x_color)
    }

    /// Resolved color for O marks.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the name is not a known color.
    pub fn o(&self) -> Result<Color, ConfigError> {
        parse_color(&self.o_color)
    }
}

#[track_caller]
fn parse_color(name: &str) -> Result<Color, ConfigError> {
    Color::from_str(name).map_err(|_| ConfigError::new(format!("Unknown color: {name}")))
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            log_file: PathBuf::from("tictactoe.log"),
            show_hints: false,
            theme: Theme::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file can not be read or parsed, or
    /// names an unknown color.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed TOML or an unknown color.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.theme.x()?;
        config.theme.o()?;

        info!(log_filter = %config.log_filter, show_hints = config.show_hints, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but is invalid.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the log file location.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_theme() {
        let config = AppConfig::from_toml("[theme]\nx_color = \"green\"\n").unwrap();
        assert_eq!(config.theme().x().unwrap(), Color::Green);
        assert_eq!(config.theme().o().unwrap(), Color::Red);
    }

    #[test]
    fn test_unknown_color_is_rejected() {
        let err = AppConfig::from_toml("[theme]\no_color = \"chartreuse-ish\"\n").unwrap_err();
        assert!(err.message.contains("Unknown color"));
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let err = AppConfig::from_toml("show_hints = ").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
