//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for the terminal front-end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Label empty cells with their key (1-9).
    #[serde(default = "default_show_cell_numbers")]
    show_cell_numbers: bool,

    /// Input poll interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    tick_rate_ms: u64,

    /// File that receives tracing output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_show_cell_numbers() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_grid.log")
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            show_cell_numbers: default_show_cell_numbers(),
            tick_rate_ms: default_tick_rate_ms(),
            log_file: default_log_file(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.tick_rate_ms == 0 {
            return Err(ConfigError::new("tick_rate_ms must be greater than 0"));
        }

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Replaces the log file path.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Input poll interval.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes()).expect("Failed to write config");
        file
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let file = write_config("show_cell_numbers = false\n");
        let config = TuiConfig::from_file(file.path()).expect("Valid config");
        assert!(!config.show_cell_numbers());
        assert_eq!(*config.tick_rate_ms(), 100);
        assert_eq!(config.log_file(), &PathBuf::from("strictly_grid.log"));
    }

    #[test]
    fn test_full_file() {
        let file = write_config(
            "show_cell_numbers = true\ntick_rate_ms = 250\nlog_file = \"/tmp/grid.log\"\n",
        );
        let config = TuiConfig::from_file(file.path()).expect("Valid config");
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/grid.log"));
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let file = write_config("tick_rate_ms = 0\n");
        let err = TuiConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("tick_rate_ms"));
    }

    #[test]
    fn test_malformed_file_reports_parse_error() {
        let file = write_config("tick_rate_ms = \"fast\"\n");
        let err = TuiConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = TuiConfig::load(dir.path().join("absent.toml")).expect("Defaults");
        assert_eq!(config, TuiConfig::default());
    }

    #[test]
    fn test_log_file_override() {
        let config = TuiConfig::default().with_log_file(PathBuf::from("other.log"));
        assert_eq!(config.log_file(), &PathBuf::from("other.log"));
    }
}
