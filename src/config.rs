//! Game configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_gomoku::DEFAULT_CLOCK_SECONDS;
use tracing::{debug, info, instrument};

/// Settings for a gomoku session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seconds on each player's clock at the start of a game.
    #[serde(default = "default_clock_seconds")]
    clock_seconds: u32,

    /// Milliseconds between clock ticks.
    #[serde(default = "default_tick_millis")]
    tick_millis: u64,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_clock_seconds() -> u32 {
    DEFAULT_CLOCK_SECONDS
}

fn default_tick_millis() -> u64 {
    1000
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl GameConfig {
    /// Creates a configuration with explicit timings.
    #[instrument]
    pub fn new(clock_seconds: u32, tick_millis: u64) -> Result<Self, ConfigError> {
        let config = Self {
            clock_seconds,
            tick_millis,
            log_filter: default_log_filter(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(
            clock_seconds = config.clock_seconds,
            tick_millis = config.tick_millis,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Tick period as a duration.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.clock_seconds == 0 {
            return Err(ConfigError::new("clock_seconds must be positive".to_string()));
        }
        if self.tick_millis == 0 {
            return Err(ConfigError::new("tick_millis must be positive".to_string()));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            clock_seconds: default_clock_seconds(),
            tick_millis: default_tick_millis(),
            log_filter: default_log_filter(),
        }
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
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.clock_seconds(), 600);
        assert_eq!(config.tick_period(), Duration::from_secs(1));
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = GameConfig::from_toml("clock_seconds = 300\n").unwrap();
        assert_eq!(*config.clock_seconds(), 300);
        assert_eq!(*config.tick_millis(), 1000);
    }

    #[test]
    fn test_zero_clock_rejected() {
        let err = GameConfig::from_toml("clock_seconds = 0\n").unwrap_err();
        assert!(err.message.contains("clock_seconds"));
        assert!(GameConfig::new(600, 0).is_err());
    }

    #[test]
    fn test_bad_toml_rejected() {
        let err = GameConfig::from_toml("clock_seconds = \"soon\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
