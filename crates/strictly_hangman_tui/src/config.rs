//! Configuration for the hangman terminal UI.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_hangman.toml";

/// Settings loaded from `strictly_hangman.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HangmanConfig {
    /// Fixed seed for word selection. Random when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,

    /// File the TUI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Presentation timings.
    #[serde(default)]
    timings: Timings,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_hangman.log")
}

#[instrument]
fn default_log_filter() -> String {
    "info,strictly_hangman=debug".to_string()
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            timings: Timings::default(),
        }
    }
}

impl HangmanConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;

        info!(seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the seed when one is given (command-line override).
    #[instrument(skip(self))]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if let Some(seed) = seed {
            debug!(seed, "Overriding seed");
            self.seed = Some(seed);
        }
        self
    }

    /// Renders the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

/// Presentation timings, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Delay between the end of a round and the result dialog.
    dialog_delay_ms: u64,
    /// Length of the shake after a wrong guess.
    shake_duration_ms: u64,
    /// Input poll timeout; also the redraw interval while idle.
    tick_rate_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            dialog_delay_ms: 500,
            shake_duration_ms: 400,
            tick_rate_ms: 50,
        }
    }
}

impl Timings {
    /// Creates timings from millisecond values.
    pub fn new(dialog_delay_ms: u64, shake_duration_ms: u64, tick_rate_ms: u64) -> Self {
        Self {
            dialog_delay_ms,
            shake_duration_ms,
            tick_rate_ms,
        }
    }

    /// Delay before the result dialog appears.
    pub fn dialog_delay(&self) -> Duration {
        Duration::from_millis(self.dialog_delay_ms)
    }

    /// Length of the shake cue.
    pub fn shake_duration(&self) -> Duration {
        Duration::from_millis(self.shake_duration_ms)
    }

    /// Input poll timeout.
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
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
