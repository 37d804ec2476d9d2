//! Settings for a play or simulation run.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_tictactoe::{Difficulty, EngineConfig, Mark, MatchConfig, Side};
use tracing::{debug, info, instrument};

/// Environment variable naming a default config file.
pub const CONFIG_ENV: &str = "STRICTLY_SOLO_CONFIG";

/// Settings loaded from TOML and overridden by command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct SoloConfig {
    /// Mark the human plays.
    #[serde(default = "default_human")]
    human: Mark,

    /// Side that opens each match.
    #[serde(default = "default_starting")]
    starting: Side,

    /// Computer strength.
    #[serde(default)]
    difficulty: Difficulty,

    /// Pause before the computer's move, in milliseconds.
    #[serde(default = "default_think_ms")]
    think_ms: u64,

    /// Seed for reproducible computer play; random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Engine tunables.
    #[serde(default)]
    engine: EngineConfig,
}

fn default_human() -> Mark {
    Mark::X
}

fn default_starting() -> Side {
    Side::Human
}

fn default_think_ms() -> u64 {
    600
}

impl Default for SoloConfig {
    fn default() -> Self {
        Self {
            human: default_human(),
            starting: default_starting(),
            difficulty: Difficulty::default(),
            think_ms: default_think_ms(),
            seed: None,
            engine: EngineConfig::default(),
        }
    }
}

impl SoloConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads the file given on the command line, else the one named by
    /// [`CONFIG_ENV`], else the defaults.
    #[instrument]
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => Self::from_file(path),
            _ => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// The match configuration these settings describe.
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig::new(self.human, self.starting, self.difficulty)
    }

    /// Computer pause as a duration.
    pub fn think(&self) -> Duration {
        Duration::from_millis(self.think_ms)
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
