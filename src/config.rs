//! Game configuration: TOML file with command-line overrides.

use crate::games::tictactoe::{DEFAULT_TURN_SECONDS, Difficulty, GameMode};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "timed_tictactoe.toml";

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Seconds allowed per turn.
    #[serde(default = "default_turn_seconds")]
    turn_seconds: u32,

    /// Pause before the computer moves, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Who plays O.
    #[serde(default)]
    mode: GameMode,

    /// Computer difficulty.
    #[serde(default)]
    difficulty: Difficulty,

    /// Display name for X.
    #[serde(default)]
    player_x: Option<String>,

    /// Display name for O.
    #[serde(default)]
    player_o: Option<String>,

    /// Seed for the computer's choices; unset means OS entropy.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_turn_seconds() -> u32 {
    DEFAULT_TURN_SECONDS
}

fn default_computer_delay_ms() -> u64 {
    500
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            turn_seconds: default_turn_seconds(),
            computer_delay_ms: default_computer_delay_ms(),
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            player_x: None,
            player_o: None,
            seed: None,
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Seconds per turn.
    pub turn_seconds: Option<u32>,
    /// Computer delay in milliseconds.
    pub computer_delay_ms: Option<u64>,
    /// Mode.
    pub mode: Option<GameMode>,
    /// Difficulty.
    pub difficulty: Option<Difficulty>,
    /// Name for X.
    pub player_x: Option<String>,
    /// Name for O.
    pub player_o: Option<String>,
    /// RNG seed.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise starts from defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides and re-validates.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(seconds) = overrides.turn_seconds {
            self.turn_seconds = seconds;
        }
        if let Some(delay) = overrides.computer_delay_ms {
            self.computer_delay_ms = delay;
        }
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if let Some(difficulty) = overrides.difficulty {
            self.difficulty = difficulty;
        }
        if overrides.player_x.is_some() {
            self.player_x = overrides.player_x;
        }
        if overrides.player_o.is_some() {
            self.player_o = overrides.player_o;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.turn_seconds == 0 {
            return Err(ConfigError::new(
                "turn_seconds must be at least 1".to_string(),
            ));
        }
        // A computer move scheduled after the clock runs out is always a forfeit.
        let budget_ms = u64::from(self.turn_seconds) * 1000;
        if self.computer_delay_ms >= budget_ms {
            return Err(ConfigError::new(format!(
                "computer_delay_ms ({}) must be shorter than the turn budget ({} ms)",
                self.computer_delay_ms, budget_ms
            )));
        }
        Ok(())
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
