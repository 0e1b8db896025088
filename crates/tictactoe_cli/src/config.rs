//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::Side;
use tracing::{debug, info, instrument};

/// Who opens the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FirstPlayer {
    /// The human always moves first.
    Human,
    /// The engine always moves first.
    Ai,
    /// Coin flip at the start of each game.
    #[default]
    Random,
}

impl FirstPlayer {
    /// Turns the setting into a concrete side.
    ///
    /// `Random` uses a generator seeded with `seed` when one is given, so
    /// the same seed always picks the same side.
    #[instrument]
    pub fn resolve(self, seed: Option<u64>) -> Side {
        let side = match self {
            FirstPlayer::Human => Side::Human,
            FirstPlayer::Ai => Side::Ai,
            FirstPlayer::Random => {
                let ai_first = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed).random_bool(0.5),
                    None => rand::rng().random_bool(0.5),
                };
                if ai_first { Side::Ai } else { Side::Human }
            }
        };
        debug!(%side, "Resolved first player");
        side
    }
}

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Who moves first.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Seed for the coin flip when `first_player` is `random`.
    #[serde(default)]
    seed: Option<u64>,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default)]
    log_filter: Option<String>,
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(first_player = %config.first_player, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, first_player: Option<FirstPlayer>, seed: Option<u64>) -> Self {
        if let Some(first_player) = first_player {
            self.first_player = first_player;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Side that opens the next game.
    pub fn first_side(&self) -> Side {
        self.first_player.resolve(self.seed)
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
