//! Game configuration loaded from TOML.

use crate::players::PlayerKind;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who plays one side of the board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Kind of player.
    kind: PlayerKind,

    /// Display name used in logs.
    name: String,
}

impl PlayerConfig {
    /// Creates a player configuration.
    pub fn new(kind: PlayerKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    /// Replaces the player kind, keeping the name.
    pub fn with_kind(mut self, kind: PlayerKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Configuration for a single game.
///
/// ```toml
/// color = false
/// seed = 7
///
/// [player_x]
/// kind = "human"
/// name = "Alice"
///
/// [player_o]
/// kind = "perfect"
/// name = "Computer"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player for X (moves first).
    #[serde(default = "default_player_x")]
    player_x: PlayerConfig,

    /// Player for O.
    #[serde(default = "default_player_o")]
    player_o: PlayerConfig,

    /// Print the board with ANSI styling.
    #[serde(default = "default_color")]
    color: bool,

    /// Seed for random players; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_player_x() -> PlayerConfig {
    PlayerConfig::new(PlayerKind::Human, "Human")
}

fn default_player_o() -> PlayerConfig {
    PlayerConfig::new(PlayerKind::Perfect, "Computer")
}

fn default_color() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_x: default_player_x(),
            player_o: default_player_o(),
            color: default_color(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            x = %config.player_x.kind,
            o = %config.player_o.kind,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Overrides the X player's kind.
    pub fn with_player_x(mut self, kind: PlayerKind) -> Self {
        self.player_x = self.player_x.with_kind(kind);
        self
    }

    /// Overrides the O player's kind.
    pub fn with_player_o(mut self, kind: PlayerKind) -> Self {
        self.player_o = self.player_o.with_kind(kind);
        self
    }

    /// Overrides ANSI styling.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Overrides the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
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
