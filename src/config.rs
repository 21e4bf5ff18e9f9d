use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use crate::error::{ConfigError, GameError};
use crate::game::{Game, Piece, Player};

/// Where a loaded [`AppConfig`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    /// The file did not exist
    Defaults,
}

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub piece: Piece,
}

impl PlayerConfig {
    pub fn to_player(&self) -> Player {
        Player::new(self.name.trim(), self.piece)
    }
}

/// Log filtering and destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
    /// Log file. Console mode logs to stderr when unset, the TUI always
    /// needs a file and falls back to [`LoggingConfig::DEFAULT_TUI_FILE`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    pub const DEFAULT_TUI_FILE: &'static str = "connect_four.log";
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "warn".to_string(),
            file: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: Vec<PlayerConfig>,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            players: vec![
                PlayerConfig {
                    name: "Player 1".to_string(),
                    piece: Piece::Red,
                },
                PlayerConfig {
                    name: "Player 2".to_string(),
                    piece: Piece::Yellow,
                },
            ],
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist. The caller reports the fallback once logging is up.
    pub fn load_or_default(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if path.exists() {
            Ok((Self::load(path)?, ConfigSource::File))
        } else {
            Ok((Self::default(), ConfigSource::Defaults))
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.len() != 2 {
            return Err(ConfigError::Validation(format!(
                "exactly 2 players are required, found {}",
                self.players.len()
            )));
        }
        for (i, player) in self.players.iter().enumerate() {
            if player.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "players[{i}].name must not be empty"
                )));
            }
        }
        if self.players[0].piece == self.players[1].piece {
            return Err(GameError::DuplicatePiece(self.players[0].piece).into());
        }
        Ok(())
    }

    /// Give the first player `piece` and the second player the other one.
    pub fn assign_first_piece(&mut self, piece: Piece) {
        if let [first, second] = self.players.as_mut_slice() {
            first.piece = piece;
            second.piece = piece.other();
        }
    }

    /// Validate and start a fresh game with the configured players.
    pub fn new_game(&self) -> Result<Game, ConfigError> {
        self.validate()?;
        let game = Game::new(self.players[0].to_player(), self.players[1].to_player())?;
        Ok(game)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
