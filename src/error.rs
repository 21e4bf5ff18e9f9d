use std::path::PathBuf;

use crate::game::Piece;

/// Notice shown to the player whenever a drop is refused.
pub const COLUMN_FULL_NOTICE: &str = "Column is full. Try another column.";

/// Errors from dropping a piece on the board or playing a turn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("{}", COLUMN_FULL_NOTICE)]
    ColumnFull(usize),

    #[error("{}", COLUMN_FULL_NOTICE)]
    InvalidColumn(usize),

    #[error("The game is already over.")]
    GameOver,
}

/// Errors that can occur when setting up a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("both players use the {0} piece; each player needs a distinct piece")]
    DuplicatePiece(Piece),
}

/// Errors from parsing a rendered board back into a [`crate::game::Board`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected 6 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {len} cells, expected 7")]
    RowLength { row: usize, len: usize },

    #[error("unknown marker '{marker}' at row {row}, column {col}")]
    UnknownMarker { row: usize, col: usize, marker: char },

    #[error("piece at row {row}, column {col} is not resting on anything")]
    FloatingPiece { row: usize, col: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("unknown piece color '{0}' (expected 'red' or 'yellow')")]
    UnknownPiece(String),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Game(#[from] GameError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::ColumnFull(3).to_string(),
            "Column is full. Try another column."
        );
        assert_eq!(MoveError::InvalidColumn(9).to_string(), COLUMN_FULL_NOTICE);
        assert_eq!(MoveError::GameOver.to_string(), "The game is already over.");
    }

    #[test]
    fn test_game_error_display() {
        let err = GameError::DuplicatePiece(Piece::Red);
        assert_eq!(
            err.to_string(),
            "both players use the Red piece; each player needs a distinct piece"
        );
    }

    #[test]
    fn test_board_parse_error_display() {
        let err = BoardParseError::FloatingPiece { row: 2, col: 4 };
        assert_eq!(
            err.to_string(),
            "piece at row 2, column 4 is not resting on anything"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("players[0].name must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: players[0].name must not be empty"
        );
    }
}
