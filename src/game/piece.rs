use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A player's marker. Two pieces are equal iff they are the same color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Piece {
    Red,
    Yellow,
}

impl Piece {
    /// Get the other piece
    pub fn other(self) -> Piece {
        match self {
            Piece::Red => Piece::Yellow,
            Piece::Yellow => Piece::Red,
        }
    }

    /// Color name for display
    pub fn color(self) -> &'static str {
        match self {
            Piece::Red => "Red",
            Piece::Yellow => "Yellow",
        }
    }

    /// Single-character board marker: the first letter of the color
    pub fn marker(self) -> char {
        match self {
            Piece::Red => 'R',
            Piece::Yellow => 'Y',
        }
    }

    /// Inverse of [`Piece::marker`]
    pub fn from_marker(marker: char) -> Option<Piece> {
        match marker {
            'R' => Some(Piece::Red),
            'Y' => Some(Piece::Yellow),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.color())
    }
}

impl FromStr for Piece {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Piece::Red),
            "yellow" => Ok(Piece::Yellow),
            _ => Err(ConfigError::UnknownPiece(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_piece() {
        assert_eq!(Piece::Red.other(), Piece::Yellow);
        assert_eq!(Piece::Yellow.other(), Piece::Red);
    }

    #[test]
    fn test_marker_is_first_letter_of_color() {
        for piece in [Piece::Red, Piece::Yellow] {
            assert_eq!(piece.color().chars().next(), Some(piece.marker()));
            assert_eq!(Piece::from_marker(piece.marker()), Some(piece));
        }
        assert_eq!(Piece::from_marker('.'), None);
    }

    #[test]
    fn test_separately_built_pieces_compare_equal() {
        let a: Piece = "Red".parse().unwrap();
        let b: Piece = "red".parse().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Piece::Yellow);
    }

    #[test]
    fn test_parse_unknown_piece() {
        let err = "green".parse::<Piece>().unwrap_err();
        assert_eq!(err.to_string(), "unknown piece color 'green' (expected 'red' or 'yellow')");
    }
}
