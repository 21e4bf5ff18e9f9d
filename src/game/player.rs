use std::fmt;

use super::Piece;

/// A named participant and the piece they drop. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    name: String,
    piece: Piece,
}

impl Player {
    pub fn new(name: impl Into<String>, piece: Piece) -> Self {
        Player {
            name: name.into(),
            piece,
        }
    }

    /// Get player name for display
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_accessors() {
        let player = Player::new("Player 1", Piece::Red);
        assert_eq!(player.name(), "Player 1");
        assert_eq!(player.piece(), Piece::Red);
        assert_eq!(player.to_string(), "Player 1");
    }
}
