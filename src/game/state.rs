use tracing::{debug, info};

use super::{Board, Player};
use crate::error::{GameError, MoveError};

/// Where a match stands. `Won` carries the index of the winning player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(usize),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A two-player match: owns the board, both players and the turn order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    current: usize,
    status: GameStatus,
    moves: Vec<usize>,
}

impl Game {
    /// Start a match on an empty board with `player1` to move.
    pub fn new(player1: Player, player2: Player) -> Result<Self, GameError> {
        if player1.piece() == player2.piece() {
            return Err(GameError::DuplicatePiece(player1.piece()));
        }

        Ok(Game {
            board: Board::new(),
            players: [player1, player2],
            current: 0,
            status: GameStatus::InProgress,
            moves: Vec::new(),
        })
    }

    /// Get current player. After the game ends this stays on the last mover
    /// (winner) or on whoever would have moved next (draw).
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Index (0 or 1) of the player to move
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Columns played so far, in order
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// The player who completed four in a row, if any
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(index) => Some(&self.players[index]),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Check if game is over
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// On success returns the new status: the mover wins, the board fills up
    /// (draw), or the turn passes to the other player. A refused drop leaves
    /// the game untouched. Once the game is over every call is refused with
    /// [`MoveError::GameOver`].
    pub fn play_turn(&mut self, column: usize) -> Result<GameStatus, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }

        let piece = self.players[self.current].piece();
        let row = self.board.drop_piece(column, piece)?;
        self.moves.push(column);
        debug!(player = self.current, %piece, row, column, "piece dropped");

        if self.board.check_winner(piece) {
            self.status = GameStatus::Won(self.current);
            info!(winner = %self.players[self.current], moves = self.moves.len(), "game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            info!(moves = self.moves.len(), "game drawn");
        } else {
            self.current = 1 - self.current;
        }

        Ok(self.status)
    }

    /// Text rendering of the board, see [`Board::render`]
    pub fn render_board(&self) -> String {
        self.board.render()
    }

    /// Reset to an empty board with the first player to move
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.current = 0;
        self.status = GameStatus::InProgress;
        self.moves.clear();
        debug!("game restarted");
    }
}
