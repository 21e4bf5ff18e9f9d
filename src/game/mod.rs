//! Core Connect Four game logic: pieces, players, the board with its
//! four-in-a-row detection, and the turn/winner state machine.

mod board;
mod piece;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS, WIN_LENGTH};
pub use piece::Piece;
pub use player::Player;
pub use state::{Game, GameStatus};
