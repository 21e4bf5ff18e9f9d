use std::fmt;
use std::str::FromStr;

use super::Piece;
use crate::error::{BoardParseError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const WIN_LENGTH: usize = 4;

/// Content of one grid position: empty or holding a piece.
pub type Cell = Option<Piece>;

/// Fixed 6x7 grid. Row 0 is the top, row 5 is the bottom.
///
/// Pieces only enter through [`Board::drop_piece`], so every column is a
/// contiguous stack resting on the bottom row and occupied cells never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[None; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position, `None` when empty or out of range
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col].is_some()
    }

    /// Number of pieces stacked in a column
    pub fn column_height(&self, col: usize) -> usize {
        if col >= COLS {
            return 0;
        }
        (0..ROWS).filter(|&row| self.cells[row][col].is_some()).count()
    }

    /// Columns that still have room, left to right
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&col| !self.is_column_full(col))
    }

    /// Total number of pieces on the board
    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, piece: Piece) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        // Lowest empty row in this column
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col].is_none())
            .ok_or(MoveError::ColumnFull(col))?;

        self.cells[row][col] = Some(piece);
        Ok(row)
    }

    /// Place a piece in the first empty cell from the bottom of `col`.
    ///
    /// Returns `false` without touching the grid if the column is full or out
    /// of range.
    pub fn add_piece(&mut self, col: usize, piece: Piece) -> bool {
        self.drop_piece(col, piece).is_ok()
    }

    /// Check if the board is completely full.
    ///
    /// Gravity keeps every column contiguous from the bottom, so the top row
    /// alone decides this.
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Check whether `piece` has four in a row anywhere on the board
    pub fn check_winner(&self, piece: Piece) -> bool {
        self.check_horizontal(piece)
            || self.check_vertical(piece)
            || self.check_diagonal_down_right(piece)
            || self.check_diagonal_down_left(piece)
    }

    /// Row fixed, consecutive columns (-)
    fn check_horizontal(&self, piece: Piece) -> bool {
        (0..ROWS).any(|row| (0..=COLS - WIN_LENGTH).any(|col| self.is_run(row, col, (0, 1), piece)))
    }

    /// Column fixed, consecutive rows (|)
    fn check_vertical(&self, piece: Piece) -> bool {
        (0..=ROWS - WIN_LENGTH).any(|row| (0..COLS).any(|col| self.is_run(row, col, (1, 0), piece)))
    }

    /// Top-left to bottom-right (\)
    fn check_diagonal_down_right(&self, piece: Piece) -> bool {
        (0..=ROWS - WIN_LENGTH)
            .any(|row| (0..=COLS - WIN_LENGTH).any(|col| self.is_run(row, col, (1, 1), piece)))
    }

    /// Top-right to bottom-left (/)
    fn check_diagonal_down_left(&self, piece: Piece) -> bool {
        (0..=ROWS - WIN_LENGTH)
            .any(|row| (WIN_LENGTH - 1..COLS).any(|col| self.is_run(row, col, (1, -1), piece)))
    }

    /// Whether the `WIN_LENGTH` cells starting at (row, col) and stepping by
    /// `(d_row, d_col)` all hold `piece`
    fn is_run(&self, row: usize, col: usize, (d_row, d_col): (isize, isize), piece: Piece) -> bool {
        (0..WIN_LENGTH as isize).all(|i| {
            match (
                row.checked_add_signed(d_row * i),
                col.checked_add_signed(d_col * i),
            ) {
                (Some(r), Some(c)) => self.get(r, c) == Some(piece),
                _ => false,
            }
        })
    }

    /// Text rendering: one line per row, top row first, `.` for empty cells
    /// and the piece marker otherwise. Every line ends with `\n`.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(ROWS * (COLS + 1));
        for row in &self.cells {
            out.extend(row.iter().map(|cell| cell.map_or('.', Piece::marker)));
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Parses the [`Board::render`] format back into a board, rejecting grids no
/// sequence of drops could have produced.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        if lines.len() != ROWS {
            return Err(BoardParseError::RowCount(lines.len()));
        }

        let mut board = Board::new();
        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != COLS {
                return Err(BoardParseError::RowLength { row, len });
            }
            for (col, ch) in line.chars().enumerate() {
                board.cells[row][col] = match ch {
                    '.' => None,
                    other => Some(
                        Piece::from_marker(other)
                            .ok_or(BoardParseError::UnknownMarker { row, col, marker: other })?,
                    ),
                };
            }
        }

        for col in 0..COLS {
            for row in 0..ROWS - 1 {
                if board.cells[row][col].is_some() && board.cells[row + 1][col].is_none() {
                    return Err(BoardParseError::FloatingPiece { row, col });
                }
            }
        }

        Ok(board)
    }
}
