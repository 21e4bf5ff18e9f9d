//! Line-oriented console front end: prints the board, prompts the current
//! player for a column and feeds their answer to the [`Game`].

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::game::{Game, GameStatus, COLS};

pub const INVALID_INPUT_NOTICE: &str = "Invalid input. Please enter a number between 0 and 6.";

/// How a console session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The game reached a win or a draw
    Finished(GameStatus),
    /// Input ran out before the game was over
    Abandoned,
}

/// Parse one line of player input into a column in `0..COLS`.
///
/// Any signed integer is accepted before the range check, so `-0` and `+3`
/// are columns 0 and 3.
pub fn parse_column(line: &str) -> Option<usize> {
    let value = line.trim().parse::<i64>().ok()?;
    usize::try_from(value).ok().filter(|&col| col < COLS)
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Play `game` to completion, or until input is exhausted.
    pub fn run(&mut self, game: &mut Game) -> io::Result<Outcome> {
        let mut buf = Vec::new();

        while !game.is_game_over() {
            write!(self.output, "{}", game.render_board())?;
            write!(
                self.output,
                "{}, choose a column (0-6): ",
                game.current_player().name()
            )?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(self.output)?;
                info!(moves = game.moves().len(), "input closed before the game ended");
                return Ok(Outcome::Abandoned);
            }

            // Undecodable bytes become U+FFFD and fail to parse like any other junk
            let line = String::from_utf8_lossy(&buf);
            match parse_column(&line) {
                Some(column) => {
                    if let Err(err) = game.play_turn(column) {
                        debug!(?err, column, "move refused");
                        writeln!(self.output, "{err}")?;
                    }
                }
                None => {
                    debug!(input = line.trim_end(), "unparseable column");
                    writeln!(self.output, "{INVALID_INPUT_NOTICE}")?;
                }
            }
        }

        write!(self.output, "{}", game.render_board())?;
        match game.winner() {
            Some(winner) => writeln!(self.output, "{} wins!", winner.name())?,
            None => writeln!(self.output, "It's a draw!")?,
        }
        self.output.flush()?;

        Ok(Outcome::Finished(game.status()))
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::COLUMN_FULL_NOTICE;
    use crate::game::{Piece, Player};
    use std::io::Cursor;

    const EMPTY_BOARD: &str = ".......\n.......\n.......\n.......\n.......\n.......\n";

    fn new_game() -> Game {
        Game::new(
            Player::new("Player 1", Piece::Red),
            Player::new("Player 2", Piece::Yellow),
        )
        .unwrap()
    }

    fn play(input: &str) -> (Outcome, Game, String) {
        play_bytes(input.as_bytes())
    }

    fn play_bytes(input: &[u8]) -> (Outcome, Game, String) {
        let mut game = new_game();
        let mut console = Console::new(Cursor::new(input.to_vec()), Vec::new());
        let outcome = console.run(&mut game).unwrap();
        let (_, output) = console.into_inner();
        (outcome, game, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_column() {
        assert_eq!(parse_column("0\n"), Some(0));
        assert_eq!(parse_column("  6 \r\n"), Some(6));
        assert_eq!(parse_column("7"), None);
        assert_eq!(parse_column("-1"), None);
        assert_eq!(parse_column("-0"), Some(0));
        assert_eq!(parse_column("+3"), Some(3));
        assert_eq!(parse_column("99999999999999999999"), None);
        assert_eq!(parse_column("three"), None);
        assert_eq!(parse_column(""), None);
    }

    #[test]
    fn test_invalid_input_then_eof() {
        let (outcome, game, output) = play("x\n");
        assert_eq!(outcome, Outcome::Abandoned);
        assert!(game.moves().is_empty());

        let expected = format!(
            "{EMPTY_BOARD}Player 1, choose a column (0-6): {INVALID_INPUT_NOTICE}\n\
             {EMPTY_BOARD}Player 1, choose a column (0-6): \n"
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_non_utf8_line_is_invalid_input_and_session_continues() {
        let (outcome, game, output) = play_bytes(b"\xff\xfe\n3\n");
        assert_eq!(outcome, Outcome::Abandoned);
        assert_eq!(game.moves(), &[3]);
        assert_eq!(game.board().get(5, 3), Some(Piece::Red));

        let expected = format!(
            "{EMPTY_BOARD}Player 1, choose a column (0-6): {INVALID_INPUT_NOTICE}\n\
             {EMPTY_BOARD}Player 1, choose a column (0-6): \
             .......\n.......\n.......\n.......\n.......\n...R...\n\
             Player 2, choose a column (0-6): \n"
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_negative_zero_selects_first_column() {
        let (_, game, output) = play("-0\n");
        assert_eq!(game.moves(), &[0]);
        assert!(!output.contains(INVALID_INPUT_NOTICE));
    }

    #[test]
    fn test_out_of_range_input_never_reaches_game() {
        let (_, game, output) = play("7\n-1\n");
        assert!(game.moves().is_empty());
        assert_eq!(output.matches(INVALID_INPUT_NOTICE).count(), 2);
    }

    #[test]
    fn test_first_player_wins_transcript() {
        let (outcome, game, output) = play("0\n1\n0\n1\n0\n1\n0\n");
        assert_eq!(outcome, Outcome::Finished(GameStatus::Won(0)));
        assert_eq!(game.winner().map(Player::name), Some("Player 1"));
        assert_eq!(output.matches("choose a column (0-6): ").count(), 7);
        assert!(output.contains("Player 2, choose a column (0-6): "));
        assert!(output.ends_with(
            ": .......\n.......\nR......\nRY.....\nRY.....\nRY.....\nPlayer 1 wins!\n"
        ));
    }

    #[test]
    fn test_full_column_prints_notice_and_keeps_turn() {
        let (outcome, game, output) = play("0\n0\n0\n0\n0\n0\n0\n");
        assert_eq!(outcome, Outcome::Abandoned);
        assert_eq!(game.moves().len(), 6);
        assert_eq!(game.current_index(), 0);
        assert_eq!(output.matches(COLUMN_FULL_NOTICE).count(), 1);
        assert!(output.ends_with(&format!(
            "{COLUMN_FULL_NOTICE}\n\
             Y......\nR......\nY......\nR......\nY......\nR......\n\
             Player 1, choose a column (0-6): \n"
        )));
    }

    #[test]
    fn test_draw_transcript() {
        let moves = [
            2, 0, 2, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1, 2, 1, 4, 2, 2, 3, 2, 3, 3, 3, 3, 6, 3, 6, 4,
            4, 4, 4, 5, 4, 5, 5, 5, 5, 6, 6, 6, 5, 6,
        ];
        let input: String = moves.iter().map(|col| format!("{col}\n")).collect();

        let (outcome, game, output) = play(&input);
        assert_eq!(outcome, Outcome::Finished(GameStatus::Draw));
        assert!(game.winner().is_none());
        assert!(output.ends_with(
            "RRYYRRY\nRRYYRRY\nYYRRYYR\nRRYYRRY\nYYRRYYR\nYYRRYYR\nIt's a draw!\n"
        ));
    }

    #[test]
    fn test_finished_game_prints_result_without_prompting() {
        let mut game = new_game();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            game.play_turn(col).unwrap();
        }
        let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());
        let outcome = console.run(&mut game).unwrap();
        let (_, output) = console.into_inner();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(outcome, Outcome::Finished(GameStatus::Won(0)));
        assert!(!output.contains("choose a column"));
        assert!(output.ends_with("Player 1 wins!\n"));
    }
}
