//! Human player reading moves from a line-based console.

use super::Player;
use crate::error::InputError;
use crate::input::parse_move;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_core::{Board, Side};
use tracing::{debug, instrument, warn};

/// Human player prompting on `output` and reading lines from `input`.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip_all, fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board) -> Result<usize> {
        loop {
            write!(self.output, "\nYour move (0-8): ")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed before a move was entered");
            }

            match parse_move(&line, board) {
                Ok(position) => {
                    debug!(position, "Human chose position");
                    return Ok(position);
                }
                Err(err @ InputError::NonNumeric { .. }) => {
                    warn!(error = %err, "Rejected input");
                    writeln!(self.output, "Please enter a number between 0 and 8.")?;
                }
                Err(err) => {
                    warn!(error = %err, "Rejected input");
                    writeln!(self.output, "Invalid move! Try again.")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn side(&self) -> Side {
        Side::Human
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_core::Mark;

    fn run(input: &str, board: &Board) -> (Result<usize>, String) {
        let mut output = Vec::new();
        let result = {
            let mut player = HumanPlayer::new("Human", Cursor::new(input.to_string()), &mut output);
            player.choose_move(board)
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_valid_first_try() {
        let (result, output) = run("3\n", &Board::new());
        assert_eq!(result.unwrap(), 3);
        assert_eq!(output, "\nYour move (0-8): ");
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut board = Board::new();
        board.make_move(4, Mark::X).unwrap();
        let (result, output) = run("hello\n12\n4\n5\n", &board);
        assert_eq!(result.unwrap(), 5);
        assert_eq!(output.matches("Your move (0-8): ").count(), 4);
        assert_eq!(output.matches("Please enter a number between 0 and 8.").count(), 1);
        assert_eq!(output.matches("Invalid move! Try again.").count(), 2);
    }

    #[test]
    fn test_oversized_number_is_invalid_move() {
        let (result, output) = run("99999999999999999999\n0\n", &Board::new());
        assert_eq!(result.unwrap(), 0);
        assert_eq!(output.matches("Invalid move! Try again.").count(), 1);
        assert!(!output.contains("Please enter a number"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (result, _) = run("", &Board::new());
        assert!(result.is_err());

        let (result, _) = run("x\n", &Board::new());
        assert!(result.is_err());
    }
}
