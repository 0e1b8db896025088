//! Game orchestration between the human and the engine.

use super::players::Player;
use anyhow::{Context, Result};
use std::io::Write;
use tictactoe_core::{Board, Outcome, Position, Side};
use tracing::{debug, info, instrument};

/// Final line printed for a finished game.
pub fn result_message(outcome: Outcome) -> &'static str {
    match outcome.winner().map(Side::of_mark) {
        Some(Side::Ai) => "AI wins",
        Some(Side::Human) => "Human wins",
        None if outcome.is_over() => "Draw",
        None => "Game in progress",
    }
}

/// Orchestrates one console game between two players.
pub struct Orchestrator<W> {
    board: Board,
    human: Box<dyn Player>,
    ai: Box<dyn Player>,
    first: Side,
    output: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator on an empty board.
    pub fn new(human: Box<dyn Player>, ai: Box<dyn Player>, first: Side, output: W) -> Self {
        Self {
            board: Board::new(),
            human,
            ai,
            first,
            output,
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs the game loop until the board is terminal.
    #[instrument(skip(self), fields(first = %self.first))]
    pub fn run(&mut self) -> Result<Outcome> {
        info!("Starting game orchestration");
        self.print_banner()?;

        let mut to_move = self.first;
        while !self.board.is_terminal() {
            writeln!(self.output, "{}", self.board)?;

            let player = match to_move {
                Side::Human => &mut self.human,
                Side::Ai => {
                    writeln!(self.output, "\nAI's turn...")?;
                    &mut self.ai
                }
            };

            debug!(player = %player.name(), "Waiting for move");
            let position = player.choose_move(&self.board)?;
            self.board
                .make_move(position, player.side().mark())
                .with_context(|| format!("{} played an illegal move", player.name()))?;

            let label = Position::from_index(position).map_or("?", |p| p.label());
            info!(side = %to_move, position, label, "Move made");
            to_move = to_move.opponent();
        }

        let outcome = self.board.outcome();
        writeln!(self.output, "{}", self.board)?;
        writeln!(self.output, "\n{}", result_message(outcome))?;
        info!(?outcome, "Game over");
        Ok(outcome)
    }

    fn print_banner(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to Tic-Tac-Toe against a minimax AI")?;
        writeln!(
            self.output,
            "You are '{}' and the AI is '{}'",
            Side::Human.mark(),
            Side::Ai.mark()
        )?;
        writeln!(self.output, "Enter positions as shown below:")?;
        writeln!(self.output, "0 | 1 | 2\n---------\n3 | 4 | 5\n---------\n6 | 7 | 8\n")?;
        writeln!(self.output, "{} moves first.\n", self.first)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::{HumanPlayer, MinimaxPlayer};
    use std::io::Cursor;
    use tictactoe_core::Mark;

    /// Tries every square in order, so each turn takes the lowest free one.
    const SWEEP: &str = "0\n1\n2\n3\n4\n5\n6\n7\n8\n";

    fn play(input: &str, first: Side) -> (Result<Outcome>, Board, String) {
        let human = HumanPlayer::new("Human", Cursor::new(input.to_string()), std::io::sink());
        let ai = MinimaxPlayer::new("AI");
        let mut output = Vec::new();
        let (result, board) = {
            let mut orchestrator =
                Orchestrator::new(Box::new(human), Box::new(ai), first, &mut output);
            let result = orchestrator.run();
            (result, *orchestrator.board())
        };
        (result, board, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_result_messages() {
        assert_eq!(result_message(Outcome::Win(Mark::X)), "AI wins");
        assert_eq!(result_message(Outcome::Win(Mark::O)), "Human wins");
        assert_eq!(result_message(Outcome::Draw), "Draw");
        assert_eq!(result_message(Outcome::InProgress), "Game in progress");
    }

    #[test]
    fn test_human_never_wins_when_ai_starts() {
        let (result, board, output) = play(SWEEP, Side::Ai);
        let outcome = result.unwrap();
        assert_ne!(outcome, Outcome::Win(Mark::O));
        assert_eq!(board.outcome(), outcome);
        assert!(output.contains("AI's turn..."));
        assert!(output.trim_end().ends_with(result_message(outcome)));
    }

    #[test]
    fn test_human_never_wins_when_starting() {
        let (result, board, output) = play(SWEEP, Side::Human);
        let outcome = result.unwrap();
        assert_ne!(outcome, Outcome::Win(Mark::O));
        assert!(board.is_terminal());
        assert!(output.starts_with("Welcome"));
        assert!(output.contains("Human moves first."));
    }

    #[test]
    fn test_exhausted_input_ends_with_error() {
        let (result, board, _) = play("4\n", Side::Human);
        assert!(result.is_err());
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_each_player_places_its_own_mark() {
        use tictactoe_core::Square;

        let (_, board, _) = play("4\n", Side::Human);
        assert_eq!(board.get(4), Some(Square::Occupied(Side::Human.mark())));
        let ai_squares = board
            .squares()
            .iter()
            .filter(|s| **s == Square::Occupied(Side::Ai.mark()))
            .count();
        assert_eq!(ai_squares, 1);
    }
}
