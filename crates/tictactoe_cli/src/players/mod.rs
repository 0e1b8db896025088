//! Player trait and implementations.

mod human;
mod minimax;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;

use anyhow::Result;
use tictactoe_core::{Board, Side};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// Returns a free position (0-8) on `board`.
    fn choose_move(&mut self, board: &Board) -> Result<usize>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Side this player plays for.
    fn side(&self) -> Side;
}
