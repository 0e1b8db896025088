//! Computer player backed by the minimax engine.

use super::Player;
use anyhow::Result;
use tictactoe_core::{Board, Minimax, Side};
use tracing::{debug, instrument};

/// Perfect-play computer opponent.
pub struct MinimaxPlayer {
    name: String,
    engine: Minimax,
    parallel: bool,
}

impl MinimaxPlayer {
    /// Creates a player searching on the current thread.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            engine: Minimax::with_ai_mark(Side::Ai.mark()),
            parallel: false,
        }
    }

    /// Spread root moves across the rayon pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Player for MinimaxPlayer {
    #[instrument(skip_all, fields(player = %self.name, parallel = self.parallel))]
    fn choose_move(&mut self, board: &Board) -> Result<usize> {
        let choice = if self.parallel {
            self.engine.best_move_parallel(board)
        } else {
            let mut scratch = *board;
            self.engine.best_move(&mut scratch)
        };
        let position =
            choice.ok_or_else(|| anyhow::anyhow!("Engine asked to move on a finished board"))?;
        debug!(position, "AI chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn side(&self) -> Side {
        Side::Ai
    }
}
