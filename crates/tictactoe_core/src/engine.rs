//! Exhaustive minimax search for the computer player.
//!
//! The search walks the full game tree below the current board without
//! pruning or caching. Scores are absolute: an AI line is worth `+1`, a
//! human line `-1` and a draw `0`, no matter how many plies away it is.
//! Ties at the root go to the lowest board index.
//!
//! The board is mutated in place and every trial move is undone before the
//! call that made it returns, so callers see the board unchanged.

use super::types::{Board, Mark};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a position won by the AI.
pub const AI_WIN: i32 = 1;
/// Score of a position won by the human.
pub const HUMAN_WIN: i32 = -1;
/// Score of a drawn position.
pub const DRAW: i32 = 0;

/// Score of a single root move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    /// Board index of the move.
    pub position: usize,
    /// Minimax value after playing the move.
    pub score: i32,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, including terminal leaves.
    pub nodes: u64,
    /// Deepest ply reached below the root move.
    pub max_depth: u32,
}

impl SearchStats {
    fn merge(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Chosen move, `None` on a terminal board.
    pub best_move: Option<usize>,
    /// Value of the chosen move.
    pub score: Option<i32>,
    /// Work done to find it.
    pub stats: SearchStats,
}

/// Minimax engine playing one fixed mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minimax {
    ai: Mark,
    human: Mark,
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new()
    }
}

impl Minimax {
    /// Engine playing X against a human playing O.
    pub fn new() -> Self {
        Self::with_ai_mark(Mark::X)
    }

    /// Engine playing `ai`; the human gets the other mark.
    pub fn with_ai_mark(ai: Mark) -> Self {
        Self {
            ai,
            human: ai.opponent(),
        }
    }

    /// Mark the engine maximizes for.
    pub fn ai_mark(&self) -> Mark {
        self.ai
    }

    /// Mark the engine minimizes for.
    pub fn human_mark(&self) -> Mark {
        self.human
    }

    /// Score of a terminal board, `None` while play can continue.
    pub fn terminal_score(&self, board: &Board) -> Option<i32> {
        match board.check_winner() {
            Some(mark) if mark == self.ai => Some(AI_WIN),
            Some(_) => Some(HUMAN_WIN),
            None if board.is_full() => Some(DRAW),
            None => None,
        }
    }

    /// Value of `board` with the AI to move when `is_maximizing`, the
    /// human otherwise.
    ///
    /// `depth` counts plies below the root; it is tracked but does not
    /// change the score.
    pub fn minimax(&self, board: &mut Board, depth: u32, is_maximizing: bool) -> i32 {
        let mut stats = SearchStats::default();
        self.evaluate(board, depth, is_maximizing, &mut stats)
    }

    fn evaluate(
        &self,
        board: &mut Board,
        depth: u32,
        is_maximizing: bool,
        stats: &mut SearchStats,
    ) -> i32 {
        stats.nodes += 1;
        stats.max_depth = stats.max_depth.max(depth);

        if let Some(score) = self.terminal_score(board) {
            return score;
        }

        let mark = if is_maximizing { self.ai } else { self.human };
        let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

        for pos in board.available_moves() {
            board.place(pos, mark);
            let score = self.evaluate(board, depth + 1, !is_maximizing, stats);
            board.undo_move(pos);

            best = if is_maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }

    /// Scores every available move for the AI, in ascending position order.
    ///
    /// Empty on a terminal board.
    #[instrument(skip(self, board), fields(ai = %self.ai, occupied = board.occupied_count()))]
    pub fn move_scores(&self, board: &mut Board) -> Vec<MoveScore> {
        if board.is_terminal() {
            return Vec::new();
        }
        let mut stats = SearchStats::default();
        let scores: Vec<MoveScore> = board
            .available_moves()
            .into_iter()
            .map(|position| MoveScore {
                position,
                score: self.score_root_move(board, position, &mut stats),
            })
            .collect();
        debug!(nodes = stats.nodes, ?scores, "Scored root moves");
        scores
    }

    /// Best move for the AI together with its value and search counters.
    ///
    /// Returns an empty outcome when the board is already terminal.
    #[instrument(skip(self, board), fields(ai = %self.ai, occupied = board.occupied_count()))]
    pub fn search(&self, board: &mut Board) -> SearchOutcome {
        let mut stats = SearchStats::default();
        if board.is_terminal() {
            debug!("Search requested on a terminal board");
            return SearchOutcome {
                best_move: None,
                score: None,
                stats,
            };
        }

        let mut best: Option<MoveScore> = None;
        for position in board.available_moves() {
            let score = self.score_root_move(board, position, &mut stats);
            if best.is_none_or(|b| score > b.score) {
                best = Some(MoveScore { position, score });
            }
        }

        debug!(
            best_move = ?best.map(|b| b.position),
            score = ?best.map(|b| b.score),
            nodes = stats.nodes,
            max_depth = stats.max_depth,
            "Search finished"
        );

        SearchOutcome {
            best_move: best.map(|b| b.position),
            score: best.map(|b| b.score),
            stats,
        }
    }

    /// Best move for the AI, lowest index among equal scores.
    ///
    /// Returns `None` when the board is terminal; callers check
    /// [`Board::is_terminal`] first.
    pub fn best_move(&self, board: &mut Board) -> Option<usize> {
        self.search(board).best_move
    }

    /// Same choice as [`Minimax::best_move`], with root moves searched on
    /// separate board copies across the rayon pool.
    #[instrument(skip(self, board), fields(ai = %self.ai, occupied = board.occupied_count()))]
    pub fn best_move_parallel(&self, board: &Board) -> Option<usize> {
        if board.is_terminal() {
            return None;
        }

        let branches: Vec<(MoveScore, SearchStats)> = board
            .available_moves()
            .into_par_iter()
            .map(|position| {
                let mut branch = *board;
                let mut stats = SearchStats::default();
                let score = self.score_root_move(&mut branch, position, &mut stats);
                (MoveScore { position, score }, stats)
            })
            .collect();

        let mut stats = SearchStats::default();
        let mut best: Option<MoveScore> = None;
        for (candidate, branch_stats) in branches {
            stats.merge(branch_stats);
            if best.is_none_or(|b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }

        debug!(
            best_move = ?best.map(|b| b.position),
            nodes = stats.nodes,
            "Parallel search finished"
        );
        best.map(|b| b.position)
    }

    fn score_root_move(&self, board: &mut Board, position: usize, stats: &mut SearchStats) -> i32 {
        board.place(position, self.ai);
        let score = self.evaluate(board, 0, false, stats);
        board.undo_move(position);
        score
    }
}
