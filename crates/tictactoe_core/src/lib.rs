//! Tic-tac-toe board model and perfect-play minimax engine.
//!
//! # Architecture
//!
//! - **Board**: nine squares in row-major order with move/undo and
//!   win/draw detection
//! - **Rules**: the eight winning lines and the full-board check
//! - **Engine**: exhaustive minimax choosing the computer's move
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Board, Mark, Minimax};
//!
//! let mut board: Board = "XX.|OO.|...".parse()?;
//! let engine = Minimax::new();
//! assert_eq!(engine.best_move(&mut board), Some(2));
//!
//! board.make_move(2, Mark::X)?;
//! assert_eq!(board.check_winner(), Some(Mark::X));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod position;
pub mod rules;
mod types;

pub use engine::{AI_WIN, DRAW, HUMAN_WIN, Minimax, MoveScore, SearchOutcome, SearchStats};
pub use error::{BoardParseError, MoveError};
pub use position::Position;
pub use types::{Board, Mark, Outcome, Side, Square};
