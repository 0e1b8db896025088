//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. They are kept apart from board
//! storage so the search and the game loop share one definition of a line.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};
