//! Errors raised while reading a human move.

use derive_more::{Display, Error};
use tictactoe_core::MoveError;

/// Reason a line of human input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Input is not an integer.
    #[display("'{input}' is not a number")]
    NonNumeric {
        /// Trimmed input line.
        input: String,
    },

    /// Integer outside 0-8.
    #[display("{input} is not a square between 0 and 8")]
    OutOfRange {
        /// Trimmed input line.
        input: String,
    },

    /// Board refused the move.
    #[display("{_0}")]
    Move(MoveError),
}

impl From<MoveError> for InputError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}
