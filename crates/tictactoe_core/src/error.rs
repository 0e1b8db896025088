//! Error types for board mutation and parsing.

use derive_more::{Display, Error};

/// Error returned when a move cannot be applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Position lies outside 0-8.
    #[display("position {position} is out of range (must be 0-8)")]
    InvalidPosition {
        /// Requested position.
        position: usize,
    },

    /// Square already holds a mark.
    #[display("square {position} is already occupied")]
    OccupiedCell {
        /// Requested position.
        position: usize,
    },
}

/// Error returned when a textual board cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Wrong number of cells after separators are removed.
    #[display("expected 9 cells, got {got}")]
    InvalidLength {
        /// Cells found.
        got: usize,
    },

    /// Character that is neither a mark nor an empty marker.
    #[display("invalid character '{character}' at cell {position}")]
    InvalidCharacter {
        /// Offending character.
        character: char,
        /// Cell index the character would occupy.
        position: usize,
    },
}
