//! Core domain types for tic-tac-toe.

use super::error::{BoardParseError, MoveError};
use super::rules;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, warn};

/// Mark placed in a square.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Cross.
    #[display("X")]
    X,
    /// Nought.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Which participant of a game a mark belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Side {
    /// The person at the keyboard.
    #[display("Human")]
    Human,
    /// The minimax engine.
    #[display("AI")]
    Ai,
}

impl Side {
    /// Mark bound to this side for the lifetime of a game.
    pub fn mark(self) -> Mark {
        match self {
            Side::Human => Mark::O,
            Side::Ai => Mark::X,
        }
    }

    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Ai,
            Side::Ai => Side::Human,
        }
    }

    /// Side owning the given mark.
    pub fn of_mark(mark: Mark) -> Self {
        match mark {
            Mark::O => Side::Human,
            Mark::X => Side::Ai,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

/// State of a game, derived from the board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has a line.
    InProgress,
    /// A mark completed a line.
    Win(Mark),
    /// Board is full without a line.
    Draw,
}

impl Outcome {
    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// True once no further moves are accepted.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order, so index `r * 3 + c` holds
/// row `r`, column `c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Number of squares on the board.
    pub const SIZE: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; Self::SIZE],
        }
    }

    /// Gets the square at the given position, `None` when out of range.
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Checks if the square at `pos` exists and is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Indices of all empty squares in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Number of squares holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.squares
            .iter()
            .filter(|square| **square != Square::Empty)
            .count()
    }

    /// Places `mark` at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidPosition`] if `pos` is outside 0-8 and
    /// [`MoveError::OccupiedCell`] if the square already holds a mark. The
    /// board is left untouched in both cases.
    #[instrument(level = "debug", skip(self))]
    pub fn make_move(&mut self, pos: usize, mark: Mark) -> Result<(), MoveError> {
        match self.squares.get_mut(pos) {
            None => {
                warn!(pos, "Rejected move outside the board");
                Err(MoveError::InvalidPosition { position: pos })
            }
            Some(Square::Occupied(_)) => {
                warn!(pos, "Rejected move onto occupied square");
                Err(MoveError::OccupiedCell { position: pos })
            }
            Some(square) => {
                *square = Square::Occupied(mark);
                Ok(())
            }
        }
    }

    /// Clears the square at `pos`.
    ///
    /// Backtracking helper for search: the caller must have placed the mark
    /// itself. Out-of-range positions are ignored.
    pub fn undo_move(&mut self, pos: usize) {
        if let Some(square) = self.squares.get_mut(pos) {
            *square = Square::Empty;
        }
    }

    /// Places a mark without validation. Only used on positions taken from
    /// [`Board::available_moves`].
    pub(crate) fn place(&mut self, pos: usize, mark: Mark) {
        self.squares[pos] = Square::Occupied(mark);
    }

    /// True iff no square is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Mark owning a complete line, scanning rows, then columns, then diagonals.
    pub fn check_winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// True iff somebody has a line or the board is full.
    pub fn is_terminal(&self) -> bool {
        self.check_winner().is_some() || self.is_full()
    }

    /// Derives the game outcome from the current squares.
    pub fn outcome(&self) -> Outcome {
        if let Some(mark) = self.check_winner() {
            Outcome::Win(mark)
        } else if rules::is_draw(self) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .map(|col| match self.squares[row * 3 + col] {
                    Square::Empty => " ".to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                })
                .collect();
            write!(f, "{}", cells.join(" | "))?;
            if row < 2 {
                write!(f, "\n---------\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells such as `"XX.OO...."` or `"X O|.X.|O.."`.
    ///
    /// `X`/`O` (any case) are marks; `.`, `_`, `-` and space are empty.
    /// Row separators `|`, `/` and newlines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '|' | '/' | '\n' | '\r'))
            .collect();
        if cells.len() != Board::SIZE {
            return Err(BoardParseError::InvalidLength { got: cells.len() });
        }

        let mut squares = [Square::Empty; Board::SIZE];
        for (position, character) in cells.into_iter().enumerate() {
            squares[position] = match character {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '_' | '-' | ' ' => Square::Empty,
                character => {
                    return Err(BoardParseError::InvalidCharacter {
                        character,
                        position,
                    });
                }
            };
        }
        Ok(Self { squares })
    }
}
