//! Human move input.

use super::error::InputError;
use crossterm::event::KeyCode;
use std::num::IntErrorKind;
use tictactoe_core::{Board, MoveError, Position};

/// Parses one line of human input into a free board index.
///
/// Accepts an integer in 0-8 naming an empty square. Surrounding
/// whitespace is ignored. Integers of any magnitude outside 0-8 are
/// out of range rather than non-numeric.
pub fn parse_move(input: &str, board: &Board) -> Result<usize, InputError> {
    let trimmed = input.trim();
    let out_of_range = || InputError::OutOfRange {
        input: trimmed.to_string(),
    };
    let value: i64 = match trimmed.parse() {
        Ok(value) => value,
        Err(err) if matches!(err.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Err(out_of_range());
        }
        Err(_) => {
            return Err(InputError::NonNumeric {
                input: trimmed.to_string(),
            });
        }
    };

    let position = usize::try_from(value)
        .ok()
        .filter(|pos| *pos < Board::SIZE)
        .ok_or_else(out_of_range)?;

    if !board.is_empty(position) {
        return Err(MoveError::OccupiedCell { position }.into());
    }
    Ok(position)
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Right => Position::from_row_col(row, col + 1),
        KeyCode::Left => col.checked_sub(1).and_then(|c| Position::from_row_col(row, c)),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Up => row.checked_sub(1).and_then(|r| Position::from_row_col(r, col)),
        _ => None,
    };
    // No change for other keys or edge cases
    target.unwrap_or(cursor)
}
