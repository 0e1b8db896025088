//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Square};

/// Every winning line in canonical scan order: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first complete line in [`LINES`] order, or
/// `None` if no line is complete. On a malformed board with lines for both
/// marks the earlier line wins.
pub fn check_winner(board: &Board) -> Option<Mark> {
    let squares = board.squares();
    for [a, b, c] in LINES {
        if let Square::Occupied(mark) = squares[a]
            && squares[b] == squares[a]
            && squares[c] == squares[a]
        {
            return Some(mark);
        }
    }
    None
}
