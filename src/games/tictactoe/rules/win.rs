//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Square};

/// The eight index triples that win the game.
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

/// Returns true if `mark` occupies all three squares of any line.
///
/// Squares are compared against `mark` itself, so empty lines never count.
/// Called on every node of the search; keep it allocation-free.
pub fn is_win(board: &Board, mark: Mark) -> bool {
    let target = Square::Occupied(mark);
    LINES.iter().any(|line| {
        line.iter()
            .all(|&pos| board.square(pos) == target)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first mark found holding a line,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| is_win(board, mark))
}
