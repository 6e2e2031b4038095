//! Exhaustive negamax search for the automated player.
//!
//! The whole game tree below the current position is explored with no
//! pruning and no transposition table; a 3x3 board has at most 9 plies.
//! Scores are from the perspective of the mark to move: `1` for a forced
//! win, `0` for a draw, `-1` for a forced loss.
//!
//! The board is mutated in place and every tentative placement is undone
//! before the next sibling is tried.

use super::rules::is_win;
use super::{Board, Mark};
use tracing::{debug, instrument};

/// Score of a position already lost by the mark to move.
pub const LOSS: i32 = -1;

/// Score of a finished position with no line.
pub const DRAW: i32 = 0;

/// Picks the best move for `mark` and plays it on `board`.
///
/// Ties between equally scored moves go to the lowest index. On `Some(pos)`,
/// `board` is the input board plus `mark` at `pos`.
///
/// Returns `None`, leaving the board untouched, when there is no move to
/// search: the board is full or `mark`'s opponent already holds a line.
#[instrument(level = "debug", skip(board), fields(empty = board.empty_count()))]
pub fn choose_move(board: &mut Board, mark: Mark) -> Option<usize> {
    if is_win(board, mark.opponent()) {
        return None;
    }

    let depth = board.empty_count();
    let mut best: Option<(usize, i32)> = None;

    for pos in 0..board.squares().len() {
        if !board.is_empty(pos) {
            continue;
        }
        board.place(pos, mark);
        let value = -score(board, mark.opponent(), depth - 1);
        board.clear(pos);

        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((pos, value));
        }
    }

    let (pos, value) = best?;
    board.place(pos, mark);
    debug!(position = pos, score = value, "Search chose move");
    Some(pos)
}

/// Negamax value of `board` for `mark`, the side to move.
///
/// The board is restored before returning.
pub fn evaluate(board: &mut Board, mark: Mark) -> i32 {
    let depth = board.empty_count();
    score(board, mark, depth)
}

fn score(board: &mut Board, mark: Mark, depth: usize) -> i32 {
    // A line can be completed on the last ply, so this runs before the depth check.
    if is_win(board, mark.opponent()) {
        return LOSS;
    }
    if depth == 0 {
        return DRAW;
    }

    let mut best = i32::MIN;
    for pos in 0..board.squares().len() {
        if !board.is_empty(pos) {
            continue;
        }
        board.place(pos, mark);
        let value = -score(board, mark.opponent(), depth - 1);
        board.clear(pos);
        best = best.max(value);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    #[test]
    fn test_takes_immediate_win() {
        let mut board: Board = "XX. OO. ...".parse().unwrap();
        assert_eq!(choose_move(&mut board, Mark::X), Some(2));
    }

    #[test]
    fn test_blocks_opponent() {
        let mut board: Board = "OO. X.. ...".parse().unwrap();
        assert_eq!(choose_move(&mut board, Mark::X), Some(2));
    }

    #[test]
    fn test_prefers_win_over_block() {
        // O can block at 2 or win at 5; winning comes first in score, not index.
        let mut board: Board = "XX. OO. X..".parse().unwrap();
        assert_eq!(choose_move(&mut board, Mark::O), Some(5));
    }

    #[test]
    fn test_single_empty_square() {
        let mut board: Board = "XOX XOO OX.".parse().unwrap();
        assert_eq!(choose_move(&mut board, Mark::X), Some(8));
        assert_eq!(board.get(8), Some(Square::Occupied(Mark::X)));
    }

    #[test]
    fn test_no_move_on_full_board() {
        let mut board: Board = "XOX XOO OXX".parse().unwrap();
        let before = board.clone();
        assert_eq!(choose_move(&mut board, Mark::O), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_no_move_when_opponent_already_won() {
        let mut board: Board = "XXX OO. ...".parse().unwrap();
        let before = board.clone();
        assert_eq!(choose_move(&mut board, Mark::O), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_evaluate_scores() {
        let mut lost: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(evaluate(&mut lost, Mark::O), LOSS);

        let mut winning: Board = "XX. OO. ...".parse().unwrap();
        assert_eq!(evaluate(&mut winning, Mark::X), 1);

        let mut drawn: Board = "XOX XOO OX.".parse().unwrap();
        assert_eq!(evaluate(&mut drawn, Mark::X), DRAW);
    }

    #[test]
    fn test_evaluate_restores_board() {
        let mut board: Board = "X.. .O. ...".parse().unwrap();
        let before = board.clone();
        evaluate(&mut board, Mark::X);
        assert_eq!(board, before);
    }
}
