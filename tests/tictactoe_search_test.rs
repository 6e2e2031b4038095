//! Tests for the negamax search.

use negamax_tictactoe::{Board, Game, GameStatus, Mark, Square, check_winner, choose_move};
use std::collections::HashSet;

/// Every position reachable by legal play that is still undecided.
fn open_positions() -> Vec<(Board, Mark)> {
    fn walk(game: &Game, seen: &mut HashSet<Board>, out: &mut Vec<(Board, Mark)>) {
        if !seen.insert(game.board().clone()) {
            return;
        }
        out.push((game.board().clone(), game.to_move()));
        for pos in game.board().empty_cells() {
            let mut next = game.clone();
            if let Ok(GameStatus::InProgress { .. }) = next.make_move(pos) {
                walk(&next, seen, out);
            }
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(&Game::new(), &mut seen, &mut out);
    out
}

#[test]
fn test_search_plays_legal_move_and_restores_board() {
    for (board, mark) in open_positions() {
        // Skip the widest trees; they are covered by the self-play tests.
        if board.empty_count() > 7 {
            continue;
        }
        let mut searched = board.clone();
        let pos = choose_move(&mut searched, mark).expect("open position has a move");

        assert!(board.is_empty(pos), "{pos} occupied in\n{board}");
        assert_eq!(searched.empty_count(), board.empty_count() - 1);
        assert_eq!(searched.get(pos), Some(Square::Occupied(mark)));
        for other in (0..9).filter(|&i| i != pos) {
            assert_eq!(searched.get(other), board.get(other));
        }
    }
}

#[test]
fn test_immediate_win_taken() {
    let mut board: Board = "XX. OO. ...".parse().unwrap();
    assert_eq!(choose_move(&mut board, Mark::X), Some(2));
    assert_eq!(check_winner(&board), Some(Mark::X));
}

#[test]
fn test_opponent_threat_blocked() {
    let mut board: Board = "OO. X.. ...".parse().unwrap();
    assert_eq!(choose_move(&mut board, Mark::X), Some(2));
}

#[test]
fn test_earliest_index_wins_ties() {
    // Against a center opening the corners draw and the edges lose,
    // so the lowest drawing corner is picked.
    let mut board: Board = "... .X. ...".parse().unwrap();
    assert_eq!(choose_move(&mut board, Mark::O), Some(0));
}

#[test]
fn test_empty_board_opening() {
    // Every opening draws, so the first index is chosen.
    let mut board = Board::new();
    assert_eq!(choose_move(&mut board, Mark::X), Some(0));
}
