//! Turn controller for tic-tac-toe.
//!
//! Owns the board of record and enforces strict alternation, starting with X.

use super::action::{GameError, Move};
use super::rules::{is_full, is_win};
use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing with this many moves played.
    InProgress {
        /// Moves applied so far.
        moves: usize,
    },
    /// Game ended with a completed line.
    Won(Mark),
    /// All nine squares filled with no line.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            status: GameStatus::InProgress { moves: 0 },
            history: Vec::new(),
        }
    }

    /// Returns the board of record.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Plays the mark to move at `pos` (0-8) and returns the new status.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn make_move(&mut self, pos: usize) -> Result<GameStatus, GameError> {
        let GameStatus::InProgress { moves } = self.status else {
            return Err(GameError::GameOver);
        };

        let mark = self.to_move;
        if !self.board.is_empty(pos) {
            return Err(GameError::IllegalMove {
                mark,
                position: pos,
            });
        }

        self.board.place(pos, mark);
        self.history.push(Move::new(mark, pos));
        debug!(position = pos, "Move applied");

        self.status = if is_win(&self.board, mark) {
            info!(winner = %mark, "Game won");
            GameStatus::Won(mark)
        } else if is_full(&self.board) {
            info!("Game drawn");
            GameStatus::Draw
        } else {
            self.to_move = mark.opponent();
            GameStatus::InProgress { moves: moves + 1 }
        };

        Ok(self.status)
    }

    /// Replays a sequence of board indices from a fresh game.
    #[instrument]
    pub fn replay(moves: &[usize]) -> Result<Self, GameError> {
        let mut game = Self::new();
        for &pos in moves {
            game.make_move(pos)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    #[test]
    fn test_alternates_starting_with_x() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Mark::X);
        assert_eq!(game.make_move(4), Ok(GameStatus::InProgress { moves: 1 }));
        assert_eq!(game.to_move(), Mark::O);
        assert_eq!(game.board().get(4), Some(Square::Occupied(Mark::X)));
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = Game::replay(&[4]).unwrap();
        assert_eq!(
            game.make_move(4),
            Err(GameError::IllegalMove {
                mark: Mark::O,
                position: 4
            })
        );
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut game = Game::new();
        assert_eq!(
            game.make_move(9),
            Err(GameError::IllegalMove {
                mark: Mark::X,
                position: 9
            })
        );
    }

    #[test]
    fn test_terminal_state_accepts_no_moves() {
        let mut game = Game::replay(&[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(game.status(), GameStatus::Won(Mark::X));
        assert!(game.status().is_over());
        assert_eq!(game.make_move(8), Err(GameError::GameOver));
    }

    #[test]
    fn test_ninth_move_without_line_is_draw() {
        let game = Game::replay(&[0, 4, 2, 1, 7, 6, 3, 5, 8]).unwrap();
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.history().len(), 9);
    }

    #[test]
    fn test_win_on_ninth_move_is_a_win() {
        // X completes the 2-4-6 diagonal with the last square.
        let game = Game::replay(&[0, 1, 2, 3, 4, 8, 5, 7, 6]).unwrap();
        assert_eq!(game.status(), GameStatus::Won(Mark::X));
    }
}
