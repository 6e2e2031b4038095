//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They carry the mark and the
//! square, and are kept in the game history for replay and logging.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Board index (0-8).
    pub position: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: usize) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match Position::from_index(self.position) {
            Some(pos) => write!(f, "{} -> {}", self.mark, pos.label()),
            None => write!(f, "{} -> {}", self.mark, self.position),
        }
    }
}

/// Error raised by the turn controller.
///
/// Both variants end the game; nothing is retried or clamped.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Index out of range or square already occupied.
    #[display("cannot play {} to position {}", mark, position)]
    IllegalMove {
        /// Mark that attempted the move.
        mark: Mark,
        /// Requested index.
        position: usize,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for GameError {}
