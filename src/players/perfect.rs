//! Automated player backed by the negamax search.

use super::{Player, PlayerError};
use crate::games::tictactoe::{Board, Mark, choose_move};
use tracing::debug;

/// Never loses: searches the full game tree for every move.
#[derive(Debug, Clone)]
pub struct PerfectPlayer {
    name: String,
}

impl PerfectPlayer {
    /// Creates a new perfect player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for PerfectPlayer {
    fn play(&mut self, mut board: Board, mark: Mark) -> Result<usize, PlayerError> {
        debug!(player = %self.name, %mark, "Searching for move");
        choose_move(&mut board, mark).ok_or(PlayerError::NoMove(mark))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
