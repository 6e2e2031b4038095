//! Valid but weak player for testing.

use super::{Player, PlayerError};
use crate::games::tictactoe::{Board, Mark};
use tracing::debug;

/// Always plays as far top-left as possible.
#[derive(Debug, Clone)]
pub struct FirstEmptyPlayer {
    name: String,
}

impl FirstEmptyPlayer {
    /// Creates a new first-empty player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for FirstEmptyPlayer {
    fn play(&mut self, board: Board, mark: Mark) -> Result<usize, PlayerError> {
        let pos = board
            .empty_cells()
            .next()
            .ok_or(PlayerError::NoMove(mark))?;
        debug!(player = %self.name, position = pos, "Chose first empty square");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
