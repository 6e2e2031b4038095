//! Player that picks uniformly among the empty squares.

use super::{Player, PlayerError};
use crate::games::tictactoe::{Board, Mark};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;
use tracing::debug;

/// Random opponent with its own RNG.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    rng: SmallRng,
}

impl RandomPlayer {
    /// Creates a random player with a fixed seed, for reproducible games.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Creates a random player seeded from the OS.
    pub fn from_entropy(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: SmallRng::from_entropy(),
        }
    }
}

impl Player for RandomPlayer {
    fn play(&mut self, board: Board, mark: Mark) -> Result<usize, PlayerError> {
        let pos = board
            .empty_cells()
            .choose(&mut self.rng)
            .ok_or(PlayerError::NoMove(mark))?;
        debug!(player = %self.name, position = pos, "Chose random square");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
