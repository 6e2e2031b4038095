//! Player trait and implementations.

mod first_empty;
mod human;
mod perfect;
mod random;

pub use first_empty::FirstEmptyPlayer;
pub use human::HumanPlayer;
pub use perfect::PerfectPlayer;
pub use random::RandomPlayer;

use crate::games::tictactoe::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Anything that can pick a square on a tic-tac-toe board.
///
/// Players receive their own copy of the board. The returned index is
/// validated by the turn controller, not by the player.
pub trait Player {
    /// Decides the next move for `mark`.
    ///
    /// Returns the position (0-8) to play, where 0 is top-left.
    fn play(&mut self, board: Board, mark: Mark) -> Result<usize, PlayerError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Error raised while a player picks a move. Always ends the game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlayerError {
    /// Human input was not an integer.
    #[display("Malformed input {:?}: expected a position 0-8", _0)]
    MalformedInput(String),

    /// Input stream ended before a move was read.
    #[display("Input closed before a move was entered")]
    InputClosed,

    /// Reading or writing the terminal failed.
    #[display("I/O error: {}", _0)]
    Io(String),

    /// The search found nothing to play (full or already lost board).
    #[display("No move available for {}", _0)]
    NoMove(Mark),
}

impl std::error::Error for PlayerError {}

impl From<std::io::Error> for PlayerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Kinds of player selectable from the CLI or config file.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PlayerKind {
    /// Reads moves from the terminal.
    Human,
    /// Exhaustive negamax search.
    Perfect,
    /// Plays the lowest empty square.
    FirstEmpty,
    /// Plays a random empty square.
    Random,
}

impl PlayerKind {
    /// Builds a player of this kind.
    ///
    /// `seed` only affects random players; `color` only affects how a human
    /// player's board is printed.
    #[instrument]
    pub fn build(self, name: &str, seed: Option<u64>, color: bool) -> Box<dyn Player> {
        match self {
            PlayerKind::Human => Box::new(HumanPlayer::stdio(name, color)),
            PlayerKind::Perfect => Box::new(PerfectPlayer::new(name)),
            PlayerKind::FirstEmpty => Box::new(FirstEmptyPlayer::new(name)),
            PlayerKind::Random => Box::new(match seed {
                Some(seed) => RandomPlayer::seeded(name, seed),
                None => RandomPlayer::from_entropy(name),
            }),
        }
    }
}
