//! Game orchestration between players.

use crate::games::tictactoe::{Game, GameError, GameStatus, Mark, Move};
use crate::players::{Player, PlayerError};
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Outcome {
    /// A mark completed a line.
    #[display("{} wins", _0)]
    Winner(Mark),
    /// The board filled with no line.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

/// A finished game: how it ended and every move played.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct GameRecord {
    /// How the game ended.
    outcome: Outcome,
    /// Moves in the order they were played.
    history: Vec<Move>,
}

/// Anything that aborts a game.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum OrchestratorError {
    /// A player returned an illegal move.
    #[display("{}", _0)]
    Game(GameError),

    /// A player failed to produce a move.
    #[display("{}", _0)]
    Player(PlayerError),

    /// Writing the final board failed.
    #[display("Output error: {}", _0)]
    Output(std::io::Error),
}

impl std::error::Error for OrchestratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OrchestratorError::Game(err) => Some(err),
            OrchestratorError::Player(err) => Some(err),
            OrchestratorError::Output(err) => Some(err),
        }
    }
}

/// Orchestrates one game between two players, X first.
pub struct Orchestrator<W> {
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    output: W,
    color: bool,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator writing the final board to `output`.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>, output: W) -> Self {
        Self {
            player_x,
            player_o,
            output,
            color: false,
        }
    }

    /// Enables ANSI styling of the printed board.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Consumes the orchestrator, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the game loop to completion.
    ///
    /// Each player gets a fresh copy of the board, so nothing a player does
    /// to it reaches the board of record. An illegal move prints the board
    /// and aborts.
    #[instrument(skip(self), fields(x = self.player_x.name(), o = self.player_o.name()))]
    pub fn run(&mut self) -> Result<GameRecord, OrchestratorError> {
        info!("Starting game");
        let mut game = Game::new();

        loop {
            let mark = game.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = player.name(), %mark, "Waiting for move");
            let position = player.play(game.board().clone(), mark)?;

            let status = match game.make_move(position) {
                Ok(status) => status,
                Err(err) => {
                    warn!(player = player.name(), %err, "Illegal move, aborting game");
                    self.write_board(&game)?;
                    return Err(err.into());
                }
            };
            info!(player = player.name(), %mark, position, "Move made");

            let outcome = match status {
                GameStatus::InProgress { .. } => continue,
                GameStatus::Won(winner) => Outcome::Winner(winner),
                GameStatus::Draw => Outcome::Draw,
            };

            self.announce(&game, outcome)?;
            info!(%outcome, "Game over");
            return Ok(GameRecord {
                outcome,
                history: game.history().to_vec(),
            });
        }
    }

    fn write_board(&mut self, game: &Game) -> std::io::Result<()> {
        let rendered = if self.color {
            game.board().styled()
        } else {
            game.board().to_string()
        };
        write!(self.output, "{rendered}")
    }

    fn announce(&mut self, game: &Game, outcome: Outcome) -> std::io::Result<()> {
        match outcome {
            Outcome::Winner(mark) => {
                self.write_board(game)?;
                writeln!(self.output, "...and the winner is: {mark}")
            }
            Outcome::Draw => {
                self.write_board(game)?;
                writeln!(self.output, "it's a draw!")
            }
        }
    }
}
