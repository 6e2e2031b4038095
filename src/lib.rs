//! Negamax tic-tac-toe library
//!
//! Two interchangeable players alternate on a 3x3 board until one completes
//! a line or the board fills.
//!
//! # Architecture
//!
//! - **Games**: board model, win detection, turn controller and the
//!   exhaustive negamax search
//! - **Players**: one `Player` trait over human, perfect, first-empty and
//!   random opponents
//! - **Orchestrator**: the turn-alternation loop
//! - **Config**: TOML game configuration
//!
//! # Example
//!
//! ```
//! use negamax_tictactoe::{Board, Mark, choose_move};
//!
//! let mut board: Board = "XX. OO. ...".parse().unwrap();
//! assert_eq!(choose_move(&mut board, Mark::X), Some(2));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod orchestrator;
mod players;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, PlayerConfig};

// Crate-level exports - Orchestration
pub use orchestrator::{GameRecord, Orchestrator, OrchestratorError, Outcome};

// Crate-level exports - Players
pub use players::{
    FirstEmptyPlayer, HumanPlayer, PerfectPlayer, Player, PlayerError, PlayerKind, RandomPlayer,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, Board, BoardError, Game, GameError, GameStatus, Mark, Move, Position, Square,
    check_winner, choose_move, evaluate, is_full, is_win,
};

/// Win-line table and rule functions.
pub use games::tictactoe::rules;
