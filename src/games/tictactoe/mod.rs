//! Tic-tac-toe: board model, rules, turn controller and search.

mod action;
mod game;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use action::{GameError, Move};
pub use game::{Game, GameStatus};
pub use position::Position;
pub use rules::{check_winner, is_full, is_win};
pub use search::{choose_move, evaluate};
pub use types::{BOARD_SIZE, Board, BoardError, Mark, Square};
