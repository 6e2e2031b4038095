//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board. They are separated from board storage so
//! the turn controller and the search can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, is_win};
