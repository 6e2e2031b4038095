//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// Mark placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Cross (moves first).
    #[display("X")]
    X,
    /// Circle (moves second).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// Errors raised by board access and parsing.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Index is not in `0..9`.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// Board text did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    CellCount(usize),

    /// Board text contained a character that is not a cell.
    #[display("Unknown cell character {:?}", _0)]
    UnknownCell(char),
}

impl std::error::Error for BoardError {}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
///
/// Not `Copy`: every board handed to a player is an explicit `clone()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_SIZE],
        }
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: usize, square: Square) -> Result<(), BoardError> {
        let slot = self
            .squares
            .get_mut(pos)
            .ok_or(BoardError::OutOfBounds(pos))?;
        *slot = square;
        Ok(())
    }

    /// Checks if a square is empty. Out-of-range positions are never empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }

    /// Indices of the empty squares, in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, sq)| **sq == Square::Empty)
            .map(|(pos, _)| pos)
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.empty_cells().count()
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|sq| **sq == Square::Occupied(mark))
            .count()
    }

    // Unchecked access for the search, which only ever indexes 0..9.
    pub(crate) fn place(&mut self, pos: usize, mark: Mark) {
        self.squares[pos] = Square::Occupied(mark);
    }

    pub(crate) fn clear(&mut self, pos: usize) {
        self.squares[pos] = Square::Empty;
    }

    pub(crate) fn square(&self, pos: usize) -> Square {
        self.squares[pos]
    }

    /// Formats the board with ANSI styling: bold marks, grey indices.
    pub fn styled(&self) -> String {
        self.render(|pos, sq| match sq {
            Square::Empty => format!("\x1b[37m{pos}\x1b[0m"),
            Square::Occupied(mark) => format!("\x1b[1m{mark}\x1b[0m"),
        })
    }

    fn render(&self, cell: impl Fn(usize, Square) -> String) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                result.push_str(&cell(pos, self.squares[pos]));
                if col < 2 {
                    result.push_str("  ");
                }
            }
            result.push('\n');
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plain = self.render(|pos, sq| match sq {
            Square::Empty => pos.to_string(),
            Square::Occupied(mark) => mark.to_string(),
        });
        f.write_str(&plain)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine cells of `X`, `O`, `.` or `_`, ignoring whitespace and `|`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Ok(Square::Occupied(Mark::X)),
                'O' => Ok(Square::Occupied(Mark::O)),
                '.' | '_' => Ok(Square::Empty),
                other => Err(BoardError::UnknownCell(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; BOARD_SIZE] = cells
            .try_into()
            .map_err(|cells: Vec<Square>| BoardError::CellCount(cells.len()))?;
        Ok(Self { squares })
    }
}
