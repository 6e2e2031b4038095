//! Human player that reads moves from a terminal.

use super::{Player, PlayerError};
use crate::games::tictactoe::{Board, Mark};
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};
use tracing::{debug, warn};

/// Human player: prints the board, reads one line, parses one integer.
///
/// There is no re-prompt. Anything that does not parse ends the game.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
    color: bool,
}

impl HumanPlayer<BufReader<Stdin>, Stdout> {
    /// Creates a human player on stdin/stdout.
    pub fn stdio(name: impl Into<String>, color: bool) -> Self {
        Self::new(
            name,
            BufReader::new(std::io::stdin()),
            std::io::stdout(),
            color,
        )
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a human player over arbitrary input and output streams.
    pub fn new(name: impl Into<String>, input: R, output: W, color: bool) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            color,
        }
    }

    /// Consumes the player, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn play(&mut self, board: Board, mark: Mark) -> Result<usize, PlayerError> {
        let rendered = if self.color {
            board.styled()
        } else {
            board.to_string()
        };
        write!(
            self.output,
            "{rendered}where to put the next {mark}? (0-8): "
        )?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PlayerError::InputClosed);
        }

        let pos = line.trim().parse::<usize>().map_err(|_| {
            warn!(player = %self.name, input = line.trim(), "Unparseable move");
            PlayerError::MalformedInput(line.trim().to_string())
        })?;
        debug!(player = %self.name, position = pos, "Human entered move");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
