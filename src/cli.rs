//! Command-line interface for negamax_tictactoe.

use negamax_tictactoe::{Mark, PlayerKind};
use clap::{Parser, Subcommand, ValueEnum};

/// Tic-tac-toe against an exhaustive negamax opponent
#[derive(Parser, Debug)]
#[command(name = "negamax_tictactoe")]
#[command(about = "Tic-tac-toe with a player that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Player for X (moves first)
        #[arg(long)]
        x: Option<PlayerKind>,

        /// Player for O
        #[arg(long)]
        o: Option<PlayerKind>,

        /// Seed for random players
        #[arg(long)]
        seed: Option<u64>,

        /// Print the board without ANSI styling
        #[arg(long)]
        no_color: bool,
    },

    /// Print the searched move and score for a position
    Solve {
        /// Nine cells of X, O, '.' or '_', row by row (e.g. "XX.OO....")
        board: String,

        /// Mark to move
        #[arg(long, value_enum, default_value_t = MarkArg::X)]
        mark: MarkArg,
    },
}

/// Mark selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkArg {
    /// Cross
    X,
    /// Circle
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}
