//! Negamax tic-tac-toe - CLI
//!
//! Plays a game between two configurable players, or solves a position.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use negamax_tictactoe::{Board, GameConfig, Mark, Orchestrator, PlayerKind, choose_move, evaluate};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            x,
            o,
            seed,
            no_color,
        } => run_game(config, x, o, seed, no_color),
        Command::Solve { board, mark } => run_solve(&board, mark.into()),
    }
}

/// Play one game with the configured players.
#[instrument]
fn run_game(
    config_path: Option<std::path::PathBuf>,
    x: Option<PlayerKind>,
    o: Option<PlayerKind>,
    seed: Option<u64>,
    no_color: bool,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(kind) = x {
        config = config.with_player_x(kind);
    }
    if let Some(kind) = o {
        config = config.with_player_o(kind);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if no_color {
        config = config.with_color(false);
    }

    let color = *config.color();
    // Two random players must not share a stream.
    let seed_o = config.seed().map(|s| s.wrapping_add(1));
    let player_x = config
        .player_x()
        .kind()
        .build(config.player_x().name(), *config.seed(), color);
    let player_o = config
        .player_o()
        .kind()
        .build(config.player_o().name(), seed_o, color);

    let mut orchestrator = Orchestrator::new(player_x, player_o, std::io::stdout()).with_color(color);
    let record = orchestrator.run()?;
    info!(outcome = %record.outcome(), moves = record.history().len(), "Game finished");
    Ok(())
}

/// Print the move the search picks for `mark` and the position's score.
#[instrument]
fn run_solve(board: &str, mark: Mark) -> Result<()> {
    let mut board: Board = board.parse().context("parsing board")?;
    let score = evaluate(&mut board, mark);
    match choose_move(&mut board, mark) {
        Some(pos) => {
            println!("{board}best move for {mark}: {pos} (score {score})");
        }
        None => {
            println!("{board}no move for {mark}: position is already decided");
        }
    }
    Ok(())
}
