//! Strictly Minimax - command-line driver
//!
//! Replays a position and asks the engine for its move, or lets the engine
//! play itself.

#![warn(missing_docs)]

mod cli;
mod config;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::MatchConfig;
use strictly_minimax::{Coord, search};
use tracing::instrument;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = MatchConfig::load(&cli.config)?;
    if let Some(size) = cli.size {
        config = config.with_board_size(size)?;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::BestMove { moves, json } => run_best_move(&config, &moves, json),
        Command::SelfPlay { json } => run_self_play(&config, json),
    }
}

/// Replay `moves` and print the engine's choice for the side to play
#[instrument(skip(config, moves))]
fn run_best_move(config: &MatchConfig, moves: &[Coord], json: bool) -> Result<()> {
    let mut game = session::replay(config, moves)?;
    session::warn_if_slow(&game);

    let report = search::analyze(&mut game)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", game.board());
        println!(
            "{} plays {} (score {})",
            game.current_player(),
            report.coord(),
            report.score()
        );
    }
    Ok(())
}

/// Let the engine play both sides and print the game
#[instrument(skip(config))]
fn run_self_play(config: &MatchConfig, json: bool) -> Result<()> {
    let summary = session::self_play(config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for (ply, record) in summary.history().iter().enumerate() {
            println!("{:>3}. {}", ply + 1, record);
        }
        println!("Result: {}", summary.outcome());
    }
    Ok(())
}
