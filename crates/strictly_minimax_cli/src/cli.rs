//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_minimax::Coord;

/// Strictly Minimax - perfect-play tic-tac-toe engine
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Optimal moves for N×N tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to match configuration file
    #[arg(short, long, default_value = "strictly_minimax.toml", global = true)]
    pub config: PathBuf,

    /// Board size (overrides the configuration file)
    #[arg(long, global = true)]
    pub size: Option<usize>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay moves and report the engine's move for the side to play
    BestMove {
        /// Moves as `x,y` (row,column), played alternately
        #[arg(value_parser = parse_coord)]
        moves: Vec<Coord>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides until the game ends
    SelfPlay {
        /// Print the move history and outcome as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parses `x,y` into a coordinate.
pub fn parse_coord(s: &str) -> Result<Coord, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x: usize = x
        .trim()
        .parse()
        .map_err(|e| format!("invalid row `{x}`: {e}"))?;
    let y: usize = y
        .trim()
        .parse()
        .map_err(|e| format!("invalid column `{y}`: {e}"))?;
    Ok((x, y).into())
}
