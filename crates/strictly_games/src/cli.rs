//! Command-line interface for strictly_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_dao::Position;

/// Strictly Games - Dao with a persistent leaderboard
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Play Dao and keep score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "dao.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game from a list of moves
    Play {
        /// Name of the first player (defaults to the configured name)
        #[arg(long)]
        player1: Option<String>,

        /// Name of the second player (defaults to the configured name)
        #[arg(long)]
        player2: Option<String>,

        /// Moves written as `row,col:row,col`
        #[arg(value_parser = parse_move, required = true)]
        moves: Vec<(Position, Position)>,

        /// Do not record the result
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the players with the most wins
    Leaderboard {
        /// Number of rows (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List every stored result
    Results,
}

/// Parses `row,col`.
///
/// # Errors
///
/// Returns a message naming the malformed part.
pub fn parse_position(s: &str) -> Result<Position, String> {
    let (row, col) = s
        .trim()
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{}`", s))?;
    let row = row
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid row `{}`: {}", row, e))?;
    let col = col
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid column `{}`: {}", col, e))?;
    Ok(Position::new(row, col))
}

/// Parses `row,col:row,col` into an origin and destination.
///
/// # Errors
///
/// Returns a message naming the malformed part.
pub fn parse_move(s: &str) -> Result<(Position, Position), String> {
    let (from, to) = s
        .split_once(':')
        .ok_or_else(|| format!("expected `row,col:row,col`, got `{}`", s))?;
    Ok((parse_position(from)?, parse_position(to)?))
}
