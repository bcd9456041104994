//! Strictly Games - Dao from the command line.

#![warn(missing_docs)]

use anyhow::{Context, Result, bail};
use clap::Parser;
use strictly_dao::{GameStatus, Position};
use strictly_games::cli::{Cli, Command};
use strictly_games::{AppConfig, DaoSession, JsonResultStore, ResultStore};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = JsonResultStore::new(config.results_path());

    match cli.command {
        Command::Play {
            player1,
            player2,
            moves,
            dry_run,
        } => {
            let player1 = player1.unwrap_or_else(|| config.player1_name().clone());
            let player2 = player2.unwrap_or_else(|| config.player2_name().clone());
            run_play(&store, &player1, &player2, &moves, dry_run)
        }
        Command::Leaderboard { limit } => {
            run_leaderboard(&store, limit.unwrap_or(*config.leaderboard_limit()))
        }
        Command::Results => run_results(&store),
    }
}

/// Plays the moves in order and records a finished game.
#[instrument(skip(store, moves), fields(moves = moves.len()))]
fn run_play(
    store: &JsonResultStore,
    player1: &str,
    player2: &str,
    moves: &[(Position, Position)],
    dry_run: bool,
) -> Result<()> {
    let mut session = DaoSession::new(player1, player2);

    for (i, (from, to)) in moves.iter().enumerate() {
        if session.status().is_over() {
            warn!(remaining = moves.len() - i, "Game over, ignoring remaining moves");
            break;
        }
        let mover = session.current_player_name().to_string();
        let status = session
            .play_move(*from, *to)
            .with_context(|| format!("move {} by {}", i + 1, mover))?;
        println!("{}: {} -> {}", mover, from, to);
        if status.is_over() {
            break;
        }
    }

    println!();
    print!("{}", session.game().board());

    match session.status() {
        GameStatus::InProgress => {
            println!("Game in progress, {} to move", session.current_player_name());
        }
        status => {
            let winner = status
                .winner()
                .map(|p| session.player_name(p).to_string())
                .unwrap_or_default();
            println!("{} - {} wins", status, winner);
        }
    }

    if dry_run {
        info!("Dry run, result not recorded");
        return Ok(());
    }
    if let Some(results) = session.record(store)? {
        println!("Recorded game #{} in {}", results.len(), store.path().display());
    }
    Ok(())
}

/// Prints the top players.
#[instrument(skip(store))]
fn run_leaderboard(store: &JsonResultStore, limit: usize) -> Result<()> {
    if limit == 0 {
        bail!("limit must be > 0");
    }
    let rows = store.best_players(limit)?;
    if rows.is_empty() {
        println!("No games recorded yet");
    }
    for (rank, row) in rows.iter().enumerate() {
        println!("{:>3}. {}", rank + 1, row);
    }
    Ok(())
}

/// Prints every stored result.
#[instrument(skip(store))]
fn run_results(store: &JsonResultStore) -> Result<()> {
    let results = store.all()?;
    if results.is_empty() {
        println!("No games recorded yet");
    }
    for result in &results {
        println!(
            "{} vs {}: {} won in {} moves ({})",
            result.player1_name(),
            result.player2_name(),
            result.winner_name(),
            result.moves(),
            result.start_date_time().to_rfc3339()
        );
    }
    Ok(())
}
