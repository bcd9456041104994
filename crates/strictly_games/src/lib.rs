//! Strictly Games - Dao sessions, result persistence and leaderboard.
//!
//! Builds on the pure engine in [`strictly_dao`]: a [`DaoSession`] attaches
//! player names to a game and, once it ends, turns it into a [`GameResult`]
//! that a [`ResultStore`] keeps for the leaderboard.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
pub mod results;
mod session;

pub use config::{AppConfig, ConfigError};
pub use results::{
    GameResult, GameResultBuilder, InMemoryResultStore, JsonResultStore, PlayerStatistics,
    ResultError, ResultStore, StoreError, best_players,
};
pub use session::{DaoSession, PlayError};
