//! Finished-game records, their stores, and the leaderboard.

mod error;
mod models;
mod store;

pub use error::{ResultError, StoreError};
pub use models::{GameResult, GameResultBuilder, PlayerStatistics, best_players};
pub use store::{InMemoryResultStore, JsonResultStore, ResultStore};
