//! Game result records and leaderboard rows.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::results::ResultError;

/// A finished game.
///
/// Serialized with camelCase keys (`player1Name`, `startDateTime`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    player1_name: String,
    player2_name: String,
    winner_name: String,
    moves: u32,
    start_date_time: DateTime<Utc>,
}

impl GameResult {
    /// Starts building a result.
    pub fn builder() -> GameResultBuilder {
        GameResultBuilder::default()
    }
}

/// Builder for [`GameResult`]; every field but `moves` is required.
#[derive(Debug, Clone, Default, Setters)]
#[setters(into, strip_option)]
pub struct GameResultBuilder {
    player1_name: Option<String>,
    player2_name: Option<String>,
    winner_name: Option<String>,
    moves: u32,
    start_date_time: Option<DateTime<Utc>>,
}

impl GameResultBuilder {
    /// Builds the result.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError`] naming the first missing field.
    #[instrument(skip(self))]
    pub fn build(self) -> Result<GameResult, ResultError> {
        let player1_name = self
            .player1_name
            .ok_or_else(|| ResultError::new("player1Name is required"))?;
        let player2_name = self
            .player2_name
            .ok_or_else(|| ResultError::new("player2Name is required"))?;
        let winner_name = self
            .winner_name
            .ok_or_else(|| ResultError::new("winnerName is required"))?;
        let start_date_time = self
            .start_date_time
            .ok_or_else(|| ResultError::new("startDateTime is required"))?;

        Ok(GameResult::new(
            player1_name,
            player2_name,
            winner_name,
            self.moves,
            start_date_time,
        ))
    }
}

/// A leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatistics {
    winner_name: String,
    number_of_wins: u64,
}

impl std::fmt::Display for PlayerStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.winner_name, self.number_of_wins)
    }
}

/// Ranks winners by number of wins, keeping at most `limit` rows.
///
/// Players with equal wins keep the order in which their first win appears.
#[instrument(skip(results), fields(results = results.len()))]
pub fn best_players(results: &[GameResult], limit: usize) -> Vec<PlayerStatistics> {
    let mut rows: Vec<PlayerStatistics> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for result in results {
        match index.get(result.winner_name.as_str()) {
            Some(&i) => rows[i].number_of_wins += 1,
            None => {
                index.insert(result.winner_name.as_str(), rows.len());
                rows.push(PlayerStatistics::new(result.winner_name.clone(), 1));
            }
        }
    }

    rows.sort_by(|a, b| b.number_of_wins.cmp(&a.number_of_wins));
    rows.truncate(limit);
    debug!(rows = rows.len(), "Leaderboard computed");
    rows
}
