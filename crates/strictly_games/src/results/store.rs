//! Result stores: where finished games are kept.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::results::{GameResult, PlayerStatistics, StoreError, best_players};

/// Persistence for finished games.
pub trait ResultStore {
    /// Appends a result and returns every stored result, the new one last.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read or written.
    fn add(&self, result: GameResult) -> Result<Vec<GameResult>, StoreError>;

    /// Returns every stored result in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read.
    fn all(&self) -> Result<Vec<GameResult>, StoreError>;

    /// The top `limit` players by number of wins.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read.
    fn best_players(&self, limit: usize) -> Result<Vec<PlayerStatistics>, StoreError> {
        Ok(best_players(&self.all()?, limit))
    }
}

/// Stores results as one JSON array in a file.
///
/// Every `add` reads the whole array, appends, and rewrites the file.
#[derive(Debug, Clone)]
pub struct JsonResultStore {
    path: PathBuf,
}

impl JsonResultStore {
    /// Creates a store backed by the file at `path`; the file need not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        info!("Creating JsonResultStore");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultStore for JsonResultStore {
    #[instrument(
        skip(self, result),
        fields(path = %self.path.display(), winner = %result.winner_name())
    )]
    fn add(&self, result: GameResult) -> Result<Vec<GameResult>, StoreError> {
        let mut results = self.all()?;
        results.push(result);

        debug!("Writing game results into file");
        let json = serde_json::to_string_pretty(&results)?;
        std::fs::write(&self.path, json)?;

        info!(count = results.len(), "Game result recorded");
        Ok(results)
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn all(&self) -> Result<Vec<GameResult>, StoreError> {
        if !self.path.exists() {
            debug!("Results file missing; starting empty");
            return Ok(Vec::new());
        }

        debug!("Reading game results from file");
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let results: Vec<GameResult> = serde_json::from_str(&content)?;
        debug!(count = results.len(), "Game results loaded");
        Ok(results)
    }
}

/// Keeps results in memory; nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryResultStore {
    results: Mutex<Vec<GameResult>>,
}

impl InMemoryResultStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `results`.
    pub fn with_results(results: Vec<GameResult>) -> Self {
        Self {
            results: Mutex::new(results),
        }
    }
}

impl ResultStore for InMemoryResultStore {
    #[instrument(skip(self, result), fields(winner = %result.winner_name()))]
    fn add(&self, result: GameResult) -> Result<Vec<GameResult>, StoreError> {
        let mut results = self
            .results
            .lock()
            .map_err(|_| StoreError::new("Result store lock poisoned"))?;
        results.push(result);
        info!(count = results.len(), "Game result recorded");
        Ok(results.clone())
    }

    #[instrument(skip(self))]
    fn all(&self) -> Result<Vec<GameResult>, StoreError> {
        let results = self
            .results
            .lock()
            .map_err(|_| StoreError::new("Result store lock poisoned"))?;
        Ok(results.clone())
    }
}
