//! A named Dao match between two players.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use strictly_dao::{
    Game, GameStatus, MoveError, MoveSelector, Phase, Player, Position, SelectorError,
};
use tracing::{debug, info, instrument, warn};

use crate::results::{GameResult, ResultStore, StoreError};

/// A move that could not be played.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PlayError {
    /// The selector was driven out of order.
    #[display("Selection error: {}", _0)]
    Selector(SelectorError),
    /// The engine refused the move.
    #[display("Move {} -> {} rejected: {}", from, to, reason)]
    #[from(ignore)]
    Rejected {
        /// Origin square.
        from: Position,
        /// Destination square.
        to: Position,
        /// Why the engine refused it.
        reason: MoveError,
    },
}

/// One game between two named players.
///
/// Owns the engine through a [`MoveSelector`] and remembers when it started,
/// so a finished game can be turned into a [`GameResult`].
#[derive(Debug, Clone, Getters)]
pub struct DaoSession {
    player1_name: String,
    player2_name: String,
    started_at: DateTime<Utc>,
    #[getter(skip)]
    selector: MoveSelector,
    #[getter(skip)]
    recorded: bool,
}

impl DaoSession {
    /// Starts a new game on the standard board.
    #[instrument(
        skip_all,
        fields(player1 = %player1_name.as_ref(), player2 = %player2_name.as_ref())
    )]
    pub fn new(player1_name: impl AsRef<str>, player2_name: impl AsRef<str>) -> Self {
        Self::with_game(player1_name, player2_name, Game::new())
    }

    /// Wraps an existing game.
    pub fn with_game(
        player1_name: impl AsRef<str>,
        player2_name: impl AsRef<str>,
        game: Game,
    ) -> Self {
        info!("Starting Dao session");
        Self {
            player1_name: player1_name.as_ref().to_string(),
            player2_name: player2_name.as_ref().to_string(),
            started_at: Utc::now(),
            selector: MoveSelector::new(game),
            recorded: false,
        }
    }

    /// The underlying game.
    pub fn game(&self) -> &Game {
        self.selector.game()
    }

    /// Current selection phase.
    pub fn phase(&self) -> Phase {
        self.selector.phase()
    }

    /// Forwards a click to the selector.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::AlreadyReady`] while a move is waiting.
    pub fn select(&mut self, position: Position) -> Result<Phase, SelectorError> {
        self.selector.select(position)
    }

    /// Plays the selected move.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::NotReady`] unless both squares are selected.
    pub fn make_move(&mut self) -> Result<GameStatus, SelectorError> {
        self.selector.make_move()
    }

    /// Plays `from -> to` as two selections followed by a move.
    ///
    /// Any pending selection is discarded first.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::Rejected`] with the engine's reason when the move
    /// is illegal.
    #[instrument(skip(self))]
    pub fn play_move(&mut self, from: Position, to: Position) -> Result<GameStatus, PlayError> {
        if self.selector.phase() != Phase::SelectFrom {
            debug!(phase = %self.selector.phase(), "Discarding pending selection");
            self.selector.reset();
        }
        if let Err(reason) = self.game().check_move(from, to) {
            warn!(%from, %to, error = %reason, "Move rejected");
            return Err(PlayError::Rejected { from, to, reason });
        }
        self.selector.select(from)?;
        self.selector.select(to)?;
        Ok(self.selector.make_move()?)
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.game().status()
    }

    /// Name of the player to move.
    pub fn current_player_name(&self) -> &str {
        self.player_name(self.game().current_player())
    }

    /// Name of the given side.
    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player1_name,
            Player::Two => &self.player2_name,
        }
    }

    /// The result of a finished game, or `None` while it is in progress.
    #[instrument(skip(self))]
    pub fn result(&self) -> Option<GameResult> {
        let winner = self.status().winner()?;
        let moves = u32::try_from(self.game().move_count()).unwrap_or(u32::MAX);
        GameResult::builder()
            .player1_name(self.player1_name.as_str())
            .player2_name(self.player2_name.as_str())
            .winner_name(self.player_name(winner))
            .moves(moves)
            .start_date_time(self.started_at)
            .build()
            .inspect_err(|e| warn!(error = %e, "Could not build result"))
            .ok()
    }

    /// Stores the result once the game is over.
    ///
    /// Returns the stored results after appending, or `None` if the game is
    /// still running or was already recorded.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be written.
    #[instrument(skip_all)]
    pub fn record<S: ResultStore + ?Sized>(
        &mut self,
        store: &S,
    ) -> Result<Option<Vec<GameResult>>, StoreError> {
        if self.recorded {
            debug!("Result already recorded");
            return Ok(None);
        }
        let Some(result) = self.result() else {
            debug!("Game still in progress, nothing to record");
            return Ok(None);
        };
        let results = store.add(result)?;
        self.recorded = true;
        info!(total = results.len(), "Game result recorded");
        Ok(Some(results))
    }
}
