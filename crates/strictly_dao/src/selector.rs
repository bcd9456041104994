//! Two-click move selection for interactive front ends.
//!
//! A [`MoveSelector`] turns a "from" click and a "to" click into a single
//! engine move, tracking which step the player is on and whether the last
//! click was rejected.

use super::{Game, GameStatus, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Selection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// Waiting for the piece to move.
    SelectFrom,
    /// The last "from" click was rejected; the next click resets.
    ErrorAtFrom,
    /// Waiting for the destination.
    SelectTo,
    /// The last "to" click was rejected; the next click resets.
    ErrorAtTo,
    /// Both squares chosen; call [`MoveSelector::make_move`].
    ReadyToMove,
}

/// Selector operation called in the wrong phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SelectorError {
    /// `select` called while a move is waiting to be made.
    #[display("A move is ready; make it or reset before selecting again")]
    AlreadyReady,
    /// `make_move` called before both squares were chosen.
    #[display("No move is ready")]
    NotReady,
    /// The origin square has not been chosen.
    #[display("No origin square has been selected")]
    FromNotSelected,
    /// The destination square has not been chosen.
    #[display("No destination square has been selected")]
    ToNotSelected,
}

/// Sequences two selections into one move on the game it owns.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    game: Game,
    phase: Phase,
    invalid_selection: bool,
    from: Option<Position>,
    to: Option<Position>,
}

impl MoveSelector {
    /// Creates a selector bound to `game`.
    #[instrument(skip(game))]
    pub fn new(game: Game) -> Self {
        debug!("Move selector bound to game");
        Self {
            game,
            phase: Phase::SelectFrom,
            invalid_selection: false,
            from: None,
            to: None,
        }
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Releases the game.
    pub fn into_game(self) -> Game {
        self.game
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true when both squares are chosen.
    pub fn is_ready_to_move(&self) -> bool {
        self.phase == Phase::ReadyToMove
    }

    /// Returns true if the last selection was rejected.
    pub fn is_invalid_selection(&self) -> bool {
        self.invalid_selection
    }

    /// Handles a click on `position` according to the current phase.
    ///
    /// In either error phase the click only resets the selector; the
    /// position itself is not considered.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::AlreadyReady`] in [`Phase::ReadyToMove`].
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn select(&mut self, position: Position) -> Result<Phase, SelectorError> {
        match self.phase {
            Phase::SelectFrom => self.select_from(position),
            Phase::SelectTo => self.select_to(position),
            Phase::ReadyToMove => {
                warn!("Selection attempted while a move is ready");
                return Err(SelectorError::AlreadyReady);
            }
            Phase::ErrorAtFrom | Phase::ErrorAtTo => self.reset(),
        }
        Ok(self.phase)
    }

    fn select_from(&mut self, position: Position) {
        let player = self.game.current_player();
        if !self.game.is_empty(position) && self.game.is_correct_player(position, player) {
            self.from = Some(position);
            self.invalid_selection = false;
            self.phase = Phase::SelectTo;
            debug!(%position, "Origin selected");
        } else {
            warn!(%position, %player, "Invalid origin selection");
            self.invalid_selection = true;
            self.phase = Phase::ErrorAtFrom;
        }
    }

    fn select_to(&mut self, position: Position) {
        match self.from {
            Some(from) if self.game.can_move(from, position) => {
                self.to = Some(position);
                self.invalid_selection = false;
                self.phase = Phase::ReadyToMove;
                debug!(%from, to = %position, "Destination selected");
            }
            _ => {
                warn!(%position, "Invalid destination selection");
                self.invalid_selection = true;
                self.phase = Phase::ErrorAtTo;
            }
        }
    }

    /// The selected origin.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::FromNotSelected`] until an origin is accepted.
    pub fn from(&self) -> Result<Position, SelectorError> {
        self.from.ok_or(SelectorError::FromNotSelected)
    }

    /// The selected destination.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::ToNotSelected`] outside [`Phase::ReadyToMove`].
    pub fn to(&self) -> Result<Position, SelectorError> {
        match (self.phase, self.to) {
            (Phase::ReadyToMove, Some(to)) => Ok(to),
            _ => Err(SelectorError::ToNotSelected),
        }
    }

    /// Applies the selected move to the game and resets the selector.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::NotReady`] outside [`Phase::ReadyToMove`].
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn make_move(&mut self) -> Result<GameStatus, SelectorError> {
        let (from, to) = match (self.phase, self.from, self.to) {
            (Phase::ReadyToMove, Some(from), Some(to)) => (from, to),
            _ => {
                warn!("Move requested before both squares were selected");
                return Err(SelectorError::NotReady);
            }
        };
        let status = self.game.move_piece(from, to);
        info!(%from, %to, %status, "Selected move applied");
        self.reset();
        Ok(status)
    }

    /// Clears the selection and returns to [`Phase::SelectFrom`].
    pub fn reset(&mut self) {
        self.from = None;
        self.to = None;
        self.invalid_selection = false;
        self.phase = Phase::SelectFrom;
        debug!("Selection reset");
    }
}
