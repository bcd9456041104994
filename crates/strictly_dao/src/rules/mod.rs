//! Game rules for Dao.
//!
//! Pure functions over a [`Board`]. A move ends the game when the mover
//! completes a winning shape, or when the mover boxes in a corner they do
//! not hold. Winning shapes are checked first.

pub mod lose;
pub mod win;

pub use lose::is_corner_trapped;
pub use win::has_won;

use super::{Board, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// How a finished game ended, from the mover's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player completed a winning shape.
    Won(Player),
    /// The player trapped a corner and lost.
    Lost(Player),
}

impl Outcome {
    /// The player who takes the game.
    pub fn winner(&self) -> Player {
        match self {
            Outcome::Won(player) => *player,
            Outcome::Lost(player) => player.opponent(),
        }
    }

    /// The player who gives up the game.
    pub fn loser(&self) -> Player {
        self.winner().opponent()
    }
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won(player) => GameStatus::Won(player),
            Outcome::Lost(player) => GameStatus::Lost(player),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won(player) => write!(f, "{} wins", player),
            Outcome::Lost(player) => write!(f, "{} loses", player),
        }
    }
}

/// Evaluates the board for the player who just moved.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, mover: Player) -> Option<Outcome> {
    if has_won(board, mover) {
        info!(player = %mover, "Winning shape completed");
        Some(Outcome::Won(mover))
    } else if is_corner_trapped(board, mover) {
        info!(player = %mover, "Corner trapped by mover");
        Some(Outcome::Lost(mover))
    } else {
        None
    }
}
