//! First-class action types for Dao.
//!
//! A move slides one piece along a straight line. Moves are domain events:
//! they can be validated before application, stored in history and replayed.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in Dao: a player sliding a piece from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Square the piece leaves.
    pub from: Position,
    /// Square the piece lands on.
    pub to: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, from: Position, to: Position) -> Self {
        Self { player, from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} -> {}", self.player, self.from, self.to)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game has already been decided.
    #[display("Game is already over")]
    GameOver,

    /// A position lies outside the board.
    #[display("Position {} is off the board", _0)]
    OffBoard(Position),

    /// There is no piece to move.
    #[display("Square {} is empty", _0)]
    EmptySquare(Position),

    /// The piece belongs to the other player.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The destination already holds a piece.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// Source and destination are not on one straight or diagonal line.
    #[display("{} -> {} is not a straight line", from, to)]
    NotStraightLine {
        /// Origin square.
        from: Position,
        /// Requested destination.
        to: Position,
    },

    /// A piece stands in the way.
    #[display("Path from {} is blocked at {}", from, at)]
    Blocked {
        /// Origin square.
        from: Position,
        /// First occupied square on the path.
        at: Position,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
