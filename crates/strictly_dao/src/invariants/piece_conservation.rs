//! Piece conservation invariant: moves relocate pieces, never add or remove them.

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: each player keeps the number of pieces they started with.
pub struct PieceConservationInvariant;

impl Invariant<Game> for PieceConservationInvariant {
    fn holds(game: &Game) -> bool {
        [Player::One, Player::Two]
            .iter()
            .all(|p| game.board().count(*p) == game.starting_board().count(*p))
    }

    fn description() -> &'static str {
        "Piece counts match the starting board"
    }
}
