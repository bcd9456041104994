//! History consistency invariant: the board is the starting board plus its moves.

use super::super::{Board, Game};
use super::Invariant;

/// Invariant: replaying the move history onto the starting board
/// reproduces the current board.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed: Board = game.starting_board().clone();

        for mov in game.history() {
            if reconstructed.owner_of(mov.from) != Some(mov.player) {
                return false;
            }
            if !reconstructed.is_empty(mov.to) {
                return false;
            }
            if reconstructed.relocate(mov.from, mov.to).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board matches the starting board with history applied"
    }
}
