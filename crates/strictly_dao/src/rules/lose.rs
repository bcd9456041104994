//! Corner-trap detection for Dao.
//!
//! A player who surrounds a corner they do not hold, filling the other three
//! cells of that corner's 2x2 block, loses.

use super::super::{Board, Player, Position};
use tracing::{debug, instrument};

/// Checks every corner for a trap built by `player`.
#[instrument(skip(board))]
pub fn is_corner_trapped(board: &Board, player: Player) -> bool {
    Position::corners()
        .into_iter()
        .any(|corner| traps_corner(board, corner, player))
}

/// `player` fills the three neighbours of `corner` without holding it.
pub fn traps_corner(board: &Board, corner: Position, player: Player) -> bool {
    // Step inward from whichever edge the corner sits on.
    let dr = if corner.row == 0 { 1 } else { -1 };
    let dc = if corner.col == 0 { 1 } else { -1 };

    let neighbours = [
        Position::new(corner.row, corner.col + dc),
        Position::new(corner.row + dr, corner.col),
        Position::new(corner.row + dr, corner.col + dc),
    ];

    let trapped = !board.is_owned_by(corner, player)
        && neighbours.iter().all(|p| board.is_owned_by(*p, player));
    if trapped {
        debug!(%corner, "Corner trapped");
    }
    trapped
}
