//! Board coordinates for Dao.

use super::direction::Direction;
use super::types::BOARD_SIZE;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A (row, col) coordinate.
///
/// Positions are plain values: construction never validates, so a position
/// may lie off the board. Consumers reject off-board positions with
/// [`Position::is_on_board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index, 0 at the top.
    pub row: i32,
    /// Column index, 0 at the left.
    pub col: i32,
}

impl Position {
    /// Creates a position.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns true if both coordinates fall inside the board.
    pub fn is_on_board(self) -> bool {
        let size = BOARD_SIZE as i32;
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }

    /// The position `steps` cells away in `direction`.
    pub fn offset(self, direction: Direction, steps: i32) -> Self {
        Self {
            row: self.row + direction.row_change() * steps,
            col: self.col + direction.col_change() * steps,
        }
    }

    /// Converts to array indices, or `None` when off the board.
    pub(crate) fn to_indices(self) -> Option<(usize, usize)> {
        self.is_on_board()
            .then_some((self.row as usize, self.col as usize))
    }

    /// All on-board positions in row-major order.
    #[instrument]
    pub fn all() -> Vec<Position> {
        let size = BOARD_SIZE as i32;
        (0..size)
            .flat_map(|row| (0..size).map(move |col| Position::new(row, col)))
            .collect()
    }

    /// The four corner positions: top-left, top-right, bottom-left, bottom-right.
    pub fn corners() -> [Position; 4] {
        let last = BOARD_SIZE as i32 - 1;
        [
            Position::new(0, 0),
            Position::new(0, last),
            Position::new(last, 0),
            Position::new(last, last),
        ]
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_board_bounds() {
        for row in -2..6 {
            for col in -2..6 {
                let expected = (0..4).contains(&row) && (0..4).contains(&col);
                assert_eq!(Position::new(row, col).is_on_board(), expected);
            }
        }
    }

    #[test]
    fn test_all_covers_board_once() {
        let all = Position::all();
        assert_eq!(all.len(), 16);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[15], Position::new(3, 3));
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), 16);
    }

    #[test]
    fn test_offset_follows_direction() {
        let p = Position::new(1, 1);
        assert_eq!(p.offset(Direction::DownRight, 2), Position::new(3, 3));
        assert_eq!(p.offset(Direction::Up, 1), Position::new(0, 1));
        assert_eq!(p.offset(Direction::Zero, 5), p);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 3).to_string(), "(2,3)");
    }
}
