//! The eight lines of movement plus a no-movement sentinel.

use super::position::Position;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// A compass direction with unit row/column deltas.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Direction {
    /// No movement.
    Zero,
    /// Towards row 0.
    Up,
    /// Up and right.
    UpRight,
    /// Towards the last column.
    Right,
    /// Down and right.
    DownRight,
    /// Towards the last row.
    Down,
    /// Down and left.
    DownLeft,
    /// Towards column 0.
    Left,
    /// Up and left.
    UpLeft,
}

/// Raised when a delta pair names no direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("No direction has deltas ({row_change}, {col_change})")]
pub struct DirectionError {
    /// Requested row delta.
    pub row_change: i32,
    /// Requested column delta.
    pub col_change: i32,
}

impl Direction {
    /// Change in row when stepping once in this direction.
    pub const fn row_change(self) -> i32 {
        match self {
            Direction::Zero | Direction::Left | Direction::Right => 0,
            Direction::Up | Direction::UpRight | Direction::UpLeft => -1,
            Direction::Down | Direction::DownRight | Direction::DownLeft => 1,
        }
    }

    /// Change in column when stepping once in this direction.
    pub const fn col_change(self) -> i32 {
        match self {
            Direction::Zero | Direction::Up | Direction::Down => 0,
            Direction::Left | Direction::UpLeft | Direction::DownLeft => -1,
            Direction::Right | Direction::UpRight | Direction::DownRight => 1,
        }
    }

    /// Resolves a pair of unit deltas to a direction.
    ///
    /// # Errors
    ///
    /// Returns [`DirectionError`] unless both deltas are in `{-1, 0, 1}`.
    #[instrument]
    pub fn of(row_change: i32, col_change: i32) -> Result<Self, DirectionError> {
        match Self::iter()
            .find(|d| d.row_change() == row_change && d.col_change() == col_change)
        {
            Some(direction) => Ok(direction),
            None => {
                warn!(row_change, col_change, "Delta pair matches no direction");
                Err(DirectionError {
                    row_change,
                    col_change,
                })
            }
        }
    }

    /// Direction and distance of a straight Dao line from `from` to `to`.
    ///
    /// Returns `None` when the displacement is zero, is not horizontal,
    /// vertical or an exact diagonal, or does not fit in an `i32`.
    #[instrument]
    pub fn between(from: Position, to: Position) -> Option<(Direction, i32)> {
        let dr = to.row.checked_sub(from.row)?;
        let dc = to.col.checked_sub(from.col)?;
        let row_steps = dr.checked_abs()?;
        let col_steps = dc.checked_abs()?;
        let length = row_steps.max(col_steps);

        if length == 0 {
            debug!("Zero displacement");
            return None;
        }
        if dr != 0 && dc != 0 && row_steps != col_steps {
            debug!(dr, dc, "Displacement is not a straight line");
            return None;
        }

        // Every remaining displacement divides evenly into unit steps.
        Self::of(dr.signum(), dc.signum())
            .ok()
            .map(|direction| (direction, length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_resolves_every_direction() {
        for direction in Direction::iter() {
            let resolved = Direction::of(direction.row_change(), direction.col_change());
            assert_eq!(resolved, Ok(direction));
        }
    }

    #[test]
    fn test_of_rejects_non_unit_deltas() {
        assert!(Direction::of(2, 0).is_err());
        assert!(Direction::of(1, 2).is_err());
        assert_eq!(
            Direction::of(-3, 1),
            Err(DirectionError {
                row_change: -3,
                col_change: 1
            })
        );
    }

    #[test]
    fn test_between_straight_lines() {
        let origin = Position::new(0, 0);
        assert_eq!(
            Direction::between(origin, Position::new(0, 3)),
            Some((Direction::Right, 3))
        );
        assert_eq!(
            Direction::between(origin, Position::new(2, 0)),
            Some((Direction::Down, 2))
        );
        assert_eq!(
            Direction::between(origin, Position::new(3, 3)),
            Some((Direction::DownRight, 3))
        );
        assert_eq!(
            Direction::between(Position::new(3, 0), Position::new(1, 2)),
            Some((Direction::UpRight, 2))
        );
    }

    #[test]
    fn test_between_rejects_bent_and_zero_moves() {
        let origin = Position::new(0, 0);
        assert_eq!(Direction::between(origin, origin), None);
        assert_eq!(Direction::between(origin, Position::new(1, 2)), None);
        assert_eq!(Direction::between(origin, Position::new(2, 4)), None);
    }

    #[test]
    fn test_between_extreme_coordinates() {
        assert_eq!(
            Direction::between(Position::new(-5, 0), Position::new(i32::MAX, 0)),
            None
        );
        assert_eq!(
            Direction::between(Position::new(0, i32::MIN), Position::new(0, 1)),
            None
        );
        assert_eq!(
            Direction::between(Position::new(0, 0), Position::new(i32::MIN, 0)),
            None
        );
        assert_eq!(
            Direction::between(Position::new(0, 0), Position::new(i32::MAX, i32::MAX)),
            Some((Direction::DownRight, i32::MAX))
        );
    }
}
