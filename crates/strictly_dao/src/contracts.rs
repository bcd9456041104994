//! Pre- and postconditions around a Dao move.

use super::action::{Move, MoveError};
use super::invariants::{DaoInvariants, InvariantSet};
use super::Game;
use tracing::{instrument, warn};

/// Conditions an action `A` on state `S` must meet.
pub trait Contract<S, A> {
    /// Rejects `action` if it may not be applied to `state`.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Compares the states around an applied action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Guards [`Game::make_move`].
///
/// Before: the mover is on turn and [`Game::check_move`] accepts the slide.
/// After: history grew by one move and [`DaoInvariants`] hold.
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    #[instrument(skip(game))]
    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        if action.player != game.current_player() {
            return Err(MoveError::WrongPlayer(action.player));
        }
        game.check_move(action.from, action.to)
    }

    #[instrument(skip_all)]
    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        if after.move_count() != before.move_count() + 1 {
            warn!(
                before = before.move_count(),
                after = after.move_count(),
                "History did not grow by one move"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history did not grow by one move".to_string(),
            ));
        }

        DaoInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_precondition_legal_move() {
        let game = Game::new();
        let action = Move::new(Player::One, p(0, 0), p(0, 2));
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = Game::new();
        let action = Move::new(Player::Two, p(0, 3), p(0, 2));
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WrongPlayer(Player::Two))
        );
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = Game::new();
        let action = Move::new(Player::One, p(0, 0), p(0, 3));
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::SquareOccupied(_))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Game::new();
        let mut after = before.clone();
        after.move_piece(p(0, 0), p(0, 1));
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Game::new();
        let mut after = before.clone();
        after.move_piece(p(0, 0), p(0, 1));
        after.board.set(p(2, 2), Square::Empty).unwrap();
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_requires_a_move() {
        let before = Game::new();
        let after = before.clone();
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
