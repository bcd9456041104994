//! Properties every reachable Dao position satisfies.
//!
//! Each invariant is a zero-sized type checked against a [`Game`](crate::Game).
//! Tuples of invariants form an [`InvariantSet`] that reports every failure at
//! once; [`MoveContract`](crate::MoveContract) runs [`DaoInvariants`] after
//! each move in debug builds.

/// A property of a state `S`.
pub trait Invariant<S> {
    /// True if `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// What the property promises, reported on failure.
    fn description() -> &'static str;
}

/// A failed invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// The failed invariant's description.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several invariants checked as one.
pub trait InvariantSet<S> {
    /// Checks every member, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($member:ident),+) => {
        impl<S, $($member),+> InvariantSet<S> for ($($member,)+)
        where
            $($member: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<InvariantViolation> = [
                    $(($member::holds(state), $member::description()),)+
                ]
                .into_iter()
                .filter(|(holds, _)| !holds)
                .map(|(_, description)| InvariantViolation::new(description))
                .collect();
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(A);
impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);

pub mod alternating_turn;
pub mod history_consistent;
pub mod piece_conservation;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use piece_conservation::PieceConservationInvariant;

/// Everything checked after a Dao move.
pub type DaoInvariants = (
    PieceConservationInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::new();
        assert!(DaoInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = Game::new();
        game.make_move(Position::new(0, 0), Position::new(1, 0)).unwrap();
        game.make_move(Position::new(0, 3), Position::new(0, 1)).unwrap();
        assert!(DaoInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = Game::new();
        game.make_move(Position::new(0, 0), Position::new(1, 0)).unwrap();

        // Conjure an extra piece.
        game.board
            .set(Position::new(0, 1), Square::Occupied(Player::Two))
            .unwrap();

        let violations = DaoInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_single_invariant_as_set() {
        let mut game = Game::new();
        game.board.set(Position::new(0, 0), Square::Empty).unwrap();
        let violations = <(PieceConservationInvariant,)>::check_all(&game).unwrap_err();
        assert_eq!(violations[0].to_string(), PieceConservationInvariant::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::new();
        type TwoInvariants = (PieceConservationInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
