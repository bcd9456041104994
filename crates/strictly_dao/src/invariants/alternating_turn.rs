//! Alternating turn invariant: players alternate, starting with the first player.

use super::super::Game;
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must alternate players starting with the first player, and
/// the player to move must be the next in that sequence.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != game.first_player()
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            game.first_player()
        } else {
            game.first_player().opponent()
        };

        game.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the first player"
    }
}
