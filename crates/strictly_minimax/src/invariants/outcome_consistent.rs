//! Outcome invariant: the cached outcome matches the board.

use super::super::{Game, rules};
use super::Invariant;

/// Invariant: the engine's outcome equals a fresh evaluation of its board.
pub struct OutcomeConsistentInvariant;

impl Invariant<Game> for OutcomeConsistentInvariant {
    fn holds(game: &Game) -> bool {
        game.outcome() == rules::evaluate(game.board())
    }

    fn description() -> &'static str {
        "Cached outcome matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Outcome;

    #[test]
    fn test_holds_after_win_and_undo() {
        let mut game = Game::new(3);
        for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(x, y).unwrap();
            assert!(OutcomeConsistentInvariant::holds(&game));
        }
        assert!(game.outcome().is_finished());

        game.undo();
        assert!(OutcomeConsistentInvariant::holds(&game));
        assert_eq!(game.outcome(), Outcome::Undecided);
    }

    #[test]
    fn test_stale_outcome_violates() {
        let mut game = Game::new(3);
        game.outcome = Outcome::Draw;
        assert!(!OutcomeConsistentInvariant::holds(&game));
    }
}
