//! Aggregate invariant: cached line sums match the grid.

use super::super::Game;
use super::Invariant;

/// Invariant: every row sum, column sum, both diagonal sums and the empty
/// count equal their values recomputed by a full scan of the grid.
pub struct AggregatesConsistentInvariant;

impl Invariant<Game> for AggregatesConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        board.aggregates() == board.expected_aggregates()
    }

    fn description() -> &'static str {
        "Cached line sums and empty count match the grid"
    }
}
