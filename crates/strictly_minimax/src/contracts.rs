//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} play {Q}. Preconditions run before any mutation, so a rejected move
//! leaves the game untouched.

use super::action::MoveError;
use super::invariants::{GameInvariants, InvariantSet};
use super::{Coord, Game};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game has no outcome yet.
pub struct GameNotFinished;

impl GameNotFinished {
    /// Fails with [`MoveError::GameFinished`] once the game has ended.
    #[instrument(level = "trace", skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.outcome().is_finished() {
            Err(MoveError::GameFinished)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is on the board and empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with a range error or [`MoveError::CellOccupied`].
    #[instrument(level = "trace", skip(game))]
    pub fn check(coord: &Coord, game: &Game) -> Result<(), MoveError> {
        if game.board().get(coord.x, coord.y)?.is_empty() {
            Ok(())
        } else {
            Err(MoveError::CellOccupied {
                x: coord.x,
                y: coord.y,
            })
        }
    }
}

/// Contract for `Game::play`.
///
/// Preconditions:
/// - The game is not finished
/// - The cell is in range and empty
///
/// Postconditions:
/// - Exactly one history entry was pushed
/// - All engine invariants hold
pub struct PlayContract;

impl Contract<Game, Coord> for PlayContract {
    fn pre(game: &Game, coord: &Coord) -> Result<(), MoveError> {
        GameNotFinished::check(game)?;
        CellIsEmpty::check(coord, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: play must push exactly one history entry".to_string(),
            ));
        }
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Asserts that all engine invariants hold (debug builds only).
#[instrument(level = "trace", skip(game))]
pub fn assert_invariants(game: &Game) {
    if cfg!(debug_assertions)
        && let Err(violations) = GameInvariants::check_all(game)
    {
        warn!(?violations, "Engine invariants violated");
        panic!("Engine invariants violated: {:?}", violations);
    }
}
