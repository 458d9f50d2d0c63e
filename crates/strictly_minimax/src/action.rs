//! Move records and move errors.
//!
//! Every applied move leaves a [`MoveRecord`] on the game's history stack
//! holding what the move overwrote, so undo can restore it exactly.

use super::board::BoardError;
use super::{Coord, Outcome, Player};
use serde::{Deserialize, Serialize};

/// A played move together with the state it replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Whose turn it was before the move; this player made the mark.
    pub prior_turn: Player,
    /// Outcome before the move.
    pub prior_outcome: Outcome,
    /// Where the mark went.
    pub coord: Coord,
}

impl MoveRecord {
    /// Creates a new record.
    pub fn new(prior_turn: Player, prior_outcome: Outcome, coord: Coord) -> Self {
        Self {
            prior_turn,
            prior_outcome,
            coord,
        }
    }

    /// Whether the game was already finished before the move.
    pub fn prior_terminal(&self) -> bool {
        self.prior_outcome.is_finished()
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.prior_turn, self.coord)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already has an outcome.
    #[display("The game already finished")]
    GameFinished,

    /// The target cell holds a mark.
    #[display("Cell ({x}, {y}) is not empty")]
    CellOccupied {
        /// Row.
        x: usize,
        /// Column.
        y: usize,
    },

    /// The board rejected the coordinate.
    #[display("{_0}")]
    Board(BoardError),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        MoveError::Board(err)
    }
}
