//! Game outcome.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Result of a position: still open, won by a player, or drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and empty cells remain.
    #[default]
    Undecided,
    /// A player filled a whole line.
    Won(Player),
    /// The board is full without a complete line.
    Draw,
}

impl Outcome {
    /// Returns true once the game has ended.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::Undecided | Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Search score: `+1` when X won, `-1` when O won, `0` otherwise.
    ///
    /// Only meaningful for finished games.
    pub fn score(&self) -> i32 {
        match self {
            Outcome::Won(player) => player.mark(),
            Outcome::Undecided | Outcome::Draw => 0,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "Undecided"),
            Outcome::Won(player) => write!(f, "Player {player} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
