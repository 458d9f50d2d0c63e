//! Core domain types for N×N tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
///
/// `X` is the maximizing side: its marks are worth `+1` and it moves first.
/// `O` is the minimizing side with marks worth `-1`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (maximizing, goes first).
    X,
    /// Player O (minimizing).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns true for the maximizing side.
    pub fn is_maximizing(self) -> bool {
        matches!(self, Player::X)
    }

    /// Maps the maximizing flag back to a player.
    pub fn from_maximizing(is_maximizing: bool) -> Self {
        if is_maximizing { Player::X } else { Player::O }
    }

    /// Numeric value of this player's mark in line sums.
    pub fn mark(self) -> i32 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Numeric value used by the line sums: `+1`, `-1` or `0`.
    pub fn value(self) -> i32 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(player) => player.mark(),
        }
    }

    /// Returns true if no mark is present.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A board coordinate: `x` is the row, `y` the column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Coord {
    /// Row index.
    pub x: usize,
    /// Column index.
    pub y: usize,
}

impl Coord {
    /// Creates a new coordinate.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_alternates() {
        for player in Player::iter() {
            assert_ne!(player, player.opponent());
            assert_eq!(player, player.opponent().opponent());
        }
    }

    #[test]
    fn test_marks_are_signed() {
        assert_eq!(Cell::Occupied(Player::X).value(), 1);
        assert_eq!(Cell::Occupied(Player::O).value(), -1);
        assert_eq!(Cell::Empty.value(), 0);
    }

    #[test]
    fn test_maximizing_flag_round_trips() {
        for player in Player::iter() {
            assert_eq!(Player::from_maximizing(player.is_maximizing()), player);
        }
    }

    #[test]
    fn test_coord_display() {
        assert_eq!(Coord::new(0, 2).to_string(), "(0, 2)");
    }

    #[test]
    fn test_coord_from_tuple() {
        assert_eq!(Coord::from((2, 1)), Coord::new(2, 1));
    }
}
