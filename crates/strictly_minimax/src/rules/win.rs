//! Win detection from line sums.

use super::super::{Board, Player};
use tracing::instrument;

/// Checks if a player has filled a whole line.
///
/// Lines are checked in a fixed order: main diagonal, anti-diagonal, every
/// row, then every column. The first line whose sum has magnitude N decides
/// the winner by its sign.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    let size = board.size() as i32;

    [board.trace(), board.anti_trace()]
        .into_iter()
        .chain(board.row_sums().iter().copied())
        .chain(board.col_sums().iter().copied())
        .find(|sum| sum.abs() == size)
        .map(|sum| if sum > 0 { Player::X } else { Player::O })
}
