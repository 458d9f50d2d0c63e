//! Draw detection.

use super::super::Board;
use tracing::instrument;

/// Checks if the board has no empty cell left.
///
/// A full board with no winner is a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.empty_cell_count() == 0
}
