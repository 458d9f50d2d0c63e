//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board)'s cached aggregates. They
//! never scan the grid, so evaluating a position costs O(N).

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use super::{Board, Outcome};
use tracing::instrument;

/// Evaluates the outcome of a board.
///
/// A complete line wins; otherwise a full board draws; otherwise the game
/// is still undecided.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn fill(board: &mut Board, cells: impl IntoIterator<Item = (usize, usize)>, player: Player) {
        for (x, y) in cells {
            board.select(x, y).unwrap();
            board.write_to_cell(player).unwrap();
        }
        board.clear_selection();
    }

    #[test]
    fn test_evaluate_prefers_main_diagonal() {
        let mut board = Board::new(4);
        fill(&mut board, (0..4).map(|i| (i, i)), Player::O);
        fill(&mut board, (0..4).map(|i| (i, 3 - i)), Player::X);
        assert_eq!(evaluate(&board), Outcome::Won(Player::O));

        let mut board = Board::new(4);
        fill(&mut board, (0..4).map(|i| (i, i)), Player::X);
        fill(&mut board, (0..4).map(|i| (i, 3 - i)), Player::O);
        assert_eq!(evaluate(&board), Outcome::Won(Player::X));
    }

    #[test]
    fn test_evaluate_full_board_without_line_is_draw() {
        let mut board = Board::new(3);
        fill(&mut board, [(0, 0), (0, 2), (1, 0), (2, 1), (2, 2)], Player::X);
        fill(&mut board, [(0, 1), (1, 1), (1, 2), (2, 0)], Player::O);
        assert_eq!(evaluate(&board), Outcome::Draw);
        assert!(evaluate(&board).is_draw());
    }
}
