//! History consistency invariant: history matches occupied cells.

use super::super::{Cell, Game};
use super::Invariant;

/// Invariant: each move since the last reset occupies exactly one cell.
///
/// The number of occupied cells equals the marks the game started with
/// plus the history length, and every recorded cell holds the mark of the
/// player who made it.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let occupied = board.size() * board.size() - board.empty_cell_count();
        if occupied != game.initial_marks + game.history().len() {
            return false;
        }

        game.history().iter().all(|record| {
            board.get(record.coord.x, record.coord.y) == Ok(Cell::Occupied(record.prior_turn))
        })
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player};

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&Game::new(3)));
    }

    #[test]
    fn test_prefilled_board_holds() {
        let mut board = Board::new(3);
        board.select(2, 2).unwrap();
        board.write_to_cell(Player::O).unwrap();
        board.clear_selection();

        let mut game = Game::from_board(board);
        assert!(HistoryConsistentInvariant::holds(&game));
        game.play(0, 0).unwrap();
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_corrupted_history_violates() {
        let mut game = Game::new(3);
        game.play(1, 1).unwrap();

        // Extra mark without a history entry.
        game.board.select(0, 0).unwrap();
        game.board.write_to_cell(Player::O).unwrap();
        game.board.clear_selection();

        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let mut game = Game::new(3);
        game.play(1, 1).unwrap();

        game.board.select(1, 1).unwrap();
        game.board.write_to_cell(Player::O).unwrap();
        game.board.clear_selection();

        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
