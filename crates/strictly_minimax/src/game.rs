//! Turn-based game engine with exact undo.
//!
//! [`Game`] owns a [`Board`], whose turn it is, the current [`Outcome`] and
//! a stack of [`MoveRecord`]s. Each `play` pushes one record and each `undo`
//! pops one, restoring the board, its aggregates, the turn and the outcome
//! to exactly what they were before the move.

use super::action::{MoveError, MoveRecord};
use super::contracts::{Contract, PlayContract, assert_invariants};
use super::{Board, BoardError, Cell, Coord, Outcome, Player, rules};
use tracing::{debug, error, instrument, trace, warn};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) turn: Player,
    pub(crate) outcome: Outcome,
    pub(crate) history: Vec<MoveRecord>,
    /// Marks already on the board when the engine was built.
    pub(crate) initial_marks: usize,
}

impl Game {
    /// Creates a new game on an empty `size`×`size` board with X to move.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self::from_board(Board::new(size))
    }

    /// Builds an engine around an existing board.
    ///
    /// The outcome is evaluated immediately and X is to move; use
    /// [`Game::set_player_turn`] to hand the move to O.
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn from_board(mut board: Board) -> Self {
        board.clear_selection();
        let outcome = rules::evaluate(&board);
        let initial_marks = board.size() * board.size() - board.empty_cell_count();
        debug!(%outcome, initial_marks, "Game created");
        Self {
            board,
            turn: Player::X,
            outcome,
            history: Vec::new(),
            initial_marks,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.turn
    }

    /// Returns true if X (the maximizing player) is to move.
    pub fn is_maximizing_player_turn(&self) -> bool {
        self.turn.is_maximizing()
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns true if `(x, y)` is on the board and empty.
    pub fn is_cell_empty(&self, x: usize, y: usize) -> bool {
        self.board.get(x, y).is_ok_and(Cell::is_empty)
    }

    /// Empty cells in row-major order.
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.outcome.is_finished() {
            return Vec::new();
        }
        let size = self.board.size();
        (0..size)
            .flat_map(|x| (0..size).map(move |y| Coord::new(x, y)))
            .filter(|coord| self.is_cell_empty(coord.x, coord.y))
            .collect()
    }

    /// Marks `(x, y)` for the player to move and passes the turn.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameFinished`] if the game already has an outcome
    /// - [`MoveError::CellOccupied`] if the cell holds a mark
    /// - [`MoveError::Board`] if the coordinate is off the board
    ///
    /// A rejected move changes nothing.
    #[instrument(level = "trace", skip(self), fields(player = %self.turn))]
    pub fn play(&mut self, x: usize, y: usize) -> Result<(), MoveError> {
        let coord = Coord::new(x, y);
        PlayContract::pre(self, &coord)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.select(x, y)?;
        self.board.write_to_cell(self.turn)?;
        self.history
            .push(MoveRecord::new(self.turn, self.outcome, coord));
        self.outcome = rules::evaluate(&self.board);
        self.board.clear_selection();
        self.turn = self.turn.opponent();
        trace!(%coord, outcome = %self.outcome, "Move played");

        #[cfg(debug_assertions)]
        PlayContract::post(&before, self)?;

        Ok(())
    }

    /// Reverts the most recent move.
    ///
    /// Never fails. With an empty history the game is reset and `None` is
    /// returned; otherwise the reverted record is returned.
    #[instrument(level = "trace", skip(self))]
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let Some(record) = self.history.pop() else {
            warn!("Nothing to undo, resetting game");
            self.reset();
            return None;
        };

        if let Err(err) = self.revert(&record) {
            error!(%err, %record, "Undo failed");
            self.board.clear_selection();
        }
        assert_invariants(self);
        Some(record)
    }

    fn revert(&mut self, record: &MoveRecord) -> Result<(), BoardError> {
        self.board.select(record.coord.x, record.coord.y)?;
        self.board.clear_cell()?;
        self.outcome = rules::evaluate(&self.board);
        self.board.clear_selection();
        self.turn = record.prior_turn;
        trace!(coord = %record.coord, "Move reverted");
        Ok(())
    }

    /// Returns to the empty initial position with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
        self.turn = Player::X;
        self.outcome = Outcome::Undecided;
        self.initial_marks = 0;
        debug!("Game reset");
    }

    /// Overrides whose turn it is. The board is not touched.
    #[instrument(skip(self))]
    pub fn set_player_turn(&mut self, player: Player) {
        self.turn = player;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new(3);
        assert!(game.is_maximizing_player_turn());
        assert_eq!(game.outcome(), Outcome::Undecided);
        assert!(game.history().is_empty());
        assert_eq!(game.legal_moves().len(), 9);
    }

    #[test]
    fn test_play_passes_turn() {
        let mut game = Game::new(3);
        game.play(0, 0).unwrap();
        assert_eq!(game.current_player(), Player::O);
        assert_eq!(game.board().get(0, 0), Ok(Cell::Occupied(Player::X)));
        assert!(game.board().is_selection_empty());
        assert_eq!(
            game.history(),
            &[MoveRecord::new(Player::X, Outcome::Undecided, Coord::new(0, 0))]
        );
    }

    #[test]
    fn test_play_occupied_changes_nothing() {
        let mut game = Game::new(3);
        game.play(0, 0).unwrap();
        let before = game.clone();
        assert_eq!(game.play(0, 0), Err(MoveError::CellOccupied { x: 0, y: 0 }));
        assert_eq!(game, before);
    }

    #[test]
    fn test_play_on_finished_game() {
        let mut game = Game::new(3);
        for (x, y) in [(0, 0), (1, 1), (0, 1), (1, 2), (0, 2)] {
            game.play(x, y).unwrap();
        }
        assert_eq!(game.outcome(), Outcome::Won(Player::X));
        let before = game.clone();
        assert_eq!(game.play(2, 2), Err(MoveError::GameFinished));
        assert_eq!(game, before);
    }

    #[test]
    fn test_undo_restores_previous_state() {
        let mut game = Game::new(3);
        game.play(1, 1).unwrap();
        let before = game.clone();

        game.play(2, 0).unwrap();
        let record = game.undo().unwrap();
        assert_eq!(record.coord, Coord::new(2, 0));
        assert_eq!(record.prior_turn, Player::O);
        assert_eq!(game, before);
    }

    #[test]
    fn test_undo_restores_after_set_player_turn() {
        let mut game = Game::new(3);
        game.set_player_turn(Player::O);
        game.play(1, 1).unwrap();
        assert_eq!(game.board().get(1, 1), Ok(Cell::Occupied(Player::O)));
        game.undo();
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn test_undo_on_empty_history_resets() {
        let mut board = Board::new(3);
        board.select(1, 1).unwrap();
        board.write_to_cell(Player::O).unwrap();
        let mut game = Game::from_board(board);
        game.set_player_turn(Player::O);

        assert_eq!(game.undo(), None);
        assert_eq!(game, Game::new(3));
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new(3);
        game.play(0, 0).unwrap();
        game.play(2, 2).unwrap();
        game.reset();
        assert_eq!(game, Game::new(3));
    }

    #[test]
    fn test_from_board_evaluates_outcome() {
        let mut board = Board::new(3);
        for y in 0..3 {
            board.select(2, y).unwrap();
            board.write_to_cell(Player::O).unwrap();
        }
        let game = Game::from_board(board);
        assert_eq!(game.outcome(), Outcome::Won(Player::O));
        assert!(game.board().is_selection_empty());
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn test_set_player_turn() {
        let mut game = Game::new(3);
        game.set_player_turn(Player::O);
        assert!(!game.is_maximizing_player_turn());
        assert_eq!(game.board(), &Board::new(3));
    }
}
