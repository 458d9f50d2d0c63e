//! Exhaustive minimax search with alpha-beta pruning.
//!
//! The search shares one [`Game`] across the whole recursion: every
//! candidate is tried with `play`, scored, and taken back with `undo`
//! before the next sibling is tried. Positions are scored only at terminal
//! states, `+1` for an X win, `-1` for an O win and `0` for a draw, with no
//! weighting by depth.
//!
//! Candidates are scanned in row-major order and ties keep the first cell
//! found, so the chosen move is a pure function of the position.
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Coord, Game, search};
//!
//! let mut game = Game::new(3);
//! for (x, y) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
//!     game.play(x, y).unwrap();
//! }
//! assert_eq!(search::best_move(&mut game).unwrap(), Coord::new(0, 2));
//! ```

use super::{Coord, Game, Outcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

/// Errors raised by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    /// The position has no legal move because the game is over.
    #[display("cannot search a finished game ({outcome})")]
    GameFinished {
        /// Outcome of the finished game.
        outcome: Outcome,
    },
}

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SearchReport {
    /// Chosen move.
    coord: Coord,
    /// Guaranteed outcome under optimal play: `+1`, `0` or `-1`.
    score: i32,
    /// Positions visited below the root.
    nodes: u64,
}

/// Minimax searcher with a visited-node counter.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    /// Creates a new searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions visited since this searcher was created.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Finds the optimal move for the player to move.
    ///
    /// The game is mutated during the search and restored before returning.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::GameFinished`] if the game already has an
    /// outcome.
    #[instrument(skip_all, fields(player = %game.current_player()))]
    pub fn search(&mut self, game: &mut Game) -> Result<SearchReport, SearchError> {
        let outcome = game.outcome();
        if outcome.is_finished() {
            return Err(SearchError::GameFinished { outcome });
        }

        let depth = game.history().len();
        let maximizing = game.is_maximizing_player_turn();
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best = None;
        let mut alpha = i32::MIN;
        let mut beta = i32::MAX;
        let start = self.nodes;

        let size = game.board().size();
        for x in 0..size {
            for y in 0..size {
                let Some(score) = self.try_move(game, x, y, alpha, beta) else {
                    continue;
                };
                if maximizing {
                    if score > best_score {
                        best_score = score;
                        best = Some(Coord::new(x, y));
                    }
                    alpha = alpha.max(best_score);
                } else {
                    if score < best_score {
                        best_score = score;
                        best = Some(Coord::new(x, y));
                    }
                    beta = beta.min(best_score);
                }
            }
        }
        debug_assert_eq!(game.history().len(), depth, "search left moves on the stack");

        let coord = best.ok_or(SearchError::GameFinished { outcome })?;
        let report = SearchReport {
            coord,
            score: best_score,
            nodes: self.nodes - start,
        };
        info!(%coord, score = best_score, nodes = report.nodes, "Search complete");
        Ok(report)
    }

    /// Scores the current position, searching to terminal states.
    ///
    /// Returns the outcome score directly for terminal positions. Otherwise
    /// returns the folded `alpha` when X is to move and `beta` when O is.
    /// Scanning stops once `beta <= alpha`.
    #[instrument(level = "trace", skip(self, game))]
    pub fn minimax(&mut self, game: &mut Game, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        let outcome = game.outcome();
        if outcome.is_finished() {
            return outcome.score();
        }

        let maximizing = game.is_maximizing_player_turn();
        let size = game.board().size();
        'rows: for x in 0..size {
            for y in 0..size {
                let Some(score) = self.try_move(game, x, y, alpha, beta) else {
                    continue;
                };
                if maximizing {
                    alpha = alpha.max(score);
                } else {
                    beta = beta.min(score);
                }
                if beta <= alpha {
                    break 'rows;
                }
            }
        }

        if maximizing { alpha } else { beta }
    }

    /// Plays `(x, y)` if it is empty, scores the child, then takes it back.
    fn try_move(
        &mut self,
        game: &mut Game,
        x: usize,
        y: usize,
        alpha: i32,
        beta: i32,
    ) -> Option<i32> {
        if !game.is_cell_empty(x, y) {
            return None;
        }
        if let Err(err) = game.play(x, y) {
            error!(%err, x, y, "Search generated an illegal move");
            return None;
        }
        let score = self.minimax(game, alpha, beta);
        game.undo();
        Some(score)
    }
}

/// Finds the optimal move for the player to move.
///
/// See [`Searcher::search`].
pub fn best_move(game: &mut Game) -> Result<Coord, SearchError> {
    Ok(*analyze(game)?.coord())
}

/// Finds the optimal move along with its score and search statistics.
pub fn analyze(game: &mut Game) -> Result<SearchReport, SearchError> {
    Searcher::new().search(game)
}

/// Scores the current position within the `alpha`/`beta` window.
///
/// See [`Searcher::minimax`].
pub fn minimax(game: &mut Game, alpha: i32, beta: i32) -> i32 {
    Searcher::new().minimax(game, alpha, beta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn game_after(moves: &[(usize, usize)]) -> Game {
        let mut game = Game::new(3);
        for &(x, y) in moves {
            game.play(x, y).unwrap();
        }
        game
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut game = game_after(&[(0, 0), (1, 1), (0, 1), (1, 0)]);
        let report = analyze(&mut game).unwrap();
        assert_eq!(*report.coord(), Coord::new(0, 2));
        assert_eq!(*report.score(), 1);
    }

    #[test]
    fn test_blocks_opponent_row() {
        let mut game = game_after(&[(0, 0), (1, 1), (2, 2), (1, 0)]);
        let report = analyze(&mut game).unwrap();
        assert_eq!(*report.coord(), Coord::new(1, 2));
        assert_eq!(*report.score(), 0);
    }

    #[test]
    fn test_minimizing_side_keeps_first_winning_cell() {
        // O to move. (2,2) wins at once and (2,0) blocks X while forking;
        // both score -1 and (2,0) comes first in row-major order.
        let mut game = game_after(&[(0, 0), (0, 2), (2, 1), (1, 2), (1, 0)]);
        assert_eq!(game.current_player(), Player::O);
        let report = analyze(&mut game).unwrap();
        assert_eq!(*report.coord(), Coord::new(2, 0));
        assert_eq!(*report.score(), -1);
    }

    #[test]
    fn test_search_restores_game() {
        let mut game = game_after(&[(1, 1), (0, 0)]);
        let before = game.clone();
        analyze(&mut game).unwrap();
        assert_eq!(game, before);
    }

    #[test]
    fn test_finished_game_is_rejected() {
        let mut game = game_after(&[(0, 0), (1, 1), (0, 1), (1, 2), (0, 2)]);
        assert_eq!(
            best_move(&mut game),
            Err(SearchError::GameFinished {
                outcome: Outcome::Won(Player::X)
            })
        );
    }

    #[test]
    fn test_minimax_terminal_position() {
        let mut game = game_after(&[(0, 0), (1, 1), (0, 1), (1, 2), (0, 2)]);
        assert_eq!(minimax(&mut game, i32::MIN, i32::MAX), 1);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut game = Game::new(3);
        let report = analyze(&mut game).unwrap();
        assert_eq!(*report.score(), 0);
        assert_eq!(*report.coord(), Coord::new(0, 0));
        assert!(*report.nodes() > 0);
    }

    #[test]
    fn test_searcher_counts_nodes() {
        let mut game = game_after(&[(0, 0), (1, 1), (0, 1), (1, 0)]);
        let mut searcher = Searcher::new();
        let report = searcher.search(&mut game).unwrap();
        assert_eq!(searcher.nodes(), *report.nodes());
    }
}
