//! Strictly Minimax - perfect play for N×N tic-tac-toe
//!
//! # Architecture
//!
//! - **Board**: the grid plus cached row, column and diagonal sums, so a
//!   finished position is detected in O(N) instead of rescanning the grid
//! - **Game**: turn-based engine with move history and exact undo
//! - **Search**: exhaustive minimax with alpha-beta pruning that drives the
//!   game through `play`/`undo` instead of copying it
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Coord, Game, Outcome, search};
//!
//! let mut game = Game::new(3);
//! while !game.outcome().is_finished() {
//!     let Coord { x, y } = search::best_move(&mut game)?;
//!     game.play(x, y)?;
//! }
//! assert_eq!(game.outcome(), Outcome::Draw);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod game;
mod outcome;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;
pub mod search;

// Crate-level exports - Board
pub use board::{Aggregates, Board, BoardError};

// Crate-level exports - Game engine
pub use action::{MoveError, MoveRecord};
pub use game::Game;
pub use outcome::Outcome;
pub use types::{Cell, Coord, Player};

// Crate-level exports - Search
pub use search::{SearchError, SearchReport, Searcher, best_move};
