//! Match sessions driven by the engine.

use crate::config::MatchConfig;
use derive_getters::Getters;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use strictly_minimax::{Coord, Game, MoveError, MoveRecord, Outcome, SearchError, Searcher};
use tracing::{debug, info, instrument, warn};

/// Boards with more empty cells than this get a slow-search warning.
const SLOW_SEARCH_EMPTY_CELLS: usize = 12;

/// Failure while driving a session.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// A replayed move was illegal.
    #[display("Illegal move: {_0}")]
    Move(MoveError),
    /// The engine could not search the position.
    #[display("Search failed: {_0}")]
    Search(SearchError),
}

/// Result of a finished self-play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Moves in the order they were played.
    history: Vec<MoveRecord>,
    /// Final outcome.
    outcome: Outcome,
    /// Nodes visited across every search.
    nodes: u64,
}

/// Starts a game from the configuration.
pub fn new_game(config: &MatchConfig) -> Game {
    let mut game = Game::new(*config.board_size());
    game.set_player_turn(*config.first_player());
    game
}

/// Replays `moves` alternately from a fresh game.
#[instrument(skip(config, moves), fields(count = moves.len()))]
pub fn replay(config: &MatchConfig, moves: &[Coord]) -> Result<Game, SessionError> {
    let mut game = new_game(config);
    for coord in moves {
        debug!(%coord, player = %game.current_player(), "Replaying move");
        game.play(coord.x, coord.y)?;
    }
    Ok(game)
}

/// Warns when a search from `game` would take a long time.
pub fn warn_if_slow(game: &Game) {
    let empty = game.board().empty_cell_count();
    if empty > SLOW_SEARCH_EMPTY_CELLS {
        warn!(empty, "Exhaustive search over this many empty cells may take a long time");
    }
}

/// Lets the engine play both sides until the game ends.
#[instrument(skip(config))]
pub fn self_play(config: &MatchConfig) -> Result<MatchSummary, SessionError> {
    let mut game = new_game(config);
    let mut searcher = Searcher::new();
    warn_if_slow(&game);

    while !game.outcome().is_finished() {
        let report = searcher.search(&mut game)?;
        info!(player = %game.current_player(), coord = %report.coord(), score = report.score(), "Engine move");
        game.play(report.coord().x, report.coord().y)?;
    }

    info!(outcome = %game.outcome(), moves = game.history().len(), "Self-play finished");
    Ok(MatchSummary {
        history: game.history().to_vec(),
        outcome: game.outcome(),
        nodes: searcher.nodes(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_minimax::Player;

    #[test]
    fn test_replay_alternates() {
        let config = MatchConfig::default();
        let game = replay(&config, &[Coord::new(0, 0), Coord::new(1, 1)]).unwrap();
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.history()[1].prior_turn, Player::O);
    }

    #[test]
    fn test_replay_rejects_illegal_move() {
        let config = MatchConfig::default();
        let err = replay(&config, &[Coord::new(1, 1), Coord::new(1, 1)]).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Move(MoveError::CellOccupied { x: 1, y: 1 })
        ));
    }

    #[test]
    fn test_self_play_draws() {
        let summary = self_play(&MatchConfig::default()).unwrap();
        assert_eq!(*summary.outcome(), Outcome::Draw);
        assert_eq!(summary.history().len(), 9);
        assert!(*summary.nodes() > 0);
    }

    #[test]
    fn test_self_play_on_tiny_board() {
        let config = MatchConfig::default().with_board_size(1).unwrap();
        let summary = self_play(&config).unwrap();
        assert_eq!(*summary.outcome(), Outcome::Won(Player::X));
        assert_eq!(summary.history().len(), 1);
    }

    #[test]
    fn test_summary_serializes() {
        let config = MatchConfig::default().with_board_size(1).unwrap();
        let summary = self_play(&config).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["history"].as_array().map(Vec::len), Some(1));
    }
}
