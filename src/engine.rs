//! Main AI engine for the computer opponent
//!
//! Wraps the alpha-beta [`Searcher`] with an [`EngineConfig`] and reports
//! timing and search statistics for every move.
//!
//! # Example
//!
//! ```
//! use morris::{AIEngine, EngineConfig, GameState};
//!
//! let mut engine = AIEngine::with_config(EngineConfig::default().with_depth(2));
//! let mut game = GameState::new();
//! game.start();
//!
//! let result = engine.get_move_with_stats(&game);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::config::EngineConfig;
use crate::search::{Move, SearchResult, Searcher};
use crate::GameState;

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Minimax score of the chosen move, from White's perspective
    pub score: i32,
    /// Depth the search ran at
    pub depth: i8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Number of alpha-beta cutoffs
    pub cutoffs: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            nodes: result.stats.nodes,
            cutoffs: result.stats.beta_cutoffs,
            time_ms,
        }
    }
}

/// Computer opponent.
///
/// The engine never changes the game it is asked about; callers apply the
/// returned move themselves.
#[derive(Debug, Default)]
pub struct AIEngine {
    searcher: Searcher,
    config: EngineConfig,
}

impl AIEngine {
    /// Create an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::new(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Set the depth used by `get_move` and `get_move_with_stats`.
    pub fn set_depth(&mut self, depth: i8) {
        self.config.depth = depth;
    }

    /// Best move for the side to move at the configured depth.
    ///
    /// Returns `None` if the side to move has no legal move.
    #[must_use]
    pub fn get_move(&mut self, state: &GameState) -> Option<Move> {
        self.get_move_with_stats(state).best_move
    }

    /// Search at the configured depth and return statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, state: &GameState) -> MoveResult {
        self.get_move_at_depth(state, self.config.depth)
    }

    /// Search at an explicit depth.
    ///
    /// Any depth is accepted here; depth <= 0 picks the move with the best
    /// static evaluation. Bounds checking belongs to the caller.
    #[must_use]
    pub fn get_move_at_depth(&mut self, state: &GameState, depth: i8) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.search(state, depth);
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            player = state.current_player().name(),
            depth,
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.stats.nodes,
            cutoffs = result.stats.beta_cutoffs,
            time_ms,
            "Search finished"
        );

        MoveResult::from_search(result, time_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Piece, Pos};
    use crate::eval::PatternScore;

    fn started() -> GameState {
        let mut game = GameState::new();
        game.start();
        game
    }

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.config().depth, 3);
    }

    #[test]
    fn test_engine_with_config() {
        let engine = AIEngine::with_config(EngineConfig::default().with_depth(5));
        assert_eq!(engine.config().depth, 5);
    }

    #[test]
    fn test_engine_set_depth() {
        let mut engine = AIEngine::new();
        engine.set_depth(2);
        assert_eq!(engine.get_move_with_stats(&started()).depth, 2);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut game = started();
        assert!(game.place(0, 0)); // W
        assert!(game.place(0, 1)); // B
        assert!(game.place(1, 0)); // W
        assert!(game.place(1, 1)); // B

        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&game);
        assert_eq!(result.best_move, Some(Move::Placement(Pos::new(2, 0))));
        assert_eq!(result.score, PatternScore::WIN);
    }

    #[test]
    fn test_engine_prefers_win_now_at_depth() {
        // White can complete the diagonal by sliding (2,0)->(1,1)
        let mut board = Board::new();
        for (x, y) in [(0, 0), (2, 0), (2, 2)] {
            board.place_stone(Pos::new(x, y), Piece::White);
        }
        for (x, y) in [(1, 0), (0, 1), (1, 2)] {
            board.place_stone(Pos::new(x, y), Piece::Black);
        }
        let game = GameState::from_position(board, Piece::White);

        let mut engine = AIEngine::new();
        for depth in 1..=6 {
            let result = engine.get_move_at_depth(&game, depth);
            assert_eq!(
                result.best_move,
                Some(Move::Slide {
                    from: Pos::new(2, 0),
                    to: Pos::new(1, 1),
                }),
                "depth {}",
                depth
            );
        }
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut game = started();
        assert!(game.place(1, 1)); // W
        assert!(game.place(0, 0)); // B
        assert!(game.place(2, 2)); // W
        assert!(game.place(0, 1)); // B threatens (0,2)

        let mut engine = AIEngine::with_config(EngineConfig::default().with_depth(2));
        assert_eq!(engine.get_move(&game), Some(Move::Placement(Pos::new(0, 2))));
    }

    #[test]
    fn test_engine_empty_board() {
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&started());
        assert!(result.best_move.is_some());
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_engine_no_move_when_blocked() {
        let mut board = Board::new();
        for x in 0..3 {
            board.place_stone(Pos::new(x, 0), Piece::White);
            board.place_stone(Pos::new(x, 1), Piece::Black);
        }
        let game = GameState::from_position(board, Piece::White);

        let mut engine = AIEngine::new();
        assert_eq!(engine.get_move(&game), None);
    }

    #[test]
    fn test_engine_leaves_state_untouched() {
        let mut game = started();
        assert!(game.place(1, 1));
        let before = game.clone();

        let mut engine = AIEngine::new();
        let _ = engine.get_move_at_depth(&game, 6);
        assert_eq!(game, before);
    }

    #[test]
    fn test_engine_deterministic() {
        let game = started();
        let mut engine = AIEngine::new();
        let first = engine.get_move_with_stats(&game);
        let second = engine.get_move_with_stats(&game);
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.nodes, second.nodes);
    }

    #[test]
    fn test_engine_alternating_colors() {
        let mut game = started();
        let mut engine = AIEngine::with_config(EngineConfig::default().with_depth(2));

        for _ in 0..6 {
            let mv = engine.get_move(&game).expect("placement always has a move");
            assert!(game.apply_move(mv));
            if game.get_winner().is_some() {
                break;
            }
        }
        assert!(game.get_winner().is_some() || game.is_move_phase());
    }
}
