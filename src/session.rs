//! Game session: one game plus the computer opponent
//!
//! Every front-end talks to the game through [`Session`]. Actions mirror
//! [`GameState`] and report rejection with `false`; queries return plain
//! serializable values.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{adjacent, Piece, Pos, BOARD_SIZE};
use crate::config::EngineConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::error::{SessionError, SessionResult};
use crate::search::{generate_moves, Move};
use crate::GameState;

/// Snapshot of everything a front-end needs to draw the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// Cells indexed `[y][x]`
    pub board: [[Piece; BOARD_SIZE]; BOARD_SIZE],
    pub current_player: Piece,
    pub white_count: u8,
    pub black_count: u8,
    pub is_placement_phase: bool,
    pub winner: Option<Piece>,
    pub game_active: bool,
}

#[derive(Debug, Default)]
pub struct Session {
    game: GameState,
    engine: AIEngine,
}

impl Session {
    /// Session with no game in progress
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            game: GameState::new(),
            engine: AIEngine::with_config(config),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        self.engine.config()
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Start a fresh game, discarding any game in progress
    pub fn start(&mut self) {
        self.game.start();
    }

    pub fn is_active(&self) -> bool {
        self.game.is_active()
    }

    /// End the current game without clearing the board
    pub fn deactivate(&mut self) {
        self.game.deactivate();
    }

    pub fn place(&mut self, x: i32, y: i32) -> bool {
        self.game.place(x, y)
    }

    pub fn move_piece(&mut self, x: i32, y: i32, nx: i32, ny: i32) -> bool {
        self.game.move_piece(x, y, nx, ny)
    }

    /// Dispatch to `place` or `move_piece`
    pub fn apply_move(&mut self, mv: Move) -> bool {
        self.game.apply_move(mv)
    }

    pub fn undo(&mut self) -> bool {
        self.game.undo()
    }

    pub fn get_winner(&self) -> Option<Piece> {
        self.game.get_winner()
    }

    pub fn is_placement_phase(&self) -> bool {
        self.game.is_placement_phase()
    }

    pub fn is_move_phase(&self) -> bool {
        self.game.is_move_phase()
    }

    pub fn get_board_state(&self) -> BoardState {
        BoardState {
            board: self.game.board().rows(),
            current_player: self.game.current_player(),
            white_count: self.game.white_placed(),
            black_count: self.game.black_placed(),
            is_placement_phase: self.game.is_placement_phase(),
            winner: self.game.get_winner(),
            game_active: self.game.is_active(),
        }
    }

    /// Legal moves for the side to move, in search order
    pub fn get_possible_moves(&self) -> Vec<Move> {
        generate_moves(self.game.board(), self.game.current_player()).to_vec()
    }

    /// Best move for the side to move. The game is not changed.
    ///
    /// `depth` must lie within the configured bounds.
    pub fn get_computer_move(&mut self, depth: i8) -> SessionResult<Option<Move>> {
        Ok(self.get_computer_move_with_stats(depth)?.best_move)
    }

    /// Like `get_computer_move`, with search statistics
    pub fn get_computer_move_with_stats(&mut self, depth: i8) -> SessionResult<MoveResult> {
        self.check_depth(depth)?;
        Ok(self.engine.get_move_at_depth(&self.game, depth))
    }

    /// Cells joined to (x, y) by a board line; empty for off-board input
    pub fn get_adjacent_positions(&self, x: i32, y: i32) -> Vec<Pos> {
        Pos::try_new(x, y)
            .map(|pos| adjacent(pos).to_vec())
            .unwrap_or_default()
    }

    fn check_depth(&self, depth: i8) -> SessionResult<()> {
        let config = self.engine.config();
        if !config.accepts(depth) {
            debug!(depth, "computer move rejected: depth out of range");
            return Err(SessionError::InvalidDepth {
                depth,
                min: config.min_depth,
                max: config.max_depth,
            });
        }
        Ok(())
    }
}
