//! Game state and the rules engine callers drive
//!
//! `GameState` is the only place game state is mutated. Rejected actions
//! return `false` and leave every field untouched; they are not errors.
//!
//! # Example
//!
//! ```
//! use morris::{GameState, Piece};
//!
//! let mut game = GameState::new();
//! game.start();
//!
//! assert!(game.place(1, 1));
//! assert!(!game.place(1, 1)); // occupied
//! assert_eq!(game.current_player(), Piece::Black);
//! assert!(game.undo());
//! assert_eq!(game.current_player(), Piece::White);
//! ```

use tracing::{debug, info, trace};

use crate::board::{Board, Piece, Pos};
use crate::rules::{check_winner, is_valid_placement, is_valid_slide, Phase};
use crate::search::Move;

/// Complete state of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Piece,
    white_placed: u8,
    black_placed: u8,
    /// Board before each successful action, oldest first
    history: Vec<Board>,
    active: bool,
}

impl GameState {
    /// Empty board, White to move, not yet started
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Piece::White,
            white_placed: 0,
            black_placed: 0,
            history: Vec::new(),
            active: false,
        }
    }

    /// Active game set up from an arbitrary board.
    ///
    /// Counters are taken from the board, history is empty. Intended for
    /// analysis positions and tests; the board is trusted as given.
    pub fn from_position(board: Board, current_player: Piece) -> Self {
        debug_assert!(current_player != Piece::Empty);
        Self {
            board,
            current_player,
            white_placed: board.count(Piece::White),
            black_placed: board.count(Piece::Black),
            history: Vec::new(),
            active: true,
        }
    }

    /// Reset to an empty, active game with White to move
    pub fn start(&mut self) {
        self.board = Board::new();
        self.current_player = Piece::White;
        self.white_placed = 0;
        self.black_placed = 0;
        self.history.clear();
        self.active = true;
        info!("new game started");
    }

    /// Place a piece for the side to move at (x, y).
    ///
    /// Returns `false` without changing anything if the coordinates are off
    /// the board, the cell is taken, or the placement phase is over for the
    /// mover.
    pub fn place(&mut self, x: i32, y: i32) -> bool {
        let Some(pos) = Pos::try_new(x, y) else {
            trace!(x, y, "placement rejected: off board");
            return false;
        };
        let mover = self.current_player;
        if !is_valid_placement(&self.board, pos, mover, self.white_placed, self.black_placed) {
            trace!(%pos, player = mover.name(), "placement rejected");
            return false;
        }

        self.history.push(self.board);
        self.board.place_stone(pos, mover);
        match mover {
            Piece::White => self.white_placed += 1,
            Piece::Black => self.black_placed += 1,
            Piece::Empty => {}
        }
        self.switch_player();
        debug!(%pos, player = mover.name(), "piece placed");
        true
    }

    /// Slide the mover's piece from (x, y) to the adjacent empty cell (nx, ny).
    ///
    /// Only legal once both sides have placed all their pieces.
    pub fn move_piece(&mut self, x: i32, y: i32, nx: i32, ny: i32) -> bool {
        if !self.is_move_phase() {
            trace!("slide rejected: still placing");
            return false;
        }
        let (Some(from), Some(to)) = (Pos::try_new(x, y), Pos::try_new(nx, ny)) else {
            trace!(x, y, nx, ny, "slide rejected: off board");
            return false;
        };
        let mover = self.current_player;
        if !is_valid_slide(&self.board, from, to, mover) {
            trace!(%from, %to, player = mover.name(), "slide rejected");
            return false;
        }

        self.history.push(self.board);
        self.board.slide(from, to);
        self.switch_player();
        debug!(%from, %to, player = mover.name(), "piece moved");
        true
    }

    /// Revert the last successful place or move.
    ///
    /// Counters are recounted from the restored board, so undoing the sixth
    /// placement drops the game back into the placement phase.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        self.board = previous;
        self.white_placed = self.board.count(Piece::White);
        self.black_placed = self.board.count(Piece::Black);
        self.switch_player();
        debug!(remaining = self.history.len(), "action undone");
        true
    }

    /// Apply a generated move through the same checks as `place`/`move_piece`
    pub fn apply_move(&mut self, mv: Move) -> bool {
        match mv {
            Move::Placement(pos) => self.place(i32::from(pos.x), i32::from(pos.y)),
            Move::Slide { from, to } => self.move_piece(
                i32::from(from.x),
                i32::from(from.y),
                i32::from(to.x),
                i32::from(to.y),
            ),
        }
    }

    /// Owner of the first full line, if any
    #[inline]
    pub fn get_winner(&self) -> Option<Piece> {
        check_winner(&self.board)
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        Phase::from_counts(self.white_placed, self.black_placed)
    }

    #[inline]
    pub fn is_placement_phase(&self) -> bool {
        self.phase() == Phase::Placement
    }

    #[inline]
    pub fn is_move_phase(&self) -> bool {
        self.phase() == Phase::Movement
    }

    /// Mark the game finished. The engine never does this on its own.
    pub fn deactivate(&mut self) {
        if self.active {
            info!(winner = ?self.get_winner().map(Piece::name), "game ended");
        }
        self.active = false;
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Piece {
        self.current_player
    }

    #[inline]
    pub fn white_placed(&self) -> u8 {
        self.white_placed
    }

    #[inline]
    pub fn black_placed(&self) -> u8 {
        self.black_placed
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
