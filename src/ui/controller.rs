//! Interaction state for the morris GUI
//!
//! Turns board clicks into session actions and runs computer moves on a
//! worker thread. Nothing here depends on egui, so it is tested directly.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::warn;

use crate::board::{adjacent, Piece, Pos};
use crate::rules::find_winning_line;
use crate::search::Move;
use crate::{AIEngine, BoardState, EngineConfig, MoveResult, Session};

/// Who plays which color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs computer; the computer moves on its own turn
    PvE { human_color: Piece },
    /// Both colors from the board; the computer only moves on request
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvP
    }
}

/// Computer move state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

pub struct GameController {
    session: Session,
    pub mode: GameMode,
    /// Piece picked up in the movement phase
    pub selected: Option<Pos>,
    pub last_move: Option<Move>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
    ai_depth: i8,
}

impl GameController {
    /// Controller with a started game
    pub fn new(config: EngineConfig, mode: GameMode) -> Self {
        let mut session = Session::with_config(config);
        session.start();
        Self {
            session,
            mode,
            selected: None,
            last_move: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            ai_depth: config.depth,
        }
    }

    /// Start a new game. A pending computer move is dropped.
    pub fn reset(&mut self) {
        self.session.start();
        self.selected = None;
        self.last_move = None;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> BoardState {
        self.session.get_board_state()
    }

    pub fn ai_depth(&self) -> i8 {
        self.ai_depth
    }

    pub fn set_ai_depth(&mut self, depth: i8) {
        let config = self.session.config();
        self.ai_depth = depth.clamp(config.min_depth, config.max_depth);
    }

    pub fn depth_bounds(&self) -> (i8, i8) {
        let config = self.session.config();
        (config.min_depth, config.max_depth)
    }

    pub fn winning_line(&self) -> Option<(Piece, [Pos; 3])> {
        find_winning_line(self.session.game().board())
    }

    pub fn is_game_over(&self) -> bool {
        self.session.get_winner().is_some()
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.state().current_player == human_color,
            GameMode::PvP => true,
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Empty cells the selected piece can slide to
    pub fn slide_targets(&self) -> Vec<Pos> {
        let Some(from) = self.selected else {
            return Vec::new();
        };
        let board = self.session.game().board();
        adjacent(from)
            .iter()
            .copied()
            .filter(|&to| board.is_empty(to))
            .collect()
    }

    /// Handle a click on a board cell.
    ///
    /// Placement phase: place on the cell. Movement phase: the first click
    /// picks up one of the mover's pieces, the second slides it.
    pub fn handle_click(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_game_over() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("Computer is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        if self.session.is_placement_phase() {
            return self.play(Move::Placement(pos), "Invalid placement (cell occupied)");
        }

        let mover = self.state().current_player;
        let on_cell = self.session.game().board().get(pos);

        match self.selected {
            Some(from) if from == pos => {
                self.selected = None;
                Ok(())
            }
            _ if on_cell == mover => {
                self.selected = Some(pos);
                self.message = None;
                Ok(())
            }
            Some(from) => self.play(Move::Slide { from, to: pos }, "Invalid move (not an adjacent empty cell)"),
            None => Err("Select one of your pieces".to_string()),
        }
    }

    fn play(&mut self, mv: Move, rejection: &str) -> Result<(), String> {
        if !self.session.apply_move(mv) {
            return Err(rejection.to_string());
        }
        self.selected = None;
        self.last_move = Some(mv);
        self.message = None;
        Ok(())
    }

    /// Search for the side to move on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if self.is_ai_thinking() || self.is_game_over() {
            return;
        }

        let game = self.session.game().clone();
        let config = *self.session.config();
        let depth = self.ai_depth;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(config);
            let result = engine.get_move_at_depth(&game, depth);
            let _ = tx.send(result);
        });

        self.selected = None;
        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the computer move if it has arrived
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    warn!("computer move worker exited without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("Computer move failed".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        match result.best_move {
            Some(mv) => {
                if let Err(msg) = self.play(mv, "Computer move was rejected") {
                    self.message = Some(msg);
                }
            }
            None => self.message = Some("No legal move for the computer".to_string()),
        }
        self.last_ai_result = Some(result);
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Take back the last action, or the last two against the computer
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }

        let undo_count = match self.mode {
            GameMode::PvE { .. } if self.session.game().history_len() >= 2 => 2,
            _ => 1,
        };
        let mut undone = false;
        for _ in 0..undo_count {
            undone |= self.session.undo();
        }

        if undone {
            self.selected = None;
            self.last_move = None;
            self.message = None;
        } else {
            self.message = Some("No moves to undo".to_string());
        }
    }
}
