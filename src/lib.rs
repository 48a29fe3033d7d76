//! Three Men's Morris engine with a minimax/alpha-beta computer opponent
//!
//! Rules:
//! - 3x3 board of 9 points joined along rows, columns and both diagonals
//! - Placement phase: White and Black alternate placing 3 pieces each
//! - Movement phase: slide one of your pieces to an adjacent empty point
//! - Three of your pieces on a row, column or diagonal wins
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards and static topology
//! - [`rules`]: Legality checks and win detection
//! - [`eval`]: Static position evaluation
//! - [`search`]: Move generation and alpha-beta search
//! - [`game`]: Game state with history and undo
//! - [`engine`]: AI engine wrapping the search with configuration
//! - [`session`]: Facade used by the front-ends
//! - [`console`] and [`ui`]: Text and graphical front-ends
//!
//! # Quick Start
//!
//! ```
//! use morris::{Piece, Session};
//!
//! let mut session = Session::new();
//! session.start();
//! assert!(session.place(1, 1));
//!
//! // Computer answers as Black
//! if let Ok(Some(mv)) = session.get_computer_move(3) {
//!     assert!(session.apply_move(mv));
//!     println!("Computer plays {}", mv);
//! }
//! assert_eq!(session.get_board_state().current_player, Piece::White);
//! ```

pub mod board;
pub mod cli;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Piece, Pos, BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{AIEngine, MoveResult};
pub use error::{ConfigError, SessionError};
pub use game::GameState;
pub use search::Move;
pub use session::{BoardState, Session};
