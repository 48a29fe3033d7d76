//! Move representation and generation
//!
//! Generation order is part of the engine's contract: the root keeps the
//! first of several equally scored moves, so the order below decides ties.
//! - Placement: empty cells in row-major order.
//! - Movement: own pieces in row-major order, each followed by its empty
//!   neighbors in adjacency-table order.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{adjacent, Board, Piece, Pos, TOTAL_CELLS};
use crate::rules::{is_valid_placement, Phase};

/// A single action for the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Add a new piece (placement phase)
    Placement(Pos),
    /// Slide a piece to an adjacent empty cell (movement phase)
    Slide { from: Pos, to: Pos },
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Placement(pos) => write!(f, "place {}", pos),
            Move::Slide { from, to } => write!(f, "slide {} -> {}", from, to),
        }
    }
}

/// At most 9 moves exist in any reachable position: 9 empty cells while
/// placing, or 3 empty cells each reachable by at most 3 pieces while sliding.
pub type MoveList = SmallVec<[Move; TOTAL_CELLS]>;

/// Generate every legal move for `side` on `board`.
///
/// The phase is read from the piece counts on the board, which equal the
/// placed counters of any consistent game state.
pub fn generate_moves(board: &Board, side: Piece) -> MoveList {
    let white = board.count(Piece::White);
    let black = board.count(Piece::Black);
    let mut moves = MoveList::new();

    match Phase::from_counts(white, black) {
        Phase::Placement => {
            for pos in board.empty_cells().iter_ones() {
                if is_valid_placement(board, pos, side, white, black) {
                    moves.push(Move::Placement(pos));
                }
            }
        }
        Phase::Movement => {
            let Some(own) = board.stones(side) else {
                return moves;
            };
            for from in own.iter_ones() {
                for &to in adjacent(from) {
                    if board.is_empty(to) {
                        moves.push(Move::Slide { from, to });
                    }
                }
            }
        }
    }

    moves
}
