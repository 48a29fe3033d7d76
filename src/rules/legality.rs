//! Phase tracking and move legality
//!
//! Placement is gated on the counters (not on a board scan), movement on
//! ownership, emptiness and adjacency.

use serde::{Deserialize, Serialize};

use crate::board::{is_adjacent, Board, Piece, Pos, PIECES_PER_SIDE};

/// Game phase, derived purely from the placed counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Sides are still adding pieces
    Placement,
    /// Both sides have placed all pieces and now slide them
    Movement,
}

impl Phase {
    #[inline]
    pub fn from_counts(white_placed: u8, black_placed: u8) -> Self {
        if white_placed == PIECES_PER_SIDE && black_placed == PIECES_PER_SIDE {
            Phase::Movement
        } else {
            Phase::Placement
        }
    }
}

/// Can `mover` place a new piece at `pos`?
///
/// Black's counter gates the whole placement phase; on top of that each
/// color is capped at `PIECES_PER_SIDE` independently, so over-placement is
/// rejected even if turn alternation were ever bypassed.
pub fn is_valid_placement(
    board: &Board,
    pos: Pos,
    mover: Piece,
    white_placed: u8,
    black_placed: u8,
) -> bool {
    let own_placed = match mover {
        Piece::White => white_placed,
        Piece::Black => black_placed,
        Piece::Empty => return false,
    };
    black_placed < PIECES_PER_SIDE && own_placed < PIECES_PER_SIDE && board.is_empty(pos)
}

/// Can `mover` slide its piece from `from` to `to`? Phase is the caller's concern.
pub fn is_valid_slide(board: &Board, from: Pos, to: Pos, mover: Piece) -> bool {
    mover != Piece::Empty
        && board.get(from) == mover
        && board.is_empty(to)
        && is_adjacent(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_from_counts() {
        assert_eq!(Phase::from_counts(0, 0), Phase::Placement);
        assert_eq!(Phase::from_counts(3, 2), Phase::Placement);
        assert_eq!(Phase::from_counts(2, 3), Phase::Placement);
        assert_eq!(Phase::from_counts(3, 3), Phase::Movement);
    }

    #[test]
    fn test_placement_requires_empty_cell() {
        let mut board = Board::new();
        board.place_stone(Pos::new(1, 1), Piece::Black);
        assert!(!is_valid_placement(&board, Pos::new(1, 1), Piece::White, 0, 1));
        assert!(is_valid_placement(&board, Pos::new(0, 0), Piece::White, 0, 1));
    }

    #[test]
    fn test_placement_caps_each_color() {
        let board = Board::new();
        assert!(!is_valid_placement(&board, Pos::new(0, 0), Piece::White, 3, 2));
        assert!(is_valid_placement(&board, Pos::new(0, 0), Piece::Black, 3, 2));
        assert!(!is_valid_placement(&board, Pos::new(0, 0), Piece::Black, 2, 3));
        assert!(!is_valid_placement(&board, Pos::new(0, 0), Piece::White, 2, 3));
        assert!(!is_valid_placement(&board, Pos::new(0, 0), Piece::Empty, 0, 0));
    }

    #[test]
    fn test_slide_rules() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Piece::White);
        board.place_stone(Pos::new(1, 0), Piece::Black);

        assert!(is_valid_slide(&board, Pos::new(0, 0), Pos::new(1, 1), Piece::White));
        assert!(is_valid_slide(&board, Pos::new(0, 0), Pos::new(0, 1), Piece::White));
        // Occupied destination
        assert!(!is_valid_slide(&board, Pos::new(0, 0), Pos::new(1, 0), Piece::White));
        // Not adjacent
        assert!(!is_valid_slide(&board, Pos::new(0, 0), Pos::new(2, 2), Piece::White));
        // Opponent's piece
        assert!(!is_valid_slide(&board, Pos::new(1, 0), Pos::new(2, 0), Piece::White));
        // Empty source
        assert!(!is_valid_slide(&board, Pos::new(2, 2), Pos::new(1, 1), Piece::White));
    }
}
