//! Static evaluation of board positions
//!
//! This module provides the evaluation function for the minimax search.
//! It evaluates board positions based on:
//! - Win/loss detection
//! - Open twos (two of a color on a line whose third cell is empty)

use crate::board::{Board, WIN_MASKS};
use crate::rules::check_winner;
use crate::Piece;

use super::patterns::{line_score, PatternScore};

/// Evaluate the board from White's perspective.
///
/// Returns:
/// - `PatternScore::WIN` if White has three in a row
/// - `-PatternScore::WIN` if Black has three in a row
/// - otherwise the number of White open twos minus Black open twos
///
/// Does not look ahead.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    match check_winner(board) {
        Some(Piece::White) => return PatternScore::WIN,
        Some(Piece::Black) => return -PatternScore::WIN,
        _ => {}
    }

    WIN_MASKS
        .iter()
        .map(|&mask| line_score(board.white.overlap(mask), board.black.overlap(mask)))
        .sum()
}
