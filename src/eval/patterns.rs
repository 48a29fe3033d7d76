//! Pattern scores for morris evaluation

/// Pattern scores for evaluation.
///
/// Scores are always from White's point of view: positive favors White,
/// negative favors Black.
pub struct PatternScore;

impl PatternScore {
    /// Three in a row - game over
    pub const WIN: i32 = 100_000;
    /// Two of a color plus an empty cell on one line: an open threat
    pub const OPEN_TWO: i32 = 1;
}

/// Signed weight of a single line given how many cells each color holds on it.
///
/// Only the "two plus a hole" shape scores; a full line is a win and is
/// handled before this is consulted.
#[inline]
pub fn line_score(white_on_line: u32, black_on_line: u32) -> i32 {
    match (white_on_line, black_on_line) {
        (2, 0) => PatternScore::OPEN_TWO,
        (0, 2) => -PatternScore::OPEN_TWO,
        _ => 0,
    }
}
