//! Board representation for Three Men's Morris

pub mod bitboard;
pub mod board;
pub mod topology;


use serde::{Deserialize, Serialize};

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;
pub use topology::{adjacent, is_adjacent, ADJACENCY, WIN_LINES, WIN_MASKS};

/// Board size (3x3)
pub const BOARD_SIZE: usize = 3;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 9

/// Pieces each side places before the movement phase begins
pub const PIECES_PER_SIDE: u8 = 3;

/// Cell values. `Empty` doubles as "no color" for the side-less helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    Empty,
    White,
    Black,
}

impl Piece {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Piece {
        match self {
            Piece::White => Piece::Black,
            Piece::Black => Piece::White,
            Piece::Empty => Piece::Empty,
        }
    }

    /// Glyph used by the ASCII board
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Piece::White => 'W',
            Piece::Black => 'B',
            Piece::Empty => '*',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Piece::White => "White",
            Piece::Black => "Black",
            Piece::Empty => "Empty",
        }
    }
}

/// Position on the board. `x` is the column, `y` the row.
///
/// Deserialization rejects coordinates off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPos")]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

/// Unchecked wire form of `Pos`
#[derive(Deserialize)]
struct RawPos {
    x: u8,
    y: u8,
}

impl TryFrom<RawPos> for Pos {
    type Error = String;

    fn try_from(raw: RawPos) -> Result<Self, Self::Error> {
        Pos::try_new(i32::from(raw.x), i32::from(raw.y))
            .ok_or_else(|| format!("position ({}, {}) is off the board", raw.x, raw.y))
    }
}

impl Pos {
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < BOARD_SIZE as u8 && y < BOARD_SIZE as u8);
        Self { x, y }
    }

    /// Build a position from raw caller coordinates, rejecting anything off the board.
    #[inline]
    pub fn try_new(x: i32, y: i32) -> Option<Self> {
        if Self::is_valid(x, y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn to_index(self) -> usize {
        self.y as usize * BOARD_SIZE + self.x as usize
    }

    #[inline]
    pub const fn from_index(idx: usize) -> Self {
        Self {
            x: (idx % BOARD_SIZE) as u8,
            y: (idx / BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32
    }

    /// All 9 positions in row-major order (y outer, x inner).
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
