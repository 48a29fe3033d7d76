//! Static board topology: slide adjacency and winning lines
//!
//! The morris board is drawn as a 3x3 grid of points joined along the rows,
//! the columns and the two diagonals. Diagonal moves therefore only exist
//! between a corner and the center.

use super::{Pos, TOTAL_CELLS};

const fn p(x: u8, y: u8) -> Pos {
    Pos::new(x, y)
}

/// Slide targets for every position, indexed by `Pos::to_index`.
///
/// Neighbor order is significant: move generation walks it as stored.
pub const ADJACENCY: [&[Pos]; TOTAL_CELLS] = [
    // y = 0
    &[p(0, 1), p(1, 0), p(1, 1)],
    &[p(0, 0), p(2, 0), p(1, 1)],
    &[p(1, 0), p(1, 1), p(2, 1)],
    // y = 1
    &[p(0, 0), p(0, 2), p(1, 1)],
    &[
        p(0, 0),
        p(0, 1),
        p(0, 2),
        p(1, 0),
        p(1, 2),
        p(2, 0),
        p(2, 1),
        p(2, 2),
    ],
    &[p(1, 1), p(2, 0), p(2, 2)],
    // y = 2
    &[p(0, 1), p(1, 1), p(1, 2)],
    &[p(0, 2), p(1, 1), p(2, 2)],
    &[p(1, 1), p(1, 2), p(2, 1)],
];

/// The 8 winning lines in scan order: rows, columns, then both diagonals.
pub const WIN_LINES: [[Pos; 3]; 8] = [
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(2, 0), p(1, 1), p(0, 2)],
];

/// `WIN_LINES` as occupancy masks, same order.
pub const WIN_MASKS: [u16; 8] = {
    let mut masks = [0u16; 8];
    let mut i = 0;
    while i < WIN_LINES.len() {
        let mut j = 0;
        while j < 3 {
            masks[i] |= 1 << WIN_LINES[i][j].to_index();
            j += 1;
        }
        i += 1;
    }
    masks
};

const ADJACENCY_MASKS: [u16; TOTAL_CELLS] = {
    let mut masks = [0u16; TOTAL_CELLS];
    let mut i = 0;
    while i < TOTAL_CELLS {
        let neighbors = ADJACENCY[i];
        let mut j = 0;
        while j < neighbors.len() {
            masks[i] |= 1 << neighbors[j].to_index();
            j += 1;
        }
        i += 1;
    }
    masks
};

/// Neighbors of `pos` in table order
#[inline]
pub fn adjacent(pos: Pos) -> &'static [Pos] {
    ADJACENCY[pos.to_index()]
}

#[inline]
pub fn is_adjacent(from: Pos, to: Pos) -> bool {
    (ADJACENCY_MASKS[from.to_index()] >> to.to_index()) & 1 == 1
}
