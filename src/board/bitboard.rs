//! 9-bit occupancy masks

use super::{Pos, TOTAL_CELLS};

/// Mask with every board cell set
pub const FULL_MASK: u16 = (1 << TOTAL_CELLS) - 1;

/// Occupancy of one color, bit `i` = cell with index `i` (row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u16,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    pub const fn from_bits(bits: u16) -> Self {
        Self {
            bits: bits & FULL_MASK,
        }
    }

    #[inline]
    pub const fn bits(self) -> u16 {
        self.bits
    }

    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u16 << pos.to_index();
    }

    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.bits &= !(1u16 << pos.to_index());
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Count set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Set bits shared with `mask`
    #[inline]
    pub fn overlap(&self, mask: u16) -> u32 {
        (self.bits & mask).count_ones()
    }

    /// Iterate over set positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard, lowest index first
pub struct BitboardIter {
    bits: u16,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        Some(Pos::from_index(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bb = Bitboard::new();
        let pos = Pos::new(2, 1);
        assert!(!bb.get(pos));
        bb.set(pos);
        assert!(bb.get(pos));
        assert_eq!(bb.count(), 1);
        bb.clear(pos);
        assert!(bb.is_empty());
    }

    #[test]
    fn test_iter_ones_row_major() {
        let mut bb = Bitboard::new();
        bb.set(Pos::new(2, 2));
        bb.set(Pos::new(0, 1));
        bb.set(Pos::new(1, 0));
        let order: Vec<Pos> = bb.iter_ones().collect();
        assert_eq!(order, vec![Pos::new(1, 0), Pos::new(0, 1), Pos::new(2, 2)]);
    }

    #[test]
    fn test_from_bits_masks_off_board() {
        assert_eq!(Bitboard::from_bits(0xFFFF).bits(), FULL_MASK);
        assert_eq!(Bitboard::from_bits(0xFFFF).count(), 9);
    }
}
