//! Board structure with per-color occupancy

use std::fmt;

use super::bitboard::{Bitboard, FULL_MASK};
use super::{Piece, Pos, BOARD_SIZE};

/// Glyph template for the text board. Cell (x, y) lives at row `2y`, column `2x`.
const VISUAL: [&str; 5] = ["*─*─*", "|\\|/|", "*─*─*", "|/|\\|", "*─*─*"];

/// 3x3 game board. Cheap to copy, which the search relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// White pieces
    pub white: Bitboard,
    /// Black pieces
    pub black: Bitboard,
}

impl Board {
    pub const fn new() -> Self {
        Self {
            white: Bitboard::new(),
            black: Bitboard::new(),
        }
    }

    /// Get piece at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Piece {
        if self.white.get(pos) {
            Piece::White
        } else if self.black.get(pos) {
            Piece::Black
        } else {
            Piece::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.white.get(pos) && !self.black.get(pos)
    }

    /// Put a piece on a cell, replacing whatever was there
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, piece: Piece) {
        self.remove_stone(pos);
        match piece {
            Piece::White => self.white.set(pos),
            Piece::Black => self.black.set(pos),
            Piece::Empty => {}
        }
    }

    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.white.clear(pos);
        self.black.clear(pos);
    }

    /// Move whatever sits on `from` to `to` (no legality checks)
    #[inline]
    pub fn slide(&mut self, from: Pos, to: Pos) {
        let piece = self.get(from);
        self.remove_stone(from);
        self.place_stone(to, piece);
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, piece: Piece) -> Option<&Bitboard> {
        match piece {
            Piece::White => Some(&self.white),
            Piece::Black => Some(&self.black),
            Piece::Empty => None,
        }
    }

    /// Number of cells holding `piece`
    #[inline]
    pub fn count(&self, piece: Piece) -> u8 {
        match piece {
            Piece::White => self.white.count() as u8,
            Piece::Black => self.black.count() as u8,
            Piece::Empty => self.empty_cells().count() as u8,
        }
    }

    #[inline]
    pub fn empty_cells(&self) -> Bitboard {
        Bitboard::from_bits(!(self.white.bits() | self.black.bits()) & FULL_MASK)
    }

    /// Grid view indexed `[y][x]`
    pub fn rows(&self) -> [[Piece; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[Piece::Empty; BOARD_SIZE]; BOARD_SIZE];
        for pos in Pos::all() {
            rows[pos.y as usize][pos.x as usize] = self.get(pos);
        }
        rows
    }

    /// Render the board on the glyph template, one line per template row
    pub fn render(&self) -> Vec<String> {
        VISUAL
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, glyph)| {
                        if row % 2 == 0 && col % 2 == 0 {
                            let pos = Pos::new((col / 2) as u8, (row / 2) as u8);
                            match self.get(pos) {
                                Piece::Empty => glyph,
                                piece => piece.symbol(),
                            }
                        } else {
                            glyph
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
