//! Cell sets for Isolation boards.
//!
//! A bitboard is a 128-bit integer where each bit represents one cell.
//! Bit `row * width + col` holds the cell at `(row, col)`, so the layout
//! depends on the width of the board that owns it.

use std::ops::{BitAnd, Not};

/// Largest number of cells a board may have.
pub const MAX_CELLS: usize = 128;

/// A set of cells on an Isolation board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u128);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Bitboard with the first `cells` bits set.
    #[inline(always)]
    pub const fn full(cells: usize) -> Self {
        if cells >= MAX_CELLS {
            Bitboard(!0)
        } else {
            Bitboard((1u128 << cells) - 1)
        }
    }

    #[inline(always)]
    pub const fn contains(self, idx: usize) -> bool {
        (self.0 & (1u128 << idx)) != 0
    }

    #[inline(always)]
    pub fn set(&mut self, idx: usize) {
        self.0 |= 1u128 << idx;
    }

    /// Count the number of set bits (population count).
    #[inline(always)]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline(always)]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline(always)]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

#[cfg(test)]
#[path = "bitboard_tests.rs"]
mod bitboard_tests;
