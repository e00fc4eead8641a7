//! 0x88 square representation.
//!
//! The board is a 16x8 grid of 128 cells where only the left half of each
//! rank is playable. A cell index is `rank * 16 + file`; any index with a bit
//! of `0x88` set lies off the board, so one mask test catches a step that
//! leaves the board on either axis.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of cells in the padded board array.
pub const BOARD_CELLS: usize = 128;

/// Mask of the bits that are set on every off-board cell.
const OFF_BOARD: u8 = 0x88;

/// A playable square on the 0x88 board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square::new(0, 0);
    pub const B1: Square = Square::new(0, 1);
    pub const C1: Square = Square::new(0, 2);
    pub const D1: Square = Square::new(0, 3);
    pub const E1: Square = Square::new(0, 4);
    pub const F1: Square = Square::new(0, 5);
    pub const G1: Square = Square::new(0, 6);
    pub const H1: Square = Square::new(0, 7);
    pub const A8: Square = Square::new(7, 0);
    pub const B8: Square = Square::new(7, 1);
    pub const C8: Square = Square::new(7, 2);
    pub const D8: Square = Square::new(7, 3);
    pub const E8: Square = Square::new(7, 4);
    pub const F8: Square = Square::new(7, 5);
    pub const G8: Square = Square::new(7, 6);
    pub const H8: Square = Square::new(7, 7);

    /// Build a square from rank and file (both 0-7).
    ///
    /// Out-of-range inputs are a caller bug; use `try_from` for untrusted data.
    #[inline]
    #[must_use]
    pub const fn new(rank: u8, file: u8) -> Self {
        debug_assert!(rank < 8 && file < 8);
        Square((rank << 4) | file)
    }

    /// Build a square from a raw 0x88 cell index, if it is playable
    #[inline]
    #[must_use]
    pub const fn from_cell(cell: u8) -> Option<Self> {
        if cell & OFF_BOARD == 0 {
            Some(Square(cell))
        } else {
            None
        }
    }

    /// Rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 >> 4
    }

    /// File (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 & 7
    }

    /// Index into the 128-cell board array
    #[inline]
    #[must_use]
    pub const fn cell(self) -> usize {
        self.0 as usize
    }

    /// Dense index 0-63 (a1=0, b1=1, ..., h8=63), used for piece-square tables
    #[inline]
    #[must_use]
    pub const fn index64(self) -> usize {
        (self.rank() as usize) * 8 + self.file() as usize
    }

    /// Mirror the square across the middle of the board (a1 <-> a8)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(self.0 ^ 0x70)
    }

    /// Step by a 0x88 delta, returning `None` when the step leaves the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: i8) -> Option<Self> {
        // Negative results wrap into the high bit, which the mask catches too.
        Square::from_cell(self.0.wrapping_add(delta as u8))
    }

    /// Iterate over all 64 playable squares, a1 first
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_CELLS as u8).filter_map(Square::from_cell)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() + b'a') as char, self.rank() + 1)
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (u8, u8)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square::new(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a',
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'1',
            _ => return Err(invalid()),
        };
        Ok(Square::new(rank, file))
    }
}
