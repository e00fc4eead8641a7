//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

/// Castling side. `Short` is toward the h-file, `Long` toward the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Short,
    Long,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Short, CastleSide::Long];

    #[inline]
    const fn index(self) -> usize {
        match self {
            CastleSide::Short => 0,
            CastleSide::Long => 1,
        }
    }

    /// Where the rook for this side starts
    #[inline]
    #[must_use]
    pub const fn rook_home(self, color: Color) -> Square {
        ROOK_HOMES[color.index()][self.index()]
    }

    /// Where the king lands
    #[inline]
    #[must_use]
    pub const fn king_target(self, color: Color) -> Square {
        match self {
            CastleSide::Short => Square::new(color.back_rank(), 6),
            CastleSide::Long => Square::new(color.back_rank(), 2),
        }
    }

    /// Where the rook lands
    #[inline]
    #[must_use]
    pub const fn rook_target(self, color: Color) -> Square {
        match self {
            CastleSide::Short => Square::new(color.back_rank(), 5),
            CastleSide::Long => Square::new(color.back_rank(), 3),
        }
    }
}

/// Home square of the king for each color
#[inline]
#[must_use]
pub const fn king_home(color: Color) -> Square {
    Square::new(color.back_rank(), 4)
}

/// Rook origins per color, indexed `[color][short, long]`.
const ROOK_HOMES: [[Square; 2]; 2] = [[Square::H1, Square::A1], [Square::H8, Square::A8]];

const SHORT: u8 = 1;
const LONG: u8 = 2;

/// Castling rights for both colors, two bits per color.
///
/// Bits 0-1 hold White's rights and bits 2-3 Black's; within a color,
/// bit 0 is the short side and bit 1 the long side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// Both colors may castle on both sides
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(0b1111)
    }

    #[inline]
    const fn bit(color: Color, side: CastleSide) -> u8 {
        let side_bit = match side {
            CastleSide::Short => SHORT,
            CastleSide::Long => LONG,
        };
        side_bit << (2 * color.index())
    }

    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit(color, side) != 0
    }

    #[inline]
    pub fn set(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::bit(color, side);
    }

    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit(color, side);
    }

    /// Drop both rights of one color
    #[inline]
    pub fn clear(&mut self, color: Color) {
        self.0 &= !((SHORT | LONG) << (2 * color.index()));
    }

    /// Rights of one color as a value 0-3 (none, short, long, both)
    #[inline]
    #[must_use]
    pub const fn for_color(self, color: Color) -> usize {
        ((self.0 >> (2 * color.index())) & (SHORT | LONG)) as usize
    }

    /// Clear the right tied to a rook home square, if `square` is one.
    pub(crate) fn remove_for_rook_square(&mut self, color: Color, square: Square) {
        for side in CastleSide::BOTH {
            if side.rook_home(color) == square {
                self.remove(color, side);
            }
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// FEN field representation (`KQkq` subset or `-`)
    #[must_use]
    pub fn to_fen(self) -> String {
        let mut s = String::new();
        for (color, short, long) in [(Color::White, 'K', 'Q'), (Color::Black, 'k', 'q')] {
            if self.has(color, CastleSide::Short) {
                s.push(short);
            }
            if self.has(color, CastleSide::Long) {
                s.push(long);
            }
        }
        if s.is_empty() {
            s.push('-');
        }
        s
    }
}
