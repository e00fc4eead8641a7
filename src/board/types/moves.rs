//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::{Color, Piece};
use super::square::Square;

/// What a move does beyond relocating one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    /// Plain relocation, with or without a capture
    Ordinary,
    /// King and h-file rook castle together
    ShortCastle,
    /// King and a-file rook castle together
    LongCastle,
    /// Pawn reaches the last rank and becomes the given piece
    Promotion(Piece),
    /// Pawn captures the pawn beside it that just advanced two squares
    EnPassant,
}

/// A fully described move.
///
/// Besides the squares, a move records the piece that moved and the piece it
/// captured, which is what undo needs to rebuild the position.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    kind: MoveKind,
    piece: Piece,
    captured: Option<Piece>,
}

impl Move {
    /// Create a null move (used for initialization)
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Move {
            from: Square::A1,
            to: Square::A1,
            kind: MoveKind::Ordinary,
            piece: Piece::Pawn,
            captured: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn new(
        from: Square,
        to: Square,
        kind: MoveKind,
        piece: Piece,
        captured: Option<Piece>,
    ) -> Self {
        Move {
            from,
            to,
            kind,
            piece,
            captured,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    /// The piece that moved (a pawn for promotions)
    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        matches!(self.kind, MoveKind::ShortCastle | MoveKind::LongCastle)
    }

    /// Castling side, if this move castles
    #[inline]
    #[must_use]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self.kind {
            MoveKind::ShortCastle => Some(CastleSide::Short),
            MoveKind::LongCastle => Some(CastleSide::Long),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        matches!(self.kind, MoveKind::Promotion(_))
    }

    /// The promoted-to piece, if this is a promotion
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        match self.kind {
            MoveKind::Promotion(piece) => Some(piece),
            _ => None,
        }
    }

    /// Square of the pawn an en-passant capture by `mover` removes
    #[inline]
    #[must_use]
    pub const fn en_passant_victim(self, mover: Color) -> Option<Square> {
        self.to.offset(-mover.pawn_push())
    }

    /// Square-to-square text (`e1g1`, `a7a8q`), regardless of move kind
    #[must_use]
    pub fn coordinates(self) -> String {
        let mut s = format!("{}{}", self.from, self.to);
        if let Some(promo) = self.promotion() {
            s.push(promo.to_char());
        }
        s
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if let Some(cap) = self.captured {
            write!(f, " x{}", cap.to_char())?;
        }
        match self.kind {
            MoveKind::ShortCastle | MoveKind::LongCastle => write!(f, " castle")?,
            MoveKind::EnPassant => write!(f, " ep")?,
            MoveKind::Ordinary | MoveKind::Promotion(_) => {}
        }
        write!(f, ")")
    }
}

/// Long algebraic text: `e2e4`, `a7a8q`, and `O-O`/`O-O-O` for castles.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::ShortCastle => write!(f, "O-O"),
            MoveKind::LongCastle => write!(f, "O-O-O"),
            MoveKind::Ordinary | MoveKind::EnPassant | MoveKind::Promotion(_) => {
                write!(f, "{}", self.coordinates())
            }
        }
    }
}

/// Room reserved up front; ordinary positions never need more.
const RESERVED_MOVES: usize = 256;
pub(crate) const EMPTY_MOVE: Move = Move::null();

/// List of generated moves.
///
/// The buffer is sized for any ordinary position and grows past that for
/// the crowded placements a position string can still describe.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(RESERVED_MOVES),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.as_slice().first().copied()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }

    /// Move `mv` to the front, keeping the relative order of the rest.
    /// Returns false if the list does not contain it.
    pub(crate) fn promote_to_front(&mut self, mv: Move) -> bool {
        match self.as_slice().iter().position(|m| *m == mv) {
            Some(idx) => {
                self.as_mut_slice()[..=idx].rotate_right(1);
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.moves.len(),
            "MoveList index {} out of bounds (len {})",
            idx,
            self.moves.len()
        );
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_display_forms() {
        let push = Move::new(sq("e2"), sq("e4"), MoveKind::Ordinary, Piece::Pawn, None);
        assert_eq!(push.to_string(), "e2e4");

        let castle = Move::new(
            Square::E1,
            Square::G1,
            MoveKind::ShortCastle,
            Piece::King,
            None,
        );
        assert_eq!(castle.to_string(), "O-O");
        assert_eq!(castle.coordinates(), "e1g1");

        let long = Move::new(
            Square::E8,
            Square::C8,
            MoveKind::LongCastle,
            Piece::King,
            None,
        );
        assert_eq!(long.to_string(), "O-O-O");

        let promo = Move::new(
            sq("a7"),
            Square::A8,
            MoveKind::Promotion(Piece::Queen),
            Piece::Pawn,
            None,
        );
        assert_eq!(promo.to_string(), "a7a8q");
        assert!(promo.is_promotion());
        assert!(!promo.is_capture());
    }

    #[test]
    fn test_promote_to_front_keeps_order() {
        let mut list = MoveList::new();
        let moves: Vec<Move> = ["a3", "b3", "c3", "d3"]
            .iter()
            .map(|to| Move::new(sq("a2"), sq(to), MoveKind::Ordinary, Piece::Pawn, None))
            .collect();
        for m in &moves {
            list.push(*m);
        }
        assert!(list.promote_to_front(moves[2]));
        assert_eq!(list.as_slice(), &[moves[2], moves[0], moves[1], moves[3]]);
        assert!(!list.promote_to_front(Move::null()));
    }

    #[test]
    fn test_list_grows_past_reserved_room() {
        let mut list = MoveList::new();
        let m = Move::new(sq("a2"), sq("a3"), MoveKind::Ordinary, Piece::Pawn, None);
        for _ in 0..RESERVED_MOVES + 44 {
            list.push(m);
        }
        assert_eq!(list.len(), 300);
        assert_eq!(list[299], m);
    }
}
