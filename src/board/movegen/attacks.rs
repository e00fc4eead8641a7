//! Attack detection by scanning outward from the attacked square.

use crate::board::{Board, Color, Piece, Square};

pub(crate) const KNIGHT_DELTAS: [i8; 8] = [33, 31, 18, 14, -14, -18, -31, -33];
pub(crate) const STRAIGHT_DELTAS: [i8; 4] = [16, -16, 1, -1];
pub(crate) const DIAGONAL_DELTAS: [i8; 4] = [17, 15, -15, -17];
pub(crate) const KING_DELTAS: [i8; 8] = [16, -16, 1, -1, 17, 15, -15, -17];

#[inline]
pub(crate) const fn is_diagonal(delta: i8) -> bool {
    matches!(delta, 17 | 15 | -15 | -17)
}

/// Capture directions of a pawn of `color`
#[inline]
pub(crate) const fn pawn_captures(color: Color) -> [i8; 2] {
    let push = color.pawn_push();
    [push - 1, push + 1]
}

/// Whether `piece` of `color`, found `distance` steps from a square along
/// `delta`, attacks that square. Knights are scanned separately.
#[inline]
pub(crate) fn reaches(piece: Piece, color: Color, delta: i8, distance: u8) -> bool {
    match piece {
        Piece::Knight => false,
        Piece::King => distance == 1,
        Piece::Pawn => distance == 1 && pawn_captures(color).contains(&-delta),
        Piece::Bishop | Piece::Rook | Piece::Queen => {
            if is_diagonal(delta) {
                piece.attacks_diagonally()
            } else {
                piece.attacks_straight()
            }
        }
    }
}

/// Whether `by` attacks `target`, reading square contents through `at`.
///
/// Passing a lookup that hides or adds pieces lets callers ask about
/// positions that differ from the board, such as the king having stepped
/// off its square.
pub(crate) fn is_attacked_via<F>(target: Square, by: Color, at: F) -> bool
where
    F: Fn(Square) -> Option<(Color, Piece)>,
{
    let knight_check = KNIGHT_DELTAS
        .iter()
        .filter_map(|&delta| target.offset(delta))
        .any(|sq| at(sq) == Some((by, Piece::Knight)));
    if knight_check {
        return true;
    }

    for delta in KING_DELTAS {
        let mut current = target;
        let mut distance = 0;
        while let Some(sq) = current.offset(delta) {
            current = sq;
            distance += 1;
            if let Some((color, piece)) = at(sq) {
                if color == by && reaches(piece, by, delta, distance) {
                    return true;
                }
                break;
            }
        }
    }
    false
}

impl Board {
    /// Whether `by` attacks `sq` in the current position
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        is_attacked_via(sq, by, |s| self.piece_at(s))
    }

    /// Whether `color`'s king is attacked
    #[must_use]
    pub fn is_king_attacked(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }

    /// Whether the side to move is in check.
    ///
    /// Scans only the knight pattern and the eight rays around the king,
    /// without building the move list.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.is_king_attacked(self.side_to_move)
    }
}
