use super::{is_attacked_via, MoveGenerator, KING_DELTAS};
use crate::board::{king_home, CastleSide, Move, MoveKind, Piece, Square};

impl MoveGenerator<'_> {
    pub(super) fn king_moves(&mut self, king: Square) {
        for delta in KING_DELTAS {
            let Some(to) = king.offset(delta) else {
                continue;
            };
            let target = self.board.piece_at(to);
            if matches!(target, Some((color, _)) if color == self.us) {
                continue;
            }
            if self.attacked_behind_king(to) {
                continue;
            }
            let captured = target.map(|(_, p)| p);
            self.push(Move::new(king, to, MoveKind::Ordinary, Piece::King, captured));
        }
    }

    /// Castling, only called when not in check.
    pub(super) fn castling_moves(&mut self) {
        let us = self.us;
        let back = us.back_rank();
        for side in CastleSide::BOTH {
            if !self.board.castling_pieces_home(us, side) {
                continue;
            }
            let (between, path): (&[u8], &[u8]) = match side {
                CastleSide::Short => (&[5, 6], &[5, 6]),
                CastleSide::Long => (&[1, 2, 3], &[3, 2]),
            };
            if between
                .iter()
                .any(|&file| !self.board.is_empty(Square::new(back, file)))
            {
                continue;
            }
            if path
                .iter()
                .any(|&file| self.attacked_behind_king(Square::new(back, file)))
            {
                continue;
            }
            let kind = match side {
                CastleSide::Short => MoveKind::ShortCastle,
                CastleSide::Long => MoveKind::LongCastle,
            };
            self.push(Move::new(
                king_home(us),
                side.king_target(us),
                kind,
                Piece::King,
                None,
            ));
        }
    }

    /// Whether the opponent attacks `sq` once our king has left its square,
    /// so sliders checking the king also cover the squares behind it.
    fn attacked_behind_king(&self, sq: Square) -> bool {
        let king = self.king;
        is_attacked_via(sq, self.us.opponent(), |s| {
            if Some(s) == king {
                None
            } else {
                self.board.piece_at(s)
            }
        })
    }
}
