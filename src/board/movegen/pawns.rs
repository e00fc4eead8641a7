use super::{is_attacked_via, pawn_captures, MoveGenerator};
use crate::board::{Move, MoveKind, Piece, Square, PROMOTION_PIECES};

impl MoveGenerator<'_> {
    pub(super) fn pawn_moves(&mut self, from: Square) {
        let us = self.us;
        let push = us.pawn_push();

        if self.pin_allows(from, push) {
            if let Some(one) = from.offset(push).filter(|&sq| self.board.is_empty(sq)) {
                if self.resolves_check(one) {
                    self.push_pawn_move(from, one, None);
                }
                if from.rank() == us.pawn_start_rank() {
                    if let Some(two) = one.offset(push).filter(|&sq| self.board.is_empty(sq)) {
                        if self.resolves_check(two) {
                            self.push(Move::new(from, two, MoveKind::Ordinary, Piece::Pawn, None));
                        }
                    }
                }
            }
        }

        for delta in pawn_captures(us) {
            let Some(to) = from.offset(delta) else {
                continue;
            };
            match self.board.piece_at(to) {
                Some((color, victim)) if color != us => {
                    if self.pin_allows(from, delta) && self.resolves_check(to) {
                        self.push_pawn_move(from, to, Some(victim));
                    }
                }
                None if self.board.en_passant_target() == Some(to) => {
                    let m = Move::new(from, to, MoveKind::EnPassant, Piece::Pawn, Some(Piece::Pawn));
                    if self.en_passant_is_safe(m) {
                        self.push(m);
                    }
                }
                _ => {}
            }
        }
    }

    /// Push a pawn move, expanding it into promotions on the last rank.
    fn push_pawn_move(&mut self, from: Square, to: Square, captured: Option<Piece>) {
        if to.rank() == self.us.promotion_rank() {
            for piece in PROMOTION_PIECES {
                self.push(Move::new(
                    from,
                    to,
                    MoveKind::Promotion(piece),
                    Piece::Pawn,
                    captured,
                ));
            }
        } else {
            self.push(Move::new(from, to, MoveKind::Ordinary, Piece::Pawn, captured));
        }
    }

    /// Play the capture on a virtual board and test the king.
    ///
    /// En passant empties two squares on the capturing pawn's rank, so it
    /// can expose the king along that rank where no single pinned piece
    /// exists. It can also remove a pawn that is itself giving check.
    fn en_passant_is_safe(&self, m: Move) -> bool {
        let them = self.us.opponent();
        let Some(victim) = m.en_passant_victim(self.us) else {
            return false;
        };
        if self.board.piece_at(victim) != Some((them, Piece::Pawn)) {
            return false;
        }
        let Some(king) = self.king else {
            return true;
        };
        let us = self.us;
        !is_attacked_via(king, them, |sq| {
            if sq == m.from() || sq == victim {
                None
            } else if sq == m.to() {
                Some((us, Piece::Pawn))
            } else {
                self.board.piece_at(sq)
            }
        })
    }
}
