use super::MoveGenerator;
use crate::board::{Move, MoveKind, Piece, Square};

impl MoveGenerator<'_> {
    /// Knight and slider moves. Single-step pieces stop after one square;
    /// sliders run until blocked and stop after a capture.
    pub(super) fn piece_moves(&mut self, from: Square, piece: Piece, deltas: &[i8], slides: bool) {
        for &delta in deltas {
            if !self.pin_allows(from, delta) {
                continue;
            }
            let mut current = from;
            while let Some(to) = current.offset(delta) {
                current = to;
                let target = self.board.piece_at(to);
                if matches!(target, Some((color, _)) if color == self.us) {
                    break;
                }
                if self.resolves_check(to) {
                    let captured = target.map(|(_, p)| p);
                    self.push(Move::new(from, to, MoveKind::Ordinary, piece, captured));
                }
                if target.is_some() || !slides {
                    break;
                }
            }
        }
    }
}
