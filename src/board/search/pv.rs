use super::constants::MAX_PLY;
use crate::board::{Move, EMPTY_MOVE};

/// Triangular principal-variation table.
///
/// Row `ply` holds the best line found from that ply, in slots
/// `ply..len[ply]`. A node copies its child's row behind its own move.
pub(crate) struct PvTable {
    moves: Box<[[Move; MAX_PLY]; MAX_PLY]>,
    len: [usize; MAX_PLY],
}

impl PvTable {
    pub(crate) fn new() -> Self {
        PvTable {
            moves: Box::new([[EMPTY_MOVE; MAX_PLY]; MAX_PLY]),
            len: [0; MAX_PLY],
        }
    }

    /// Start an empty line at `ply`
    #[inline]
    pub(crate) fn clear(&mut self, ply: usize) {
        if ply < MAX_PLY {
            self.len[ply] = ply;
        }
    }

    /// Record `m` as best at `ply`, followed by the child's line.
    pub(crate) fn update(&mut self, ply: usize, m: Move) {
        if ply + 1 >= MAX_PLY {
            return;
        }
        let child_len = self.len[ply + 1].max(ply + 1);
        self.moves[ply][ply] = m;
        for i in ply + 1..child_len {
            self.moves[ply][i] = self.moves[ply + 1][i];
        }
        self.len[ply] = child_len;
    }

    /// The line from the root
    pub(crate) fn line(&self) -> &[Move] {
        &self.moves[0][..self.len[0]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{MoveKind, Piece, Square};

    fn mv(from: Square, to: Square) -> Move {
        Move::new(from, to, MoveKind::Ordinary, Piece::Rook, None)
    }

    #[test]
    fn test_child_line_is_copied_up() {
        let mut pv = PvTable::new();
        let a = mv(Square::A1, Square::A8);
        let b = mv(Square::H8, Square::H1);
        let c = mv(Square::B1, Square::B8);

        pv.clear(0);
        pv.clear(1);
        pv.clear(2);
        pv.update(2, c);
        pv.update(1, b);
        pv.update(0, a);
        assert_eq!(pv.line(), &[a, b, c]);

        // A fresh leaf below shortens the line
        pv.clear(1);
        pv.update(0, b);
        assert_eq!(pv.line(), &[b]);
    }

    #[test]
    fn test_last_ply_is_ignored() {
        let mut pv = PvTable::new();
        pv.clear(MAX_PLY - 1);
        pv.update(MAX_PLY - 1, mv(Square::A1, Square::A8));
        pv.clear(0);
        assert!(pv.line().is_empty());
    }
}
