use super::error::UndoError;
use super::{Board, Color, HistoryItem, Move, MoveKind, Piece};

impl Board {
    /// Apply a legal move.
    ///
    /// The move must come from this position's legal move list; nothing here
    /// checks legality and an illegal move leaves the board inconsistent.
    pub fn make_move(&mut self, m: Move) {
        let us = self.side_to_move;
        let them = us.opponent();

        self.history.push(HistoryItem {
            mv: m,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            hash: self.hash,
        });

        let mut hash = self.keys.incremental_update(self.hash, &m, us);
        let old_rights = self.castling_rights;
        hash ^= self.keys.en_passant(self.en_passant_target);
        self.en_passant_target = None;

        self.clear_square(m.from());
        match m.kind() {
            MoveKind::Ordinary => {
                self.set_piece(m.to(), us, m.piece());
                if m.piece() == Piece::Pawn && m.from().rank().abs_diff(m.to().rank()) == 2 {
                    self.en_passant_target = m.from().offset(us.pawn_push());
                }
            }
            MoveKind::Promotion(piece) => {
                self.set_piece(m.to(), us, piece);
            }
            MoveKind::EnPassant => {
                self.set_piece(m.to(), us, Piece::Pawn);
                if let Some(victim) = m.en_passant_victim(us) {
                    self.clear_square(victim);
                }
            }
            MoveKind::ShortCastle | MoveKind::LongCastle => {
                self.set_piece(m.to(), us, Piece::King);
                if let Some(side) = m.castle_side() {
                    self.clear_square(side.rook_home(us));
                    self.set_piece(side.rook_target(us), us, Piece::Rook);
                }
            }
        }

        match m.piece() {
            Piece::King => self.castling_rights.clear(us),
            Piece::Rook => self.castling_rights.remove_for_rook_square(us, m.from()),
            _ => {}
        }
        if m.captured() == Some(Piece::Rook) {
            self.castling_rights.remove_for_rook_square(them, m.to());
        }
        if self.castling_rights != old_rights {
            for color in Color::BOTH {
                hash ^= self.keys.castling(color, old_rights.for_color(color));
                hash ^= self.keys.castling(color, self.castling_rights.for_color(color));
            }
        }
        hash ^= self.keys.en_passant(self.en_passant_target);
        hash ^= self.keys.black_to_move();

        if m.piece() == Piece::Pawn || m.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if us == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = them;
        self.hash = hash;
    }

    /// Take back the last move made.
    ///
    /// Returns the move that was undone, or `UndoError::EmptyHistory` (leaving
    /// the board untouched) when there is nothing to take back.
    pub fn undo_move(&mut self) -> Result<Move, UndoError> {
        let item = self.history.pop().ok_or(UndoError::EmptyHistory)?;
        self.restore(&item);
        Ok(item.mv)
    }

    /// Take back the last move where a preceding `make_move` is guaranteed.
    #[inline]
    pub(crate) fn unmake_move(&mut self) {
        if let Some(item) = self.history.pop() {
            self.restore(&item);
        }
    }

    fn restore(&mut self, item: &HistoryItem) {
        let m = item.mv;
        let us = self.side_to_move.opponent();
        let them = self.side_to_move;

        match m.kind() {
            MoveKind::Ordinary | MoveKind::Promotion(_) => {
                self.set_piece(m.from(), us, m.piece());
                match m.captured() {
                    Some(captured) => self.set_piece(m.to(), them, captured),
                    None => self.clear_square(m.to()),
                }
            }
            MoveKind::EnPassant => {
                self.set_piece(m.from(), us, Piece::Pawn);
                self.clear_square(m.to());
                if let Some(victim) = m.en_passant_victim(us) {
                    self.set_piece(victim, them, Piece::Pawn);
                }
            }
            MoveKind::ShortCastle | MoveKind::LongCastle => {
                self.set_piece(m.from(), us, Piece::King);
                self.clear_square(m.to());
                if let Some(side) = m.castle_side() {
                    self.clear_square(side.rook_target(us));
                    self.set_piece(side.rook_home(us), us, Piece::Rook);
                }
            }
        }

        self.side_to_move = us;
        self.castling_rights = item.castling_rights;
        self.en_passant_target = item.en_passant_target;
        self.halfmove_clock = item.halfmove_clock;
        self.fullmove_number = item.fullmove_number;
        self.hash = item.hash;
    }
}
