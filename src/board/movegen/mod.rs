//! Legal move generation.
//!
//! Generation starts by counting the checks against the side to move and
//! recording pinned pieces. With two checkers only the king moves; with one,
//! every other move must land on a square that captures the checker or
//! blocks its ray. Pins restrict a piece to the line through its king. The
//! result is the exact legal move set, with no make/unmake verification.

mod attacks;
mod kings;
mod pawns;
mod pieces;

pub(crate) use attacks::{
    is_attacked_via, pawn_captures, DIAGONAL_DELTAS, KING_DELTAS, KNIGHT_DELTAS, STRAIGHT_DELTAS,
};

use super::{Board, Color, Move, MoveList, Piece, Square, BOARD_CELLS};

/// Builds the legal moves of one position.
pub struct MoveGenerator<'a> {
    board: &'a Board,
    us: Color,
    king: Option<Square>,
    checkers: u8,
    // Squares a non-king move may end on while in single check
    legal_endings: [bool; BOARD_CELLS],
    // Ray direction a pinned piece is confined to, 0 if unpinned
    pins: [i8; BOARD_CELLS],
    moves: MoveList,
}

impl<'a> MoveGenerator<'a> {
    /// Scan the position for checks and pins.
    #[must_use]
    pub fn new(board: &'a Board) -> Self {
        let us = board.side_to_move();
        let mut generator = MoveGenerator {
            board,
            us,
            king: board.king_square(us),
            checkers: 0,
            legal_endings: [false; BOARD_CELLS],
            pins: [0; BOARD_CELLS],
            moves: MoveList::new(),
        };
        if let Some(king) = generator.king {
            generator.scan_threats(king);
        }
        generator
    }

    /// Whether the side to move is in check
    #[inline]
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.checkers > 0
    }

    /// Number of pieces giving check (0, 1 or 2)
    #[inline]
    #[must_use]
    pub fn checkers(&self) -> usize {
        self.checkers as usize
    }

    /// Produce the legal moves, most promising first.
    #[must_use]
    pub fn generate(mut self) -> MoveList {
        if let Some(king) = self.king {
            self.king_moves(king);
            if self.checkers == 0 {
                self.castling_moves();
            }
        }

        if self.checkers < 2 {
            for from in Square::all() {
                match self.board.piece_at(from) {
                    Some((color, piece)) if color == self.us => match piece {
                        Piece::Pawn => self.pawn_moves(from),
                        Piece::Knight => self.piece_moves(from, piece, &KNIGHT_DELTAS, false),
                        Piece::Bishop => self.piece_moves(from, piece, &DIAGONAL_DELTAS, true),
                        Piece::Rook => self.piece_moves(from, piece, &STRAIGHT_DELTAS, true),
                        Piece::Queen => self.piece_moves(from, piece, &KING_DELTAS, true),
                        Piece::King => {}
                    },
                    _ => {}
                }
            }
        }

        self.order_moves();
        self.moves
    }

    /// Count checks and record pins around `king`.
    fn scan_threats(&mut self, king: Square) {
        let them = self.us.opponent();

        // At most one knight can give check
        let board = self.board;
        let knight = KNIGHT_DELTAS
            .iter()
            .filter_map(|&delta| king.offset(delta))
            .find(|&sq| board.piece_at(sq) == Some((them, Piece::Knight)));
        if let Some(sq) = knight {
            self.checkers += 1;
            self.legal_endings[sq.cell()] = true;
        }

        for delta in KING_DELTAS {
            let mut shield: Option<Square> = None;
            let mut current = king;
            let mut distance = 0;
            while let Some(sq) = current.offset(delta) {
                current = sq;
                distance += 1;
                let Some((color, piece)) = self.board.piece_at(sq) else {
                    continue;
                };
                if color == self.us {
                    if shield.is_some() {
                        break;
                    }
                    shield = Some(sq);
                    continue;
                }
                if attacks::reaches(piece, them, delta, distance) {
                    match shield {
                        None => {
                            self.checkers += 1;
                            self.mark_ray(king, delta, sq);
                        }
                        Some(pinned) => self.pins[pinned.cell()] = delta,
                    }
                }
                break;
            }
        }
    }

    /// Mark every square from next to `king` up to and including `attacker`.
    fn mark_ray(&mut self, king: Square, delta: i8, attacker: Square) {
        let mut current = king;
        while let Some(sq) = current.offset(delta) {
            self.legal_endings[sq.cell()] = true;
            if sq == attacker {
                break;
            }
            current = sq;
        }
    }

    /// Whether a non-king move ending on `to` deals with any check
    #[inline]
    fn resolves_check(&self, to: Square) -> bool {
        self.checkers == 0 || self.legal_endings[to.cell()]
    }

    /// Whether the piece on `from` may move along `delta` given its pin
    #[inline]
    fn pin_allows(&self, from: Square, delta: i8) -> bool {
        let pin = self.pins[from.cell()];
        pin == 0 || delta == pin || delta == -pin
    }

    #[inline]
    fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Stable sort: recapture on the last move's square, captures,
    /// promotions, castles, then quiet moves.
    fn order_moves(&mut self) {
        let last_to = self.board.last_move().map(Move::to);
        self.moves
            .as_mut_slice()
            .sort_by_key(|m| ordering_class(m, last_to));
    }
}

fn ordering_class(m: &Move, last_to: Option<Square>) -> u8 {
    if m.is_capture() {
        if Some(m.to()) == last_to {
            0
        } else {
            1
        }
    } else if m.is_promotion() {
        2
    } else if m.is_castle() {
        3
    } else {
        4
    }
}

impl Board {
    /// All legal moves for the side to move
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        MoveGenerator::new(self).generate()
    }

    /// Legal moves that capture something
    #[must_use]
    pub fn legal_captures(&self) -> Vec<Move> {
        self.legal_moves()
            .iter()
            .copied()
            .filter(|m| m.is_capture())
            .collect()
    }
}
