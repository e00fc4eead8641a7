//! Zobrist hashing for chess positions.
//!
//! Every board feature (a piece on a cell, the en-passant target, each
//! color's castling rights, the side to move) owns a random 64-bit key; a
//! position's hash is the XOR of the keys of its features. Keys come from a
//! generator seeded with a fixed constant, so equal positions hash equally
//! across runs and processes.

use std::sync::Arc;

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, Color, Move, MoveKind, Piece, Square, BOARD_CELLS};

/// Seed of the shared default key table.
pub const DEFAULT_SEED: u64 = 4711;

/// Number of distinct per-color castling-rights values (none, short, long, both).
const CASTLING_VALUES: usize = 4;

/// Random keys for every hashed position feature.
pub struct ZobristKeys {
    // piece_keys[piece][color][cell]
    piece_keys: [[[u64; BOARD_CELLS]; 2]; 6],
    en_passant_keys: [u64; BOARD_CELLS],
    // castling_keys[color][rights value 0-3]
    castling_keys: [[u64; CASTLING_VALUES]; 2],
    black_to_move_key: u64,
}

impl ZobristKeys {
    /// Build a key table from its own generator seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut piece_keys = [[[0; BOARD_CELLS]; 2]; 6];
        let mut en_passant_keys = [0; BOARD_CELLS];
        let mut castling_keys = [[0; CASTLING_VALUES]; 2];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        for color in &mut castling_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        let black_to_move_key = rng.gen();

        ZobristKeys {
            piece_keys,
            en_passant_keys,
            castling_keys,
            black_to_move_key,
        }
    }

    /// The table shared by every board that is not given its own.
    #[must_use]
    pub fn shared() -> Arc<ZobristKeys> {
        Arc::clone(&DEFAULT_KEYS)
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, piece: Piece, square: Square) -> u64 {
        self.piece_keys[piece.index()][color.index()][square.cell()]
    }

    #[inline]
    pub(crate) fn en_passant(&self, square: Option<Square>) -> u64 {
        square.map_or(0, |sq| self.en_passant_keys[sq.cell()])
    }

    #[inline]
    pub(crate) fn castling(&self, color: Color, rights_value: usize) -> u64 {
        self.castling_keys[color.index()][rights_value]
    }

    #[inline]
    pub(crate) fn black_to_move(&self) -> u64 {
        self.black_to_move_key
    }

    /// Apply the piece-placement part of `m`, made by `mover`, to `hash`.
    ///
    /// XOR is its own inverse, so the same call also takes the move back.
    /// Rights, en-passant target and side to move are hashed separately by
    /// the board, which knows their before and after values.
    #[must_use]
    pub fn incremental_update(&self, hash: u64, m: &Move, mover: Color) -> u64 {
        let them = mover.opponent();
        let mut key = hash;
        let placed = m.promotion().unwrap_or(m.piece());
        key ^= self.piece(mover, m.piece(), m.from());
        key ^= self.piece(mover, placed, m.to());

        match m.kind() {
            MoveKind::Ordinary | MoveKind::Promotion(_) => {
                if let Some(captured) = m.captured() {
                    key ^= self.piece(them, captured, m.to());
                }
            }
            MoveKind::EnPassant => {
                if let Some(victim) = m.en_passant_victim(mover) {
                    key ^= self.piece(them, Piece::Pawn, victim);
                }
            }
            MoveKind::ShortCastle | MoveKind::LongCastle => {
                if let Some(side) = m.castle_side() {
                    key ^= self.piece(mover, Piece::Rook, side.rook_home(mover));
                    key ^= self.piece(mover, Piece::Rook, side.rook_target(mover));
                }
            }
        }
        key
    }

    /// Recompute a board's hash from scratch.
    #[must_use]
    pub fn full_hash(&self, board: &Board) -> u64 {
        let mut key = 0;
        for sq in Square::all() {
            if let Some((color, piece)) = board.piece_at(sq) {
                key ^= self.piece(color, piece, sq);
            }
        }
        for color in Color::BOTH {
            key ^= self.castling(color, board.castling_rights().for_color(color));
        }
        key ^= self.en_passant(board.en_passant_target());
        if board.side_to_move() == Color::Black {
            key ^= self.black_to_move();
        }
        key
    }
}

static DEFAULT_KEYS: Lazy<Arc<ZobristKeys>> =
    Lazy::new(|| Arc::new(ZobristKeys::new(DEFAULT_SEED)));
