//! Static evaluation: material, piece-square tables, doubled pawns, king
//! placement scaled by the opponent's material, and a check bonus once the
//! material left is low enough for mating attacks.

use super::pst;
use super::{Board, Color, Piece, Square};

/// Penalty for a pawn standing directly in front of a friendly pawn
pub const DOUBLED_PAWN_PENALTY: i32 = -8;

/// Bonus for giving check when one side is close to bare
pub const CHECK_BONUS: i32 = 50;

/// Own material at or below which the king uses its endgame table
pub const ENDGAME_MATERIAL: i32 = 1500;

/// Material at or below which checks earn `CHECK_BONUS`
pub const MATE_SEARCH_MATERIAL: i32 = 600;

/// Divisor that scales king placement by the opponent's material
pub const KING_SAFETY_DIVISOR: i32 = 3100;

/// Table square for `color`: White reads directly, Black through a flip
#[inline]
fn table_index(sq: Square, color: Color) -> usize {
    match color {
        Color::White => sq.index64(),
        Color::Black => sq.flip_vertical().index64(),
    }
}

impl Board {
    /// Score the position in centipawns from the side to move's view.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let mut score = [0i32; 2];
        let mut material = [0i32; 2];

        for (sq, color, piece) in self.pieces() {
            let idx = table_index(sq, color);
            let positional = match piece {
                Piece::Pawn => pst::PAWN[idx] + self.doubled_pawn_penalty(sq, color),
                Piece::Knight => pst::KNIGHT[idx],
                Piece::Bishop => pst::BISHOP[idx],
                Piece::Rook => pst::ROOK[idx],
                Piece::Queen => pst::QUEEN[idx],
                Piece::King => continue,
            };
            material[color.index()] += piece.value();
            score[color.index()] += positional;
        }

        if material.iter().any(|&m| m <= MATE_SEARCH_MATERIAL) && self.is_in_check() {
            // The side not to move just gave check
            score[self.side_to_move.opponent().index()] += CHECK_BONUS;
        }

        for color in Color::BOTH {
            score[color.index()] += self.king_placement(color, &material);
            score[color.index()] += material[color.index()];
        }

        self.side_to_move.sign() * (score[0] - score[1])
    }

    fn doubled_pawn_penalty(&self, sq: Square, color: Color) -> i32 {
        match sq.offset(-color.pawn_push()) {
            Some(behind) if self.piece_at(behind) == Some((color, Piece::Pawn)) => {
                DOUBLED_PAWN_PENALTY
            }
            _ => 0,
        }
    }

    /// King table value, weighted by how much material the opponent has left
    fn king_placement(&self, color: Color, material: &[i32; 2]) -> i32 {
        let Some(king) = self.king_square(color) else {
            return 0;
        };
        let idx = table_index(king, color);
        let table = if material[color.index()] > ENDGAME_MATERIAL {
            &pst::KING_MIDDLEGAME
        } else {
            &pst::KING_ENDGAME
        };
        table[idx] * material[color.opponent().index()] / KING_SAFETY_DIVISOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_is_balanced() {
        assert_eq!(Board::new().evaluate(), 0);
    }

    #[test]
    fn test_lone_black_pawns() {
        // 800 material plus the second-rank pawn row mirrored for Black
        let board = Board::from_fen("8/pppppppp/8/8/8/8/8/8 b - - 0 1");
        assert_eq!(board.evaluate(), 810);
    }

    #[test]
    fn test_doubled_pawns_penalized() {
        // e4 and d4 share a table value, so only the penalty differs
        let doubled = Board::from_fen("4k3/8/8/8/4P3/4P3/8/4K3 w - - 0 1");
        let split = Board::from_fen("4k3/8/8/8/3P4/4P3/8/4K3 w - - 0 1");
        assert_eq!(split.evaluate() - doubled.evaluate(), -DOUBLED_PAWN_PENALTY);
    }

    #[test]
    fn test_sign_follows_side_to_move() {
        let white = Board::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
        let black = Board::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 2 3");
        assert_eq!(white.evaluate(), -black.evaluate());
    }

    #[test]
    fn test_check_bonus_near_mate() {
        // Black is bare and in check from the rook
        let checked = Board::from_fen("k7/8/8/8/8/8/8/RK6 b - - 0 1");
        let quiet = Board::from_fen("k7/8/8/8/8/8/8/1K5R b - - 0 1");
        let rook_gap = pst::ROOK[Square::A1.index64()] - pst::ROOK[Square::H1.index64()];
        assert_eq!(quiet.evaluate() - checked.evaluate(), CHECK_BONUS + rook_gap);
    }

    #[test]
    fn test_king_scaled_by_opponent_material() {
        // With no enemy material the king square is irrelevant
        let corner = Board::from_fen("8/8/8/8/8/8/8/K6k w - - 0 1");
        let center = Board::from_fen("8/8/8/3K4/8/8/8/7k w - - 0 1");
        assert_eq!(corner.evaluate(), 0);
        assert_eq!(center.evaluate(), 0);
    }
}
