use std::str::FromStr;
use std::sync::Arc;

use super::error::FenError;
use super::{Board, CastleSide, Color, Piece, Square};
use crate::zobrist::ZobristKeys;

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The half-move clock and full-move number are optional and default to
    /// 0 and 1. Returns an error if the FEN string is invalid.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        Board::try_from_fen_with_keys(fen, ZobristKeys::shared())
    }

    /// Parse a FEN position that hashes with the given key table.
    pub fn try_from_fen_with_keys(fen: &str, keys: Arc<ZobristKeys>) -> Result<Self, FenError> {
        let mut board = Board::empty_with_keys(keys);
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Piece placement, rank 8 first
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as u8;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square::new(rank, file as u8), color, piece);
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank_idx,
                        files: file,
                    });
                }
            }
            if file < 8 {
                return Err(FenError::TooFewFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }
        check_placement(&board)?;

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in parts[2].chars() {
            match c {
                'K' => board.castling_rights.set(Color::White, CastleSide::Short),
                'Q' => board.castling_rights.set(Color::White, CastleSide::Long),
                'k' => board.castling_rights.set(Color::Black, CastleSide::Short),
                'q' => board.castling_rights.set(Color::Black, CastleSide::Long),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        board.en_passant_target = match parts[3] {
            "-" => None,
            text => Some(text.parse::<Square>().map_err(|_| FenError::InvalidEnPassant {
                found: text.to_string(),
            })?),
        };

        if let Some(text) = parts.get(4) {
            board.halfmove_clock = parse_counter(text, "half-move clock")?;
        }
        if let Some(text) = parts.get(5) {
            board.fullmove_number = parse_counter(text, "full-move number")?;
        }

        board.hash = board.calculate_hash();
        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::new(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights.to_fen(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

/// Reject placements no game can reach: a second king of one color, or a
/// pawn standing on the first or last rank.
fn check_placement(board: &Board) -> Result<(), FenError> {
    for color in Color::BOTH {
        let kings = board
            .pieces()
            .filter(|&(_, c, p)| c == color && p == Piece::King)
            .count();
        if kings > 1 {
            return Err(FenError::TooManyKings { color });
        }
    }
    match board
        .pieces()
        .find(|&(sq, _, p)| p == Piece::Pawn && (sq.rank() == 0 || sq.rank() == 7))
    {
        Some((square, _, _)) => Err(FenError::PawnOnBackRank { square }),
        None => Ok(()),
    }
}

fn parse_counter(text: &str, field: &'static str) -> Result<u32, FenError> {
    text.parse().map_err(|_| FenError::InvalidCounter {
        field,
        found: text.to_string(),
    })
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_fen_matches_new() {
        let board = Board::from_fen(START_FEN);
        assert_eq!(board, Board::new());
        assert_eq!(board.to_fen(), START_FEN);
    }

    #[test]
    fn test_round_trip_positions() {
        let positions = [
            START_FEN,
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
            "r3k3/2R5/4p2p/4Pp1P/8/5KR1/8/8 w - - 16 70",
            "8/pppppppp/8/8/8/8/8/8 b - - 0 1",
        ];
        for fen in positions {
            let board = Board::from_fen(fen);
            assert_eq!(board.to_fen(), fen, "round trip failed for {fen}");
        }
    }

    #[test]
    fn test_optional_counters_default() {
        let board =
            Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.fullmove_number(), 1);
        assert!(board.to_fen().ends_with(" - 0 1"));
    }

    #[test]
    fn test_whitespace_insensitive() {
        let a = Board::from_fen("  8/8/8/8/8/8/8/K6k   w  -  -  3  9 ");
        assert_eq!(a.to_fen(), "8/8/8/8/8/8/8/K6k w - - 3 9");
    }

    #[test]
    fn test_king_squares_cached() {
        let board = Board::from_fen("8/8/8/8/3k4/8/8/4K3 b - - 0 1");
        assert_eq!(board.king_square(Color::White), Some(Square::E1));
        assert_eq!(board.king_square(Color::Black), Some(Square::new(3, 3)));
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn test_hash_matches_full_recompute() {
        let board = Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
        assert_eq!(board.hash(), board.calculate_hash());
        let without_ep =
            Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq - 0 3");
        assert_ne!(board.hash(), without_ep.hash());
    }

    #[test]
    fn test_invalid_fens() {
        assert_eq!(
            Board::try_from_fen("8/8/8/8 w"),
            Err(FenError::TooFewParts { found: 2 })
        );
        assert_eq!(
            Board::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiece { char: 'x' })
        );
        assert!(matches!(
            Board::try_from_fen("8/8/8/8/8/8/8/8 x - - 0 1"),
            Err(FenError::InvalidSideToMove { .. })
        ));
        assert_eq!(
            Board::try_from_fen("8/8/8/8/8/8/8/8 w KX - 0 1"),
            Err(FenError::InvalidCastling { char: 'X' })
        );
        assert!(matches!(
            Board::try_from_fen("8/8/8/8/8/8/8/8 w - e9 0 1"),
            Err(FenError::InvalidEnPassant { .. })
        ));
        assert!(matches!(
            Board::try_from_fen("8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::InvalidRank { rank: 7 })
        ));
        assert!(matches!(
            Board::try_from_fen("9/8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::InvalidPiece { char: '9' })
        ));
        assert!(matches!(
            Board::try_from_fen("ppppppppp/8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::TooManyFiles { .. })
        ));
        assert_eq!(
            Board::try_from_fen("8/8/8/8/8/8/8/RNBQKBN w - - 0 1"),
            Err(FenError::TooFewFiles { rank: 7, files: 7 })
        );
        assert_eq!(
            Board::try_from_fen("4k3/8/8/8/8/8/8/K3K3 w - - 0 1"),
            Err(FenError::TooManyKings {
                color: Color::White
            })
        );
        assert_eq!(
            Board::try_from_fen("3pk3/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(FenError::PawnOnBackRank { square: Square::D8 })
        );
        assert!(matches!(
            Board::try_from_fen("8/8/8/8/8/8/8/8 w - - x 1"),
            Err(FenError::InvalidCounter { .. })
        ));
    }

    #[test]
    fn test_from_str() {
        let board: Board = START_FEN.parse().unwrap();
        assert_eq!(board.to_fen(), START_FEN);
    }

    #[test]
    fn test_custom_key_table() {
        let keys = Arc::new(ZobristKeys::new(7));
        let board = Board::try_from_fen_with_keys(START_FEN, Arc::clone(&keys)).unwrap();
        assert_eq!(board.hash(), keys.full_hash(&board));
        assert_ne!(board.hash(), Board::new().hash());
    }
}
