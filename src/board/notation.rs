//! Long algebraic move strings.
//!
//! Moves travel as `<from><to>` square pairs (`e2e4`), with an optional
//! fifth letter naming the promotion piece (`a7a8r`). Castling may also be
//! written `O-O` / `O-O-O`. Decoding only checks the text; [`Board::parse_move`]
//! then looks the move up in the legal list.
//!
//! # Examples
//! ```
//! use gopher_chess::board::Board;
//!
//! let mut board = Board::new();
//! let mv = board.make_move_str("e2e4").unwrap();
//! assert_eq!(mv.to_string(), "e2e4");
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::MoveParseError;
use super::{Board, CastleSide, Move, Piece, Square};

/// A move as written, before it is matched against a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveText {
    Squares {
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    },
    Castle(CastleSide),
}

impl MoveText {
    /// Whether `m` is the move this text names. Without a promotion letter a
    /// promoting move matches only its queen promotion.
    #[must_use]
    pub fn matches(&self, m: &Move) -> bool {
        match *self {
            MoveText::Castle(side) => m.castle_side() == Some(side),
            MoveText::Squares { from, to, promotion } => {
                m.from() == from
                    && m.to() == to
                    && match promotion {
                        Some(piece) => m.promotion() == Some(piece),
                        None => matches!(m.promotion(), None | Some(Piece::Queen)),
                    }
            }
        }
    }
}

impl FromStr for MoveText {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "O-O" => return Ok(MoveText::Castle(CastleSide::Short)),
            "O-O-O" => return Ok(MoveText::Castle(CastleSide::Long)),
            _ => {}
        }

        let len = s.chars().count();
        if !(4..=5).contains(&len) || !s.is_ascii() {
            return Err(MoveParseError::InvalidLength { len });
        }
        let square = |text: &str| {
            text.parse::<Square>()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: s.to_string(),
                })
        };
        let from = square(&s[0..2])?;
        let to = square(&s[2..4])?;

        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(piece @ (Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen)) => {
                    Some(piece)
                }
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        Ok(MoveText::Squares {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Display for MoveText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveText::Castle(CastleSide::Short) => write!(f, "O-O"),
            MoveText::Castle(CastleSide::Long) => write!(f, "O-O-O"),
            MoveText::Squares {
                from,
                to,
                promotion,
            } => {
                write!(f, "{from}{to}")?;
                if let Some(piece) = promotion {
                    write!(f, "{}", piece.to_char())?;
                }
                Ok(())
            }
        }
    }
}

impl Board {
    /// Decode a move string and find it among the legal moves.
    ///
    /// Malformed text gives a syntax error; well-formed text that names no
    /// legal move gives `MoveParseError::IllegalMove`. The board is not
    /// touched either way.
    pub fn parse_move(&self, s: &str) -> Result<Move, MoveParseError> {
        let text: MoveText = s.parse()?;
        self.legal_moves()
            .iter()
            .copied()
            .find(|m| text.matches(m))
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: s.to_string(),
            })
    }

    /// Parse a move string and make it on the board in one call.
    pub fn make_move_str(&mut self, s: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(s)?;
        self.make_move(mv);
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_squares() {
        let text: MoveText = "e2e4".parse().unwrap();
        assert_eq!(
            text,
            MoveText::Squares {
                from: Square::new(1, 4),
                to: Square::new(3, 4),
                promotion: None,
            }
        );
        assert_eq!(text.to_string(), "e2e4");
    }

    #[test]
    fn test_decode_castles() {
        assert_eq!("O-O".parse(), Ok(MoveText::Castle(CastleSide::Short)));
        assert_eq!("O-O-O".parse(), Ok(MoveText::Castle(CastleSide::Long)));
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(
            "e2e".parse::<MoveText>(),
            Err(MoveParseError::InvalidLength { len: 3 })
        );
        assert_eq!(
            "e2e4e5".parse::<MoveText>(),
            Err(MoveParseError::InvalidLength { len: 6 })
        );
        assert_eq!(
            "i2e4".parse::<MoveText>(),
            Err(MoveParseError::InvalidSquare {
                notation: "i2e4".to_string()
            })
        );
        assert_eq!(
            "e7e8k".parse::<MoveText>(),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        );
        assert!("e2e9".parse::<MoveText>().unwrap_err().is_syntax_error());
    }

    #[test]
    fn test_illegal_move_leaves_board() {
        let mut board = Board::new();
        let before = board.clone();
        let err = board.make_move_str("e2e5").unwrap_err();
        assert_eq!(
            err,
            MoveParseError::IllegalMove {
                notation: "e2e5".to_string()
            }
        );
        assert!(!err.is_syntax_error());
        assert_eq!(board, before);
    }

    #[test]
    fn test_castle_by_squares_or_letters() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let by_squares = board.parse_move("e1g1").unwrap();
        let by_letters = board.parse_move("O-O").unwrap();
        assert_eq!(by_squares, by_letters);
        assert!(by_squares.is_castle());
        assert_eq!(by_squares.to_string(), "O-O");
        assert_eq!(board.parse_move("O-O-O").unwrap().coordinates(), "e1c1");
    }

    #[test]
    fn test_promotion_defaults_to_queen() {
        let board = Board::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1");
        assert_eq!(board.parse_move("a7a8").unwrap().promotion(), Some(Piece::Queen));
        assert_eq!(board.parse_move("a7a8r").unwrap().promotion(), Some(Piece::Rook));
        // Knights are never offered
        assert!(matches!(
            board.parse_move("a7a8n"),
            Err(MoveParseError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_every_legal_move_round_trips() {
        let board = Board::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        );
        for m in &board.legal_moves() {
            assert_eq!(board.parse_move(&m.to_string()), Ok(*m), "{m}");
            assert_eq!(board.parse_move(&m.coordinates()), Ok(*m), "{m:?}");
        }
    }
}
