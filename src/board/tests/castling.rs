//! Castling rights bookkeeping, checked for mirror symmetry between colors.

use super::mirror_fen;
use crate::board::{Board, CastleSide, CastlingRights, Color, Square};

fn mirror_move(text: &str) -> String {
    let b = text.as_bytes();
    let flip = |r: u8| (b'1' + b'8' - r) as char;
    format!("{}{}{}{}", b[0] as char, flip(b[1]), b[2] as char, flip(b[3]))
}

fn rights_after(fen: &str, text: &str) -> CastlingRights {
    let mut board = Board::from_fen(fen);
    board.make_move_str(text).expect("legal move");
    assert_eq!(board.hash(), board.calculate_hash(), "{fen} {text}");
    board.castling_rights()
}

fn mirrored(rights: CastlingRights) -> CastlingRights {
    let mut out = CastlingRights::none();
    for side in CastleSide::BOTH {
        if rights.has(Color::White, side) {
            out.set(Color::Black, side);
        }
        if rights.has(Color::Black, side) {
            out.set(Color::White, side);
        }
    }
    out
}

#[test]
fn test_rook_moves_mirror() {
    let fen = "r3k2r/p6p/8/8/8/8/P6P/R3K2R w KQkq - 0 1";
    let cases = [
        ("a1b1", "Kkq"),
        ("h1g1", "Qkq"),
        ("e1d1", "kq"),
        ("e1f1", "kq"),
        ("a1d1", "Kkq"),
        ("h1f1", "Qkq"),
    ];
    for (text, expected) in cases {
        let white = rights_after(fen, text);
        assert_eq!(white.to_fen(), expected, "{text}");

        let black = rights_after(&mirror_fen(fen), &mirror_move(text));
        assert_eq!(black, mirrored(white), "mirror of {text}");
    }
}

#[test]
fn test_rook_captures_mirror() {
    // Rooks trade on the opponent's home squares
    let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
    for (text, expected) in [("a1a8", "Kk"), ("h1h8", "Qq")] {
        let white = rights_after(fen, text);
        assert_eq!(white.to_fen(), expected, "{text}");

        let black = rights_after(&mirror_fen(fen), &mirror_move(text));
        assert_eq!(black, mirrored(white), "mirror of {text}");
    }
}

#[test]
fn test_black_long_rook_move_clears_only_its_right() {
    let rights = rights_after("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", "a8b8");
    assert!(rights.has(Color::Black, CastleSide::Short));
    assert!(!rights.has(Color::Black, CastleSide::Long));
    assert!(rights.has(Color::White, CastleSide::Long));
    assert!(rights.has(Color::White, CastleSide::Short));
}

#[test]
fn test_castling_hash_matches_full_hash() {
    for fen in [
        "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        "r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1",
    ] {
        let board = Board::from_fen(fen);
        for m in board.legal_moves().iter().filter(|m| m.is_castle()) {
            let mut after = board.clone();
            after.make_move(*m);
            assert_eq!(after.hash(), after.calculate_hash(), "{m}");
            let rebuilt = Board::from_fen(&after.to_fen());
            assert_eq!(after.hash(), rebuilt.hash(), "{m}");
        }
    }
}

#[test]
fn test_rook_leaving_and_returning_keeps_right_lost() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    for text in ["h1h2", "a8a7", "h2h1", "a7a8"] {
        board.make_move_str(text).unwrap();
    }
    assert_eq!(board.castling_rights().to_fen(), "Qk");
    assert_eq!(board.piece_at(Square::H1).map(|(c, _)| c), Some(Color::White));
    let castles: Vec<Option<CastleSide>> = board
        .legal_moves()
        .iter()
        .filter(|m| m.is_castle())
        .map(|m| m.castle_side())
        .collect();
    assert_eq!(castles, vec![Some(CastleSide::Long)]);
}

#[test]
fn test_mirror_helpers() {
    assert_eq!(
        mirror_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1"),
        "r3k2r/8/8/8/8/8/8/R3K2R b Qk - 0 1"
    );
    assert_eq!(mirror_move("a1b1"), "a8b8");
}
