//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Perft counts and leaf breakdowns
//! - `draw.rs` - Draw detection (50-move, repetition) and game status
//! - `make_unmake.rs` - Make/undo move correctness
//! - `edge_cases.rs` - Pins, double check, en passant and castling corners
//! - `castling.rs` - Castling rights bookkeeping for both colors
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Search results on tactical positions
//! - `proptest.rs` - Property-based tests

mod castling;

/// Flip a FEN vertically and swap colors, so White's position becomes
/// Black's and vice versa.
pub(super) fn mirror_fen(fen: &str) -> String {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    let placement: Vec<String> = parts[0]
        .split('/')
        .rev()
        .map(|rank| rank.chars().map(swap_case).collect())
        .collect();
    let side = if parts[1] == "w" { "b" } else { "w" };
    let mut castling: Vec<char> = parts[2].chars().map(swap_case).collect();
    castling.sort_by_key(|c| "KQkq-".find(*c));
    let castling: String = castling.into_iter().collect();
    format!("{} {side} {castling} - 0 1", placement.join("/"))
}

fn swap_case(c: char) -> char {
    if c.is_ascii_uppercase() {
        c.to_ascii_lowercase()
    } else {
        c.to_ascii_uppercase()
    }
}
