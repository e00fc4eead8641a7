//! Perft: exhaustive move counting, the oracle for move generation.

use std::fmt;
use std::ops::AddAssign;

use super::{Board, Move, MoveGenerator};

/// Leaf counts of a perft run. Everything but `nodes` describes the last
/// move played into each leaf, or the position it produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerftStats {
    pub nodes: u64,
    /// Includes en-passant captures
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub mates: u64,
}

impl AddAssign for PerftStats {
    fn add_assign(&mut self, rhs: Self) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.mates += rhs.mates;
    }
}

impl fmt::Display for PerftStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>10} {:>9} {:>7} {:>8} {:>8} {:>8} {:>7}",
            human_count(self.nodes),
            human_count(self.captures),
            human_count(self.en_passant),
            human_count(self.castles),
            human_count(self.promotions),
            human_count(self.checks),
            human_count(self.mates),
        )
    }
}

impl PerftStats {
    /// Column titles matching the `Display` layout
    pub const HEADER: &'static str =
        "     Nodes  Captures     E.p.  Castles   Promos   Checks   Mates";
}

/// `1234` stays as is, `12345` prints as `12K`, `12345678` as `12M`.
#[must_use]
pub fn human_count(n: u64) -> String {
    match n {
        0..=9_999 => n.to_string(),
        10_000..=9_999_999 => format!("{}K", n / 1_000),
        _ => format!("{}M", n / 1_000_000),
    }
}

impl Board {
    /// Number of leaf positions `depth` plies below this one.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for &m in &moves {
            self.make_move(m);
            nodes += self.perft(depth - 1);
            self.unmake_move();
        }
        nodes
    }

    /// Perft with the leaf breakdown.
    pub fn perft_stats(&mut self, depth: usize) -> PerftStats {
        let mut stats = PerftStats::default();
        if depth == 0 {
            stats.nodes = 1;
            return stats;
        }
        for &m in &self.legal_moves() {
            self.make_move(m);
            if depth == 1 {
                self.count_leaf(m, &mut stats);
            } else {
                stats += self.perft_stats(depth - 1);
            }
            self.unmake_move();
        }
        stats
    }

    /// Leaf counts below each root move, in generation order.
    pub fn perft_divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        let mut out = Vec::new();
        if depth == 0 {
            return out;
        }
        for &m in &self.legal_moves() {
            self.make_move(m);
            out.push((m, self.perft(depth - 1)));
            self.unmake_move();
        }
        out
    }

    fn count_leaf(&self, m: Move, stats: &mut PerftStats) {
        stats.nodes += 1;
        if m.is_capture() {
            stats.captures += 1;
        }
        if m.is_en_passant() {
            stats.en_passant += 1;
        }
        if m.is_castle() {
            stats.castles += 1;
        }
        if m.is_promotion() {
            stats.promotions += 1;
        }
        let generator = MoveGenerator::new(self);
        if generator.in_check() {
            stats.checks += 1;
            if generator.generate().is_empty() {
                stats.mates += 1;
            }
        }
    }
}
