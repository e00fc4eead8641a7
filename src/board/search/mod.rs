//! Search module implementing alpha-beta with iterative deepening.
//!
//! Features:
//! - Iterative deepening under a wall-clock budget
//! - Principal-variation search, previous best line first
//! - Quiescence search over captures
//! - Mate scores that prefer the shortest mate

mod alphabeta;
pub mod constants;
mod pv;

use std::sync::Arc;
use std::time::Duration;

use alphabeta::SearchContext;
use constants::{DEFAULT_MOVE_TIME, MATE, MATE_THRESHOLD, MAX_DEPTH};

use super::{Board, GameStatus, Move};

/// How long and how deep one search may go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchLimits {
    /// Wall-clock budget, polled every few thousand nodes
    pub move_time: Duration,
    /// Deepest iteration, capped at `MAX_DEPTH`
    pub max_depth: u32,
}

impl SearchLimits {
    #[must_use]
    pub fn new() -> Self {
        SearchLimits {
            move_time: DEFAULT_MOVE_TIME,
            max_depth: MAX_DEPTH,
        }
    }

    /// Default depth with the given time budget
    #[must_use]
    pub fn move_time(move_time: Duration) -> Self {
        SearchLimits::new().with_move_time(move_time)
    }

    #[must_use]
    pub fn with_move_time(mut self, move_time: Duration) -> Self {
        self.move_time = move_time;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth.clamp(1, MAX_DEPTH);
        self
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` only when the root has no legal move
    pub best_move: Option<Move>,
    /// Centipawns from the side to move's view, or a mate score
    pub score: i32,
    /// Last fully completed depth, 0 if none
    pub depth: u32,
    pub nodes: u64,
    pub elapsed: Duration,
    pub pv: Vec<Move>,
    /// Status of the searched position
    pub status: GameStatus,
}

/// Progress after each completed depth.
#[derive(Clone, Debug)]
pub struct SearchIterationInfo {
    pub depth: u32,
    pub nodes: u64,
    pub nps: u64,
    pub time_ms: u64,
    pub score: i32,
    pub mate_in: Option<i32>,
    pub pv: String,
}

/// Callback type for iteration info.
pub type SearchInfoCallback = Arc<dyn Fn(&SearchIterationInfo) + Send + Sync>;

impl Board {
    /// Pick a move for the side to move. The board itself is not changed.
    #[must_use]
    pub fn search(&self, limits: &SearchLimits) -> SearchResult {
        self.search_with_callback(limits, None)
    }

    /// Like [`Board::search`], reporting every completed depth to `callback`.
    #[must_use]
    pub fn search_with_callback(
        &self,
        limits: &SearchLimits,
        callback: Option<SearchInfoCallback>,
    ) -> SearchResult {
        let max_depth = limits.max_depth.clamp(1, MAX_DEPTH);
        SearchContext::new(self, limits.move_time, callback).iterative_deepening(max_depth)
    }
}

/// Moves to mate for a mate score: positive when the side to move mates,
/// negative when it is mated. `None` for ordinary scores.
#[must_use]
pub fn mate_distance(score: i32) -> Option<i32> {
    if score.abs() < MATE_THRESHOLD {
        None
    } else if score > 0 {
        Some((MATE - score + 1) / 2)
    } else {
        Some(-((MATE + score + 1) / 2))
    }
}

/// Pawns with two decimals (`0.35`, `-1.20`), or `#N` / `#-N` for mates.
#[must_use]
pub fn format_score(score: i32) -> String {
    match mate_distance(score) {
        Some(n) => format!("#{n}"),
        None => format!("{:.2}", f64::from(score) / 100.0),
    }
}

pub(crate) fn format_pv(pv: &[Move]) -> String {
    pv.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pv() {
        assert_eq!(format_pv(&[]), "");
        let mut board = Board::new();
        let first = board.make_move_str("e2e4").unwrap();
        let second = board.make_move_str("e7e5").unwrap();
        let castle = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1")
            .parse_move("e1g1")
            .unwrap();
        assert_eq!(format_pv(&[first]), "e2e4");
        assert_eq!(format_pv(&[first, second, castle]), "e2e4 e7e5 O-O");
    }

    #[test]
    fn test_mate_distance() {
        assert_eq!(mate_distance(0), None);
        assert_eq!(mate_distance(MATE_THRESHOLD - 1), None);
        assert_eq!(mate_distance(MATE - 1), Some(1));
        assert_eq!(mate_distance(MATE - 3), Some(2));
        assert_eq!(mate_distance(-(MATE - 2)), Some(-1));
        assert_eq!(mate_distance(-(MATE - 4)), Some(-2));
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0), "0.00");
        assert_eq!(format_score(35), "0.35");
        assert_eq!(format_score(-120), "-1.20");
        assert_eq!(format_score(MATE - 5), "#3");
        assert_eq!(format_score(-(MATE - 2)), "#-1");
    }

    #[test]
    fn test_limits_builder() {
        let limits = SearchLimits::new()
            .with_move_time(Duration::from_millis(250))
            .with_max_depth(50);
        assert_eq!(limits.move_time, Duration::from_millis(250));
        assert_eq!(limits.max_depth, MAX_DEPTH);
        assert_eq!(SearchLimits::default().move_time, DEFAULT_MOVE_TIME);
        assert_eq!(
            SearchLimits::move_time(Duration::from_secs(1)).max_depth,
            MAX_DEPTH
        );
    }
}
