use log::{debug, info, warn};

use super::super::constants::{DRAW, INFINITY, MATE, MATE_THRESHOLD};
use super::super::{format_pv, format_score, mate_distance, SearchIterationInfo, SearchResult};
use super::SearchContext;
use crate::board::Move;

impl SearchContext {
    /// Deepen one ply at a time until the depth limit, the clock or a proven
    /// mate ends the search. The result comes from the last completed depth.
    pub(crate) fn iterative_deepening(mut self, max_depth: u32) -> SearchResult {
        let root_moves = self.board.legal_moves();
        if root_moves.is_empty() {
            let score = if self.board.is_in_check() { -MATE } else { DRAW };
            return self.finish(None, score, 0, Vec::new());
        }

        let mut best_move: Option<Move> = None;
        let mut score = 0;
        let mut completed = 0;
        let mut pv: Vec<Move> = Vec::new();

        for depth in 1..=max_depth.max(1) {
            self.follow_pv = true;
            self.root_best = None;

            let iteration_score = self.alphabeta(depth, -INFINITY, INFINITY);

            if self.stopped {
                if completed == 0 {
                    // Nothing finished: take the partial root result
                    let (fallback, partial) = match self.root_best {
                        Some((m, s)) => (Some(m), s),
                        None => (root_moves.first(), self.board.evaluate()),
                    };
                    warn!(
                        "depth 1 not completed in {:?}, falling back to {}",
                        self.move_time,
                        fallback.map_or_else(String::new, |m| m.to_string())
                    );
                    best_move = fallback;
                    score = partial;
                    pv = best_move.into_iter().collect();
                }
                break;
            }

            completed = depth;
            score = iteration_score;
            pv = self.pv.line().to_vec();
            best_move = pv.first().copied().or(self.root_best.map(|(m, _)| m));
            self.prev_pv.clone_from(&pv);

            self.report_iteration(depth, score, &pv);

            if score.abs() >= MATE_THRESHOLD {
                break;
            }
            if self.start_time.elapsed() >= self.move_time {
                break;
            }
        }

        self.finish(best_move, score, completed, pv)
    }

    fn report_iteration(&self, depth: u32, score: i32, pv: &[Move]) {
        let elapsed = self.start_time.elapsed();
        let time_ms = elapsed.as_millis() as u64;
        let nps = if time_ms > 0 {
            self.nodes * 1000 / time_ms
        } else {
            0
        };
        debug!(
            "depth {depth} score {} nodes {} time {time_ms}ms pv {}",
            format_score(score),
            self.nodes,
            format_pv(pv)
        );

        if let Some(cb) = &self.info_callback {
            let info = SearchIterationInfo {
                depth,
                nodes: self.nodes,
                nps,
                time_ms,
                score,
                mate_in: mate_distance(score),
                pv: format_pv(pv),
            };
            cb(&info);
        }
    }

    fn finish(&self, best_move: Option<Move>, score: i32, depth: u32, pv: Vec<Move>) -> SearchResult {
        let elapsed = self.start_time.elapsed();
        info!(
            "search done: best {} score {} depth {depth} nodes {} in {:?}",
            best_move.map_or_else(|| "none".to_string(), |m| m.to_string()),
            format_score(score),
            self.nodes,
            elapsed
        );
        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            elapsed,
            pv,
            status: self.board.status(),
        }
    }
}
