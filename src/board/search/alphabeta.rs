//! Core search implementation.
//!
//! - Iterative deepening, trying the previous principal variation first
//! - Negamax alpha-beta with principal-variation search
//! - Check extension
//! - Repetition and fifty-move draws inside the tree
//! - Capture-only quiescence search
//! - Node-interval clock polling

mod iterative;
mod quiescence;

use std::time::{Duration, Instant};

use super::constants::{DRAW, MATE, MAX_PLY, NODE_CHECK_MASK};
use super::pv::PvTable;
use super::SearchInfoCallback;
use crate::board::{Board, Move, MoveGenerator, MoveList};

/// State of one search over a private copy of the root position
pub(crate) struct SearchContext {
    board: Board,
    ply: usize,
    nodes: u64,
    start_time: Instant,
    move_time: Duration,
    stopped: bool,
    pv: PvTable,
    /// Line of the last completed iteration
    prev_pv: Vec<Move>,
    follow_pv: bool,
    /// Best root move of the running iteration, with its score
    root_best: Option<(Move, i32)>,
    info_callback: Option<SearchInfoCallback>,
}

impl SearchContext {
    pub(crate) fn new(
        board: &Board,
        move_time: Duration,
        info_callback: Option<SearchInfoCallback>,
    ) -> Self {
        SearchContext {
            board: board.clone(),
            ply: 0,
            nodes: 0,
            start_time: Instant::now(),
            move_time,
            stopped: false,
            pv: PvTable::new(),
            prev_pv: Vec::new(),
            follow_pv: false,
            root_best: None,
            info_callback,
        }
    }

    /// Poll the clock every `NODE_CHECK_MASK + 1` nodes.
    #[inline]
    fn should_stop(&mut self) -> bool {
        if !self.stopped
            && self.nodes & NODE_CHECK_MASK == 0
            && self.start_time.elapsed() >= self.move_time
        {
            self.stopped = true;
        }
        self.stopped
    }

    /// Negamax with a fail-hard window. Returns 0 once the search has been
    /// stopped; callers check `stopped` before trusting a score.
    fn alphabeta(&mut self, depth: u32, mut alpha: i32, beta: i32) -> i32 {
        let ply = self.ply;
        self.pv.clear(ply);

        if ply >= MAX_PLY - 1 {
            return self.board.evaluate();
        }
        if depth == 0 {
            return self.quiesce(alpha, beta);
        }

        self.nodes += 1;
        if self.should_stop() {
            return 0;
        }

        let generator = MoveGenerator::new(&self.board);
        let in_check = generator.in_check();
        let mut moves = generator.generate();
        let depth = if in_check { depth + 1 } else { depth };

        if ply > 0 && self.board.is_repetition() {
            return DRAW;
        }
        if moves.is_empty() {
            return if in_check { -(MATE - ply as i32) } else { DRAW };
        }
        if ply > 0 && self.board.is_fifty_move_draw() {
            return DRAW;
        }

        self.order_pv_move(&mut moves);

        for (idx, &m) in moves.iter().enumerate() {
            let score = if idx == 0 {
                -self.search_child(m, depth - 1, -beta, -alpha)
            } else {
                let probe = -self.search_child(m, depth - 1, -alpha - 1, -alpha);
                if probe > alpha && probe < beta && !self.stopped {
                    -self.search_child(m, depth - 1, -beta, -alpha)
                } else {
                    probe
                }
            };
            self.follow_pv = false;

            if self.stopped {
                return 0;
            }
            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
                self.pv.update(ply, m);
                if ply == 0 {
                    self.root_best = Some((m, score));
                }
            }
        }

        alpha
    }

    fn search_child(&mut self, m: Move, depth: u32, alpha: i32, beta: i32) -> i32 {
        self.board.make_move(m);
        self.ply += 1;
        let score = self.alphabeta(depth, alpha, beta);
        self.ply -= 1;
        self.board.unmake_move();
        score
    }

    /// While still on the previous iteration's line, search its move first.
    fn order_pv_move(&mut self, moves: &mut MoveList) {
        if !self.follow_pv {
            return;
        }
        self.follow_pv = match self.prev_pv.get(self.ply) {
            Some(&pv_move) => moves.promote_to_front(pv_move),
            None => false,
        };
    }
}
