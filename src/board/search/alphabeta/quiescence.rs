use super::super::constants::MAX_PLY;
use super::SearchContext;

impl SearchContext {
    /// Capture-only search below the horizon, standing pat on the static
    /// evaluation.
    pub(super) fn quiesce(&mut self, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;
        if self.should_stop() {
            return 0;
        }

        let stand_pat = self.board.evaluate();
        if self.ply >= MAX_PLY - 1 {
            return stand_pat;
        }
        if stand_pat >= beta {
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        for m in self.board.legal_captures() {
            self.board.make_move(m);
            self.ply += 1;
            let score = -self.quiesce(-beta, -alpha);
            self.ply -= 1;
            self.board.unmake_move();

            if self.stopped {
                return 0;
            }
            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}
