//! Chess board representation and game logic.
//!
//! Positions live on a 0x88 board: 128 cells of which the 64 with
//! `cell & 0x88 == 0` are real squares. Moves are made in place and taken
//! back from an undo log. Move generation produces exactly the legal moves.
//!
//! # Example
//! ```
//! use gopher_chess::board::Board;
//!
//! let board = Board::new();
//! let moves = board.legal_moves();
//! assert_eq!(moves.len(), 20);
//! ```

mod error;
pub mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod notation;
mod perft;
pub mod prelude;
mod pst;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{FenError, MoveParseError, SquareError, UndoError};
pub use fen::START_FEN;
pub use movegen::MoveGenerator;
pub use notation::MoveText;
pub use perft::{human_count, PerftStats};
pub use state::{Board, GameStatus, HistoryItem, FIFTY_MOVE_LIMIT};
pub use types::{
    king_home, CastleSide, CastlingRights, Color, Move, MoveKind, MoveList, Piece, Square,
    BOARD_CELLS, PROMOTION_PIECES,
};

// Public API - search functions and configuration
pub use search::constants::{MATE, MAX_PLY};
pub use search::{
    format_score, mate_distance, SearchInfoCallback, SearchIterationInfo, SearchLimits,
    SearchResult,
};

pub(crate) use types::EMPTY_MOVE;
