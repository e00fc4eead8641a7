//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use gopher_chess::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.status(), GameStatus::Ongoing);
//! ```

pub use super::{
    Board, CastlingRights, Color, FenError, GameStatus, Move, MoveKind, MoveList,
    MoveParseError, Piece, SearchLimits, SearchResult, Square, SquareError, UndoError,
};
