//! Core chess types.
//!
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - 0x88 board coordinate
//! - `Move`, `MoveKind` and `MoveList` - move representation
//! - `CastlingRights` and `CastleSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{king_home, CastleSide, CastlingRights};
pub use moves::{Move, MoveKind, MoveList};
pub use piece::{Color, Piece, PROMOTION_PIECES};
pub use square::{Square, BOARD_CELLS};

pub(crate) use moves::EMPTY_MOVE;
