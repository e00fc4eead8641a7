pub mod board;
pub mod engine;
pub mod zobrist;

pub use board::{Board, Color, Move, Piece, Square};
pub use engine::Game;
pub use zobrist::ZobristKeys;
