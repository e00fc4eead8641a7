//! Front-end-facing entry points.
//!
//! A front end (a command line, a protocol adapter, a GUI) drives the engine
//! through [`Game`]: set a position, list or play moves, take them back,
//! evaluate and search. No transport protocol is parsed here.

mod game;

pub use game::{Game, GameError};
