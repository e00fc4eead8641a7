//! Search constants.

use std::time::Duration;

/// Score of being mated at the root; a mate found `ply` half-moves away
/// scores `MATE - ply`
pub const MATE: i32 = 24000;

/// Score of a drawn position
pub const DRAW: i32 = 0;

/// Bound of the root window, outside every reachable score
pub const INFINITY: i32 = 50000;

/// Depth of the search stack and of the principal-variation arena
pub const MAX_PLY: usize = 128;

/// Scores with absolute value >= this are mate scores
pub const MATE_THRESHOLD: i32 = MATE - MAX_PLY as i32;

/// Deepest iteration the engine will start
pub const MAX_DEPTH: u32 = 20;

/// The clock is read when `nodes & NODE_CHECK_MASK == 0`
pub const NODE_CHECK_MASK: u64 = 4095;

/// Thinking time when the caller gives none
pub const DEFAULT_MOVE_TIME: Duration = Duration::from_secs(15);
