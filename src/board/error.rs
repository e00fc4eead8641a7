//! Error types for chess board operations.

use std::fmt;

use super::{Color, Square};

/// Why a position string was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Fewer than the four mandatory fields
    TooFewParts { found: usize },
    /// Placement holds a letter that names no piece
    InvalidPiece { char: char },
    /// Castling field holds something other than `KQkq` or `-`
    InvalidCastling { char: char },
    /// Side to move is neither `w` nor `b`
    InvalidSideToMove { found: String },
    /// En-passant field is neither `-` nor a square name
    InvalidEnPassant { found: String },
    /// Placement has more or fewer than 8 ranks
    InvalidRank { rank: usize },
    /// A rank describes more than 8 files
    TooManyFiles { rank: usize, files: usize },
    /// A rank describes fewer than 8 files
    TooFewFiles { rank: usize, files: usize },
    /// More than one king of the same color
    TooManyKings { color: Color },
    /// A pawn on the first or last rank
    PawnOnBackRank { square: Square },
    /// Half-move clock or full-move number is not a number
    InvalidCounter { field: &'static str, found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "position needs at least 4 fields, got {found}")
            }
            FenError::InvalidPiece { char } => write!(f, "unknown piece '{char}' in placement"),
            FenError::InvalidCastling { char } => {
                write!(f, "unexpected '{char}' in castling field")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "side to move must be 'w' or 'b', got '{found}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "'{found}' is not an en-passant square")
            }
            FenError::InvalidRank { rank } => write!(f, "placement has {rank} ranks, not 8"),
            FenError::TooManyFiles { rank, files } => {
                write!(f, "rank {rank} spans {files} files")
            }
            FenError::TooFewFiles { rank, files } => {
                write!(f, "rank {rank} spans only {files} files")
            }
            FenError::TooManyKings { color } => {
                write!(f, "{} has more than one king", color.name())
            }
            FenError::PawnOnBackRank { square } => write!(f, "pawn on back rank at {square}"),
            FenError::InvalidCounter { field, found } => {
                write!(f, "{field} '{found}' is not a number")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move text that cannot be decoded or applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Text is neither castling nor 4-5 ASCII characters
    InvalidLength { len: usize },
    /// One of the two squares does not parse
    InvalidSquare { notation: String },
    /// Fifth letter names no promotion piece
    InvalidPromotion { char: char },
    /// Well-formed, but no legal move in the position matches
    IllegalMove { notation: String },
}

impl MoveParseError {
    /// True for syntax problems, false when well-formed text names an illegal move
    #[must_use]
    pub fn is_syntax_error(&self) -> bool {
        !matches!(self, MoveParseError::IllegalMove { .. })
    }
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "move text has {len} characters, expected 4 or 5")
            }
            MoveParseError::InvalidSquare { notation } => write!(f, "bad square in '{notation}'"),
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "'{char}' is not a promotion piece")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "'{notation}' is not legal here")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank is outside 0-7
    RankOutOfBounds { rank: u8 },
    /// File is outside 0-7
    FileOutOfBounds { file: u8 },
    /// Text is not a file letter followed by a rank digit
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "rank {rank} is off the board")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "file {file} is off the board")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "'{notation}' is not a square name")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for taking back moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoError {
    /// No move has been made since the position was set up
    EmptyHistory,
}

impl fmt::Display for UndoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndoError::EmptyHistory => write!(f, "no move to undo"),
        }
    }
}

impl std::error::Error for UndoError {}
