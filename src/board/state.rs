use std::fmt;
use std::sync::Arc;

use super::{
    king_home, CastleSide, CastlingRights, Color, Move, Piece, Square, BOARD_CELLS,
};
use crate::zobrist::ZobristKeys;

/// Half-move clock value at which the fifty-move rule draws the game.
pub const FIFTY_MOVE_LIMIT: u32 = 100;

/// State needed to take a move back, recorded before the move is made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryItem {
    pub(crate) mv: Move,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) hash: u64,
}

impl HistoryItem {
    /// The move this record belongs to
    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// Hash of the position before the move
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }
}

/// Outcome classification of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Side to move has moves and is not in check
    Ongoing,
    /// Side to move is in check but can escape
    Check,
    Checkmate { winner: Color },
    Stalemate,
    /// Half-move clock reached 100
    FiftyMoveRule,
    /// Current position occurred for the third time
    Repetition,
}

impl GameStatus {
    /// True if the game has ended
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing | GameStatus::Check)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => Ok(()),
            GameStatus::Check => write!(f, "Check!"),
            GameStatus::Checkmate { winner: Color::White } => write!(f, "Mate! White wins."),
            GameStatus::Checkmate { winner: Color::Black } => write!(f, "Mate! Black wins."),
            GameStatus::Stalemate => write!(f, "Stalemate!"),
            GameStatus::FiftyMoveRule | GameStatus::Repetition => write!(f, "Draw!"),
        }
    }
}

/// A chess position on a 0x88 board, plus the log of moves that led to it.
#[derive(Clone)]
pub struct Board {
    pub(crate) squares: [Option<(Color, Piece)>; BOARD_CELLS],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) kings: [Option<Square>; 2],
    pub(crate) history: Vec<HistoryItem>,
    pub(crate) hash: u64,
    pub(crate) keys: Arc<ZobristKeys>,
}

impl Board {
    /// The standard starting position
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in (0u8..).zip(back_rank) {
            board.set_piece(Square::new(0, file), Color::White, piece);
            board.set_piece(Square::new(7, file), Color::Black, piece);
            board.set_piece(Square::new(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square::new(6, file), Color::Black, Piece::Pawn);
        }
        board.castling_rights = CastlingRights::all();
        board.hash = board.calculate_hash();
        board
    }

    /// An empty board hashed with the shared key table
    pub(crate) fn empty() -> Self {
        Board::empty_with_keys(ZobristKeys::shared())
    }

    pub(crate) fn empty_with_keys(keys: Arc<ZobristKeys>) -> Self {
        Board {
            squares: [None; BOARD_CELLS],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            kings: [None; 2],
            history: Vec::new(),
            hash: 0,
            keys,
        }
    }

    /// Place a piece without touching the hash; callers rehash afterwards.
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.cell()] = Some((color, piece));
        if piece == Piece::King {
            self.kings[color.index()] = Some(sq);
        }
    }

    #[inline]
    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.squares[sq.cell()] = None;
    }

    /// Recompute the hash from scratch
    #[must_use]
    pub fn calculate_hash(&self) -> u64 {
        self.keys.full_hash(self)
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.cell()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.cell()].is_none()
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Number of moves made since the position was set up
    #[inline]
    #[must_use]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Cached king square; `None` only for hand-built positions without that king
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.index()]
    }

    /// The undo log, oldest move first
    #[must_use]
    pub fn history(&self) -> &[HistoryItem] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|item| item.mv)
    }

    /// The key table this board hashes with
    #[must_use]
    pub fn keys(&self) -> &Arc<ZobristKeys> {
        &self.keys
    }

    /// Sum of material values for one color
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        self.pieces()
            .filter(|(_, c, _)| *c == color)
            .map(|(_, _, piece)| piece.value())
            .sum()
    }

    /// All occupied squares, a1 first
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(c, p)| (sq, c, p)))
    }

    /// Count earlier positions with the same side to move and the same hash,
    /// looking back only as far as the last pawn move or capture.
    #[must_use]
    pub fn repetition_count(&self) -> usize {
        let window = (self.halfmove_clock as usize).min(self.history.len());
        self.history[self.history.len() - window..]
            .iter()
            .rev()
            .skip(1)
            .step_by(2)
            .filter(|item| item.hash == self.hash)
            .count()
    }

    /// Third occurrence of the current position
    #[must_use]
    pub fn is_repetition(&self) -> bool {
        self.repetition_count() >= 2
    }

    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_LIMIT
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.is_fifty_move_draw() || self.is_repetition()
    }

    /// Classify the position: mate and stalemate first, then the draw rules.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let generator = super::MoveGenerator::new(self);
        let in_check = generator.in_check();
        let has_moves = !generator.generate().is_empty();

        if !has_moves {
            return if in_check {
                GameStatus::Checkmate {
                    winner: self.side_to_move.opponent(),
                }
            } else {
                GameStatus::Stalemate
            };
        }
        if self.is_fifty_move_draw() {
            GameStatus::FiftyMoveRule
        } else if self.is_repetition() {
            GameStatus::Repetition
        } else if in_check {
            GameStatus::Check
        } else {
            GameStatus::Ongoing
        }
    }

    /// Whether the castling right still held for `side` has its king and rook at home
    pub(crate) fn castling_pieces_home(&self, color: Color, side: CastleSide) -> bool {
        self.castling_rights.has(color, side)
            && self.piece_at(king_home(color)) == Some((color, Piece::King))
            && self.piece_at(side.rook_home(color)) == Some((color, Piece::Rook))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl PartialEq for Board {
    /// Positions are equal when placement, rights, clocks and history agree;
    /// the key table is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
            && self.side_to_move == other.side_to_move
            && self.castling_rights == other.castling_rights
            && self.en_passant_target == other.en_passant_target
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
            && self.kings == other.kings
            && self.history == other.history
            && self.hash == other.hash
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}

/// ASCII diagram with rank 8 on top. The last move's destination is marked
/// with `*`, and dark empty squares print as `,`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const FILES: &str = "   a  b  c  d  e  f  g  h";
        let last = self.last_move();
        let status = self.status();

        writeln!(f, "{FILES}")?;
        for rank in (0..8u8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0..8u8 {
                let sq = Square::new(rank, file);
                let symbol = match self.piece_at(sq) {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None if (rank + file) % 2 == 0 => ',',
                    None => '.',
                };
                let marker = if last.map(Move::to) == Some(sq) { '*' } else { ' ' };
                write!(f, "{symbol}{marker} ")?;
            }
            match rank {
                4 => write!(
                    f,
                    "\t({}) {}'s move",
                    self.fullmove_number,
                    self.side_to_move.name()
                )?,
                3 => write!(f, "\tCastling: {}", self.castling_rights.to_fen())?,
                2 if matches!(status, GameStatus::Check) => write!(f, "\tCheck!")?,
                _ => {}
            }
            writeln!(f)?;
        }
        write!(f, "{FILES}\t")?;
        if let Some(mv) = last {
            write!(f, "{mv}")?;
        }
        if status != GameStatus::Check {
            write!(f, "\t{status}")?;
        }
        writeln!(f)
    }
}
