//! Game facade over a board and the search settings.

use std::fmt;

use log::debug;

use crate::board::{
    Board, FenError, GameStatus, Move, MoveList, MoveParseError, SearchInfoCallback,
    SearchLimits, SearchResult, UndoError, START_FEN,
};

/// Any failure a front-end request can produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Fen(FenError),
    Move(MoveParseError),
    Undo(UndoError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Fen(e) => write!(f, "invalid position: {e}"),
            GameError::Move(e) => write!(f, "{e}"),
            GameError::Undo(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Fen(e) => Some(e),
            GameError::Move(e) => Some(e),
            GameError::Undo(e) => Some(e),
        }
    }
}

impl From<FenError> for GameError {
    fn from(e: FenError) -> Self {
        GameError::Fen(e)
    }
}

impl From<MoveParseError> for GameError {
    fn from(e: MoveParseError) -> Self {
        GameError::Move(e)
    }
}

impl From<UndoError> for GameError {
    fn from(e: UndoError) -> Self {
        GameError::Undo(e)
    }
}

/// The current game: one board, its move log, and how long to think.
pub struct Game {
    board: Board,
    limits: SearchLimits,
    info_callback: Option<SearchInfoCallback>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game at the starting position with default search limits
    #[must_use]
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            limits: SearchLimits::default(),
            info_callback: None,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    pub fn set_limits(&mut self, limits: SearchLimits) {
        self.limits = limits;
    }

    /// Report every completed search depth to `cb`
    pub fn set_info_callback(&mut self, cb: Option<SearchInfoCallback>) {
        self.info_callback = cb;
    }

    /// Replace the position. On error the previous position is kept.
    pub fn set_position(&mut self, fen: &str) -> Result<(), GameError> {
        self.board = Board::try_from_fen(fen)?;
        Ok(())
    }

    /// Set a position and play moves from it; `None` means the start
    /// position. Nothing changes unless every move is legal.
    pub fn set_position_with_moves(
        &mut self,
        fen: Option<&str>,
        moves: &[&str],
    ) -> Result<(), GameError> {
        let mut board = Board::try_from_fen(fen.unwrap_or(START_FEN))?;
        for text in moves {
            board.make_move_str(text)?;
        }
        self.board = board;
        Ok(())
    }

    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.board.legal_moves()
    }

    /// Decode `text`, check it against the legal moves and play it.
    pub fn play(&mut self, text: &str) -> Result<Move, GameError> {
        let m = self.board.make_move_str(text)?;
        debug!("played {m}");
        Ok(m)
    }

    /// Play a move already taken from `legal_moves`.
    pub fn play_move(&mut self, m: Move) -> Result<(), GameError> {
        if !self.board.legal_moves().contains(&m) {
            return Err(MoveParseError::IllegalMove {
                notation: m.to_string(),
            }
            .into());
        }
        self.board.make_move(m);
        Ok(())
    }

    /// Take back the last move.
    pub fn undo(&mut self) -> Result<Move, GameError> {
        Ok(self.board.undo_move()?)
    }

    /// Static evaluation from the side to move's view
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        self.board.evaluate()
    }

    /// Search the current position with the configured limits. The move is
    /// not played.
    #[must_use]
    pub fn search(&self) -> SearchResult {
        self.board
            .search_with_callback(&self.limits, self.info_callback.clone())
    }

    /// Search, then play the chosen move if there is one.
    pub fn think_and_play(&mut self) -> SearchResult {
        let result = self.search();
        if let Some(m) = result.best_move {
            self.board.make_move(m);
        }
        result
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    #[must_use]
    pub fn fen(&self) -> String {
        self.board.to_fen()
    }
}
