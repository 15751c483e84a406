//! Errors reported by the rules engine.

use thiserror::Error;

/// Why a move or query was rejected.
///
/// A failed operation never mutates the board, and the engine stays usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Coordinate lies outside the board.
    #[error("Illegal move: ({x}, {y}) is outside the {size}x{size} board")]
    OutOfBounds { x: usize, y: usize, size: usize },
    /// Point is not empty.
    #[error("Illegal move: point ({x}, {y}) not EMPTY")]
    OccupiedCell { x: usize, y: usize },
    /// Placement leaves its own group without liberties (strict rules only).
    #[error("Illegal move: suicide at ({x}, {y})")]
    SuicideMove { x: usize, y: usize },
    /// A group was requested for an empty point.
    #[error("no stone at ({x}, {y})")]
    EmptyPoint { x: usize, y: usize },
    /// Board size outside the supported range.
    #[error("unacceptable board size {0}")]
    InvalidSize(usize),
    /// The game has already ended.
    #[error("game is over")]
    GameOver,
}

/// Why a text diagram could not be read as a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("unexpected character {0:?} in board diagram")]
    BadChar(char),
    #[error("row {row} has {len} points, expected {size}")]
    RaggedRow { row: usize, len: usize, size: usize },
    #[error("unacceptable board size {0}")]
    InvalidSize(usize),
}
