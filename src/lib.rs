//! Go-Rules: a renderer-agnostic Go rules engine.
//!
//! This crate keeps the state of a Go board, applies moves with capture
//! resolution, and scores finished positions by area counting. Presentation
//! layers drive it through [`engine::BoardEngine`] and render the results it
//! returns; they hold no rules logic of their own.
//!
//! ## Modules
//!
//! - [`constants`] - Board size limits and text rendering characters
//! - [`board`] - 2D board, groups and liberties
//! - [`engine`] - Move application, turn order and game lifecycle
//! - [`scoring`] - Territory detection and area scoring
//! - [`error`] - Error types
//! - [`gtp`] - Go Text Protocol front end
//!
//! ## Example
//!
//! ```
//! use go_rules::board::Color;
//! use go_rules::engine::BoardEngine;
//! use go_rules::scoring::Winner;
//!
//! let mut game = BoardEngine::new(5).unwrap();
//! game.apply_move(2, 2, Color::Black).unwrap();
//!
//! let score = game.count_score();
//! assert_eq!((score.black, score.white), (25, 0));
//! assert_eq!(score.winner(), Winner::Black);
//! ```

pub mod board;
pub mod constants;
pub mod engine;
pub mod error;
pub mod gtp;
pub mod scoring;

pub use board::{Board, Color, Point};
pub use engine::{BoardEngine, EndReason, EngineConfig, GameOutcome, GameStatus, MoveResult, RuleSet};
pub use error::{MoveError, ParseBoardError};
pub use scoring::{Owner, Score, Winner};
