//! The rules engine: owns the board and applies moves.
//!
//! `BoardEngine` is the only thing that mutates a board during a game. A move
//! places a stone, then removes every orthogonally adjacent enemy group left
//! without liberties. Whose turn it is and whether the game is still running
//! are tracked here too; ending a game is always an explicit call
//! ([`BoardEngine::resign`] or [`BoardEngine::finish`]).

use tracing::{debug, info};

use crate::board::{Board, Color, Point};
use crate::constants::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use crate::error::MoveError;
use crate::scoring::{Score, Winner, count_score};

/// How a placement that leaves its own group without liberties is treated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RuleSet {
    /// Self-capture is allowed; the stone stays on the board.
    #[default]
    Permissive,
    /// Self-capture is rejected with [`MoveError::SuicideMove`]. Opponent
    /// captures are resolved first, so a move that captures is never suicide.
    Strict,
}

/// Settings for a new game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub size: usize,
    pub rules: RuleSet,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            rules: RuleSet::default(),
        }
    }
}

/// How a game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EndReason {
    Scored(Score),
    /// The given color resigned.
    Resignation(Color),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Winner,
    pub reason: EndReason,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Ended(GameOutcome),
}

/// Result of a successful move.
///
/// Carries everything a presentation layer needs to update itself: the
/// captured stones (one entry per removed group) and the board afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub captured_groups: Vec<Vec<Point>>,
    pub board: Board,
}

impl MoveResult {
    /// All captured points, flattened.
    pub fn captured(&self) -> Vec<Point> {
        self.captured_groups.iter().flatten().copied().collect()
    }

    /// Number of stones removed by the move.
    pub fn capture_count(&self) -> usize {
        self.captured_groups.iter().map(Vec::len).sum()
    }
}

/// A single game of Go.
#[derive(Clone, Debug)]
pub struct BoardEngine {
    board: Board,
    rules: RuleSet,
    to_move: Color,
    status: GameStatus,
    last_move: Option<Point>,
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::from_parts(Board::new(DEFAULT_SIZE), Color::Black, RuleSet::default())
    }
}

impl BoardEngine {
    /// Start a game on an empty `size`x`size` board with permissive rules.
    pub fn new(size: usize) -> Result<Self, MoveError> {
        Self::with_config(EngineConfig {
            size,
            ..EngineConfig::default()
        })
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, MoveError> {
        check_size(config.size)?;
        Ok(Self::from_parts(Board::new(config.size), Color::Black, config.rules))
    }

    /// Continue a game from an arbitrary position.
    pub fn with_position(board: Board, to_move: Color, rules: RuleSet) -> Result<Self, MoveError> {
        check_size(board.size())?;
        Ok(Self::from_parts(board, to_move, rules))
    }

    fn from_parts(board: Board, to_move: Color, rules: RuleSet) -> Self {
        Self {
            board,
            rules,
            to_move,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Read-only view of the current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Stone at `(x, y)`, or `None` if the point is empty or off the board.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        self.board.get(x, y)
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Ended(_))
    }

    /// The most recent placement since the game started or was reset.
    pub fn last_move(&self) -> Option<Point> {
        self.last_move
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), MoveError> {
        if self.board.contains(x, y) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds {
                x,
                y,
                size: self.size(),
            })
        }
    }

    fn check_in_progress(&self) -> Result<(), MoveError> {
        if self.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }

    /// Place a `color` stone at `(x, y)` and resolve captures.
    ///
    /// On success the turn passes to the opponent of `color`. On error the
    /// board and turn are unchanged.
    ///
    /// # Errors
    /// - [`MoveError::GameOver`] if the game has ended
    /// - [`MoveError::OutOfBounds`] if the point is off the board
    /// - [`MoveError::OccupiedCell`] if the point is not empty
    /// - [`MoveError::SuicideMove`] under [`RuleSet::Strict`] if the stone's
    ///   group has no liberties after captures
    pub fn apply_move(&mut self, x: usize, y: usize, color: Color) -> Result<MoveResult, MoveError> {
        self.check_in_progress()?;
        self.check_bounds(x, y)?;
        if !self.board.is_empty_at(x, y) {
            debug!(x, y, %color, "rejected move on occupied point");
            return Err(MoveError::OccupiedCell { x, y });
        }

        self.board.set((x, y), Some(color));
        let captured_groups = self.dead_neighbor_groups((x, y), color.opposite());

        // A capture always frees a liberty next to the new stone, so only a
        // capture-free move can be suicide, and undoing it is a single point.
        if self.rules == RuleSet::Strict
            && captured_groups.is_empty()
            && !self.board.has_liberty(&self.board.group((x, y)))
        {
            self.board.set((x, y), None);
            debug!(x, y, %color, "rejected suicide");
            return Err(MoveError::SuicideMove { x, y });
        }

        for &pt in captured_groups.iter().flatten() {
            self.board.set(pt, None);
        }

        self.to_move = color.opposite();
        self.last_move = Some((x, y));

        let result = MoveResult {
            captured_groups,
            board: self.board.clone(),
        };
        debug!(x, y, %color, captured = result.capture_count(), "stone placed");
        Ok(result)
    }

    /// Play at `(x, y)` for the color whose turn it is.
    pub fn play(&mut self, x: usize, y: usize) -> Result<MoveResult, MoveError> {
        self.apply_move(x, y, self.to_move)
    }

    /// Skip a turn. Passing never ends the game.
    pub fn pass(&mut self) -> Result<(), MoveError> {
        self.check_in_progress()?;
        debug!(color = %self.to_move, "pass");
        self.to_move = self.to_move.opposite();
        Ok(())
    }

    /// Groups of `enemy` stones touching `pt` that have no liberties.
    /// Each group appears once even if it touches `pt` from several sides.
    fn dead_neighbor_groups(&self, pt: Point, enemy: Color) -> Vec<Vec<Point>> {
        let mut dead: Vec<Vec<Point>> = Vec::new();
        for n in self.board.neighbors(pt) {
            if self.board.get(n.0, n.1) != Some(enemy) || dead.iter().any(|g| g.contains(&n)) {
                continue;
            }
            let group = self.board.group(n);
            if !self.board.has_liberty(&group) {
                dead.push(group);
            }
        }
        dead
    }

    /// The group of stones connected to the stone at `(x, y)`.
    pub fn find_group(&self, x: usize, y: usize) -> Result<Vec<Point>, MoveError> {
        self.check_bounds(x, y)?;
        if self.board.is_empty_at(x, y) {
            return Err(MoveError::EmptyPoint { x, y });
        }
        Ok(self.board.group((x, y)))
    }

    /// Whether any member of `group` touches an empty point.
    pub fn has_liberty(&self, group: &[Point]) -> bool {
        self.board.has_liberty(group)
    }

    /// Whether placing `color` at `(x, y)` would leave its group without
    /// liberties while capturing nothing.
    ///
    /// Works on a scratch copy; the live board is never touched.
    pub fn is_suicide(&self, x: usize, y: usize, color: Color) -> Result<bool, MoveError> {
        self.check_bounds(x, y)?;
        if !self.board.is_empty_at(x, y) {
            return Err(MoveError::OccupiedCell { x, y });
        }

        let mut scratch = self.board.clone();
        scratch.set((x, y), Some(color));
        if scratch.has_liberty(&scratch.group((x, y))) {
            return Ok(false);
        }

        let enemy = color.opposite();
        let captures = scratch
            .neighbors((x, y))
            .filter(|&(nx, ny)| scratch.get(nx, ny) == Some(enemy))
            .any(|n| !scratch.has_liberty(&scratch.group(n)));
        Ok(!captures)
    }

    /// Area score of the current position. Does not end the game.
    pub fn count_score(&self) -> Score {
        count_score(&self.board)
    }

    /// End the game by counting the board.
    pub fn finish(&mut self) -> Result<GameOutcome, MoveError> {
        self.check_in_progress()?;
        let score = self.count_score();
        let outcome = GameOutcome {
            winner: score.winner(),
            reason: EndReason::Scored(score),
        };
        info!(black = score.black, white = score.white, winner = ?outcome.winner, "game scored");
        self.status = GameStatus::Ended(outcome);
        Ok(outcome)
    }

    /// End the game with `color` resigning; the opponent wins.
    pub fn resign(&mut self, color: Color) -> Result<GameOutcome, MoveError> {
        self.check_in_progress()?;
        let outcome = GameOutcome {
            winner: color.opposite().into(),
            reason: EndReason::Resignation(color),
        };
        info!(%color, "resigned");
        self.status = GameStatus::Ended(outcome);
        Ok(outcome)
    }

    /// Empty the board and start over with Black to move. Size and rules are kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.to_move = Color::Black;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        info!(size = self.size(), "board reset");
    }
}

fn check_size(size: usize) -> Result<(), MoveError> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(MoveError::InvalidSize(size))
    }
}
