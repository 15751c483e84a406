//! Territory detection and area scoring.
//!
//! Every stone counts one point for its color. Each maximal region of empty
//! points is credited to a color when the stones bordering it are all of that
//! color; regions touching both colors (or no stones at all) are neutral.

use std::fmt;

use crate::board::{Board, Color, Point};

/// Who a territory region belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Owner {
    Black,
    White,
    Neutral,
}

/// Final result of a scored or resigned game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Winner {
    Black,
    White,
    Tie,
}

impl From<Color> for Winner {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Winner::Black,
            Color::White => Winner::White,
        }
    }
}

/// Area score of a position: stones plus owned territory.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    /// Higher score wins; equal scores are a tie.
    pub fn winner(&self) -> Winner {
        if self.black > self.white {
            Winner::Black
        } else if self.white > self.black {
            Winner::White
        } else {
            Winner::Tie
        }
    }
}

/// Formats the margin the way GTP `final_score` does: `B+3`, `W+1` or `0`.
impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Winner::Black => write!(f, "B+{}", self.black - self.white),
            Winner::White => write!(f, "W+{}", self.white - self.black),
            Winner::Tie => write!(f, "0"),
        }
    }
}

/// Collect the region of empty points connected to `start`.
///
/// Returns an empty vector if `start` is occupied or off the board.
pub fn find_territory(board: &Board, start: Point) -> Vec<Point> {
    if !board.is_empty_at(start.0, start.1) {
        return Vec::new();
    }
    board.flood(start, |cell| cell.is_none())
}

/// Classify a territory region by the stones bordering it.
///
/// Border stones are tallied once per adjacent region member, so a stone
/// touching the region from two sides counts twice. Only the presence of each
/// color matters for the result.
pub fn determine_owner(board: &Board, territory: &[Point]) -> Owner {
    let mut black_border = 0usize;
    let mut white_border = 0usize;

    for &pt in territory {
        for (nx, ny) in board.neighbors(pt) {
            match board.get(nx, ny) {
                Some(Color::Black) => black_border += 1,
                Some(Color::White) => white_border += 1,
                None => {}
            }
        }
    }

    match (black_border > 0, white_border > 0) {
        (true, false) => Owner::Black,
        (false, true) => Owner::White,
        _ => Owner::Neutral,
    }
}

/// Score a position by area counting.
///
/// Scans row-major from `(0, 0)`. Each empty region is evaluated once, from
/// its first point in scan order. The board itself is only read.
pub fn count_score(board: &Board) -> Score {
    let size = board.size();
    let mut assigned = vec![false; size * size];
    let mut score = Score::default();

    for y in 0..size {
        for x in 0..size {
            match board.get(x, y) {
                Some(Color::Black) => score.black += 1,
                Some(Color::White) => score.white += 1,
                None if !assigned[y * size + x] => {
                    let territory = find_territory(board, (x, y));
                    match determine_owner(board, &territory) {
                        Owner::Black => score.black += territory.len(),
                        Owner::White => score.white += territory.len(),
                        Owner::Neutral => {}
                    }
                    for (tx, ty) in territory {
                        assigned[ty * size + tx] = true;
                    }
                }
                None => {}
            }
        }
    }
    score
}
