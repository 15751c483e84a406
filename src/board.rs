//! 2D board representation with group and liberty discovery.
//!
//! Points are addressed as `(x, y)` with `(0, 0)` in the top-left corner.
//! Groups are never stored: every query flood-fills from a seed point with a
//! fresh visited grid, so nothing derived can go stale between moves.

use std::fmt;
use std::str::FromStr;

use crate::constants::{DIRECTIONS, EMPTY, MAX_SIZE, MIN_SIZE, STONE_BLACK, STONE_WHITE};
use crate::error::ParseBoardError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other player's color.
    pub fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

pub type Point = (usize, usize);

/// An NxN grid where each point is empty (`None`) or holds a stone.
///
/// The size is fixed at construction. Only the engine mutates a board it owns;
/// callers get shared references or clones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Whether `(x, y)` lies on the board.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// Stone at `(x, y)`, or `None` for an empty or off-board point.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if !self.contains(x, y) {
            return None;
        }
        self.cells[self.idx(x, y)]
    }

    /// Whether `(x, y)` is on the board and empty.
    pub fn is_empty_at(&self, x: usize, y: usize) -> bool {
        self.contains(x, y) && self.cells[self.idx(x, y)].is_none()
    }

    pub(crate) fn set(&mut self, (x, y): Point, stone: Option<Color>) {
        let i = self.idx(x, y);
        self.cells[i] = stone;
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Number of stones of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }

    /// Orthogonal neighbors of a point, bounded by the board edges.
    pub fn neighbors(&self, (x, y): Point) -> impl Iterator<Item = Point> + '_ {
        DIRECTIONS.iter().filter_map(move |&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            self.contains(nx, ny).then_some((nx, ny))
        })
    }

    /// Collect the group of same-colored stones connected to `start`.
    ///
    /// Returns an empty vector if `start` is empty or off the board.
    pub fn group(&self, start: Point) -> Vec<Point> {
        let Some(color) = self.get(start.0, start.1) else {
            return Vec::new();
        };
        self.flood(start, |cell| cell == Some(color))
    }

    /// Collect the connected region of points starting at `start` whose
    /// contents satisfy `same`. `start` itself must satisfy `same`.
    pub(crate) fn flood(&self, start: Point, same: impl Fn(Option<Color>) -> bool) -> Vec<Point> {
        let mut stack = vec![start];
        let mut visited = vec![false; self.size * self.size];
        visited[self.idx(start.0, start.1)] = true;
        let mut out = Vec::new();

        while let Some(pt) = stack.pop() {
            out.push(pt);
            for n in self.neighbors(pt) {
                let ni = self.idx(n.0, n.1);
                if !visited[ni] && same(self.cells[ni]) {
                    visited[ni] = true;
                    stack.push(n);
                }
            }
        }
        out
    }

    /// Whether any member of `group` has an empty orthogonal neighbor.
    pub fn has_liberty(&self, group: &[Point]) -> bool {
        group
            .iter()
            .any(|&pt| self.neighbors(pt).any(|(nx, ny)| self.get(nx, ny).is_none()))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = match self.get(x, y) {
                    Some(Color::Black) => STONE_BLACK,
                    Some(Color::White) => STONE_WHITE,
                    None => EMPTY,
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Read a diagram in the format produced by `Display`: one line per row,
    /// `X` for black, `O` for white, `.` for empty. Whitespace inside a row is
    /// ignored, as are blank lines.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let size = rows.len();
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(ParseBoardError::InvalidSize(size));
        }

        let mut board = Board::new(size);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(ParseBoardError::RaggedRow {
                    row: y,
                    len: row.len(),
                    size,
                });
            }
            for (x, &ch) in row.iter().enumerate() {
                let stone = match ch {
                    STONE_BLACK => Some(Color::Black),
                    STONE_WHITE => Some(Color::White),
                    EMPTY => None,
                    other => return Err(ParseBoardError::BadChar(other)),
                };
                board.set((x, y), stone);
            }
        }
        Ok(board)
    }
}
