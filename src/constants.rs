//! Constants for board dimensions and text rendering.
//!
//! The board size is chosen at runtime when a game is created, but it must
//! fall inside the range below. Standard Go sizes are 9, 13 and 19.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size used when none is given.
pub const DEFAULT_SIZE: usize = 19;

/// Smallest accepted board size.
pub const MIN_SIZE: usize = 2;

/// Largest accepted board size. Also the number of column letters available
/// in text coordinates (A-Z without I).
pub const MAX_SIZE: usize = 25;

/// Orthogonal neighbor offsets as (dx, dy). Order: East, West, South, North.
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

// =============================================================================
// Text Rendering
// =============================================================================

/// Character for a black stone.
pub const STONE_BLACK: char = 'X';

/// Character for a white stone.
pub const STONE_WHITE: char = 'O';

/// Character for an empty point.
pub const EMPTY: char = '.';

/// Column letters for text coordinates. 'I' is skipped to avoid confusion with 'J'.
pub const COLUMN_LETTERS: &[u8; MAX_SIZE] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";
