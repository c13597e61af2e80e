//! Shared types module - directions, node kinds, and tuning constants
//!
//! This module defines the fundamental types used throughout the puzzle
//! engine. All types are pure data structures with no external dependencies,
//! making them usable in any context (core logic, level loading, tooling).
//!
//! # Grid Dimensions
//!
//! Levels are authored on small offset-row hex grids:
//!
//! - **Width**: 2-8 columns
//! - **Height**: 2-8 rows (vertical neighbors sit two rows apart, see
//!   `hexflow-core`'s hex math)
//!
//! With at most 8x8 = 64 cells, a powered set fits in a single `u64` bitset.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `WIN_CHECK_DELAY_MS` | 300 | Debounce between a rotation and its win check |
//!
//! A rotation (re)schedules the win check `WIN_CHECK_DELAY_MS` ahead; a new
//! rotation arriving inside that window replaces the pending check instead of
//! stacking a second one.
//!
//! # Solver Tuning
//!
//! The auto-solver is a bounded greedy relaxation. Scores per scanned
//! direction, from the perspective of the node being solved:
//!
//! | Constant | Value | Case |
//! |----------|-------|------|
//! | `SOLVER_LEAK_PENALTY` | -100 | open port facing empty space |
//! | `SOLVER_LINK_BONUS` | 10 | both facing ports open |
//! | `SOLVER_BLOCKED_PENALTY` | -50 | one-sided port against a fixed neighbor |
//! | `SOLVER_ISOLATED_PENALTY` | -5 | node ends the scan with no valid link |
//!
//! # Examples
//!
//! ```
//! use hexflow_types::{Direction, NodeKind};
//!
//! // Opposite direction is always three steps around the ring
//! assert_eq!(Direction::Top.opposite(), Direction::Bottom);
//! assert_eq!(Direction::TopRight.opposite(), Direction::BottomLeft);
//!
//! // Parse from string (case-insensitive)
//! let kind = NodeKind::from_str("source").unwrap();
//! assert_eq!(kind, NodeKind::Source);
//!
//! // Stable index mapping for port patterns
//! assert_eq!(Direction::BottomRight.index(), 2);
//! assert_eq!(Direction::from_index(5), Some(Direction::TopLeft));
//! ```

/// Maximum grid width in columns
pub const MAX_GRID_WIDTH: u8 = 8;

/// Maximum grid height in rows
pub const MAX_GRID_HEIGHT: u8 = 8;

/// Minimum grid dimension (both axes)
pub const MIN_GRID_DIM: u8 = 2;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay between the most recent rotation and the win-condition check
pub const WIN_CHECK_DELAY_MS: u32 = 300;

/// Number of prongs on a hex tile (and length of a port pattern string)
pub const PORT_COUNT: usize = 6;

/// Maximum relaxation passes the auto-solver runs before giving up
pub const SOLVER_MAX_PASSES: u32 = 10;

/// Score for an open port facing an empty cell or the void outside the grid
pub const SOLVER_LEAK_PENALTY: i32 = -100;

/// Score for a valid bidirectional link with a neighbor
pub const SOLVER_LINK_BONUS: i32 = 10;

/// Score for a one-sided port mismatch against a neighbor that cannot rotate
pub const SOLVER_BLOCKED_PENALTY: i32 = -50;

/// Extra score applied when a rotation produces no valid link at all
pub const SOLVER_ISOLATED_PENALTY: i32 = -5;

/// Rotation thresholds for the post-level star rating: 3 stars at or under
/// the first bound, 2 at or under the second, 1 otherwise.
pub const STAR_THRESHOLDS: [u32; 2] = [10, 20];

/// The six hex directions, evenly spaced at 60 degrees.
///
/// Index order matches port pattern strings: `[0]`=Top, `[1]`=TopRight,
/// `[2]`=BottomRight, `[3]`=Bottom, `[4]`=BottomLeft, `[5]`=TopLeft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top = 0,
    TopRight = 1,
    BottomRight = 2,
    Bottom = 3,
    BottomLeft = 4,
    TopLeft = 5,
}

impl Direction {
    /// All six directions in index order, for iteration
    pub const ALL: [Direction; 6] = [
        Direction::Top,
        Direction::TopRight,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
        Direction::TopLeft,
    ];

    /// Stable index in [0,5]
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction for an index in [0,5], None otherwise
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Direction::Top),
            1 => Some(Direction::TopRight),
            2 => Some(Direction::BottomRight),
            3 => Some(Direction::Bottom),
            4 => Some(Direction::BottomLeft),
            5 => Some(Direction::TopLeft),
            _ => None,
        }
    }

    /// Opposite direction (three steps around the ring)
    #[inline(always)]
    pub fn opposite(self) -> Self {
        // from_index never fails for (i + 3) % 6
        Direction::from_index((self.index() + 3) % 6).unwrap_or(self)
    }

}

/// Node kinds on the puzzle grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Empty filler tile with no special role
    Empty,
    /// Power source; always powered, never rotatable
    Source,
    /// Goal tile; every goal must be powered to win
    Goal,
    /// Passive conduit tile
    Connector,
}

impl NodeKind {
    /// Parse node kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "empty" => Some(NodeKind::Empty),
            "source" => Some(NodeKind::Source),
            "goal" => Some(NodeKind::Goal),
            "connector" => Some(NodeKind::Connector),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Empty => "empty",
            NodeKind::Source => "source",
            NodeKind::Goal => "goal",
            NodeKind::Connector => "connector",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involutive() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn opposite_pairs() {
        assert_eq!(Direction::Top.opposite(), Direction::Bottom);
        assert_eq!(Direction::TopRight.opposite(), Direction::BottomLeft);
        assert_eq!(Direction::BottomRight.opposite(), Direction::TopLeft);
    }

    #[test]
    fn index_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_index(dir.index()), Some(dir));
        }
        assert_eq!(Direction::from_index(6), None);
    }

    #[test]
    fn kind_string_round_trip() {
        for kind in [
            NodeKind::Empty,
            NodeKind::Source,
            NodeKind::Goal,
            NodeKind::Connector,
        ] {
            assert_eq!(NodeKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(NodeKind::from_str("obstacle"), None);
    }
}
