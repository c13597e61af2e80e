//! Hex math module - offset-row coordinates and adjacency
//!
//! The grid uses a staggered "brick" layout: odd rows are shifted half a cell
//! to the right, and vertical neighbors sit two rows apart because the rows
//! interleave. All functions here are pure integer arithmetic; they gate graph
//! connectivity, so no floating point is allowed anywhere in this module.
//!
//! Coordinates: (x, y) where x is the column and y the (interleaved) row.
//! Each cell has exactly six potential neighbors:
//!
//! - Top/Bottom: `(x, y ± 2)`
//! - Diagonals from an odd row: x stays or grows by one
//! - Diagonals from an even row: x shrinks by one or stays

use hexflow_types::Direction;

/// A position on the offset-row hex grid.
///
/// Neighbor math can step outside the grid (including to negative
/// coordinates); bounds are checked separately via [`HexCoord::in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexCoord {
    pub x: i8,
    pub y: i8,
}

impl HexCoord {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Neighbor coordinate in the given direction, accounting for row parity
    pub fn neighbor(self, direction: Direction) -> HexCoord {
        let HexCoord { x, y } = self;
        let odd_row = y % 2 != 0;

        match direction {
            Direction::Top => HexCoord::new(x, y + 2),
            Direction::Bottom => HexCoord::new(x, y - 2),
            Direction::TopRight => {
                if odd_row {
                    HexCoord::new(x + 1, y + 1)
                } else {
                    HexCoord::new(x, y + 1)
                }
            }
            Direction::TopLeft => {
                if odd_row {
                    HexCoord::new(x, y + 1)
                } else {
                    HexCoord::new(x - 1, y + 1)
                }
            }
            Direction::BottomRight => {
                if odd_row {
                    HexCoord::new(x + 1, y - 1)
                } else {
                    HexCoord::new(x, y - 1)
                }
            }
            Direction::BottomLeft => {
                if odd_row {
                    HexCoord::new(x, y - 1)
                } else {
                    HexCoord::new(x - 1, y - 1)
                }
            }
        }
    }

    /// All six neighbor coordinates in direction index order
    pub fn neighbors(self) -> [HexCoord; 6] {
        let mut out = [self; 6];
        for (i, dir) in Direction::ALL.iter().enumerate() {
            out[i] = self.neighbor(*dir);
        }
        out
    }

    /// Direction from `self` to `other` if they are adjacent.
    ///
    /// There is no closed-form inverse for the staggered layout, so this
    /// probes all six directions.
    pub fn direction_to(self, other: HexCoord) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.neighbor(dir) == other)
    }

    /// Whether two coordinates are adjacent under the offset-row scheme
    pub fn is_adjacent_to(self, other: HexCoord) -> bool {
        self.direction_to(other).is_some()
    }

    /// Bounds check against a width x height grid
    #[inline(always)]
    pub fn in_bounds(self, width: u8, height: u8) -> bool {
        self.x >= 0 && (self.x as u8) < width && self.y >= 0 && (self.y as u8) < height
    }
}
