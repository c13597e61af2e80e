//! Power propagation - multi-source BFS with bidirectional edge validation
//!
//! An edge between two adjacent nodes is valid only when both facing ports
//! are open: the current node's effective port toward the neighbor AND the
//! neighbor's effective port in the opposite direction. A one-sided open
//! port never conducts. Open ports facing empty cells or the void outside
//! the grid connect to nothing; that is a scoring concern for the solver,
//! not an error here.
//!
//! The search is O(V + E) with V = occupied cells and E <= 6V. Both the
//! frontier and the visited set are stack-only (the grid holds at most 64
//! cells), so a propagation pass performs no heap allocation.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::hex::HexCoord;
use hexflow_types::Direction;

/// Upper bound on cells per grid (8x8), sized for the BFS frontier
const MAX_CELLS: usize = 64;

/// Set of powered cells, a `u64` bitset over flat cell indices.
///
/// Membership is the observable contract; discovery order is not recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoweredSet {
    bits: u64,
    width: u8,
}

impl PoweredSet {
    /// Empty set for a grid of the given width
    pub fn empty(width: u8) -> Self {
        Self { bits: 0, width }
    }

    #[inline(always)]
    fn bit(&self, coord: HexCoord) -> Option<u64> {
        if coord.x < 0 || coord.y < 0 || coord.x as u8 >= self.width {
            return None;
        }
        let idx = coord.y as usize * self.width as usize + coord.x as usize;
        if idx >= MAX_CELLS {
            return None;
        }
        Some(1u64 << idx)
    }

    pub fn insert(&mut self, coord: HexCoord) {
        if let Some(bit) = self.bit(coord) {
            self.bits |= bit;
        }
    }

    pub fn contains(&self, coord: HexCoord) -> bool {
        match self.bit(coord) {
            Some(bit) => self.bits & bit != 0,
            None => false,
        }
    }

    /// Number of powered cells
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

/// Compute the set of nodes reachable from any source through valid
/// bidirectional connections.
///
/// Every listed source that occupies a cell is seeded into the result, so a
/// source is powered even when isolated. Unknown or empty coordinates in
/// `sources` are skipped. An empty source list yields an empty set.
pub fn propagate(grid: &Grid, sources: &[HexCoord]) -> PoweredSet {
    let mut visited = PoweredSet::empty(grid.width());
    let mut frontier: ArrayVec<HexCoord, MAX_CELLS> = ArrayVec::new();

    for &source in sources {
        if grid.is_occupied(source) && !visited.contains(source) {
            visited.insert(source);
            frontier.push(source);
        }
    }

    let mut head = 0;
    while head < frontier.len() {
        let coord = frontier[head];
        head += 1;

        let Some(node) = grid.get(coord) else {
            continue;
        };

        for dir in Direction::ALL {
            if !node.port_open(dir) {
                continue;
            }

            // Open port into empty space conducts nothing.
            let neighbor_coord = coord.neighbor(dir);
            let Some(neighbor) = grid.get(neighbor_coord) else {
                continue;
            };

            // A node, once reached, is reached; no re-validation per edge.
            if visited.contains(neighbor_coord) {
                continue;
            }

            if neighbor.port_open(dir.opposite()) {
                visited.insert(neighbor_coord);
                frontier.push(neighbor_coord);
            }
        }
    }

    visited
}

/// Write power flags for the whole grid from a powered set.
///
/// Sole writer of `powered`: every occupied cell is set from membership (so
/// stale power from a previous rotation cannot persist), except sources,
/// which stay powered unconditionally. Idempotent for a fixed set.
pub fn apply_powered_states(grid: &mut Grid, powered: &PoweredSet) {
    for node in grid.nodes_mut() {
        if node.is_source() {
            node.set_powered(true);
            continue;
        }
        let on = powered.contains(node.coord());
        node.set_powered(on);
    }
}

/// Win predicate: every goal is powered.
///
/// An empty goal list is a loss, not a vacuous win - a level with no goals
/// cannot be completed. An empty powered set always loses.
pub fn evaluate_win(goals: &[HexCoord], powered: &PoweredSet) -> bool {
    if goals.is_empty() || powered.is_empty() {
        return false;
    }
    goals.iter().all(|goal| powered.contains(*goal))
}

/// Count the valid bidirectional links a node currently has (debug/report
/// helper; the solver runs its own scoring scan).
pub fn count_valid_connections(grid: &Grid, coord: HexCoord) -> usize {
    let Some(node) = grid.get(coord) else {
        return 0;
    };

    Direction::ALL
        .into_iter()
        .filter(|&dir| {
            node.port_open(dir)
                && grid
                    .get(coord.neighbor(dir))
                    .is_some_and(|neighbor| neighbor.port_open(dir.opposite()))
        })
        .count()
}
