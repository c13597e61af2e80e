//! Grid module - owner of all nodes for a level
//!
//! Flat row-major storage (index = y * width + x) for cache locality, the
//! same layout the board of any small fixed grid wants. Dimensions are
//! clamped to the authoring range [2,8] on both axes, which also guarantees
//! at most 64 cells so a powered set fits in one `u64` bitset.
//!
//! The grid is rebuilt wholesale on level load; nothing persists across
//! levels. Inserting at an occupied coordinate replaces the previous node.

use crate::hex::HexCoord;
use crate::node::Node;
use hexflow_types::{MAX_GRID_HEIGHT, MAX_GRID_WIDTH, MIN_GRID_DIM};

/// Owning collection mapping unique coordinates to nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Option<Node>>,
}

impl Grid {
    /// Create an empty grid, clamping dimensions into the authoring range
    pub fn new(width: u8, height: u8) -> Self {
        let width = width.clamp(MIN_GRID_DIM, MAX_GRID_WIDTH);
        let height = height.clamp(MIN_GRID_DIM, MAX_GRID_HEIGHT);
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Flat index for a coordinate, or None when out of bounds
    #[inline(always)]
    pub(crate) fn index(&self, coord: HexCoord) -> Option<usize> {
        if !coord.in_bounds(self.width, self.height) {
            return None;
        }
        Some(coord.y as usize * self.width as usize + coord.x as usize)
    }

    /// Insert a node at its own coordinate.
    ///
    /// Returns false (and drops the node) when the coordinate is out of
    /// bounds. An existing node at the coordinate is replaced.
    pub fn insert(&mut self, node: Node) -> bool {
        match self.index(node.coord()) {
            Some(idx) => {
                self.cells[idx] = Some(node);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, coord: HexCoord) -> Option<&Node> {
        self.index(coord).and_then(|idx| self.cells[idx].as_ref())
    }

    pub fn get_mut(&mut self, coord: HexCoord) -> Option<&mut Node> {
        match self.index(coord) {
            Some(idx) => self.cells[idx].as_mut(),
            None => None,
        }
    }

    pub fn is_occupied(&self, coord: HexCoord) -> bool {
        self.get(coord).is_some()
    }

    /// Number of occupied cells
    pub fn node_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Iterate occupied cells in row-major order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.cells.iter().filter_map(|cell| cell.as_ref())
    }

    /// Iterate occupied cells mutably in row-major order
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.cells.iter_mut().filter_map(|cell| cell.as_mut())
    }

    /// Coordinates of occupied cells in row-major order
    pub fn coords(&self) -> impl Iterator<Item = HexCoord> + '_ {
        self.nodes().map(|node| node.coord())
    }

    /// Coordinates of every source node
    pub fn sources(&self) -> Vec<HexCoord> {
        self.nodes()
            .filter(|node| node.is_source())
            .map(|node| node.coord())
            .collect()
    }

    /// Coordinates of every goal node
    pub fn goals(&self) -> Vec<HexCoord> {
        self.nodes()
            .filter(|node| node.is_goal())
            .map(|node| node.coord())
            .collect()
    }

    /// Remove every node, keeping dimensions
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ConnectionProfile, PortPattern};
    use hexflow_types::NodeKind;

    fn node_at(x: i8, y: i8, kind: NodeKind) -> Node {
        let ports = PortPattern::parse("101010").unwrap();
        let profile = ConnectionProfile::new(kind, ports, true);
        Node::new(HexCoord::new(x, y), profile, 0)
    }

    #[test]
    fn dimensions_clamped_to_authoring_range() {
        let grid = Grid::new(1, 20);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 8);
    }

    #[test]
    fn insert_and_get() {
        let mut grid = Grid::new(5, 5);
        assert!(grid.insert(node_at(2, 3, NodeKind::Connector)));

        let node = grid.get(HexCoord::new(2, 3)).unwrap();
        assert_eq!(node.kind(), NodeKind::Connector);
        assert!(grid.get(HexCoord::new(0, 0)).is_none());
        assert_eq!(grid.node_count(), 1);
    }

    #[test]
    fn insert_out_of_bounds_is_rejected() {
        let mut grid = Grid::new(3, 3);
        assert!(!grid.insert(node_at(3, 0, NodeKind::Connector)));
        assert!(!grid.insert(node_at(-1, 0, NodeKind::Connector)));
        assert!(grid.is_empty());
    }

    #[test]
    fn insert_replaces_existing_node() {
        let mut grid = Grid::new(3, 3);
        grid.insert(node_at(1, 1, NodeKind::Connector));
        grid.insert(node_at(1, 1, NodeKind::Goal));

        assert_eq!(grid.node_count(), 1);
        assert_eq!(grid.get(HexCoord::new(1, 1)).unwrap().kind(), NodeKind::Goal);
    }

    #[test]
    fn source_and_goal_queries() {
        let mut grid = Grid::new(4, 4);
        grid.insert(node_at(0, 0, NodeKind::Source));
        grid.insert(node_at(1, 0, NodeKind::Connector));
        grid.insert(node_at(2, 0, NodeKind::Goal));
        grid.insert(node_at(3, 0, NodeKind::Goal));

        assert_eq!(grid.sources(), vec![HexCoord::new(0, 0)]);
        assert_eq!(
            grid.goals(),
            vec![HexCoord::new(2, 0), HexCoord::new(3, 0)]
        );
    }

    #[test]
    fn clear_removes_all_nodes() {
        let mut grid = Grid::new(3, 3);
        grid.insert(node_at(0, 0, NodeKind::Source));
        grid.insert(node_at(1, 1, NodeKind::Goal));
        grid.clear();
        assert!(grid.is_empty());
        assert_eq!(grid.width(), 3);
    }
}
