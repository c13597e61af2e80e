//! Copyable render/observer view of a puzzle state.
//!
//! Renderers and tooling consume a value snapshot instead of borrowing into
//! the grid; the arrays are sized for the 8x8 authoring maximum so the whole
//! snapshot is `Copy` and allocation-free.

use crate::hex::HexCoord;
use crate::state::PuzzleState;
use hexflow_types::{NodeKind, MAX_GRID_HEIGHT, MAX_GRID_WIDTH, PORT_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSnapshot {
    pub kind: NodeKind,
    pub rotation: u8,
    pub powered: bool,
    pub rotatable: bool,
    /// Effective ports at the node's current rotation, in direction order
    pub ports: [bool; PORT_COUNT],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSnapshot {
    /// Occupied cells, indexed `[y][x]`; unused rows/columns stay `None`
    pub cells: [[Option<NodeSnapshot>; MAX_GRID_WIDTH as usize]; MAX_GRID_HEIGHT as usize],
    pub width: u8,
    pub height: u8,
    pub powered_count: u8,
    pub rotations: u32,
    pub elapsed_ms: u32,
    pub winning: bool,
    pub level_active: bool,
}

impl GridSnapshot {
    pub fn cell(&self, x: u8, y: u8) -> Option<NodeSnapshot> {
        if x >= MAX_GRID_WIDTH || y >= MAX_GRID_HEIGHT {
            return None;
        }
        self.cells[y as usize][x as usize]
    }
}

impl From<&PuzzleState> for GridSnapshot {
    fn from(state: &PuzzleState) -> Self {
        let mut cells =
            [[None; MAX_GRID_WIDTH as usize]; MAX_GRID_HEIGHT as usize];

        for node in state.grid().nodes() {
            let HexCoord { x, y } = node.coord();
            cells[y as usize][x as usize] = Some(NodeSnapshot {
                kind: node.kind(),
                rotation: node.rotation(),
                powered: node.powered(),
                rotatable: node.can_rotate(),
                ports: node.effective_ports(),
            });
        }

        Self {
            cells,
            width: state.grid().width(),
            height: state.grid().height(),
            powered_count: state.powered_set().len() as u8,
            rotations: state.rotation_count(),
            elapsed_ms: state.elapsed_ms(),
            winning: state.is_winning(),
            level_active: state.level_active(),
        }
    }
}
