//! Core puzzle logic - pure, deterministic, and testable
//!
//! This crate contains the hex-grid connection engine: coordinate math,
//! tile profiles and nodes, the grid, power propagation, win evaluation,
//! and the per-level runtime state. It has **zero dependencies** on UI,
//! networking, or I/O, making it:
//!
//! - **Deterministic**: propagation over unchanged state always returns the
//!   identical powered set, and the scramble RNG is a seeded LCG
//! - **Testable**: every rule has unit coverage next to its module
//! - **Portable**: usable from a renderer, an editor tool, or headless tests
//! - **Fast**: propagation runs allocation-free over a bitset and a
//!   stack frontier
//!
//! # Module Structure
//!
//! - [`hex`]: offset-row hex coordinates and the six-direction adjacency
//! - [`profile`]: parse-once port patterns and immutable tile archetypes
//! - [`node`]: per-cell state - rotation, effective ports, power flag
//! - [`grid`]: owning collection of nodes, flat row-major storage
//! - [`power`]: multi-source BFS propagation, power application, win predicate
//! - [`state`]: level lifecycle with the debounced win check
//! - [`snapshot`]: copyable view for renderers and observers
//! - [`rng`]: deterministic LCG used by the scramble tool
//!
//! # Connection Rules
//!
//! - A tile's base port pattern is fixed; rotation shifts which world
//!   direction each port faces (`effective[d] = base[(d + rotation) % 6]`)
//! - An edge conducts only when **both** facing ports are open
//! - Sources are always powered, even when isolated
//! - The powered set is recomputed over the whole grid after every rotation;
//!   stale power can never persist
//!
//! # Example
//!
//! ```
//! use hexflow_core::{ConnectionProfile, Grid, HexCoord, Node, PortPattern, PuzzleState};
//! use hexflow_types::NodeKind;
//!
//! let mut grid = Grid::new(2, 4);
//! let source = ConnectionProfile::new(NodeKind::Source, PortPattern::parse("100000").unwrap(), false);
//! let goal = ConnectionProfile::new(NodeKind::Goal, PortPattern::parse("000100").unwrap(), false);
//! grid.insert(Node::new(HexCoord::new(0, 0), source, 0));
//! grid.insert(Node::new(HexCoord::new(0, 2), goal, 0));
//!
//! let state = PuzzleState::new(grid);
//! assert!(state.is_winning());
//! ```

pub mod grid;
pub mod hex;
pub mod node;
pub mod power;
pub mod profile;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use hexflow_types as types;

// Re-export commonly used types for convenience
pub use grid::Grid;
pub use hex::HexCoord;
pub use node::Node;
pub use power::{
    apply_powered_states, count_valid_connections, evaluate_win, propagate, PoweredSet,
};
pub use profile::{ConnectionProfile, PortPattern};
pub use rng::SimpleRng;
pub use snapshot::{GridSnapshot, NodeSnapshot};
pub use state::{PuzzleEvent, PuzzleState, RotateOutcome};
