//! Offline level tooling over the core puzzle state.
//!
//! Editor/authoring surface, not part of runtime play: the greedy rotation
//! [`solver`] that relaxes a layout toward a connected configuration, and
//! the seeded [`scramble`] that turns a solved layout back into a playable
//! starting state. Both operate directly on a [`hexflow_core::Grid`], so
//! the runtime `PuzzleState` never has to expose editor mutation hooks.

pub mod solver;

pub use hexflow_core as core;
pub use hexflow_types as types;

pub use solver::{scramble, solve, SolveReport};
