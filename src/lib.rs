//! Hexflow (workspace facade crate).
//!
//! This package keeps a single `hexflow::{core,engine,level,types}` public
//! API stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use hexflow_core as core;
pub use hexflow_engine as engine;
pub use hexflow_level as level;
pub use hexflow_types as types;
