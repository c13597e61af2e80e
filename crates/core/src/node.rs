//! Node module - mutable per-cell tile state
//!
//! A node couples one grid cell with a connection profile, the tile's current
//! rotation, and its power flag. Rotation shifts which world-direction each
//! base port faces: the effective port facing direction `d` at rotation `r`
//! is base port `(d + r) % 6`. Both the propagation engine and the solver go
//! through [`Node::port_open`], so the two can never disagree on the
//! projection.

use crate::hex::HexCoord;
use crate::profile::ConnectionProfile;
use hexflow_types::{Direction, NodeKind, PORT_COUNT};

/// Mutable per-cell state. Owned exclusively by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    coord: HexCoord,
    profile: ConnectionProfile,
    rotation: u8,
    powered: bool,
}

impl Node {
    /// Create a node at a coordinate.
    ///
    /// Out-of-range rotations from level data are clamped into [0,5].
    /// Sources start powered and stay powered for the node's lifetime.
    pub fn new(coord: HexCoord, profile: ConnectionProfile, rotation: u8) -> Self {
        Self {
            coord,
            profile,
            rotation: rotation.min(5),
            powered: profile.is_source(),
        }
    }

    pub fn coord(&self) -> HexCoord {
        self.coord
    }

    pub fn profile(&self) -> ConnectionProfile {
        self.profile
    }

    pub fn kind(&self) -> NodeKind {
        self.profile.kind()
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn powered(&self) -> bool {
        self.powered
    }

    pub fn can_rotate(&self) -> bool {
        self.profile.rotatable()
    }

    pub fn is_source(&self) -> bool {
        self.profile.is_source()
    }

    pub fn is_goal(&self) -> bool {
        self.profile.is_goal()
    }

    /// Advance rotation one step clockwise.
    ///
    /// Returns whether the rotation took effect; fixed nodes no-op.
    pub fn rotate(&mut self) -> bool {
        if !self.can_rotate() {
            return false;
        }
        self.rotation = (self.rotation + 1) % 6;
        true
    }

    /// Set rotation directly (solver/scramble surface).
    ///
    /// Same rotatability rule as [`Node::rotate`]; values wrap into [0,5].
    pub fn set_rotation(&mut self, rotation: u8) -> bool {
        if !self.can_rotate() {
            return false;
        }
        self.rotation = rotation % 6;
        true
    }

    /// Effective port facing the given world direction at current rotation
    #[inline(always)]
    pub fn port_open(&self, direction: Direction) -> bool {
        let idx = (direction.index() + self.rotation as usize) % PORT_COUNT;
        self.profile.ports().ports()[idx]
    }

    /// All six effective ports in direction index order
    pub fn effective_ports(&self) -> [bool; PORT_COUNT] {
        let mut out = [false; PORT_COUNT];
        for dir in Direction::ALL {
            out[dir.index()] = self.port_open(dir);
        }
        out
    }

    /// Update the power flag. Sources are always powered and ignore `false`.
    pub(crate) fn set_powered(&mut self, powered: bool) {
        if self.is_source() {
            self.powered = true;
            return;
        }
        self.powered = powered;
    }
}
