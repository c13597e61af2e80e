//! Connection profiles - immutable tile archetypes
//!
//! A profile describes a tile family: which of the six directions carry a
//! port, what role the tile plays (source/goal/connector/empty), and whether
//! the player may rotate it. Port patterns arrive as 6-character binary
//! strings from level data and are parsed exactly once here; nothing ever
//! re-parses the string at query time.

use hexflow_types::{Direction, NodeKind, PORT_COUNT};

/// Fixed 6-entry port pattern, indexed by [`Direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortPattern {
    ports: [bool; PORT_COUNT],
}

impl PortPattern {
    /// Pattern with every port closed
    pub const CLOSED: PortPattern = PortPattern {
        ports: [false; PORT_COUNT],
    };

    pub const fn new(ports: [bool; PORT_COUNT]) -> Self {
        Self { ports }
    }

    /// Parse a 6-character string of '0'/'1' digits.
    ///
    /// Returns `None` for any malformed input (wrong length or a character
    /// other than the two binary digits); callers sanitize to
    /// [`PortPattern::CLOSED`] and surface a warning.
    pub fn parse(s: &str) -> Option<Self> {
        if s.len() != PORT_COUNT {
            return None;
        }

        let mut ports = [false; PORT_COUNT];
        for (i, c) in s.chars().enumerate() {
            match c {
                '0' => ports[i] = false,
                '1' => ports[i] = true,
                _ => return None,
            }
        }
        Some(Self { ports })
    }

    /// Port state in the given base direction (rotation unaware)
    #[inline(always)]
    pub fn port(self, direction: Direction) -> bool {
        self.ports[direction.index()]
    }

    /// Raw port array in direction index order
    pub fn ports(self) -> [bool; PORT_COUNT] {
        self.ports
    }

    /// Number of open ports
    pub fn open_count(self) -> usize {
        self.ports.iter().filter(|&&open| open).count()
    }

    pub fn is_closed(self) -> bool {
        self.ports == [false; PORT_COUNT]
    }
}

impl std::fmt::Display for PortPattern {
    /// Canonical 6-character form; parses back to the identical pattern
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for open in self.ports {
            f.write_str(if open { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Immutable description of a tile archetype.
///
/// Copied by value into every node stamped from it; the per-cell mutable
/// state (rotation, power) lives on the node, never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionProfile {
    kind: NodeKind,
    ports: PortPattern,
    rotatable: bool,
}

impl ConnectionProfile {
    /// Build a profile. Sources are never rotatable, whatever the data says.
    pub fn new(kind: NodeKind, ports: PortPattern, rotatable: bool) -> Self {
        let rotatable = match kind {
            NodeKind::Source => false,
            _ => rotatable,
        };
        Self {
            kind,
            ports,
            rotatable,
        }
    }

    pub fn kind(self) -> NodeKind {
        self.kind
    }

    pub fn ports(self) -> PortPattern {
        self.ports
    }

    pub fn rotatable(self) -> bool {
        self.rotatable
    }

    pub fn is_source(self) -> bool {
        self.kind == NodeKind::Source
    }

    pub fn is_goal(self) -> bool {
        self.kind == NodeKind::Goal
    }
}
