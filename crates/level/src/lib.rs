//! Level data boundary - JSON level format and sanitizing loader
//!
//! Levels are authored as JSON documents: grid dimensions, a table of named
//! connection profiles (kind + 6-character binary port pattern +
//! rotatability), and one entry per occupied cell referencing a profile with
//! an initial rotation.
//!
//! Loading never fails on bad *content*: malformed patterns collapse to
//! all-closed ports, out-of-range rotations are clamped, unknown references
//! and out-of-bounds cells are skipped, and each repair is reported as a
//! [`LoadWarning`] for the caller to surface. A broken level should fail
//! its win condition, not crash the engine. Only file-level problems
//! (unreadable path, invalid JSON) error out, at this crate's boundary.
//!
//! # Example document
//!
//! ```json
//! {
//!   "number": 1,
//!   "name": "First Light",
//!   "difficulty": 1,
//!   "width": 3,
//!   "height": 5,
//!   "profiles": {
//!     "source_up": { "kind": "source", "pattern": "100000", "rotatable": false },
//!     "elbow": { "kind": "connector", "pattern": "100100" }
//!   },
//!   "nodes": [
//!     { "x": 0, "y": 0, "profile": "source_up" },
//!     { "x": 0, "y": 2, "profile": "elbow", "rotation": 3 }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use hexflow_core::{ConnectionProfile, Grid, HexCoord, Node, PortPattern};
use hexflow_types::NodeKind;

/// Named profile entry as authored in the JSON document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDoc {
    pub kind: String,
    pub pattern: String,
    #[serde(default = "default_rotatable")]
    pub rotatable: bool,
}

fn default_rotatable() -> bool {
    true
}

/// One occupied cell as authored in the JSON document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDoc {
    pub x: i8,
    pub y: i8,
    pub profile: String,
    #[serde(default)]
    pub rotation: u8,
}

/// Complete level document (the only externally durable format)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDoc {
    pub number: u32,
    pub name: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: u8,
    pub width: u8,
    pub height: u8,
    pub profiles: BTreeMap<String, ProfileDoc>,
    pub nodes: Vec<NodeDoc>,
}

fn default_difficulty() -> u8 {
    1
}

/// A repair applied while building a level from its document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// Pattern was not six binary digits; ports sanitized to all-closed
    BadPattern { profile: String, pattern: String },
    /// Unrecognized kind string; profile treated as a connector
    UnknownKind { profile: String, kind: String },
    /// Node references a profile name missing from the table; cell skipped
    UnknownProfile { x: i8, y: i8, profile: String },
    /// Initial rotation outside [0,5]; clamped
    RotationClamped { x: i8, y: i8, rotation: u8 },
    /// Node coordinate outside the (clamped) grid; cell skipped
    OutOfBounds { x: i8, y: i8 },
    /// Two node entries share a coordinate; the later entry wins
    DuplicateCell { x: i8, y: i8 },
    /// Level has no source nodes and can never power anything
    NoSources,
    /// Level has no goal nodes and can never be won
    NoGoals,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::BadPattern { profile, pattern } => write!(
                f,
                "profile '{profile}': pattern '{pattern}' is not six binary digits, ports closed"
            ),
            LoadWarning::UnknownKind { profile, kind } => write!(
                f,
                "profile '{profile}': unknown kind '{kind}', treated as connector"
            ),
            LoadWarning::UnknownProfile { x, y, profile } => write!(
                f,
                "node ({x}, {y}): unknown profile '{profile}', cell skipped"
            ),
            LoadWarning::RotationClamped { x, y, rotation } => write!(
                f,
                "node ({x}, {y}): rotation {rotation} out of range, clamped to 5"
            ),
            LoadWarning::OutOfBounds { x, y } => {
                write!(f, "node ({x}, {y}): outside the grid, cell skipped")
            }
            LoadWarning::DuplicateCell { x, y } => {
                write!(f, "node ({x}, {y}): duplicate coordinate, later entry kept")
            }
            LoadWarning::NoSources => write!(f, "level has no source nodes"),
            LoadWarning::NoGoals => write!(f, "level has no goal nodes"),
        }
    }
}

/// A loaded level: metadata plus a grid ready for `PuzzleState::new`
#[derive(Debug, Clone)]
pub struct Level {
    pub number: u32,
    pub name: String,
    pub difficulty: u8,
    pub grid: Grid,
}

/// Build a [`Level`] from a parsed document, sanitizing bad content.
pub fn build_level(doc: &LevelDoc) -> (Level, Vec<LoadWarning>) {
    let mut warnings = Vec::new();

    // Resolve the profile table once; nodes reference entries by name.
    let mut profiles: BTreeMap<&str, ConnectionProfile> = BTreeMap::new();
    for (name, entry) in &doc.profiles {
        let kind = match NodeKind::from_str(&entry.kind) {
            Some(kind) => kind,
            None => {
                warnings.push(LoadWarning::UnknownKind {
                    profile: name.clone(),
                    kind: entry.kind.clone(),
                });
                NodeKind::Connector
            }
        };

        let ports = match PortPattern::parse(&entry.pattern) {
            Some(ports) => ports,
            None => {
                warnings.push(LoadWarning::BadPattern {
                    profile: name.clone(),
                    pattern: entry.pattern.clone(),
                });
                PortPattern::CLOSED
            }
        };

        profiles.insert(name.as_str(), ConnectionProfile::new(kind, ports, entry.rotatable));
    }

    let mut grid = Grid::new(doc.width, doc.height);

    for node_doc in &doc.nodes {
        let coord = HexCoord::new(node_doc.x, node_doc.y);

        let Some(&profile) = profiles.get(node_doc.profile.as_str()) else {
            warnings.push(LoadWarning::UnknownProfile {
                x: node_doc.x,
                y: node_doc.y,
                profile: node_doc.profile.clone(),
            });
            continue;
        };

        if !coord.in_bounds(grid.width(), grid.height()) {
            warnings.push(LoadWarning::OutOfBounds {
                x: node_doc.x,
                y: node_doc.y,
            });
            continue;
        }

        let rotation = if node_doc.rotation > 5 {
            warnings.push(LoadWarning::RotationClamped {
                x: node_doc.x,
                y: node_doc.y,
                rotation: node_doc.rotation,
            });
            5
        } else {
            node_doc.rotation
        };

        if grid.is_occupied(coord) {
            warnings.push(LoadWarning::DuplicateCell {
                x: node_doc.x,
                y: node_doc.y,
            });
        }
        grid.insert(Node::new(coord, profile, rotation));
    }

    if grid.sources().is_empty() {
        warnings.push(LoadWarning::NoSources);
    }
    if grid.goals().is_empty() {
        warnings.push(LoadWarning::NoGoals);
    }

    let level = Level {
        number: doc.number,
        name: doc.name.clone(),
        difficulty: doc.difficulty,
        grid,
    };
    (level, warnings)
}

/// Parse a level from a JSON string.
pub fn parse_level(json: &str) -> anyhow::Result<(Level, Vec<LoadWarning>)> {
    let doc: LevelDoc = serde_json::from_str(json).context("invalid level JSON")?;
    Ok(build_level(&doc))
}

/// Load a level from a JSON file on disk.
pub fn load_level_file(path: impl AsRef<Path>) -> anyhow::Result<(Level, Vec<LoadWarning>)> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read level file {}", path.display()))?;
    parse_level(&json).with_context(|| format!("failed to parse {}", path.display()))
}

/// Serialize a level document back to pretty JSON (authoring round trip).
pub fn to_json(doc: &LevelDoc) -> anyhow::Result<String> {
    serde_json::to_string_pretty(doc).context("failed to serialize level")
}
