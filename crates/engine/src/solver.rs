//! Rotation auto-solver - greedy multi-pass relaxation
//!
//! Editor-time tool for pre-authoring solvable levels: given a fixed layout
//! (profiles and source rotations locked), assign rotations to every
//! rotatable node so that, ideally, the level becomes winnable.
//!
//! Per pass, each rotatable node independently tries all six rotations and
//! keeps the best-scoring one, applied immediately so later nodes in the
//! same pass see the updated neighbor state. Passes repeat until one makes
//! no change or the pass bound is hit.
//!
//! This is hill climbing with no backtracking. Converging to a locally
//! stable but unwon configuration is expected behavior, not a bug; callers
//! verify the result with a propagation pass and re-scramble or hand-edit
//! when the heuristic falls short.

use hexflow_core::rng::SimpleRng;
use hexflow_core::{Grid, HexCoord};
use hexflow_types::{
    Direction, SOLVER_BLOCKED_PENALTY, SOLVER_ISOLATED_PENALTY, SOLVER_LEAK_PENALTY,
    SOLVER_LINK_BONUS, SOLVER_MAX_PASSES,
};

/// Outcome of a solver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveReport {
    /// Passes executed (including the final zero-change pass)
    pub passes: u32,
    /// Total rotation assignments that changed a node
    pub changes: u32,
    /// True when the run ended on a zero-change pass rather than the bound
    pub converged: bool,
}

/// Score one candidate rotation for the node at `coord`.
///
/// Scans all six directions from the trial orientation:
///
/// - open port facing an empty cell or the void: leak penalty
/// - both facing ports open: link bonus, and the node counts as connected
/// - one-sided mismatch against a fixed neighbor: blocked penalty
///   (irreparable - that neighbor can never turn to match)
/// - one-sided mismatch against a rotatable neighbor: no penalty, a later
///   pass may let it self-correct
///
/// A trial that ends with no link at all takes an extra isolation penalty.
fn score_rotation(grid: &Grid, coord: HexCoord, rotation: u8) -> i32 {
    let Some(node) = grid.get(coord) else {
        return 0;
    };

    let mut trial = *node;
    trial.set_rotation(rotation);

    let mut score = 0i32;
    let mut connected = false;

    for dir in Direction::ALL {
        let our_port = trial.port_open(dir);
        let neighbor = grid.get(coord.neighbor(dir));

        match neighbor {
            None => {
                if our_port {
                    score += SOLVER_LEAK_PENALTY;
                }
            }
            Some(other) => {
                let their_port = other.port_open(dir.opposite());
                if our_port && their_port {
                    score += SOLVER_LINK_BONUS;
                    connected = true;
                } else if our_port != their_port && !other.can_rotate() {
                    score += SOLVER_BLOCKED_PENALTY;
                }
            }
        }
    }

    if !connected {
        score += SOLVER_ISOLATED_PENALTY;
    }

    score
}

/// Best rotation for one node under the current neighbor state.
///
/// Ties break toward the lowest rotation index.
fn best_rotation(grid: &Grid, coord: HexCoord) -> u8 {
    let mut best_rot = 0u8;
    let mut best_score = i32::MIN;

    for rotation in 0..6u8 {
        let score = score_rotation(grid, coord, rotation);
        if score > best_score {
            best_score = score;
            best_rot = rotation;
        }
    }

    best_rot
}

/// Assign rotations to all rotatable nodes, greedily maximizing local
/// connectivity. Fixed nodes (sources, locked tiles) are never touched.
pub fn solve(grid: &mut Grid) -> SolveReport {
    let rotatable: Vec<HexCoord> = grid
        .nodes()
        .filter(|node| node.can_rotate())
        .map(|node| node.coord())
        .collect();

    let mut report = SolveReport {
        passes: 0,
        changes: 0,
        converged: false,
    };

    if rotatable.is_empty() {
        report.converged = true;
        return report;
    }

    while report.passes < SOLVER_MAX_PASSES {
        report.passes += 1;
        let mut pass_changes = 0u32;

        for &coord in &rotatable {
            let winner = best_rotation(grid, coord);
            let node = match grid.get_mut(coord) {
                Some(node) => node,
                None => continue,
            };

            if node.rotation() != winner {
                node.set_rotation(winner);
                pass_changes += 1;
            }
        }

        report.changes += pass_changes;
        if pass_changes == 0 {
            report.converged = true;
            break;
        }
    }

    report
}

/// Assign every rotatable node a uniformly random rotation in [0,5].
///
/// The inverse of handing the player a solved layout: run after authoring
/// (or after [`solve`]) to produce the unsolved starting state. Returns the
/// number of nodes whose rotation actually changed.
pub fn scramble(grid: &mut Grid, rng: &mut SimpleRng) -> usize {
    let mut changed = 0;

    for node in grid.nodes_mut() {
        if !node.can_rotate() {
            continue;
        }
        let before = node.rotation();
        node.set_rotation(rng.next_range(6) as u8);
        if node.rotation() != before {
            changed += 1;
        }
    }

    changed
}
