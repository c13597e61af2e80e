//! Puzzle state module - level lifecycle, rotation, and the debounced win check
//!
//! Ties the core components together: the grid, cached source/goal lists,
//! the current powered set, and the timing around win evaluation.
//!
//! A rotation counts only after a short settling period, so the win check is
//! debounced: rotating (re)schedules one pending check `WIN_CHECK_DELAY_MS`
//! ahead, and a rotation arriving inside the window replaces the pending
//! check rather than stacking a second one. Call
//! [`PuzzleState::tick`] every frame with elapsed milliseconds, the same
//! fixed-timestep contract the rest of the workspace uses.
//!
//! State changes surface as return values ([`RotateOutcome`]) and a
//! single consumable [`PuzzleEvent`] slot - there is no global listener
//! registry.

use crate::grid::Grid;
use crate::hex::HexCoord;
use crate::power::{apply_powered_states, evaluate_win, propagate, PoweredSet};
use hexflow_types::{STAR_THRESHOLDS, WIN_CHECK_DELAY_MS};

/// Result of a rotation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotateOutcome {
    /// Whether the rotation took effect (false for fixed nodes, empty
    /// coordinates, or an inactive level)
    pub rotated: bool,
    /// Powered set recomputed after the rotation
    pub powered: PoweredSet,
}

/// Last noteworthy state change (consumed by observers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleEvent {
    /// A debounced win check ran without completing the level
    WinChecked { winning: bool },
    /// All goals powered; the level is over
    LevelComplete {
        rotations: u32,
        elapsed_ms: u32,
        stars: u8,
    },
}

/// Complete runtime state for one loaded level.
#[derive(Debug, Clone)]
pub struct PuzzleState {
    grid: Grid,
    sources: Vec<HexCoord>,
    goals: Vec<HexCoord>,
    powered: PoweredSet,
    /// Countdown to the pending win check, if one is scheduled
    win_check_ms: Option<u32>,
    level_active: bool,
    rotations: u32,
    elapsed_ms: u32,
    last_event: Option<PuzzleEvent>,
}

impl PuzzleState {
    /// Take ownership of a populated grid and start the level.
    ///
    /// Sources and goals are cached up front; the initial powered set is
    /// computed immediately so render state is correct before any input.
    pub fn new(grid: Grid) -> Self {
        let sources = grid.sources();
        let goals = grid.goals();
        let mut state = Self {
            powered: PoweredSet::empty(grid.width()),
            grid,
            sources,
            goals,
            win_check_ms: None,
            level_active: true,
            rotations: 0,
            elapsed_ms: 0,
            last_event: None,
        };
        state.update_connections();
        state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn sources(&self) -> &[HexCoord] {
        &self.sources
    }

    pub fn goals(&self) -> &[HexCoord] {
        &self.goals
    }

    /// Powered set from the most recent propagation
    pub fn powered_set(&self) -> PoweredSet {
        self.powered
    }

    /// Current win predicate over the cached powered set
    pub fn is_winning(&self) -> bool {
        evaluate_win(&self.goals, &self.powered)
    }

    pub fn level_active(&self) -> bool {
        self.level_active
    }

    pub fn rotation_count(&self) -> u32 {
        self.rotations
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Remaining delay before the pending win check, if any
    pub fn pending_win_check_ms(&self) -> Option<u32> {
        self.win_check_ms
    }

    /// Last event, consumed on read
    pub fn take_last_event(&mut self) -> Option<PuzzleEvent> {
        self.last_event.take()
    }

    /// Star rating for the current rotation count
    pub fn stars(&self) -> u8 {
        if self.rotations <= STAR_THRESHOLDS[0] {
            3
        } else if self.rotations <= STAR_THRESHOLDS[1] {
            2
        } else {
            1
        }
    }

    /// Rotate the node at a coordinate one step clockwise.
    ///
    /// On success the powered set is recomputed immediately and the
    /// debounced win check is (re)scheduled. Rotating an empty cell, a
    /// fixed node, or after level completion is a no-op.
    pub fn rotate_node(&mut self, coord: HexCoord) -> RotateOutcome {
        if !self.level_active {
            return RotateOutcome {
                rotated: false,
                powered: self.powered,
            };
        }

        let rotated = match self.grid.get_mut(coord) {
            Some(node) => node.rotate(),
            None => false,
        };

        if !rotated {
            return RotateOutcome {
                rotated: false,
                powered: self.powered,
            };
        }

        self.rotations += 1;
        let powered = self.update_connections();

        // Coalescing debounce: replace any pending check, never stack.
        self.win_check_ms = Some(WIN_CHECK_DELAY_MS);

        RotateOutcome {
            rotated: true,
            powered,
        }
    }

    /// Advance time. Runs the pending win check once its delay expires.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if !self.level_active {
            return;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);

        if let Some(remaining) = self.win_check_ms {
            if remaining <= elapsed_ms {
                self.win_check_ms = None;
                self.run_win_check();
            } else {
                self.win_check_ms = Some(remaining - elapsed_ms);
            }
        }
    }

    /// Run the win check immediately, cancelling any pending one
    pub fn force_win_check(&mut self) {
        if !self.level_active {
            return;
        }
        self.win_check_ms = None;
        self.run_win_check();
    }

    /// Recompute the powered set from all sources and write power flags
    /// across the whole grid.
    pub fn update_connections(&mut self) -> PoweredSet {
        self.powered = propagate(&self.grid, &self.sources);
        apply_powered_states(&mut self.grid, &self.powered);
        self.powered
    }

    fn run_win_check(&mut self) {
        self.update_connections();
        let winning = evaluate_win(&self.goals, &self.powered);

        if winning {
            self.level_active = false;
            self.last_event = Some(PuzzleEvent::LevelComplete {
                rotations: self.rotations,
                elapsed_ms: self.elapsed_ms,
                stars: self.stars(),
            });
        } else {
            self.last_event = Some(PuzzleEvent::WinChecked { winning });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use crate::profile::{ConnectionProfile, PortPattern};
    use hexflow_types::NodeKind;

    fn place(grid: &mut Grid, x: i8, y: i8, kind: NodeKind, pattern: &str, rotation: u8) {
        let ports = PortPattern::parse(pattern).unwrap();
        let profile = ConnectionProfile::new(kind, ports, kind != NodeKind::Source);
        grid.insert(Node::new(HexCoord::new(x, y), profile, rotation));
    }

    /// Source (0,0) -> Connector (0,2) -> Goal (0,4), connector one step off.
    fn almost_solved() -> PuzzleState {
        let mut grid = Grid::new(2, 6);
        place(&mut grid, 0, 0, NodeKind::Source, "100000", 0);
        place(&mut grid, 0, 2, NodeKind::Connector, "100100", 1);
        place(&mut grid, 0, 4, NodeKind::Goal, "000100", 0);
        PuzzleState::new(grid)
    }

    #[test]
    fn new_state_computes_initial_power() {
        let state = almost_solved();
        // Source is powered from the start; the misrotated connector is not.
        assert!(state.powered_set().contains(HexCoord::new(0, 0)));
        assert!(!state.powered_set().contains(HexCoord::new(0, 2)));
        assert!(!state.is_winning());
    }

    #[test]
    fn rotation_recomputes_power_immediately() {
        let mut state = almost_solved();

        // Five more steps bring the connector back to rotation 0.
        for _ in 0..4 {
            assert!(state.rotate_node(HexCoord::new(0, 2)).rotated);
        }
        let outcome = state.rotate_node(HexCoord::new(0, 2));
        assert!(outcome.rotated);
        assert_eq!(outcome.powered.len(), 3);
        assert!(state.is_winning());
    }

    #[test]
    fn win_check_waits_for_debounce() {
        let mut state = almost_solved();
        for _ in 0..5 {
            state.rotate_node(HexCoord::new(0, 2));
        }

        assert!(state.level_active());
        assert_eq!(state.pending_win_check_ms(), Some(WIN_CHECK_DELAY_MS));

        state.tick(WIN_CHECK_DELAY_MS);
        assert!(!state.level_active());
        match state.take_last_event() {
            Some(PuzzleEvent::LevelComplete { rotations, stars, .. }) => {
                assert_eq!(rotations, 5);
                assert_eq!(stars, 3);
            }
            other => panic!("expected LevelComplete, got {:?}", other),
        }
    }

    #[test]
    fn new_rotation_replaces_pending_check() {
        let mut state = almost_solved();

        state.rotate_node(HexCoord::new(0, 2));
        state.tick(WIN_CHECK_DELAY_MS - 100);
        assert_eq!(state.pending_win_check_ms(), Some(100));

        // A second rotation inside the window resets the full delay.
        state.rotate_node(HexCoord::new(0, 2));
        assert_eq!(state.pending_win_check_ms(), Some(WIN_CHECK_DELAY_MS));

        // The old deadline passing must not fire a check.
        state.tick(100);
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn rotating_source_is_a_no_op() {
        let mut state = almost_solved();
        let outcome = state.rotate_node(HexCoord::new(0, 0));
        assert!(!outcome.rotated);
        assert_eq!(state.rotation_count(), 0);
        assert_eq!(state.pending_win_check_ms(), None);
    }

    #[test]
    fn rotation_after_completion_is_ignored() {
        let mut state = almost_solved();
        for _ in 0..5 {
            state.rotate_node(HexCoord::new(0, 2));
        }
        state.tick(WIN_CHECK_DELAY_MS);
        assert!(!state.level_active());

        let outcome = state.rotate_node(HexCoord::new(0, 2));
        assert!(!outcome.rotated);
    }

    #[test]
    fn force_win_check_skips_the_delay() {
        let mut state = almost_solved();
        for _ in 0..5 {
            state.rotate_node(HexCoord::new(0, 2));
        }
        state.force_win_check();
        assert!(!state.level_active());
    }

    #[test]
    fn star_thresholds() {
        let mut state = almost_solved();
        assert_eq!(state.stars(), 3);
        state.rotations = 11;
        assert_eq!(state.stars(), 2);
        state.rotations = 21;
        assert_eq!(state.stars(), 1);
    }
}
