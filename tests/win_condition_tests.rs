//! Win evaluator tests

use hexflow::core::{
    evaluate_win, propagate, ConnectionProfile, Grid, HexCoord, Node, PortPattern, PoweredSet,
};
use hexflow::types::NodeKind;

fn place(grid: &mut Grid, x: i8, y: i8, kind: NodeKind, pattern: &str, rotation: u8) {
    let ports = PortPattern::parse(pattern).unwrap();
    let profile = ConnectionProfile::new(kind, ports, kind != NodeKind::Source);
    grid.insert(Node::new(HexCoord::new(x, y), profile, rotation));
}

#[test]
fn test_aligned_chain_wins() {
    // Source -> Connector -> Goal, all ports aligned.
    let mut grid = Grid::new(2, 6);
    place(&mut grid, 0, 0, NodeKind::Source, "100000", 0);
    place(&mut grid, 0, 2, NodeKind::Connector, "100100", 0);
    place(&mut grid, 0, 4, NodeKind::Goal, "000100", 0);

    let powered = propagate(&grid, &grid.sources());
    assert!(evaluate_win(&grid.goals(), &powered));
}

#[test]
fn test_unreachable_goal_loses() {
    // Goal present but no path of matching ports reaches it.
    let mut grid = Grid::new(2, 6);
    place(&mut grid, 0, 0, NodeKind::Source, "100000", 0);
    place(&mut grid, 0, 2, NodeKind::Connector, "000000", 0);
    place(&mut grid, 0, 4, NodeKind::Goal, "000100", 0);

    let powered = propagate(&grid, &grid.sources());
    assert!(powered.contains(HexCoord::new(0, 0)), "source stays powered");
    assert!(!evaluate_win(&grid.goals(), &powered));
}

#[test]
fn test_every_goal_must_be_powered() {
    let mut grid = Grid::new(2, 6);
    place(&mut grid, 0, 0, NodeKind::Source, "100000", 0);
    place(&mut grid, 0, 2, NodeKind::Goal, "100100", 0);
    // Second goal dangling with no ports.
    place(&mut grid, 1, 0, NodeKind::Goal, "000000", 0);

    let powered = propagate(&grid, &grid.sources());
    assert!(powered.contains(HexCoord::new(0, 2)));
    assert!(!evaluate_win(&grid.goals(), &powered));
}

#[test]
fn test_empty_goal_list_is_never_a_win() {
    let mut powered = PoweredSet::empty(4);
    powered.insert(HexCoord::new(0, 0));
    powered.insert(HexCoord::new(1, 1));

    assert!(!evaluate_win(&[], &powered));
}

#[test]
fn test_empty_powered_set_is_never_a_win() {
    let goals = [HexCoord::new(0, 0)];
    assert!(!evaluate_win(&goals, &PoweredSet::empty(4)));
}

#[test]
fn test_empty_grid_loses() {
    let grid = Grid::new(3, 3);
    let powered = propagate(&grid, &grid.sources());
    assert!(powered.is_empty());
    assert!(!evaluate_win(&grid.goals(), &powered));
}
