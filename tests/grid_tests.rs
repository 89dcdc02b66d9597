//! Grid tests - wrap-around addressing and initial population

use tui_life::core::{Grid, LifeError};
use tui_life::types::CellState;

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(7, 4).unwrap();
    assert_eq!(grid.cols(), 7);
    assert_eq!(grid.rows(), 4);

    for y in 0..4 {
        for x in 0..7 {
            assert_eq!(grid.get(x, y), CellState::None, "cell ({x}, {y})");
        }
    }
}

#[test]
fn test_get_wraps_any_coordinate() {
    let cols = 7i64;
    let rows = 4i64;
    let mut grid = Grid::new(cols as usize, rows as usize).unwrap();

    // Give every cell a distinct-ish state pattern so wrong lookups show up.
    for y in 0..rows {
        for x in 0..cols {
            let state = match (x + 2 * y) % 3 {
                0 => CellState::Alive,
                1 => CellState::Dead,
                _ => CellState::None,
            };
            grid.set(x, y, state);
        }
    }

    let probes = [
        (-1, -1),
        (-7, 0),
        (-8, -5),
        (7, 4),
        (15, 9),
        (1_000_003, -999_999),
        (i64::MIN / 2, i64::MAX / 2),
    ];
    for (x, y) in probes {
        let cx = x.rem_euclid(cols);
        let cy = y.rem_euclid(rows);
        assert_eq!(grid.get(x, y), grid.get(cx, cy), "probe ({x}, {y})");
    }
}

#[test]
fn test_set_wraps_to_canonical_cell() {
    let mut grid = Grid::new(5, 3).unwrap();

    grid.set(-1, -1, CellState::Alive);
    assert_eq!(grid.get(4, 2), CellState::Alive);

    grid.set(12, 7, CellState::Dead);
    assert_eq!(grid.get(2, 1), CellState::Dead);

    assert_eq!(grid.count(CellState::Alive), 1);
    assert_eq!(grid.count(CellState::Dead), 1);
}

#[test]
fn test_randomize_is_deterministic_and_never_dead() {
    let mut a = Grid::new(40, 20).unwrap();
    let mut b = Grid::new(40, 20).unwrap();
    a.randomize(1234);
    b.randomize(1234);

    assert_eq!(a, b);
    assert_eq!(a.count(CellState::Dead), 0);

    let alive = a.count(CellState::Alive);
    assert!(alive > 200 && alive < 600, "alive = {alive}");
}

#[test]
fn test_randomize_differs_by_seed() {
    let mut a = Grid::new(40, 20).unwrap();
    let mut b = Grid::new(40, 20).unwrap();
    a.randomize(1);
    b.randomize(2);
    assert_ne!(a, b);
}

#[test]
fn test_pattern_round_trip() {
    let rows = ["#.x", "..#"];
    let grid = Grid::from_rows(&rows).unwrap();
    assert_eq!(grid.to_rows(), rows);
}

#[test]
fn test_zero_sized_grid_is_rejected() {
    assert_eq!(
        Grid::new(0, 0),
        Err(LifeError::InvalidDimensions { cols: 0, rows: 0 })
    );
}
