//! Terrain mode tests - warm-up and Dead -> None fold

use tui_life::core::{Grid, Simulation};
use tui_life::types::{CellState, TERRAIN_WARMUP_GENERATIONS};

#[test]
fn test_full_grid_warmup_leaves_no_dead() {
    let mut grid = Grid::new(12, 9).unwrap();
    grid.fill(CellState::Alive);
    let mut sim = Simulation::from_grid(grid).unwrap();

    sim.warm_up_terrain();

    assert_eq!(sim.generation(), TERRAIN_WARMUP_GENERATIONS as u64);
    assert_eq!(sim.grid().count(CellState::Dead), 0);
    // Everything starves in the first generation, so the map is empty.
    assert_eq!(sim.grid().count(CellState::None), 12 * 9);
}

#[test]
fn test_random_terrain_has_only_alive_and_none() {
    for seed in [1, 42, 0xDEAD_BEEF] {
        let sim = Simulation::new(80, 30, seed, true).unwrap();
        let grid = sim.grid();
        assert_eq!(grid.count(CellState::Dead), 0, "seed {seed}");
        assert_eq!(
            grid.count(CellState::Alive) + grid.count(CellState::None),
            80 * 30
        );
    }
}

#[test]
fn test_terrain_matches_manual_warmup() {
    let plain = Simulation::new(20, 10, 7, false).unwrap();
    let mut manual = Simulation::from_grid(plain.grid().clone()).unwrap();
    manual.step();
    manual.step();
    manual.grid_mut().replace(CellState::Dead, CellState::None);

    let terrain = Simulation::new(20, 10, 7, true).unwrap();
    assert_eq!(terrain.grid(), manual.grid());
}

#[test]
fn test_terrain_keeps_evolving_with_three_state_rule() {
    let mut sim = Simulation::new(30, 15, 5, true).unwrap();
    let before = sim.grid().clone();
    sim.step();

    // Vegetation that dies leaves a Dead husk; empty ground is only ever
    // revived, never turned into a husk.
    for y in 0..15 {
        for x in 0..30 {
            let after = sim.grid().get(x, y);
            match before.get(x, y) {
                CellState::Alive => assert_ne!(after, CellState::None, "({x}, {y})"),
                _ => assert_ne!(after, CellState::Dead, "({x}, {y})"),
            }
        }
    }
}
