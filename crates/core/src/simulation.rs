//! Simulation context - owns the grid and its back buffer
//!
//! Each [`Simulation::step`] computes the whole next generation into the back
//! buffer and then swaps the two, so the front grid always holds one complete
//! generation.

use tracing::debug;

use crate::error::Result;
use crate::grid::Grid;
use crate::rules;
use crate::types::{CellState, TERRAIN_WARMUP_GENERATIONS};

#[derive(Debug, Clone)]
pub struct Simulation {
    front: Grid,
    back: Grid,
    generation: u64,
    terrain: bool,
}

impl Simulation {
    /// Allocate a randomized simulation.
    ///
    /// In terrain mode the warm-up generations run before this returns, so the
    /// first rendered frame is already a settled map.
    pub fn new(cols: usize, rows: usize, seed: u32, terrain: bool) -> Result<Self> {
        let mut front = Grid::new(cols, rows)?;
        front.randomize(seed);
        debug!(
            cols,
            rows,
            seed,
            alive = front.count(CellState::Alive),
            "grid randomized"
        );

        let mut sim = Self::from_grid(front)?;
        if terrain {
            sim.warm_up_terrain();
        }
        Ok(sim)
    }

    /// Wrap an existing grid (generation 0, plain mode).
    pub fn from_grid(grid: Grid) -> Result<Self> {
        let back = Grid::new(grid.cols(), grid.rows())?;
        Ok(Self {
            front: grid,
            back,
            generation: 0,
            terrain: false,
        })
    }

    /// Settle random noise into terrain.
    ///
    /// Runs the unrendered warm-up generations, then folds every `Dead` husk
    /// into `None` so only vegetation and empty ground remain.
    pub fn warm_up_terrain(&mut self) {
        for _ in 0..TERRAIN_WARMUP_GENERATIONS {
            self.step();
        }
        let folded = self.front.replace(CellState::Dead, CellState::None);
        self.terrain = true;
        debug!(
            generations = TERRAIN_WARMUP_GENERATIONS,
            folded, "terrain warm-up complete"
        );
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        rules::advance(&self.front, &mut self.back);
        std::mem::swap(&mut self.front, &mut self.back);
        self.generation += 1;
    }

    /// Current (fully computed) generation
    pub fn grid(&self) -> &Grid {
        &self.front
    }

    /// Mutable access to the current generation, e.g. to stamp patterns.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.front
    }

    /// Generations computed so far, including terrain warm-up
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_terrain(&self) -> bool {
        self.terrain
    }
}
