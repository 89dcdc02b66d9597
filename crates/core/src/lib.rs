//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the grid model, the generation rule and the
//! simulation context. It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces the identical run
//! - **Testable**: Rule behaviour is checked cell by cell
//! - **Portable**: Can run headless (benchmarks, tests)
//!
//! # Module Structure
//!
//! - [`grid`]: toroidal `cols x rows` grid with wrap-around addressing
//! - [`rules`]: Game of Life rule extended with the `None` background state
//! - [`simulation`]: double-buffered context that steps whole generations
//! - [`rng`]: seeded LCG used for the initial population
//! - [`error`]: allocation and pattern errors
//!
//! # Rules
//!
//! | Current | Live neighbours | Next |
//! |---------|-----------------|------|
//! | `Alive` | 2 or 3 | `Alive` |
//! | `Alive` | anything else | `Dead` |
//! | `Dead` / `None` | 3 | `Alive` |
//! | `Dead` / `None` | anything else | unchanged |
//!
//! # Example
//!
//! ```
//! use tui_life_core::{Grid, Simulation};
//!
//! // A blinker flips orientation every generation.
//! let grid = Grid::from_rows(&[
//!     ".....",
//!     ".....",
//!     ".###.",
//!     ".....",
//!     ".....",
//! ])
//! .unwrap();
//! let mut sim = Simulation::from_grid(grid).unwrap();
//!
//! sim.step();
//! sim.step();
//! let rows = sim.grid().to_rows();
//! assert_eq!(rows[1], "..x..");
//! assert_eq!(rows[2], ".###.");
//! ```

pub mod error;
pub mod grid;
pub mod rng;
pub mod rules;
pub mod simulation;

pub use tui_life_types as types;

// Re-export commonly used types for convenience
pub use error::LifeError;
pub use grid::Grid;
pub use rng::SimpleRng;
pub use rules::{advance, live_neighbors, next_state};
pub use simulation::Simulation;
