//! Grid module - toroidal cell storage
//!
//! The grid is a `cols x rows` array of [`CellState`] stored as a flat,
//! row-major `Vec` (index `y * cols + x`). Coordinates are signed and wrap on
//! both axes, so every `(x, y)` resolves to exactly one cell and accessors
//! never fail.

use crate::error::{LifeError, Result};
use crate::rng::SimpleRng;
use crate::types::CellState;

/// Fixed-size toroidal grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<CellState>,
}

impl Grid {
    /// Allocate a grid with every cell set to [`CellState::None`].
    ///
    /// Fails with [`LifeError::InvalidDimensions`] when either side is zero and
    /// with [`LifeError::ResourceExhaustion`] when the cells cannot be allocated.
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(LifeError::InvalidDimensions { cols, rows });
        }
        let len = cols
            .checked_mul(rows)
            .filter(|&len| i64::try_from(len).is_ok())
            .ok_or(LifeError::ResourceExhaustion { cells: usize::MAX })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| LifeError::ResourceExhaustion { cells: len })?;
        cells.resize(len, CellState::None);

        Ok(Self { cols, rows, cells })
    }

    /// Build a grid from pattern rows (`#` alive, `x` dead, `.` empty).
    ///
    /// All rows must have the same non-zero length.
    ///
    /// ```
    /// use tui_life_core::Grid;
    /// use tui_life_types::CellState;
    ///
    /// let grid = Grid::from_rows(&[".#.", "x.."]).unwrap();
    /// assert_eq!(grid.cols(), 3);
    /// assert_eq!(grid.rows(), 2);
    /// assert_eq!(grid.get(1, 0), CellState::Alive);
    /// assert_eq!(grid.get(0, 1), CellState::Dead);
    /// ```
    pub fn from_rows(pattern: &[&str]) -> Result<Self> {
        let rows = pattern.len();
        let cols = pattern.first().map_or(0, |row| row.chars().count());
        let mut grid = Self::new(cols, rows)?;

        for (y, line) in pattern.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(LifeError::InvalidPattern {
                    row: y,
                    reason: "ragged row",
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let state = CellState::from_char(ch).ok_or(LifeError::InvalidPattern {
                    row: y,
                    reason: "unknown cell character",
                })?;
                grid.cells[y * cols + x] = state;
            }
        }

        Ok(grid)
    }

    /// Render the grid back into pattern rows (inverse of [`Grid::from_rows`]).
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|cell| cell.as_char()).collect())
            .collect()
    }

    /// Resolve wrapped coordinates to a flat index
    #[inline(always)]
    fn index(&self, x: i64, y: i64) -> usize {
        let x = x.rem_euclid(self.cols as i64) as usize;
        let y = y.rem_euclid(self.rows as i64) as usize;
        y * self.cols + x
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the cell at `(x, y)`, wrapping out-of-range coordinates
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> CellState {
        self.cells[self.index(x, y)]
    }

    /// Set the cell at `(x, y)`, wrapping out-of-range coordinates
    #[inline]
    pub fn set(&mut self, x: i64, y: i64, state: CellState) {
        let idx = self.index(x, y);
        self.cells[idx] = state;
    }

    /// Refill the grid from `seed`: each cell becomes `Alive` or `None` with
    /// equal probability. Never produces `Dead`.
    pub fn randomize(&mut self, seed: u32) {
        let mut rng = SimpleRng::new(seed);
        for cell in &mut self.cells {
            *cell = if rng.next_bool() {
                CellState::Alive
            } else {
                CellState::None
            };
        }
    }

    /// Set every cell to `state`
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// Rewrite every `from` cell to `to`, returning how many changed
    pub fn replace(&mut self, from: CellState, to: CellState) -> usize {
        let mut changed = 0;
        for cell in self.cells.iter_mut().filter(|cell| **cell == from) {
            *cell = to;
            changed += 1;
        }
        changed
    }

    /// Number of cells in `state`
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Row-major view of all cells
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Row `y` (already in range) as a slice
    pub fn row(&self, y: usize) -> &[CellState] {
        let start = y * self.cols;
        &self.cells[start..start + self.cols]
    }
}
