//! Rule engine - classic B3/S23 with a third background state
//!
//! Births and survivals follow Conway's rule. A live cell that fails the rule
//! becomes [`CellState::Dead`]. Any other cell that is not born keeps its
//! state, so [`CellState::None`] background is only ever left through a birth
//! and never turns into a husk on its own.

use crate::grid::Grid;
use crate::types::CellState;

/// Offsets of the eight surrounding cells
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Count live cells among the 8 wrapped neighbours of `(x, y)`.
///
/// The cell itself is never counted. Coordinates are reduced onto the torus
/// before the offsets are applied, so any `i64` is accepted.
#[inline]
pub fn live_neighbors(grid: &Grid, x: i64, y: i64) -> u8 {
    let x = x.rem_euclid(grid.cols() as i64);
    let y = y.rem_euclid(grid.rows() as i64);
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| grid.get(x + dx, y + dy).is_alive())
        .count() as u8
}

/// Compute the next state of `(x, y)` from the current generation.
pub fn next_state(grid: &Grid, x: i64, y: i64) -> CellState {
    let current = grid.get(x, y);
    let n = live_neighbors(grid, x, y);

    let was_alive = current.is_alive();
    let is_alive = n == 3 || (n == 2 && was_alive);

    if was_alive && !is_alive {
        CellState::Dead
    } else if is_alive {
        CellState::Alive
    } else {
        current
    }
}

/// Write the next generation of `src` into `dst`.
///
/// `dst` must have the same dimensions. Every neighbour count reads `src`
/// only, so no cell sees a partially updated generation.
pub fn advance(src: &Grid, dst: &mut Grid) {
    debug_assert_eq!((src.cols(), src.rows()), (dst.cols(), dst.rows()));

    for y in 0..src.rows() as i64 {
        for x in 0..src.cols() as i64 {
            dst.set(x, y, next_state(src, x, y));
        }
    }
}
