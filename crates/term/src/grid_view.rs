//! GridView: maps a `core::Grid` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;

use crate::core::Grid;
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::{CellState, Theme};

/// One framebuffer cell per grid cell, styled by the run's theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridView {
    theme: Theme,
}

impl GridView {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Render into a fresh framebuffer sized to the grid.
    pub fn render(&self, grid: &Grid) -> FrameBuffer {
        let mut fb = FrameBuffer::new(grid.cols(), grid.rows());
        self.render_into(grid, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, resizing it to the grid.
    ///
    /// Callers can keep one framebuffer for the whole run; the grid never
    /// changes size, so after the first frame this does not allocate.
    pub fn render_into(&self, grid: &Grid, fb: &mut FrameBuffer) {
        fb.resize(grid.cols(), grid.rows());
        for y in 0..grid.rows() {
            for (x, &state) in grid.row(y).iter().enumerate() {
                fb.set(x, y, glyph(self.theme, state));
            }
        }
    }
}

/// Styled glyph for a cell state under `theme`.
pub fn glyph(theme: Theme, state: CellState) -> Cell {
    let (ch, style) = match (theme, state) {
        (Theme::Plain, CellState::Alive) => (' ', CellStyle::bg(Color::DarkRed)),
        (Theme::Plain, CellState::Dead | CellState::None) => (' ', CellStyle::bg(Color::White)),
        (Theme::Terrain, CellState::Dead) => ('#', CellStyle::fg(Color::DarkGreen)),
        (Theme::Terrain, CellState::Alive) => ('^', CellStyle::fg(Color::DarkYellow)),
        (Theme::Terrain, CellState::None) => (';', CellStyle::bg(Color::DarkBlue)),
    };
    Cell { ch, style }
}
