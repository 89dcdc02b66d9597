//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, CLI configuration).
//!
//! # Grid Dimensions
//!
//! The grid is toroidal and sized once at startup:
//!
//! - **Rows**: 30 by default
//! - **Columns**: 80 by default
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Pause between a painted frame and the next generation |
//! | `TERRAIN_WARMUP_GENERATIONS` | 2 | Unrendered generations run before a terrain map is shown |
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{CellState, Theme};
//!
//! assert_eq!(CellState::from_char('#'), Some(CellState::Alive));
//! assert!(CellState::Alive.is_alive());
//!
//! assert_eq!(Theme::for_terrain(true), Theme::Terrain);
//! assert_eq!(Theme::for_terrain(false), Theme::Plain);
//! ```

/// Default number of grid rows
pub const DEFAULT_ROWS: usize = 30;

/// Default number of grid columns
pub const DEFAULT_COLS: usize = 80;

/// Fixed pause between frames in milliseconds
pub const TICK_MS: u64 = 100;

/// Generations computed (and never shown) before a terrain map is displayed
pub const TERRAIN_WARMUP_GENERATIONS: u32 = 2;


/// State of a single grid cell
///
/// - **Dead**: an organism that died; the husk stays marked until revived
/// - **Alive**: a live organism (vegetation in terrain mode)
/// - **None**: empty background that never took part in the simulation
///
/// `None` is only ever left by the birth rule; a cell that dies becomes
/// `Dead`, never `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    Dead,
    Alive,
    #[default]
    None,
}

impl CellState {
    /// Whether this cell counts as a live neighbour
    #[inline(always)]
    pub fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// Parse a cell from its pattern character
    ///
    /// `#` is alive, `x` is dead and `.` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_types::CellState;
    ///
    /// assert_eq!(CellState::from_char('#'), Some(CellState::Alive));
    /// assert_eq!(CellState::from_char('x'), Some(CellState::Dead));
    /// assert_eq!(CellState::from_char('.'), Some(CellState::None));
    /// assert_eq!(CellState::from_char('o'), None);
    /// ```
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(CellState::Alive),
            'x' | 'X' => Some(CellState::Dead),
            '.' => Some(CellState::None),
            _ => None,
        }
    }

    /// Pattern character for this cell (inverse of [`CellState::from_char`])
    pub fn as_char(self) -> char {
        match self {
            CellState::Alive => '#',
            CellState::Dead => 'x',
            CellState::None => '.',
        }
    }
}

/// Glyph theme, chosen once at startup
///
/// - **Plain**: classic Life look, red filled cells on white
/// - **Terrain**: map look, `^` vegetation, `#` husks and `;` water
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Plain,
    Terrain,
}

impl Theme {
    /// Theme that matches the terrain-mode flag
    pub fn for_terrain(terrain: bool) -> Self {
        if terrain {
            Theme::Terrain
        } else {
            Theme::Plain
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Plain => "plain",
            Theme::Terrain => "terrain",
        }
    }
}
