//! Terminal rendering module.
//!
//! A small rendering layer for the simulation: the grid is mapped into a
//! framebuffer of styled cells, which is then flushed to a terminal backend
//! as a full repaint.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep theme selection a plain `match` on [`types::Theme`]
//! - Keep terminal I/O behind a `Write` sink so frames can be inspected in tests

pub mod fb;
pub mod grid_view;
pub mod renderer;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use grid_view::{glyph, GridView};
pub use renderer::{encode_full_into, frame_bytes_upper_bound, TerminalRenderer};
