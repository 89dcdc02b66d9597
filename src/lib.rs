//! TUI Life (workspace facade crate).
//!
//! Re-exports the member crates as `tui_life::{core,term,types}` and hosts the
//! pieces that only the binary needs: command-line [`config`] and the tick
//! loop in [`runner`].

pub use tui_life_core as core;
pub use tui_life_term as term;
pub use tui_life_types as types;

pub mod config;
pub mod runner;
