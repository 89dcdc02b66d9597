//! Error types for grid allocation.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifeError {
    #[error("grid dimensions must be positive (got {cols} columns x {rows} rows)")]
    InvalidDimensions { cols: usize, rows: usize },

    #[error("out of memory allocating {cells} cells")]
    ResourceExhaustion { cells: usize },

    #[error("invalid grid pattern at row {row}: {reason}")]
    InvalidPattern { row: usize, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, LifeError>;
