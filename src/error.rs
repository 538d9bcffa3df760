//! Typed errors for the simulation core and its drawing surfaces

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifeError {
    /// The drawing surface (or a control the app needs) was not available at startup
    #[error("drawing surface not available: {0}")]
    MissingSurface(String),

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },

    #[error("grid dimensions differ: {left_rows}x{left_cols} vs {right_rows}x{right_cols}")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("surface write failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type LifeResult<T> = std::result::Result<T, LifeError>;
