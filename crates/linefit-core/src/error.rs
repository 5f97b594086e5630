// File: crates/linefit-core/src/error.rs
// Summary: Error taxonomy for line fitting over paired samples.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FitError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    /// x and y columns have different lengths.
    #[error("shape mismatch: {x_len} x values vs {y_len} y values")]
    ShapeMismatch { x_len: usize, y_len: usize },

    #[error("need at least 2 samples, got {len}")]
    EmptyInput { len: usize },

    /// Lowest and highest x coincide, so the slope is undefined.
    #[error("degenerate input: lowest and highest x are both {x}")]
    DegenerateInput { x: f64 },
}
