// File: crates/linefit-core/src/types.rs
// Summary: Shared value types (samples, fitted line) and defaults.

use serde::{Deserialize, Serialize};

/// Minimum number of samples a line can be derived from.
pub const MIN_SAMPLES: usize = 2;

/// One (x, y) observation after pairing the two input columns.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Line model `y = m*x + b`.
/// Contract: immutable value, derived once from two endpoint samples.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub m: f64,
    pub b: f64,
}

impl Line {
    pub const fn new(m: f64, b: f64) -> Self {
        Self { m, b }
    }

    /// Value of the line at `x`.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        crate::fit::expected_value_for_line(self.m, self.b, x)
    }
}
