// File: crates/linefit-core/src/view.rs
// Visible data extent: axis ranges that frame a set of samples.

use crate::types::Point;

/// Fraction of each span added above and below the data.
pub const PAD_FRACTION: f64 = 0.02;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Extent {
    fn default() -> Self {
        Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 }
    }
}

impl Extent {
    /// Tight bounding box of `points`. Zero-width spans are widened by 1.0;
    /// empty or non-finite input falls back to the unit square.
    pub fn from_points(points: &[Point]) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for p in points {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self::default();
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        Self { x_min, x_max, y_min, y_max }
    }

    /// Same extent with `fraction` of each span added on both sides.
    pub fn padded(&self, fraction: f64) -> Self {
        let xm = (self.x_max - self.x_min) * fraction;
        let ym = (self.y_max - self.y_min) * fraction;
        Self {
            x_min: self.x_min - xm,
            x_max: self.x_max + xm,
            y_min: self.y_min - ym,
            y_max: self.y_max + ym,
        }
    }

    pub fn x_range(&self) -> [f64; 2] { [self.x_min, self.x_max] }
    pub fn y_range(&self) -> [f64; 2] { [self.y_min, self.y_max] }
}
