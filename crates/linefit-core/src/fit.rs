// File: crates/linefit-core/src/fit.rs
// Summary: Endpoint line fitter (slope/intercept from the lowest-x and highest-x samples).
// Notes:
// - This is NOT a least-squares regression. Only the two extreme-x samples
//   contribute; every intermediate sample is ignored.
// - All functions are pure; nothing here allocates beyond `pair_and_sort`.

use crate::error::{FitError, Result};
use crate::types::{Line, Point, MIN_SAMPLES};

fn check_shape(x_values: &[f64], y_values: &[f64]) -> Result<()> {
    if x_values.len() != y_values.len() {
        return Err(FitError::ShapeMismatch { x_len: x_values.len(), y_len: y_values.len() });
    }
    Ok(())
}

fn check_len(x_values: &[f64], y_values: &[f64]) -> Result<()> {
    check_shape(x_values, y_values)?;
    if x_values.len() < MIN_SAMPLES {
        return Err(FitError::EmptyInput { len: x_values.len() });
    }
    Ok(())
}

/// Sort key for x: signed zeros tie, NaN still has a fixed place.
#[inline]
fn x_key(p: &Point) -> f64 {
    p.x + 0.0
}

fn by_x(a: &Point, b: &Point) -> std::cmp::Ordering {
    x_key(a).total_cmp(&x_key(b))
}

fn paired<'a>(x_values: &'a [f64], y_values: &'a [f64]) -> impl Iterator<Item = Point> + 'a {
    x_values.iter().zip(y_values).map(|(&x, &y)| Point::new(x, y))
}

/// Pair the columns into points and stable-sort them by x ascending.
/// Points with equal x keep their input order.
pub fn pair_and_sort(x_values: &[f64], y_values: &[f64]) -> Result<Vec<Point>> {
    check_shape(x_values, y_values)?;
    let mut points: Vec<Point> = paired(x_values, y_values).collect();
    points.sort_by(by_x);
    Ok(points)
}

/// First and last point of `pair_and_sort` without sorting:
/// lowest x (earliest on ties) and highest x (latest on ties).
pub fn endpoints(x_values: &[f64], y_values: &[f64]) -> Result<(Point, Point)> {
    check_len(x_values, y_values)?;
    // min_by keeps the first of equal minima, max_by the last of equal maxima.
    let lowest = paired(x_values, y_values).min_by(by_x);
    let highest = paired(x_values, y_values).max_by(by_x);
    match (lowest, highest) {
        (Some(lo), Some(hi)) => Ok((lo, hi)),
        _ => Err(FitError::EmptyInput { len: x_values.len() }),
    }
}

/// Slope between the lowest-x and highest-x samples.
pub fn slope(x_values: &[f64], y_values: &[f64]) -> Result<f64> {
    let (first, last) = endpoints(x_values, y_values)?;
    slope_between(first, last)
}

fn slope_between(first: Point, last: Point) -> Result<f64> {
    if last.x == first.x {
        return Err(FitError::DegenerateInput { x: first.x });
    }
    Ok((last.y - first.y) / (last.x - first.x))
}

/// Intercept `b = y_highest - m * x_highest`, using the highest-x sample only.
///
/// When `m` is `None` it is computed with [`slope`]. A supplied `m` is used as-is,
/// so coinciding x extremes are not an error in that case.
pub fn y_intercept(x_values: &[f64], y_values: &[f64], m: Option<f64>) -> Result<f64> {
    let (first, highest) = endpoints(x_values, y_values)?;
    let m = match m {
        Some(m) => m,
        None => slope_between(first, highest)?,
    };
    Ok(highest.y - m * highest.x)
}

/// Build the endpoint line `{m, b}` for the samples.
pub fn build_regression_line(x_values: &[f64], y_values: &[f64]) -> Result<Line> {
    let (first, last) = endpoints(x_values, y_values)?;
    let m = slope_between(first, last)?;
    let line = Line::new(m, last.y - m * last.x);
    log::debug!(
        "endpoint line over {} samples: ({}, {}) -> ({}, {}) gives m={} b={}",
        x_values.len(), first.x, first.y, last.x, last.y, line.m, line.b
    );
    Ok(line)
}

/// `m*x + b`.
#[inline]
pub fn expected_value_for_line(m: f64, b: f64, x: f64) -> f64 {
    m * x + b
}
