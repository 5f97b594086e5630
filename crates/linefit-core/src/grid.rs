// File: crates/linefit-core/src/grid.rs
// Summary: Evenly spaced x sampling for drawing fitted lines.

/// `steps` evenly spaced values from `start` to `end`, both inclusive.
/// Fewer than two steps still yields the two ends.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    let mut xs: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
    // pin the last value; accumulated rounding can miss `end`
    xs[steps - 1] = end;
    xs
}
