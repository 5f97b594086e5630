// File: crates/linefit-core/tests/fit_properties.rs
// Purpose: Randomized checks that the endpoint line is pure, order independent and hits both extremes.

use linefit_core::{build_regression_line, expected_value_for_line};
use proptest::prelude::*;

/// Distinct integer-valued x with arbitrary y, as parallel columns.
fn samples() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::btree_set(-1000i32..1000, 2..24).prop_flat_map(|xs| {
        let n = xs.len();
        let xs: Vec<f64> = xs.into_iter().map(f64::from).collect();
        (Just(xs), prop::collection::vec(-1.0e3f64..1.0e3, n))
    })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #[test]
    fn line_passes_through_extremes((x, y) in samples()) {
        let line = build_regression_line(&x, &y).unwrap();
        // btree_set yields ascending x, so the extremes are the first and last samples.
        let n = x.len();
        prop_assert!(close(expected_value_for_line(line.m, line.b, x[0]), y[0]));
        prop_assert!(close(expected_value_for_line(line.m, line.b, x[n - 1]), y[n - 1]));
    }

    #[test]
    fn repeated_fit_is_identical((x, y) in samples()) {
        prop_assert_eq!(build_regression_line(&x, &y), build_regression_line(&x, &y));
    }

    #[test]
    fn input_order_does_not_matter((x, y) in samples(), shift in 0usize..64, reverse in any::<bool>()) {
        let mut pairs: Vec<(f64, f64)> = x.iter().copied().zip(y.iter().copied()).collect();
        let k = shift % pairs.len();
        pairs.rotate_left(k);
        if reverse { pairs.reverse(); }
        let (px, py): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        prop_assert_eq!(build_regression_line(&x, &y), build_regression_line(&px, &py));
    }
}
