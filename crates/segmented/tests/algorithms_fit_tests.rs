#![cfg(feature = "dev")]
//! Tests for the segment fit table.
//!
//! These tests verify the per-range least-squares fits:
//! - Exact lines, single points and constant y
//! - Least-squares optimality of every range fit
//! - Vertical ranges under both degenerate policies
//! - Table indexing over the packed upper triangle
//!
//! ## Test Organization
//!
//! 1. **Basic Fits** - exact lines and trivial ranges
//! 2. **Optimality** - no nearby line does better
//! 3. **Vertical Ranges** - Disqualify vs Horizontal
//! 4. **Table Layout** - every (i, j) agrees with fit_range

use approx::{assert_abs_diff_eq, assert_relative_eq};

use segmented::internals::algorithms::fit::{
    DegeneratePolicy, SegmentFitTable, fit_range, residual_sum,
};
use segmented::internals::math::prefix::PrefixSums;

// ============================================================================
// Helper Functions
// ============================================================================

fn table(x: &[f64], y: &[f64], policy: DegeneratePolicy) -> SegmentFitTable<f64> {
    let prefix = PrefixSums::new(x, y);
    SegmentFitTable::new(x, y, &prefix, policy)
}

// ============================================================================
// Basic Fit Tests
// ============================================================================

/// Test that collinear points fit exactly.
#[test]
fn test_fit_exact_line() {
    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let y: Vec<f64> = x.iter().map(|&v| 2.5 * v - 1.0).collect();

    let t = table(&x, &y, DegeneratePolicy::default());
    let fit = t.get(1, 5);

    assert_relative_eq!(fit.slope, 2.5, epsilon = 1e-12);
    assert_relative_eq!(fit.intercept, -1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(fit.error, 0.0, epsilon = 1e-20);
    assert!(!fit.vertical);
}

/// Test single-point ranges.
///
/// Verifies zero slope, intercept equal to y and zero error.
#[test]
fn test_fit_single_point() {
    let x = vec![1.0, 2.0, 3.0];
    let y = vec![7.0, -3.0, 4.5];

    let t = table(&x, &y, DegeneratePolicy::default());

    for k in 1..=3 {
        let fit = t.get(k, k);
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, y[k - 1]);
        assert_eq!(fit.error, 0.0);
        assert!(fit.is_admissible());
    }
}

/// Test constant y takes the zero-slope branch.
#[test]
fn test_fit_constant_y() {
    let x = vec![1.0, 2.0, 3.0, 4.0];
    let y = vec![5.0; 4];

    let t = table(&x, &y, DegeneratePolicy::default());
    let fit = t.get(1, 4);

    assert_eq!(fit.slope, 0.0);
    assert_relative_eq!(fit.intercept, 5.0);
    assert_eq!(fit.error, 0.0);
}

/// Test a noisy range against the closed-form centred estimate.
#[test]
fn test_fit_matches_centred_formula() {
    let x = vec![1.0, 2.0, 4.0, 5.0, 7.0];
    let y = vec![1.2, 1.9, 4.3, 4.8, 7.4];

    let t = table(&x, &y, DegeneratePolicy::default());
    let fit = t.get(1, 5);

    let n = x.len() as f64;
    let mx = x.iter().sum::<f64>() / n;
    let my = y.iter().sum::<f64>() / n;
    let cov: f64 = x.iter().zip(&y).map(|(a, b)| (a - mx) * (b - my)).sum();
    let var: f64 = x.iter().map(|a| (a - mx) * (a - mx)).sum();
    let slope = cov / var;
    let intercept = my - slope * mx;

    assert_relative_eq!(fit.slope, slope, epsilon = 1e-10);
    assert_relative_eq!(fit.intercept, intercept, epsilon = 1e-10);
    assert_relative_eq!(
        fit.error,
        residual_sum(&x, &y, slope, intercept),
        epsilon = 1e-10
    );
}

// ============================================================================
// Optimality Tests
// ============================================================================

/// Test that no perturbed line beats the least-squares fit on any range.
#[test]
fn test_fit_is_least_squares_optimal() {
    let x = vec![0.0, 0.7, 1.1, 2.4, 3.0, 3.3, 4.8, 6.1];
    let y = vec![0.3, -0.2, 1.5, 2.2, 1.9, 3.7, 4.1, 3.2];
    let n = x.len();

    let t = table(&x, &y, DegeneratePolicy::default());
    let deltas = [-0.5, -0.05, -0.001, 0.0, 0.001, 0.05, 0.5];

    for i in 1..=n {
        for j in i + 1..=n {
            let fit = t.get(i, j);
            let xs = &x[i - 1..j];
            let ys = &y[i - 1..j];

            for &ds in &deltas {
                for &db in &deltas {
                    let other = residual_sum(xs, ys, fit.slope + ds, fit.intercept + db);
                    assert!(
                        fit.error <= other + 1e-12,
                        "range [{i}, {j}]: perturbed line ({ds}, {db}) beats fit"
                    );
                }
            }
        }
    }
}

// ============================================================================
// Vertical Range Tests
// ============================================================================

/// Test that a vertical pair is disqualified when requested.
#[test]
fn test_vertical_pair_disqualified() {
    let x = vec![1.0, 1.0];
    let y = vec![0.0, 2.0];

    let t = table(&x, &y, DegeneratePolicy::Disqualify);
    let fit = t.get(1, 2);

    assert!(fit.vertical);
    assert!(fit.slope.is_infinite());
    assert!(fit.error.is_infinite());
    assert!(!fit.intercept.is_nan());
    assert!(!fit.is_admissible());
}

/// Test that the default policy fits vertical ranges with a flat line.
#[test]
fn test_default_policy_is_horizontal() {
    assert_eq!(DegeneratePolicy::default(), DegeneratePolicy::Horizontal);

    let x = vec![1.0, 1.0, 1.0];
    let y = vec![5.0, 5.0, 5.0];

    let t = table(&x, &y, DegeneratePolicy::default());
    let fit = t.get(1, 3);

    assert!(fit.vertical);
    assert_eq!(fit.slope, 0.0);
    assert_relative_eq!(fit.intercept, 5.0);
    assert_eq!(fit.error, 0.0);
}

/// Test that a vertical pair gets a flat fit under the horizontal policy.
#[test]
fn test_vertical_pair_horizontal() {
    let x = vec![1.0, 1.0];
    let y = vec![0.0, 2.0];

    let t = table(&x, &y, DegeneratePolicy::Horizontal);
    let fit = t.get(1, 2);

    assert!(fit.vertical);
    assert_eq!(fit.slope, 0.0);
    assert_relative_eq!(fit.intercept, 1.0);
    assert_relative_eq!(fit.error, 2.0);
}

/// Test vertical detection with values that do not cancel exactly.
#[test]
fn test_vertical_with_inexact_values() {
    let x = vec![0.1, 0.1, 0.1];
    let y = vec![0.3, 0.7, 1.9];

    for policy in [DegeneratePolicy::Disqualify, DegeneratePolicy::Horizontal] {
        let t = table(&x, &y, policy);
        let fit = t.get(1, 3);
        assert!(fit.vertical);
        assert!(!fit.error.is_nan());
        assert!(!fit.intercept.is_nan());
    }
}

/// Test that a range with a repeated x inside is not vertical.
#[test]
fn test_repeated_x_inside_range_is_regular() {
    let x = vec![0.0, 1.0, 1.0, 2.0];
    let y = vec![0.0, 1.0, 1.0, 2.0];

    let t = table(&x, &y, DegeneratePolicy::Disqualify);
    let fit = t.get(1, 4);

    assert!(!fit.vertical);
    assert_relative_eq!(fit.slope, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(fit.error, 0.0, epsilon = 1e-20);

    // Only the inner pair is vertical
    assert!(t.get(2, 3).vertical);
    assert!(!t.get(1, 2).vertical);
}

// ============================================================================
// Table Layout Tests
// ============================================================================

/// Test that every table entry equals the direct fit of its range.
#[test]
fn test_table_indexing_matches_fit_range() {
    let x = vec![0.0, 1.0, 1.5, 3.0, 3.0, 4.5, 6.0];
    let y = vec![1.0, 0.5, 2.0, 2.5, 1.0, 4.0, 3.5];
    let n = x.len();

    let prefix = PrefixSums::new(&x, &y);
    let t = SegmentFitTable::new(&x, &y, &prefix, DegeneratePolicy::Horizontal);

    assert_eq!(t.len(), n);
    for i in 1..=n {
        for j in i..=n {
            let direct = fit_range(&x, &y, &prefix, i, j, DegeneratePolicy::Horizontal);
            assert_eq!(t.get(i, j), &direct, "entry [{i}, {j}]");
            assert_eq!(t.error(i, j), direct.error);
        }
    }
}

/// Test an empty table.
#[test]
fn test_table_empty() {
    let t = table(&[], &[], DegeneratePolicy::default());
    assert!(t.is_empty());
    assert_eq!(t.len(), 0);
}

// ============================================================================
// Overflow Tests
// ============================================================================

/// Test that overflowing x² disqualifies multi-point ranges instead of NaN.
#[test]
fn test_overflowing_squares_are_disqualified() {
    let x: Vec<f32> = vec![1e20, 2e20, 3e20];
    let y: Vec<f32> = vec![1.0, 5.0, 2.0];

    let prefix = PrefixSums::new(&x, &y);
    let t = SegmentFitTable::new(&x, &y, &prefix, DegeneratePolicy::default());

    for i in 1..=3 {
        assert!(t.get(i, i).is_admissible());
        for j in i + 1..=3 {
            let fit = t.get(i, j);
            assert!(!fit.error.is_nan(), "entry [{i}, {j}] is NaN");
            assert!(!fit.is_admissible(), "entry [{i}, {j}] overflowed");
        }
    }
}
