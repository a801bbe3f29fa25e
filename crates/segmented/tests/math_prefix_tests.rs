#![cfg(feature = "dev")]
//! Tests for prefix aggregates.
//!
//! These tests verify the running sums used for constant-time range
//! statistics:
//! - Zero slot and sequence lengths
//! - Range sums against direct summation
//! - Empty input
//!
//! ## Test Organization
//!
//! 1. **Construction** - lengths, zero slot, accumulation
//! 2. **Range Queries** - agreement with direct sums

use approx::assert_relative_eq;

use segmented::internals::math::prefix::PrefixSums;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test that each sequence holds n + 1 entries starting at zero.
#[test]
fn test_prefix_lengths_and_zero_slot() {
    let x = vec![1.0, 2.0, 3.0];
    let y = vec![4.0, 5.0, 6.0];

    let prefix = PrefixSums::new(&x, &y);
    let (sx, sy, sxy, sxx) = prefix.sequences();

    assert_eq!(prefix.len(), 3);
    for seq in [sx, sy, sxy, sxx] {
        assert_eq!(seq.len(), 4);
        assert_eq!(seq[0], 0.0);
    }

    assert_eq!(sx, &[0.0, 1.0, 3.0, 6.0]);
    assert_eq!(sy, &[0.0, 4.0, 9.0, 15.0]);
    assert_eq!(sxy, &[0.0, 4.0, 14.0, 32.0]);
    assert_eq!(sxx, &[0.0, 1.0, 5.0, 14.0]);
}

/// Test that empty input yields the trivial aggregate.
#[test]
fn test_prefix_empty() {
    let prefix = PrefixSums::<f64>::new(&[], &[]);
    let (sx, sy, sxy, sxx) = prefix.sequences();

    assert!(prefix.is_empty());
    assert_eq!(sx, &[0.0]);
    assert_eq!(sy, &[0.0]);
    assert_eq!(sxy, &[0.0]);
    assert_eq!(sxx, &[0.0]);
}

// ============================================================================
// Range Query Tests
// ============================================================================

/// Test range sums against direct summation for every range.
#[test]
fn test_prefix_range_matches_direct_sums() {
    let x = vec![0.5, 1.5, 2.0, 3.25, 4.0, 7.5];
    let y = vec![2.0, -1.0, 0.5, 3.0, 8.0, 1.25];
    let n = x.len();

    let prefix = PrefixSums::new(&x, &y);

    for i in 1..=n {
        for j in i..=n {
            let r = prefix.range(i, j);
            let xs = &x[i - 1..j];
            let ys = &y[i - 1..j];

            assert_eq!(r.count, j - i + 1);
            assert_relative_eq!(r.n(), (j - i + 1) as f64);
            assert_relative_eq!(r.sx, xs.iter().sum::<f64>(), epsilon = 1e-12);
            assert_relative_eq!(r.sy, ys.iter().sum::<f64>(), epsilon = 1e-12);
            assert_relative_eq!(
                r.sxy,
                xs.iter().zip(ys).map(|(a, b)| a * b).sum::<f64>(),
                epsilon = 1e-12
            );
            assert_relative_eq!(
                r.sxx,
                xs.iter().map(|a| a * a).sum::<f64>(),
                epsilon = 1e-12
            );
        }
    }
}

/// Test single-point range returns that point's contribution.
#[test]
fn test_prefix_single_point_range() {
    let prefix = PrefixSums::new(&[1.0, 3.0, 5.0], &[2.0, 4.0, 6.0]);
    let r = prefix.range(2, 2);

    assert_eq!(r.count, 1);
    assert_eq!(r.sx, 3.0);
    assert_eq!(r.sy, 4.0);
    assert_eq!(r.sxy, 12.0);
    assert_eq!(r.sxx, 9.0);
}
