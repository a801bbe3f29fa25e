//! Prefix aggregates for constant-time range statistics.
//!
//! ## Purpose
//!
//! This module accumulates running sums of `x`, `y`, `x·y` and `x²` over
//! the sorted points so that the same sums over any contiguous range are a
//! single subtraction.
//!
//! ## Key concepts
//!
//! * **1-based ranges**: Slot 0 holds zero; slot `k` covers points `1..=k`.
//! * **Range query**: `sum(i..=j) = prefix[j] - prefix[i - 1]`.
//!
//! ## Invariants
//!
//! * Every sequence has length `n + 1`.
//! * `prefix[k] = prefix[k - 1] + contribution(point k)`.
//!
//! ## Non-goals
//!
//! * This module does not fit lines; it only provides the aggregates.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Range Sums
// ============================================================================

/// Aggregates of a contiguous range of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSums<T> {
    /// Number of points in the range.
    pub count: usize,

    /// Sum of x.
    pub sx: T,

    /// Sum of y.
    pub sy: T,

    /// Sum of x·y.
    pub sxy: T,

    /// Sum of x².
    pub sxx: T,
}

impl<T: Float> RangeSums<T> {
    /// Point count as a float.
    #[inline]
    pub fn n(&self) -> T {
        T::from(self.count).unwrap_or_else(T::max_value)
    }
}

// ============================================================================
// Prefix Sums
// ============================================================================

/// Running sums over sorted points.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixSums<T> {
    x: Vec<T>,
    y: Vec<T>,
    xy: Vec<T>,
    xx: Vec<T>,
}

impl<T: Float> PrefixSums<T> {
    /// Accumulate prefix sums over parallel coordinate slices.
    ///
    /// Empty input yields sequences holding only the zero slot.
    pub fn new(x: &[T], y: &[T]) -> Self {
        let n = x.len().min(y.len());

        let mut sx = Vec::with_capacity(n + 1);
        let mut sy = Vec::with_capacity(n + 1);
        let mut sxy = Vec::with_capacity(n + 1);
        let mut sxx = Vec::with_capacity(n + 1);

        let (mut acc_x, mut acc_y, mut acc_xy, mut acc_xx) =
            (T::zero(), T::zero(), T::zero(), T::zero());

        sx.push(acc_x);
        sy.push(acc_y);
        sxy.push(acc_xy);
        sxx.push(acc_xx);

        for (&xi, &yi) in x.iter().zip(y.iter()) {
            acc_x = acc_x + xi;
            acc_y = acc_y + yi;
            acc_xy = acc_xy + xi * yi;
            acc_xx = acc_xx + xi * xi;

            sx.push(acc_x);
            sy.push(acc_y);
            sxy.push(acc_xy);
            sxx.push(acc_xx);
        }

        Self {
            x: sx,
            y: sy,
            xy: sxy,
            xx: sxx,
        }
    }

    /// Number of points aggregated.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len() - 1
    }

    /// Whether no points were aggregated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sums over the 1-based inclusive range `[i, j]`.
    ///
    /// Requires `1 <= i <= j <= len()`.
    #[inline]
    pub fn range(&self, i: usize, j: usize) -> RangeSums<T> {
        debug_assert!(1 <= i && i <= j && j <= self.len());

        RangeSums {
            count: j - i + 1,
            sx: self.x[j] - self.x[i - 1],
            sy: self.y[j] - self.y[i - 1],
            sxy: self.xy[j] - self.xy[i - 1],
            sxx: self.xx[j] - self.xx[i - 1],
        }
    }

    /// Raw prefix sequences `(x, y, xy, xx)`, each of length `len() + 1`.
    pub fn sequences(&self) -> (&[T], &[T], &[T], &[T]) {
        (&self.x, &self.y, &self.xy, &self.xx)
    }
}
