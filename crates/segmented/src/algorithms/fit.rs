//! Segment fit table.
//!
//! ## Purpose
//!
//! This module computes, for every contiguous range `[i, j]` of the sorted
//! points, the least-squares line through those points and its residual sum
//! of squares. The partitioner reads these errors in arbitrary order, so the
//! whole upper triangle is materialized.
//!
//! ## Design notes
//!
//! * **Aggregates**: Slope and intercept come from prefix range sums in O(1).
//! * **Residuals**: Squared error is summed directly over the range, giving
//!   O(n³) total work. This is the dominant cost of a run.
//! * **Storage**: Packed upper-triangular `Vec`, n(n+1)/2 entries.
//!
//! ## Key concepts
//!
//! * `num = n·Sxy − Sx·Sy`, `den = n·Sxx − Sx²`.
//! * `slope = num / den` (0 when `num == 0`), `intercept = (Sy − slope·Sx) / n`.
//! * **Vertical range**: two or more points sharing a single x. No finite
//!   slope describes them; [`DegeneratePolicy`] decides how they are scored.
//!   The default fits the flat line through their mean, which is what the
//!   `num == 0` rule yields in exact arithmetic.
//! * **Disqualified range**: infinite slope and error. Used for vertical
//!   ranges under [`DegeneratePolicy::Disqualify`], for a non-positive `den`
//!   on distinct end points and for fits whose error overflows.
//!
//! ## Invariants
//!
//! * Single-point ranges have slope 0, intercept `y`, error 0.
//! * An infinite slope never enters the intercept or residual formulas.
//! * Errors are non-negative (or `+∞` for a disqualified range); never NaN
//!   for finite input.
//!
//! ## Non-goals
//!
//! * This module does not choose segments (handled by `partition`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::prefix::PrefixSums;

// ============================================================================
// Degenerate Range Policy
// ============================================================================

/// How a vertical range (all x-values equal, two or more points) is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Infinite slope sentinel and infinite error; the range is never chosen.
    Disqualify,

    /// Fit the horizontal line through the mean y; finite error.
    #[default]
    Horizontal,
}

// ============================================================================
// Line Fit
// ============================================================================

/// Least-squares line for one range of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit<T> {
    /// Slope of the fitted line (`+∞` for a disqualified range).
    pub slope: T,

    /// Intercept of the fitted line.
    pub intercept: T,

    /// Sum of squared vertical residuals.
    pub error: T,

    /// Whether the range was vertical.
    pub vertical: bool,
}

impl<T: Float> LineFit<T> {
    /// Fit that the partitioner never selects.
    #[inline]
    fn disqualified(intercept: T, vertical: bool) -> Self {
        Self {
            slope: T::infinity(),
            intercept,
            error: T::infinity(),
            vertical,
        }
    }

    /// Whether this fit can be selected by the partitioner.
    #[inline]
    pub fn is_admissible(&self) -> bool {
        self.error.is_finite()
    }
}

// ============================================================================
// Segment Fit Table
// ============================================================================

/// Line fits for every range `1 <= i <= j <= n`.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentFitTable<T> {
    n: usize,
    fits: Vec<LineFit<T>>,
}

impl<T: Float> SegmentFitTable<T> {
    /// Fit every range of the sorted points.
    ///
    /// `x` must be sorted ascending and `prefix` built from the same points.
    pub fn new(x: &[T], y: &[T], prefix: &PrefixSums<T>, policy: DegeneratePolicy) -> Self {
        let n = prefix.len();
        let mut fits = Vec::with_capacity(n * (n + 1) / 2);

        for i in 1..=n {
            for j in i..=n {
                fits.push(fit_range(x, y, prefix, i, j, policy));
            }
        }

        Self { n, fits }
    }

    /// Number of points covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the table covers no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Fit for the 1-based inclusive range `[i, j]`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> &LineFit<T> {
        &self.fits[self.offset(i, j)]
    }

    /// Squared error for the 1-based inclusive range `[i, j]`.
    #[inline]
    pub fn error(&self, i: usize, j: usize) -> T {
        self.get(i, j).error
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        debug_assert!(1 <= i && i <= j && j <= self.n);

        // Row r (0-based) holds n - r entries
        let r = i - 1;
        r * self.n - r * r.saturating_sub(1) / 2 + (j - i)
    }
}

// ============================================================================
// Range Fitting
// ============================================================================

/// Fit the least-squares line to the 1-based inclusive range `[i, j]`.
pub fn fit_range<T: Float>(
    x: &[T],
    y: &[T],
    prefix: &PrefixSums<T>,
    i: usize,
    j: usize,
    policy: DegeneratePolicy,
) -> LineFit<T> {
    if i == j {
        return LineFit {
            slope: T::zero(),
            intercept: y[i - 1],
            error: T::zero(),
            vertical: false,
        };
    }

    let sums = prefix.range(i, j);
    let n = sums.n();
    let mean = sums.sy / n;

    // Sorted input: the range is vertical iff its end points share x.
    if x[i - 1] == x[j - 1] {
        return match policy {
            DegeneratePolicy::Disqualify => LineFit::disqualified(mean, true),
            DegeneratePolicy::Horizontal => LineFit {
                slope: T::zero(),
                intercept: mean,
                error: residual_sum(&x[i - 1..j], &y[i - 1..j], T::zero(), mean),
                vertical: true,
            },
        };
    }

    let num = n * sums.sxy - sums.sx * sums.sy;
    let den = n * sums.sxx - sums.sx * sums.sx;

    let slope = if num == T::zero() {
        T::zero()
    } else if den > T::zero() {
        num / den
    } else {
        // Distinct end points with a non-positive denominator: cancellation
        return LineFit::disqualified(mean, false);
    };
    let intercept = (sums.sy - slope * sums.sx) / n;
    let error = residual_sum(&x[i - 1..j], &y[i - 1..j], slope, intercept);

    // Overflowing sums (e.g. x² beyond the float range) poison the fit
    if !error.is_finite() {
        return LineFit::disqualified(mean, false);
    }

    LineFit {
        slope,
        intercept,
        error,
        vertical: false,
    }
}

/// Sum of squared residuals of `y` against `slope·x + intercept`.
#[inline]
pub fn residual_sum<T: Float>(x: &[T], y: &[T], slope: T, intercept: T) -> T {
    x.iter().zip(y.iter()).fold(T::zero(), |acc, (&xk, &yk)| {
        let r = yk - slope * xk - intercept;
        acc + r * r
    })
}
