//! Output types and result structures for segmentation runs.
//!
//! ## Purpose
//!
//! This module defines the `SegmentedResult` struct returned by a
//! segmentation run: the chosen segments, the optimal total cost, and the
//! optional tables, diagnostics and residuals.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: Optional outputs use `Option`.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * Segments are ordered, contiguous and cover every sorted point once.
//! * `total_cost` equals the summed segment errors plus the segment penalty.
//! * `x` and `y` are in sorted order; `indices` maps them back to the input.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond evaluating fitted lines.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use core::ops::Range;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::fit::SegmentFitTable;
use crate::evaluation::diagnostics::Diagnostics;
use crate::evaluation::geometry::angle_between_slopes;
use crate::math::prefix::PrefixSums;
use crate::primitives::point::Point;

// ============================================================================
// Segment
// ============================================================================

/// One segment of the optimal partition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T> {
    /// 1-based position of the first point in sorted order.
    pub start: usize,

    /// 1-based position of the last point in sorted order (inclusive).
    pub end: usize,

    /// Slope of the fitted line.
    pub slope: T,

    /// Intercept of the fitted line.
    pub intercept: T,

    /// Sum of squared residuals over the segment's points.
    pub squared_error: T,

    /// First point of the segment.
    pub first: Point<T>,

    /// Last point of the segment.
    pub last: Point<T>,

    /// Whether all points of the segment share one x-value.
    pub vertical: bool,
}

impl<T: Float> Segment<T> {
    /// Number of points in the segment.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Segments always hold at least one point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// 0-based half-open range into the sorted data.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start - 1..self.end
    }

    /// Evaluate the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.slope * x + self.intercept
    }

    /// Angle in degrees between this segment's line and another's.
    pub fn angle_to(&self, other: &Segment<T>) -> T {
        angle_between_slopes(self.slope, other.slope)
    }
}

// ============================================================================
// Tables
// ============================================================================

/// Intermediate tables of a run, returned on request.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentTables<T> {
    /// Prefix sums of x, y, xy and x² over the sorted points.
    pub prefix: PrefixSums<T>,

    /// Line fits for every range.
    pub fits: SegmentFitTable<T>,

    /// `OPT[0..=n]`: minimum cost of segmenting the first `j` points.
    pub optimal_costs: Vec<T>,

    /// `choice[0..=n]`: start of the last segment in the optimum for `j`.
    pub choices: Vec<usize>,
}

// ============================================================================
// Result Structure
// ============================================================================

/// Output of a segmentation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentedResult<T> {
    /// Sorted x-values.
    pub x: Vec<T>,

    /// Y-values in sorted-x order.
    pub y: Vec<T>,

    /// Mapping `indices[sorted_pos] = original_pos`.
    pub indices: Vec<usize>,

    /// Chosen segments in ascending x order.
    pub segments: Vec<Segment<T>>,

    /// Minimum total cost (squared error plus segment penalties).
    pub total_cost: T,

    /// Per-segment cost the run was solved with.
    pub segment_cost: T,

    /// Intermediate tables, when requested.
    pub tables: Option<SegmentTables<T>>,

    /// Fit-quality metrics, when requested.
    pub diagnostics: Option<Diagnostics<T>>,

    /// Residuals `y - ŷ` in original input order, when requested.
    pub residuals: Option<Vec<T>>,
}

impl<T: Float> SegmentedResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of input points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the run had no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Number of chosen segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// The right-most segment.
    pub fn last_segment(&self) -> Option<&Segment<T>> {
        self.segments.last()
    }

    /// Summed squared error of the chosen segments.
    pub fn total_error(&self) -> T {
        self.segments
            .iter()
            .fold(T::zero(), |acc, s| acc + s.squared_error)
    }

    /// Segment responsible for `x`.
    ///
    /// Returns the first segment whose last point is at or beyond `x`, so
    /// gaps between segments belong to the right-hand segment and points
    /// past either end fall to the outermost segment.
    pub fn segment_at(&self, x: T) -> Option<&Segment<T>> {
        self.segments
            .iter()
            .find(|s| x <= s.last.x)
            .or_else(|| self.segments.last())
    }

    /// Evaluate the piecewise-linear approximation at `x`.
    pub fn predict(&self, x: T) -> Option<T> {
        self.segment_at(x).map(|s| s.predict(x))
    }

    /// Fitted values for every point, in sorted order.
    pub fn fitted(&self) -> Vec<T> {
        fitted_values(&self.x, &self.segments)
    }
}

/// Fitted value of every sorted point under its segment's line.
pub fn fitted_values<T: Float>(x: &[T], segments: &[Segment<T>]) -> Vec<T> {
    let mut out = Vec::with_capacity(x.len());
    for seg in segments {
        out.extend(x[seg.range()].iter().map(|&xi| seg.predict(xi)));
    }
    out
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for SegmentedResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points:  {}", self.len())?;
        writeln!(f, "  Segment cost: {}", self.segment_cost)?;
        writeln!(f, "  Segments:     {}", self.segment_count())?;
        writeln!(f, "  Total cost:   {:.6}", self.total_cost)?;
        writeln!(f)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "{}", diag)?;
            writeln!(f)?;
        }

        writeln!(f, "Segments:")?;
        writeln!(
            f,
            "{:>6} {:>6} {:>12} {:>12} {:>12} {:>12} {:>12}",
            "Start", "End", "X_first", "X_last", "Slope", "Intercept", "Sq_Error"
        )?;
        writeln!(f, "{:-<width$}", "", width = 6 * 2 + 1 + 13 * 5)?;

        for seg in &self.segments {
            writeln!(
                f,
                "{:>6} {:>6} {:>12.4} {:>12.4} {:>12.6} {:>12.6} {:>12.6}",
                seg.start,
                seg.end,
                seg.first.x,
                seg.last.x,
                seg.slope,
                seg.intercept,
                seg.squared_error
            )?;
        }

        Ok(())
    }
}
