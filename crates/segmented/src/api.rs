//! High-level API for segmented least squares.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point. It implements a fluent
//! builder for configuring a segmentation and a validated model that runs it
//! on coordinate slices, point lists or plain series.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called; input
//!   data is validated on every fit.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SegmentedBuilder`] via `Segmented::new()`.
//! 2. Chain configuration methods (`.segment_cost()`, `.max_points()`, etc.).
//! 3. Call `.build()` to get a [`SegmentedModel`] and fit data with it.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{SegmentedConfig, SegmentedExecutor};
use crate::engine::validator::Validator;
use crate::primitives::sorting::sort_by_x;

// Publicly re-exported types
pub use crate::algorithms::fit::DegeneratePolicy;
pub use crate::engine::output::{Segment, SegmentTables, SegmentedResult};
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::primitives::errors::SegmentedError;
pub use crate::primitives::point::Point;

/// Default per-segment cost.
pub const DEFAULT_SEGMENT_COST: f64 = 1.0;

/// Default maximum number of points per run.
///
/// The fit table is quadratic in memory and cubic in time, so runs are
/// bounded unless the caller raises the limit.
pub const DEFAULT_MAX_POINTS: usize = 1000;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a segmentation.
#[derive(Debug, Clone)]
pub struct SegmentedBuilder<T> {
    /// Per-segment cost `C`.
    pub segment_cost: Option<T>,

    /// Maximum number of points accepted by a fit.
    pub max_points: Option<usize>,

    /// Scoring of vertical ranges (default: Horizontal).
    pub degenerate_policy: Option<DegeneratePolicy>,

    /// Return prefix, fit, `OPT` and `choice` tables.
    pub return_tables: Option<bool>,

    /// Include fit-quality diagnostics in output.
    pub return_diagnostics: Option<bool>,

    /// Include residuals in output.
    pub return_residuals: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SegmentedBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SegmentedBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            segment_cost: None,
            max_points: None,
            degenerate_policy: None,
            return_tables: None,
            return_diagnostics: None,
            return_residuals: None,
            duplicate_param: None,
        }
    }

    /// Set the cost charged for every segment.
    pub fn segment_cost(mut self, cost: T) -> Self {
        if self.segment_cost.is_some() {
            self.duplicate_param = Some("segment_cost");
        }
        self.segment_cost = Some(cost);
        self
    }

    /// Set the maximum number of points a fit accepts.
    pub fn max_points(mut self, max: usize) -> Self {
        if self.max_points.is_some() {
            self.duplicate_param = Some("max_points");
        }
        self.max_points = Some(max);
        self
    }

    /// Set how ranges of points sharing one x-value are scored.
    pub fn degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        if self.degenerate_policy.is_some() {
            self.duplicate_param = Some("degenerate_policy");
        }
        self.degenerate_policy = Some(policy);
        self
    }

    /// Include the intermediate tables in output.
    pub fn return_tables(mut self) -> Self {
        self.return_tables = Some(true);
        self
    }

    /// Include fit-quality diagnostics in output.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    /// Include residuals in output.
    pub fn return_residuals(mut self) -> Self {
        self.return_residuals = Some(true);
        self
    }

    /// Validate the configuration and build a model.
    pub fn build(self) -> Result<SegmentedModel<T>, SegmentedError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let segment_cost = match self.segment_cost {
            Some(cost) => cost,
            None => T::from(DEFAULT_SEGMENT_COST).unwrap_or_else(T::one),
        };
        Validator::validate_segment_cost(segment_cost)?;

        let max_points = self.max_points.unwrap_or(DEFAULT_MAX_POINTS);
        Validator::validate_capacity(max_points)?;

        Ok(SegmentedModel {
            config: SegmentedConfig {
                segment_cost,
                degenerate_policy: self.degenerate_policy.unwrap_or_default(),
                return_tables: self.return_tables.unwrap_or(false),
                return_diagnostics: self.return_diagnostics.unwrap_or(false),
                return_residuals: self.return_residuals.unwrap_or(false),
            },
            max_points,
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// Validated segmentation model.
#[derive(Debug, Clone)]
pub struct SegmentedModel<T> {
    config: SegmentedConfig<T>,
    max_points: usize,
}

impl<T: Float> SegmentedModel<T> {
    /// Per-segment cost used by this model.
    pub fn segment_cost(&self) -> T {
        self.config.segment_cost
    }

    /// Maximum number of points accepted by a fit.
    pub fn max_points(&self) -> usize {
        self.max_points
    }

    /// Scoring of vertical ranges.
    pub fn degenerate_policy(&self) -> DegeneratePolicy {
        self.config.degenerate_policy
    }

    /// Segment the points given as parallel coordinate slices.
    ///
    /// Points may arrive in any order; they are stably sorted by x first.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<SegmentedResult<T>, SegmentedError> {
        Validator::validate_inputs(x, y)?;
        Validator::validate_point_count(x.len(), self.max_points)?;

        let sorted = sort_by_x(x, y);
        Ok(SegmentedExecutor::run(sorted, &self.config))
    }

    /// Segment a list of points.
    pub fn fit_points(&self, points: &[Point<T>]) -> Result<SegmentedResult<T>, SegmentedError> {
        let x: Vec<T> = points.iter().map(|p| p.x).collect();
        let y: Vec<T> = points.iter().map(|p| p.y).collect();
        self.fit(&x, &y)
    }

    /// Segment a series, using each value's position `0, 1, 2, ...` as x.
    pub fn fit_series(&self, values: &[T]) -> Result<SegmentedResult<T>, SegmentedError> {
        let x: Vec<T> = (0..values.len())
            .map(|i| T::from(i).unwrap_or_else(T::max_value))
            .collect();
        self.fit(&x, values)
    }
}
