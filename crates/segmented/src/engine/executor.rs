//! Execution engine for segmentation runs.
//!
//! ## Purpose
//!
//! This module owns one segmentation run end to end. It builds the prefix
//! sums, the segment fit table and the partition from sorted points, turns
//! the chosen boundaries into segment descriptors and attaches the optional
//! outputs.
//!
//! ## Design notes
//!
//! * All tables live in the executor's stack frame for a single run; nothing
//!   is shared between runs.
//! * The core never prints. Progress is reported through the `log` facade.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Input x-values are sorted ascending and validated.
//! * The point count is within capacity (checked by the caller).
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not sort input data (caller's responsibility).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::fit::{DegeneratePolicy, SegmentFitTable};
use crate::algorithms::partition::Partition;
use crate::engine::output::{Segment, SegmentTables, SegmentedResult, fitted_values};
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::prefix::PrefixSums;
use crate::primitives::point::Point;
use crate::primitives::sorting::{SortedData, unsort};

// ============================================================================
// Configuration
// ============================================================================

/// Parameters of a single segmentation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentedConfig<T> {
    /// Per-segment cost `C`.
    pub segment_cost: T,

    /// Scoring of vertical ranges.
    pub degenerate_policy: DegeneratePolicy,

    /// Attach prefix, fit, `OPT` and `choice` tables to the result.
    pub return_tables: bool,

    /// Attach diagnostics to the result.
    pub return_diagnostics: bool,

    /// Attach residuals (original order) to the result.
    pub return_residuals: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the segmented least squares pipeline.
pub struct SegmentedExecutor;

impl SegmentedExecutor {
    /// Segment sorted, validated data.
    pub fn run<T: Float>(
        sorted: SortedData<T>,
        config: &SegmentedConfig<T>,
    ) -> SegmentedResult<T> {
        let n = sorted.len();
        debug!(
            "segmenting {} points with segment cost {}",
            n,
            config.segment_cost.to_f64().unwrap_or(f64::NAN)
        );

        let prefix = PrefixSums::new(&sorted.x, &sorted.y);
        let fits = SegmentFitTable::new(&sorted.x, &sorted.y, &prefix, config.degenerate_policy);
        let partition = Partition::solve(&fits, config.segment_cost);

        let segments = Self::collect_segments(&sorted, &fits, &partition);
        let total_cost = partition.total_cost();

        debug!(
            "chose {} segments, total cost {}",
            segments.len(),
            total_cost.to_f64().unwrap_or(f64::NAN)
        );

        let needs_fitted = config.return_diagnostics || config.return_residuals;
        let fitted = if needs_fitted {
            fitted_values(&sorted.x, &segments)
        } else {
            Vec::new()
        };

        let diagnostics = config.return_diagnostics.then(|| {
            Diagnostics::compute(&sorted.y, &fitted, segments.len(), config.segment_cost)
        });

        let residuals = config.return_residuals.then(|| {
            let r: Vec<T> = sorted
                .y
                .iter()
                .zip(fitted.iter())
                .map(|(&yi, &fi)| yi - fi)
                .collect();
            unsort(&r, &sorted.indices)
        });

        let tables = config.return_tables.then(|| SegmentTables {
            optimal_costs: partition.optimal_costs().to_vec(),
            choices: partition.choices().to_vec(),
            prefix,
            fits,
        });

        SegmentedResult {
            x: sorted.x,
            y: sorted.y,
            indices: sorted.indices,
            segments,
            total_cost,
            segment_cost: config.segment_cost,
            tables,
            diagnostics,
            residuals,
        }
    }

    /// Turn chosen boundaries into segment descriptors.
    fn collect_segments<T: Float>(
        sorted: &SortedData<T>,
        fits: &SegmentFitTable<T>,
        partition: &Partition<T>,
    ) -> Vec<Segment<T>> {
        partition
            .boundaries()
            .into_iter()
            .map(|(i, j)| {
                let fit = fits.get(i, j);
                Segment {
                    start: i,
                    end: j,
                    slope: fit.slope,
                    intercept: fit.intercept,
                    squared_error: fit.error,
                    first: Point::new(sorted.x[i - 1], sorted.y[i - 1]),
                    last: Point::new(sorted.x[j - 1], sorted.y[j - 1]),
                    vertical: fit.vertical,
                }
            })
            .collect()
    }
}
