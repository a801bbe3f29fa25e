//! Diagnostic metrics for segmentation quality assessment.
//!
//! ## Purpose
//!
//! This module summarizes how well a chosen segmentation describes the
//! data: residual error metrics, explained variance and the share of the
//! total cost paid in segment penalties.
//!
//! ## Design notes
//!
//! * **Residual-based**: Metrics are computed from `y` and the piecewise fitted values.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Invariants
//!
//! * RSS, RMSE and MAE are non-negative.
//! * R^2 <= 1 (R^2 = 1 is a perfect fit).
//! * `rss + penalty` equals the optimal total cost of the run.
//!
//! ## Non-goals
//!
//! * This module does not perform the segmentation.
//! * This module does not provide p-values or formal hypothesis tests.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Diagnostic metrics for a segmentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics<T> {
    /// Residual sum of squares over all segments.
    pub rss: T,

    /// Root Mean Squared Error (RMSE).
    pub rmse: T,

    /// Mean Absolute Error (MAE).
    pub mae: T,

    /// Coefficient of determination (R^2).
    pub r_squared: T,

    /// Number of segments chosen.
    pub segment_count: usize,

    /// Total segment penalty (`C` times the segment count).
    pub penalty: T,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics from observed and fitted values.
    pub fn compute(y: &[T], fitted: &[T], segment_count: usize, segment_cost: T) -> Self {
        let n_t = T::from(y.len()).unwrap_or(T::one()).max(T::one());

        let (rss, abs_sum) = y
            .iter()
            .zip(fitted.iter())
            .fold((T::zero(), T::zero()), |(sq, ab), (&yi, &fi)| {
                let r = yi - fi;
                (sq + r * r, ab + r.abs())
            });

        let penalty = T::from(segment_count).unwrap_or(T::zero()) * segment_cost;

        Diagnostics {
            rss,
            rmse: (rss / n_t).sqrt(),
            mae: abs_sum / n_t,
            r_squared: Self::calculate_r_squared(y, rss),
            segment_count,
            penalty,
        }
    }

    /// Compute the coefficient of determination (R^2).
    /// R^2 = 1 - SS_res / SS_tot.
    pub fn calculate_r_squared(y: &[T], ss_res: T) -> T {
        let n = y.len();
        if n <= 1 {
            return T::one();
        }

        let n_t = T::from(n).unwrap_or(T::one());
        let mean = y.iter().fold(T::zero(), |acc, &v| acc + v) / n_t;
        let ss_tot = y.iter().fold(T::zero(), |acc, &v| {
            let d = v - mean;
            acc + d * d
        });

        if ss_tot == T::zero() {
            // All y values are identical
            if ss_res == T::zero() {
                T::one()
            } else {
                T::zero()
            }
        } else {
            T::one() - ss_res / ss_tot
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Segmentation Diagnostics:")?;
        writeln!(f, "  Segments:     {}", self.segment_count)?;
        writeln!(f, "  RSS:          {:.6}", self.rss)?;
        writeln!(f, "  Penalty:      {:.6}", self.penalty)?;
        writeln!(f, "  RMSE:         {:.6}", self.rmse)?;
        writeln!(f, "  MAE:          {:.6}", self.mae)?;
        write!(f, "  R^2:          {:.6}", self.r_squared)
    }
}
