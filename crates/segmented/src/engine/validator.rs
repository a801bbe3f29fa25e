//! Input validation for segmentation configuration and data.
//!
//! ## Purpose
//!
//! This module checks segmentation parameters and input points before any
//! table is allocated: matching lengths, finite coordinates, a usable
//! segment cost and a point count within capacity.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Empty input passes validation.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not clamp or correct invalid parameters.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SegmentedError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for segmentation configuration and input data.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate coordinate arrays.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), SegmentedError> {
        let n = x.len();
        if n != y.len() {
            return Err(SegmentedError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        for i in 0..n {
            if !x[i].is_finite() {
                return Err(SegmentedError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    x[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y[i].is_finite() {
                return Err(SegmentedError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    y[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate that `n` points fit within the configured capacity.
    pub fn validate_point_count(n: usize, max_points: usize) -> Result<(), SegmentedError> {
        if n > max_points {
            return Err(SegmentedError::TooManyPoints {
                got: n,
                max: max_points,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the per-segment cost.
    pub fn validate_segment_cost<T: Float>(cost: T) -> Result<(), SegmentedError> {
        if !cost.is_finite() || cost < T::zero() {
            return Err(SegmentedError::InvalidSegmentCost(
                cost.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the maximum point capacity.
    pub fn validate_capacity(max_points: usize) -> Result<(), SegmentedError> {
        if max_points == 0 {
            return Err(SegmentedError::InvalidCapacity(max_points));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SegmentedError> {
        if let Some(param) = duplicate_param {
            return Err(SegmentedError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
