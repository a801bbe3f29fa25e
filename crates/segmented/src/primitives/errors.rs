//! Error types for segmented least squares operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! a segmentation model or validating the points handed to it.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. allowed counts).
//! * **Deferred**: Duplicate builder parameters are recorded and reported at `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * Empty input is not an error: it segments into nothing at zero cost.
//! * Invalid parameters are reported, never clamped.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for segmented least squares operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentedError {
    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Segment cost must be finite and non-negative.
    InvalidSegmentCost(f64),

    /// Number of points exceeds the configured capacity.
    TooManyPoints {
        /// Number of points provided.
        got: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Capacity must allow at least one point.
    InvalidCapacity(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SegmentedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidSegmentCost(cost) => {
                write!(f, "Invalid segment cost: {cost} (must be >= 0 and finite)")
            }
            Self::TooManyPoints { got, max } => {
                write!(f, "Too many points: got {got}, capacity is {max}")
            }
            Self::InvalidCapacity(max) => {
                write!(f, "Invalid max_points: {max} (must be at least 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SegmentedError {}
