#![cfg(feature = "dev")]
//! Tests for input validation utilities.
//!
//! These tests verify the validation applied before segmentation:
//! - Input array validation (lengths, numeric validity, empty input)
//! - Parameter validation (segment cost, capacity)
//! - Error messages
//!
//! ## Test Organization
//!
//! 1. **Input Validation** - Array validation, length checks
//! 2. **Parameter Validation** - Segment cost, capacity, duplicates
//! 3. **Error Messages** - Proper error reporting

use segmented::internals::engine::validator::Validator;
use segmented::internals::primitives::errors::SegmentedError;

// ============================================================================
// Input Validation Tests
// ============================================================================

/// Test validation accepts empty input.
#[test]
fn test_validate_empty_input_is_ok() {
    let x: Vec<f64> = vec![];
    let y: Vec<f64> = vec![];

    assert!(Validator::validate_inputs(&x, &y).is_ok());
}

/// Test validation rejects length mismatch.
#[test]
fn test_validate_length_mismatch() {
    let res = Validator::validate_inputs(&[0.0, 1.0], &[1.0]);

    assert!(
        matches!(
            res,
            Err(SegmentedError::MismatchedInputs { x_len: 2, y_len: 1 })
        ),
        "Length mismatch should error"
    );
}

/// Test validation rejects non-finite values in x.
#[test]
fn test_validate_nonfinite_x() {
    let res = Validator::validate_inputs(&[0.0, f64::NAN], &[1.0, 2.0]);

    if let Err(SegmentedError::InvalidNumericValue(s)) = res {
        assert!(s.contains("x[1]"), "Error should mention x[1]");
    } else {
        panic!("Expected InvalidNumericValue for x");
    }
}

/// Test validation rejects non-finite values in y.
#[test]
fn test_validate_nonfinite_y() {
    let res = Validator::validate_inputs(&[0.0, 1.0], &[1.0, f64::INFINITY]);

    if let Err(SegmentedError::InvalidNumericValue(s)) = res {
        assert!(s.contains("y[1]"), "Error should mention y[1]");
    } else {
        panic!("Expected InvalidNumericValue for y");
    }
}

/// Test point count against capacity.
#[test]
fn test_validate_point_count() {
    assert!(Validator::validate_point_count(10, 10).is_ok());
    assert!(Validator::validate_point_count(0, 1).is_ok());
    assert_eq!(
        Validator::validate_point_count(11, 10),
        Err(SegmentedError::TooManyPoints { got: 11, max: 10 })
    );
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test segment cost bounds.
///
/// Zero and positive costs pass; negative and non-finite costs fail.
#[test]
fn test_validate_segment_cost() {
    assert!(Validator::validate_segment_cost(0.0).is_ok());
    assert!(Validator::validate_segment_cost(4.0).is_ok());

    assert_eq!(
        Validator::validate_segment_cost(-0.5),
        Err(SegmentedError::InvalidSegmentCost(-0.5))
    );
    assert!(matches!(
        Validator::validate_segment_cost(f64::NAN),
        Err(SegmentedError::InvalidSegmentCost(_))
    ));
    assert!(matches!(
        Validator::validate_segment_cost(f64::INFINITY),
        Err(SegmentedError::InvalidSegmentCost(_))
    ));
}

/// Test capacity must be positive.
#[test]
fn test_validate_capacity() {
    assert!(Validator::validate_capacity(1).is_ok());
    assert_eq!(
        Validator::validate_capacity(0),
        Err(SegmentedError::InvalidCapacity(0))
    );
}

/// Test duplicate parameter detection.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("segment_cost")),
        Err(SegmentedError::DuplicateParameter {
            parameter: "segment_cost"
        })
    );
}

// ============================================================================
// Error Message Tests
// ============================================================================

/// Test error messages carry their context.
#[test]
fn test_error_messages() {
    let msg = SegmentedError::TooManyPoints { got: 5, max: 3 }.to_string();
    assert!(msg.contains('5') && msg.contains('3'));

    let msg = SegmentedError::InvalidSegmentCost(-1.0).to_string();
    assert!(msg.contains("-1"));

    let msg = SegmentedError::MismatchedInputs { x_len: 4, y_len: 2 }.to_string();
    assert!(msg.contains("x has 4") && msg.contains("y has 2"));
}
