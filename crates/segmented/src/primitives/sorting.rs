//! Sorting utilities for segmentation input.
//!
//! ## Purpose
//!
//! This module sorts input points by x-coordinate and keeps the mapping back
//! to the caller's original order.
//!
//! ## Design notes
//!
//! * **Stability**: Uses stable sorting, so equal x-values keep their input order.
//! * **Efficiency**: Already-sorted input skips the sort entirely.
//!
//! ## Key concepts
//!
//! ### Sort-Process-Unsort Pattern
//! 1. **Sort**: Input is sorted by x, creating an index mapping.
//! 2. **Process**: Segmentation operates on the sorted sequence.
//! 3. **Unsort**: Per-point outputs are mapped back to original indices in O(n).
//!
//! ## Invariants
//!
//! * Sorted x-values are non-decreasing.
//! * The index mapping is a permutation of `0..n`.
//!
//! ## Non-goals
//!
//! * This module does not validate input (non-finite values are rejected earlier).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Data Structures
// ============================================================================

/// Input data sorted by x-coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedData<T> {
    /// Sorted x-coordinates.
    pub x: Vec<T>,

    /// Y-coordinates reordered to match sorted x-coordinates.
    pub y: Vec<T>,

    /// Index mapping where `indices[sorted_pos] = original_pos`.
    pub indices: Vec<usize>,
}

impl<T> SortedData<T> {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether there are no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

// ============================================================================
// Sorting Functions
// ============================================================================

/// Stably order the points by x.
///
/// Input that is already non-decreasing in x is copied through with the
/// identity permutation.
pub fn sort_by_x<T: Float>(x: &[T], y: &[T]) -> SortedData<T> {
    let mut order: Vec<usize> = (0..x.len()).collect();

    if !x.is_sorted_by(|a, b| a <= b) {
        // Stable: equal x-values keep input order
        order.sort_by(|&a, &b| x[a].partial_cmp(&x[b]).unwrap_or(Ordering::Equal));
    }

    SortedData::gather(x, y, order)
}

impl<T: Float> SortedData<T> {
    /// Gather both coordinates through the permutation `order`.
    fn gather(x: &[T], y: &[T], order: Vec<usize>) -> Self {
        let (sx, sy): (Vec<T>, Vec<T>) = order.iter().map(|&k| (x[k], y[k])).unzip();
        Self {
            x: sx,
            y: sy,
            indices: order,
        }
    }
}

/// Return per-point values in input order, given `indices[pos] = input_pos`.
pub fn unsort<T: Float>(sorted_values: &[T], indices: &[usize]) -> Vec<T> {
    let mut position = vec![0; indices.len()];
    for (pos, &input_pos) in indices.iter().enumerate() {
        position[input_pos] = pos;
    }
    position.into_iter().map(|pos| sorted_values[pos]).collect()
}
