//! Optimal partitioning by dynamic programming.
//!
//! ## Purpose
//!
//! This module selects the set of segment boundaries minimizing total
//! squared error plus a fixed cost per segment, and reconstructs the chosen
//! segments.
//!
//! ## Key concepts
//!
//! ```text
//! OPT[0] = 0
//! OPT[j] = min_{1 <= i <= j} (error[i][j] + OPT[i - 1]) + C
//! ```
//!
//! `choice[j]` records the smallest minimizing `i`. Walking `choice` back
//! from `n` yields the segments in reverse.
//!
//! ## Invariants
//!
//! * `1 <= choice[j] <= j` for every `j >= 1`.
//! * Reconstructed segments are contiguous, non-overlapping and cover `1..=n`.
//! * `OPT[j] >= 0` when `C >= 0`, and finite: NaN candidates never compare
//!   below the running minimum.
//!
//! ## Non-goals
//!
//! * This module does not fit lines (handled by `fit`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use log::trace;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::fit::SegmentFitTable;

// ============================================================================
// Partition
// ============================================================================

/// Solved dynamic program for one fit table and segment cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<T> {
    opt: Vec<T>,
    choice: Vec<usize>,
}

impl<T: Float> Partition<T> {
    /// Run the forward pass over `table` with per-segment cost `cost`.
    pub fn solve(table: &SegmentFitTable<T>, cost: T) -> Self {
        let n = table.len();

        let mut opt = Vec::with_capacity(n + 1);
        let mut choice = Vec::with_capacity(n + 1);
        opt.push(T::zero());
        choice.push(0);

        for j in 1..=n {
            // A single-point last segment is always finite, so best_i ends in 1..=j
            let mut best = T::infinity();
            let mut best_i = j;

            for i in 1..=j {
                let candidate = table.error(i, j) + opt[i - 1];
                if candidate < best {
                    best = candidate;
                    best_i = i;
                }
            }

            trace!("OPT[{j}] starts last segment at {best_i}");

            opt.push(best + cost);
            choice.push(best_i);
        }

        Self { opt, choice }
    }

    /// Number of points partitioned.
    #[inline]
    pub fn len(&self) -> usize {
        self.opt.len() - 1
    }

    /// Whether there were no points to partition.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Minimum total cost `OPT[n]`.
    #[inline]
    pub fn total_cost(&self) -> T {
        self.opt[self.len()]
    }

    /// The full `OPT[0..=n]` table.
    pub fn optimal_costs(&self) -> &[T] {
        &self.opt
    }

    /// The full `choice[0..=n]` table.
    pub fn choices(&self) -> &[usize] {
        &self.choice
    }

    /// Chosen segments as 1-based inclusive `(start, end)` pairs, in order.
    pub fn boundaries(&self) -> Vec<(usize, usize)> {
        let mut segments = Vec::new();

        let mut j = self.len();
        while j > 0 {
            let i = self.choice[j];
            segments.push((i, j));
            j = i - 1;
        }

        segments.reverse();
        segments
    }
}
