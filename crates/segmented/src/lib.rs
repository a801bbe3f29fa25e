//! # segmented — Optimal piecewise-linear approximation for Rust
//!
//! Segmented least squares: partition a set of 2-D points (ordered by x)
//! into contiguous segments, fit a least-squares line to each, and choose the
//! partition that minimizes total squared error plus a fixed cost per
//! segment.
//!
//! ## How it works
//!
//! 1. Points are stably sorted by x.
//! 2. Prefix sums of `x`, `y`, `x·y` and `x²` give every range's statistics in O(1).
//! 3. The best-fit line and squared error of every contiguous range are
//!    tabulated (O(n²) memory, O(n³) time).
//! 4. A dynamic program picks the cheapest set of boundaries:
//!    `OPT[j] = min_i (error[i][j] + OPT[i - 1]) + C`.
//!
//! Larger segment costs favour fewer, longer segments; a cost of zero lets
//! every point stand alone.
//!
//! ## Quick Start
//!
//! ```rust
//! use segmented::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let y = vec![1.0, 2.0, 3.0, 10.0, 11.0, 12.0];
//!
//! let model = Segmented::new()
//!     .segment_cost(0.1)
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//!
//! assert_eq!(result.segment_count(), 2);
//! println!("{}", result);
//! # Result::<(), SegmentedError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points:  6
//!   Segment cost: 0.1
//!   Segments:     2
//!   Total cost:   0.200000
//!
//! Segments:
//!  Start    End      X_first       X_last        Slope    Intercept     Sq_Error
//! ------------------------------------------------------------------------------
//!      1      3       1.0000       3.0000     1.000000     0.000000     0.000000
//!      4      6       4.0000       6.0000     1.000000     6.000000     0.000000
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use segmented::prelude::*;
//!
//! let prices = vec![10.0, 10.5, 11.1, 11.4, 9.0, 8.2, 7.9, 7.1, 7.4, 8.8, 10.1];
//!
//! let model = Segmented::new()
//!     .segment_cost(2.0)              // Penalty per segment
//!     .max_points(500)                // Reject runs larger than this
//!     .degenerate_policy(Horizontal)  // Score equal-x ranges with a flat line
//!     .return_diagnostics()           // RSS, RMSE, R^2, penalty
//!     .return_residuals()             // Residuals in input order
//!     .return_tables()                // Prefix, fit, OPT and choice tables
//!     .build()?;
//!
//! // x = 0, 1, 2, ...
//! let result = model.fit_series(&prices)?;
//!
//! if let Some(last) = result.last_segment() {
//!     println!("latest trend: slope {:.3}", last.slope);
//! }
//! # Result::<(), SegmentedError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `fit` returns `Result<SegmentedResult<T>, SegmentedError>`. Empty input
//! is not an error: it yields no segments and a total cost of zero. Invalid
//! segment costs, non-finite coordinates, mismatched lengths and inputs
//! above the configured capacity are reported as errors.
//!
//! ## Vertical ranges
//!
//! A range of two or more points sharing one x-value has no finite
//! least-squares slope. By default such ranges are fit with the flat line
//! through their mean, so repeated measurements share a segment;
//! [`DegeneratePolicy::Disqualify`] gives them infinite error instead so the
//! partitioner never selects them.
//!
//! [`DegeneratePolicy::Disqualify`]: prelude::DegeneratePolicy::Disqualify
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments with `alloc`:
//!
//! ```toml
//! [dependencies]
//! segmented = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure numerical building blocks.
mod math;

// Layer 3: Algorithms - range fits and optimal partitioning.
mod algorithms;

// Layer 4: Evaluation - diagnostics and geometry.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        DEFAULT_MAX_POINTS, DEFAULT_SEGMENT_COST, DegeneratePolicy,
        DegeneratePolicy::Disqualify, DegeneratePolicy::Horizontal, Diagnostics, Point, Segment,
        SegmentTables, SegmentedBuilder as Segmented, SegmentedError, SegmentedModel,
        SegmentedResult,
    };
}

// Internal modules for development and testing.
//
// Only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
