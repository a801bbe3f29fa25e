//! Layer 3: Algorithms
//!
//! This layer implements the segmented least squares core: per-range line
//! fits and the dynamic program choosing segment boundaries. It is
//! orchestrated by the engine layer.

// Least-squares fits for every contiguous range.
pub mod fit;

// Optimal segment boundaries by dynamic programming.
pub mod partition;
