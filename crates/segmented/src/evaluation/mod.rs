//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-processing of a solved segmentation:
//! - Fit-quality diagnostics
//! - Geometric comparison of fitted lines
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Diagnostic metrics (RSS, RMSE, R^2, penalty).
pub mod diagnostics;

/// Angles between fitted lines.
pub mod geometry;
