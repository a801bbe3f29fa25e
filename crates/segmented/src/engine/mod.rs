//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a segmentation run: it validates the request,
//! sorts the points, and drives the prefix aggregator, fit table and
//! partitioner in sequence before assembling the result.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine for segmentation runs.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for segmentation runs.
pub mod output;
