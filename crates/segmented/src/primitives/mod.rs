//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data structures and utilities used
//! throughout the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Two-dimensional points.
pub mod point;

/// Sorting utilities.
pub mod sorting;

/// Shared error types.
pub mod errors;
