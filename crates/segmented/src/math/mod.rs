//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure numerical building blocks with no
//! algorithm-specific logic:
//! - Prefix aggregates for constant-time range sums
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Prefix sums of x, y, xy and x².
pub mod prefix;
