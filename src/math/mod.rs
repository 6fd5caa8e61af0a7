//! Numeric helpers shared by the compiler and the scorer

/// Range clamping that absorbs non-finite input
pub mod clamp;
/// Bounded complexity heuristic for a configuration
pub mod complexity;
