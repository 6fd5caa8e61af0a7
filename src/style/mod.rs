//! Derived style attributes and their CSS rendering

/// Output of a compilation: declarations, descriptor and layer labels
pub mod derived;
/// Rendering of derived styles as a CSS rule block
pub mod serializer;
/// Formatting of lengths, angles and translucent colors
pub mod units;

pub use derived::{BlendMode, DerivedStyle, Layer, PatternMetrics, StyleProperty};
pub use serializer::{CssRule, serialize, serialize_with_selector};
