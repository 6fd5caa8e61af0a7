//! Pattern kinds, configuration snapshots and the style compiler

/// Configuration-to-style compilation for every pattern kind
pub mod compiler;
/// Configuration snapshot and its clamped numeric view
pub mod config;
/// Closed set of pattern archetypes
pub mod kind;
/// Static table of named configurations
pub mod presets;

pub use compiler::{compile, compile_named};
pub use config::{ClampedConfig, PatternConfig};
pub use kind::PatternKind;
