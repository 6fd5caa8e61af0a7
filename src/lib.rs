//! Deterministic compiler from a handful of slider values to layered CSS backgrounds
//!
//! A [`PatternConfig`] and a [`PatternKind`] compile into a [`DerivedStyle`]: a set
//! of gradient layers with blend modes, tile size and shadow, plus a descriptor
//! and per-layer labels. The style serializes to a single CSS rule, and a
//! separate heuristic scores the configuration's visual complexity.
//!
//! ```
//! use patterncss::{PatternConfig, PatternKind, compile, score, serialize};
//!
//! let config = PatternConfig::default();
//! let style = compile(PatternKind::Stripes, &config);
//! let css = serialize(&style);
//!
//! assert!(css.starts_with(".pattern-surface {"));
//! assert!(style.descriptor.contains("39% coverage"));
//! assert!((6..=98).contains(&score(&config)));
//! ```

#![forbid(unsafe_code)]

/// Sessions, clipboard sinks, logging, configuration and the command line
pub mod io;
/// Clamping and the complexity heuristic
pub mod math;
/// Pattern kinds, configurations, presets and the compiler
pub mod pattern;
/// Derived style attributes and CSS serialization
pub mod style;

pub use io::error::{PatternError, Result};
pub use math::complexity::score;
pub use pattern::{PatternConfig, PatternKind, compile, compile_named};
pub use style::{DerivedStyle, serialize};
