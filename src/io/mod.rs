//! Everything around the pure core: sessions, sinks, logging and the CLI

/// Command-line argument parsing and rendering
pub mod cli;
/// Clipboard-like sinks for exported CSS
pub mod clipboard;
/// Parameter ranges, rendering constants and defaults
pub mod configuration;
/// Error types for boundary operations
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Current design snapshot and previews
pub mod session;
