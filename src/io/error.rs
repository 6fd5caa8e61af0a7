//! Error types for the boundary around the compiler
//!
//! Compilation, serialization and scoring are total and never produce these
//! errors. They cover loading configurations, resolving presets, writing
//! output and handing text to a clipboard sink.

use std::fmt;
use std::path::PathBuf;

/// Main error type for everything outside the pure core
#[derive(Debug)]
pub enum PatternError {
    /// No preset has the requested name
    UnknownPreset {
        /// Name that was looked up
        name: String,
    },

    /// A configuration file is not valid JSON for a pattern configuration
    ConfigParse {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// A derived style could not be rendered as JSON
    Serialization {
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A clipboard sink refused the text
    Clipboard {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPreset { name } => {
                write!(f, "No preset named '{name}'")
            }
            Self::ConfigParse { path, source } => {
                write!(
                    f,
                    "Failed to parse configuration '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { source } => {
                write!(f, "Failed to serialize style: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Clipboard { reason } => {
                write!(f, "Clipboard write failed: {reason}")
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigParse { source, .. } | Self::Serialization { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::UnknownPreset { .. } | Self::Clipboard { .. } => None,
        }
    }
}

/// Convenience type alias for boundary results
pub type Result<T> = std::result::Result<T, PatternError>;

impl From<serde_json::Error> for PatternError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

impl From<std::io::Error> for PatternError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Attaches a path and operation to I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into [`PatternError::FileSystem`] for `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T> {
        self.map_err(|source| PatternError::FileSystem {
            path: path.into(),
            operation,
            source,
        })
    }
}

/// Create a clipboard error
pub fn clipboard_error(reason: &impl ToString) -> PatternError {
    PatternError::Clipboard {
        reason: reason.to_string(),
    }
}
