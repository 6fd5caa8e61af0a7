//! Clipboard-like sinks for exported CSS
//!
//! Copying is fire-and-forget from the compiler's point of view: a failed
//! write is logged and reported back as a [`CopyStatus`] for the caller to
//! show, and never travels further as an error.

use crate::io::error::{Result, WithPath, clipboard_error};
use std::fs;
use std::path::{Path, PathBuf};

/// Destination for copied text
pub trait ClipboardSink {
    /// Replace the sink's contents with `text`
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot accept the text
    fn write_text(&mut self, text: &str) -> Result<()>;

    /// Short name used in status messages
    fn describe(&self) -> String;
}

/// Sink writing each copy to a file, replacing previous contents
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Sink targeting `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File the sink writes to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ClipboardSink for FileSink {
    fn write_text(&mut self, text: &str) -> Result<()> {
        fs::write(&self.path, text).with_path(self.path.clone(), "clipboard write")
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory sink keeping the last copied text
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    contents: Option<String>,
    capacity: Option<usize>,
}

impl BufferSink {
    /// Unbounded buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer rejecting text longer than `capacity` bytes
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            contents: None,
            capacity: Some(capacity),
        }
    }

    /// Last text accepted by the buffer
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for BufferSink {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if let Some(capacity) = self.capacity
            && text.len() > capacity
        {
            return Err(clipboard_error(&format!(
                "{} bytes exceed buffer capacity of {capacity}",
                text.len()
            )));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "buffer".to_string()
    }
}

/// Outcome of a copy, meant for a transient status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyStatus {
    /// The sink accepted the text
    Copied {
        /// Sink description
        target: String,
        /// Number of bytes copied
        bytes: usize,
    },
    /// The sink rejected the text
    Failed {
        /// Human-readable failure message
        message: String,
    },
}

impl CopyStatus {
    /// Whether the copy succeeded
    pub const fn is_copied(&self) -> bool {
        matches!(self, Self::Copied { .. })
    }

    /// Message suitable for a toast or status line
    pub fn message(&self) -> String {
        match self {
            Self::Copied { target, bytes } => format!("Copied {bytes} bytes to {target}"),
            Self::Failed { message } => message.clone(),
        }
    }
}

/// Send `text` to `sink`, logging instead of propagating any failure
pub fn copy_to_sink(sink: &mut dyn ClipboardSink, text: &str) -> CopyStatus {
    match sink.write_text(text) {
        Ok(()) => {
            tracing::debug!(target_sink = %sink.describe(), bytes = text.len(), "copied css");
            CopyStatus::Copied {
                target: sink.describe(),
                bytes: text.len(),
            }
        }
        Err(err) => {
            tracing::warn!(%err, "copy failed");
            CopyStatus::Failed {
                message: err.to_string(),
            }
        }
    }
}
