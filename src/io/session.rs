//! Current design snapshot and its previews
//!
//! A session owns one (kind, configuration) snapshot at a time. Edits are
//! applied to a copy that then replaces the snapshot wholesale, so a preview
//! never observes a half-applied change.

use crate::io::configuration::DEFAULT_SELECTOR;
use crate::io::error::{PatternError, Result, WithPath};
use crate::math::complexity::score;
use crate::pattern::compiler::compile;
use crate::pattern::config::PatternConfig;
use crate::pattern::kind::PatternKind;
use crate::pattern::presets::{Preset, find_preset};
use crate::style::derived::DerivedStyle;
use crate::style::serializer::serialize_with_selector;
use std::fs;
use std::path::Path;

/// Everything a presentation layer shows for one snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    /// Compiled style, including descriptor and layering labels
    pub style: DerivedStyle,
    /// Serialized CSS rule
    pub css: String,
    /// Complexity score in `[6, 98]`
    pub complexity: u8,
}

/// Holder of the current snapshot
#[derive(Debug, Clone)]
pub struct Session {
    kind: PatternKind,
    config: PatternConfig,
    selector: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PatternKind::Stripes, PatternConfig::default())
    }
}

impl Session {
    /// Session starting from the given snapshot
    pub fn new(kind: PatternKind, config: PatternConfig) -> Self {
        Self {
            kind,
            config,
            selector: DEFAULT_SELECTOR.to_string(),
        }
    }

    /// Session starting from a preset
    pub fn from_preset(preset: &Preset) -> Self {
        Self::new(preset.kind, preset.config())
    }

    /// Current pattern kind
    pub const fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Current configuration snapshot
    pub const fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// Selector used for serialized previews
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Use `selector` for serialized previews
    pub fn set_selector(&mut self, selector: impl Into<String>) {
        self.selector = selector.into();
    }

    /// Switch the pattern kind, keeping the configuration
    pub fn set_kind(&mut self, kind: PatternKind) {
        tracing::trace!(from = %self.kind, to = %kind, "kind changed");
        self.kind = kind;
    }

    /// Replace the whole configuration
    pub fn replace(&mut self, config: PatternConfig) {
        self.config = config;
    }

    /// Apply field edits to a copy, then swap the copy in
    pub fn update(&mut self, edit: impl FnOnce(&mut PatternConfig)) {
        let mut next = self.config.clone();
        edit(&mut next);
        tracing::trace!(?next, "configuration updated");
        self.config = next;
    }

    /// Replace kind and configuration with a preset's
    pub fn apply_preset(&mut self, preset: &Preset) {
        tracing::debug!(preset = preset.name, "applying preset");
        self.kind = preset.kind;
        self.config = preset.config();
    }

    /// Apply the preset called `name`
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::UnknownPreset`] if no preset has that name
    pub fn apply_preset_named(&mut self, name: &str) -> Result<()> {
        let preset = find_preset(name).ok_or_else(|| PatternError::UnknownPreset {
            name: name.to_string(),
        })?;
        self.apply_preset(preset);
        Ok(())
    }

    /// Return to the default snapshot, keeping the selector
    pub fn reset(&mut self) {
        self.kind = PatternKind::Stripes;
        self.config = PatternConfig::default();
    }

    /// Compile, serialize and score the current snapshot
    pub fn preview(&self) -> Preview {
        let style = compile(self.kind, &self.config);
        let css = serialize_with_selector(&style, &self.selector);
        Preview {
            style,
            css,
            complexity: score(&self.config),
        }
    }
}

/// Read a JSON configuration; missing fields take their defaults
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid configuration
pub fn load_config(path: &Path) -> Result<PatternConfig> {
    let text = fs::read_to_string(path).with_path(path.to_path_buf(), "read configuration")?;
    serde_json::from_str(&text).map_err(|source| PatternError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
