//! CSS rule rendering for derived styles
//!
//! Output is a single rule: the selector line, one declaration per line in
//! [`StyleProperty`] order, and a closing brace.
//!
//! ```text
//! .pattern-surface {
//!   background-color: #0c111f;
//!   background-image: repeating-linear-gradient(...), linear-gradient(...);
//!   background-size: 46px 46px;
//! }
//! ```

use crate::io::configuration::{DECLARATION_INDENT, DEFAULT_SELECTOR};
use crate::style::derived::DerivedStyle;
use std::fmt;

/// Display adapter rendering a style under a selector
#[derive(Debug, Clone, Copy)]
pub struct CssRule<'a> {
    selector: &'a str,
    style: &'a DerivedStyle,
}

impl<'a> CssRule<'a> {
    /// Wrap `style` in `selector`; a blank selector falls back to the default
    pub fn new(selector: &'a str, style: &'a DerivedStyle) -> Self {
        let selector = selector.trim();
        Self {
            selector: if selector.is_empty() {
                DEFAULT_SELECTOR
            } else {
                selector
            },
            style,
        }
    }
}

impl fmt::Display for CssRule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for (property, value) in self.style.declarations() {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            writeln!(f, "{DECLARATION_INDENT}{property}: {value};")?;
        }
        f.write_str("}")
    }
}

/// Render `style` as a rule for the default `.pattern-surface` selector
pub fn serialize(style: &DerivedStyle) -> String {
    CssRule::new(DEFAULT_SELECTOR, style).to_string()
}

/// Render `style` as a rule for a custom selector
pub fn serialize_with_selector(style: &DerivedStyle, selector: &str) -> String {
    CssRule::new(selector, style).to_string()
}
