//! The five visual archetypes a configuration can be compiled into

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pattern archetype selecting the derivation applied to a configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// Diagonal bands alternating primary and secondary colors
    Stripes,
    /// Orthogonal traces over a translucent diagonal wash
    Grid,
    /// Filled circles with soft rings and an offset halo
    Dots,
    /// Interlaced warp and weft threads with a directional sheen
    Weave,
    /// Interlocking bands at right angles with an emboss wash
    Chevron,
}

impl PatternKind {
    /// Every kind, in display order
    pub const ALL: [Self; 5] = [
        Self::Stripes,
        Self::Grid,
        Self::Dots,
        Self::Weave,
        Self::Chevron,
    ];

    /// Lowercase name used in descriptors, CLI arguments and JSON
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stripes => "stripes",
            Self::Grid => "grid",
            Self::Dots => "dots",
            Self::Weave => "weave",
            Self::Chevron => "chevron",
        }
    }

    /// Capitalized name used at the start of descriptors
    pub const fn title(self) -> &'static str {
        match self {
            Self::Stripes => "Stripes",
            Self::Grid => "Grid",
            Self::Dots => "Dots",
            Self::Weave => "Weave",
            Self::Chevron => "Chevron",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Returned when a name matches none of the pattern kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind {
    /// The name that failed to parse
    pub name: String,
}

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown pattern kind '{}'", self.name)
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for PatternKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownKind {
                name: trimmed.to_string(),
            })
    }
}
