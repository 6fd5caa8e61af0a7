//! Named starting points applied wholesale to the current configuration

use crate::pattern::config::PatternConfig;
use crate::pattern::kind::PatternKind;

/// A named kind and configuration pair
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    /// Display name, matched case-insensitively by [`find_preset`]
    pub name: &'static str,
    /// One-line description shown next to the name
    pub description: &'static str,
    /// Pattern kind the preset is tuned for
    pub kind: PatternKind,
    /// Primary, secondary and accent colors
    pub colors: [&'static str; 3],
    /// Angle in degrees
    pub angle: f64,
    /// Density in pixels
    pub density: f64,
    /// Thickness in pixels
    pub thickness: f64,
    /// Softness, 0 to 100
    pub softness: f64,
    /// Scale in percent
    pub scale: f64,
}

impl Preset {
    /// Owned configuration replacing the current one
    pub fn config(&self) -> PatternConfig {
        let [primary, secondary, accent] = self.colors;
        PatternConfig {
            primary_color: primary.to_string(),
            secondary_color: secondary.to_string(),
            accent_color: accent.to_string(),
            angle: self.angle,
            density: self.density,
            thickness: self.thickness,
            softness: self.softness,
            scale: self.scale,
        }
    }
}

/// Every built-in preset, in display order
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Aurora Stripes",
        description: "Cool diagonal bands with a violet wash",
        kind: PatternKind::Stripes,
        colors: ["#5b8dff", "#0c111f", "#9b6cff"],
        angle: 128.0,
        density: 46.0,
        thickness: 18.0,
        softness: 32.0,
        scale: 100.0,
    },
    Preset {
        name: "Midnight Circuit",
        description: "Fine glowing traces on a dark board",
        kind: PatternKind::Grid,
        colors: ["#39f3bb", "#050b14", "#2a7fff"],
        angle: 0.0,
        density: 28.0,
        thickness: 2.0,
        softness: 48.0,
        scale: 100.0,
    },
    Preset {
        name: "Polka Pop",
        description: "Bold dots with a warm offset halo",
        kind: PatternKind::Dots,
        colors: ["#ff5f8f", "#1b0f24", "#ffc857"],
        angle: 0.0,
        density: 70.0,
        thickness: 16.0,
        softness: 24.0,
        scale: 100.0,
    },
    Preset {
        name: "Linen Weave",
        description: "Soft interlaced threads with a gentle sheen",
        kind: PatternKind::Weave,
        colors: ["#e8d9c0", "#3b2f2a", "#b08d6e"],
        angle: 45.0,
        density: 36.0,
        thickness: 10.0,
        softness: 60.0,
        scale: 80.0,
    },
    Preset {
        name: "Herringbone Dusk",
        description: "Interlocking arms in twilight tones",
        kind: PatternKind::Chevron,
        colors: ["#f08a5d", "#1e1b2e", "#b83b5e"],
        angle: 135.0,
        density: 60.0,
        thickness: 14.0,
        softness: 18.0,
        scale: 120.0,
    },
    Preset {
        name: "Blueprint",
        description: "Crisp drafting grid without any blur",
        kind: PatternKind::Grid,
        colors: ["#dbe9ff", "#0d3b8c", "#7fb2ff"],
        angle: 0.0,
        density: 40.0,
        thickness: 1.0,
        softness: 0.0,
        scale: 150.0,
    },
];

/// Look up a preset by name, ignoring case and surrounding whitespace
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    let name = name.trim();
    PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}
