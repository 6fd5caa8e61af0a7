//! Configuration snapshot driving a single compilation
//!
//! A [`PatternConfig`] holds the raw slider values exactly as the user set
//! them. Nothing is validated on construction; [`PatternConfig::clamped`]
//! derives the in-range numbers every compiler works from.

use crate::io::configuration::{
    DENSITY_MAX, DENSITY_MIN, SCALE_MAX, SCALE_MIN, SOFTNESS_MAX, SOFTNESS_MIN, THICKNESS_MIN,
};
use crate::math::clamp::{clamp_finite, finite_or};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// User-facing pattern parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatternConfig {
    /// Dominant feature color, any CSS color string
    pub primary_color: String,
    /// Base surface color, any CSS color string
    pub secondary_color: String,
    /// Tint used for washes, halos and gaps, any CSS color string
    pub accent_color: String,
    /// Orientation in degrees, embedded verbatim (never normalized)
    pub angle: f64,
    /// Spacing between repeating features, in pixels
    pub density: f64,
    /// Feature width, in pixels
    pub thickness: f64,
    /// Blur and blending strength, 0 to 100
    pub softness: f64,
    /// Tile scale, in percent
    pub scale: f64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            primary_color: "#5b8dff".to_string(),
            secondary_color: "#0c111f".to_string(),
            accent_color: "#9b6cff".to_string(),
            angle: 128.0,
            density: 46.0,
            thickness: 18.0,
            softness: 32.0,
            scale: 100.0,
        }
    }
}

/// Numeric fields of a [`PatternConfig`] after clamping
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClampedConfig {
    /// Angle in degrees; non-finite input becomes 0, everything else passes through
    pub angle: f64,
    /// Density in `[10, 180]`
    pub density: f64,
    /// Thickness in `[2, density]`
    pub thickness: f64,
    /// Softness in `[0, 100]`
    pub blur_strength: f64,
    /// Scale in `[40, 200]` divided by 100
    pub scale_factor: f64,
}

impl ClampedConfig {
    /// Side length of the repeating background tile, in pixels
    pub fn tile_size(&self) -> f64 {
        self.density * self.scale_factor
    }

    /// Fraction of each period covered by a feature, in `[0, 1]`
    pub fn coverage(&self) -> f64 {
        self.thickness / self.density
    }
}

impl PatternConfig {
    /// Pull every numeric field into its range
    ///
    /// Thickness is clamped against the already clamped density, so
    /// `thickness <= density` holds for any input.
    pub fn clamped(&self) -> ClampedConfig {
        let density = clamp_finite(self.density, DENSITY_MIN, DENSITY_MAX);
        let thickness = clamp_finite(self.thickness, THICKNESS_MIN, density);
        let scale = clamp_finite(self.scale, SCALE_MIN, SCALE_MAX);

        ClampedConfig {
            angle: finite_or(self.angle, 0.0),
            density,
            thickness,
            blur_strength: clamp_finite(self.softness, SOFTNESS_MIN, SOFTNESS_MAX),
            scale_factor: scale / 100.0,
        }
    }

    /// Draw a configuration with HSL colors and mid-range numbers
    ///
    /// Deterministic for a seeded generator, which keeps randomized previews
    /// reproducible from the command line.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let hue = rng.random_range(0..360_u16);
        let spread = rng.random_range(90..=180_u16);
        let density = f64::from(rng.random_range(16..=120_u16));
        let thickness = rng.random_range(THICKNESS_MIN..=(density / 2.0)).floor();

        Self {
            primary_color: format!("hsl({hue} 78% 64%)"),
            secondary_color: format!("hsl({} 42% 9%)", (hue + 200) % 360),
            accent_color: format!("hsl({} 84% 70%)", (hue + spread) % 360),
            angle: f64::from(rng.random_range(0..360_u16)),
            density,
            thickness,
            softness: f64::from(rng.random_range(0..=80_u8)),
            scale: f64::from(rng.random_range(60..=160_u8)),
        }
    }
}
