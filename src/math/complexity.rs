//! Complexity heuristic displayed next to a preview
//!
//! The score blends three normalized influences: how much of each period the
//! features fill, how soft the surface is, and how far it is scaled up. It has
//! no effect on rendering.

use crate::io::configuration::{SCORE_MAX, SCORE_MIN};
use crate::math::clamp::clamp_finite;
use crate::pattern::config::PatternConfig;

/// Weight of the thickness to density ratio
const FILAMENT_WEIGHT: f64 = 60.0;
/// Weight of the softness ratio
const SOFTNESS_WEIGHT: f64 = 28.0;
/// Weight of the scale factor
const SCALE_WEIGHT: f64 = 12.0;

/// Unrounded, unbounded score for the given configuration
///
/// Works on the raw fields rather than clamped ones; only the density is
/// guarded so the ratio never divides by zero or flips sign.
pub fn raw_score(config: &PatternConfig) -> f64 {
    let density = if config.density.is_nan() {
        1.0
    } else {
        config.density.max(1.0)
    };
    let filament_density = config.thickness / density;
    let softness_influence = config.softness / 100.0;
    let scale_factor = config.scale / 100.0;

    filament_density.mul_add(
        FILAMENT_WEIGHT,
        softness_influence.mul_add(SOFTNESS_WEIGHT, scale_factor * SCALE_WEIGHT),
    )
}

/// Complexity score in `[6, 98]`
pub fn score(config: &PatternConfig) -> u8 {
    clamp_finite(raw_score(config), SCORE_MIN, SCORE_MAX).round() as u8
}
