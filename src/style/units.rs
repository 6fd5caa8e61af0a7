//! CSS value formatting
//!
//! Numbers are rounded to two decimals and printed without trailing zeros,
//! so `46.0` renders as `46px` and `13.846` as `13.85px`.

use crate::math::clamp::{clamp_finite, round2};

/// Number rounded to two decimals, without a trailing `.0`
pub fn number(value: f64) -> String {
    format!("{}", round2(value))
}

/// Length in pixels
pub fn px(value: f64) -> String {
    format!("{}px", number(value))
}

/// Angle in degrees
pub fn deg(value: f64) -> String {
    format!("{}deg", number(value))
}

/// `color` mixed with transparency, keeping `percent` of its opacity
///
/// `color-mix` accepts any color syntax, so the configured strings never
/// need to be parsed.
pub fn translucent(color: &str, percent: f64) -> String {
    let percent = clamp_finite(percent, 0.0, 100.0).round();
    format!("color-mix(in srgb, {color} {percent}%, transparent)")
}

/// Repeating band of `color` from `0` to `width`, then `gap` up to `period`
pub fn band_stops(color: &str, width: f64, gap: &str, period: f64) -> String {
    let width = px(width);
    format!(
        "{color} 0px, {color} {width}, {gap} {width}, {gap} {}",
        px(period)
    )
}
