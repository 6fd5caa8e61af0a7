//! Silent range clamping for slider values
//!
//! Out-of-range input is never an error: every value is pulled into its
//! range before use. NaN has no meaningful position in a range, so it maps
//! to the lower bound, while infinities clamp like any other large value.

/// Clamp `value` into `[min, max]`, mapping NaN to `min`
///
/// When `max < min` (a degenerate range such as a density smaller than the
/// minimum thickness) the lower bound wins.
pub fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    if max < min {
        return min;
    }
    num_traits::clamp(value, min, max)
}

/// Replace a non-finite value with `fallback`, leaving finite values untouched
pub const fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

/// Round to two decimal places, normalizing negative zero
///
/// Values too large to scale by 100 have no fractional part and are
/// returned unchanged.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0 + 0.0
}

/// Round to the nearest whole number as an unsigned percentage
pub fn whole_percent(ratio: f64) -> u32 {
    clamp_finite((ratio * 100.0).round(), 0.0, f64::from(u32::MAX)) as u32
}
