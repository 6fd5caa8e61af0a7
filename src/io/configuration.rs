//! Parameter ranges, rendering constants and runtime defaults

// Slider ranges, applied silently before any derivation
/// Smallest spacing between repeating features, in pixels
pub const DENSITY_MIN: f64 = 10.0;
/// Largest spacing between repeating features, in pixels
pub const DENSITY_MAX: f64 = 180.0;
/// Narrowest feature width, in pixels (the upper bound is the clamped density)
pub const THICKNESS_MIN: f64 = 2.0;
/// Lower bound of the softness slider
pub const SOFTNESS_MIN: f64 = 0.0;
/// Upper bound of the softness slider
pub const SOFTNESS_MAX: f64 = 100.0;
/// Smallest scale, in percent
pub const SCALE_MIN: f64 = 40.0;
/// Largest scale, in percent
pub const SCALE_MAX: f64 = 200.0;

// Per-kind geometry
/// Smallest dot radius, in pixels
pub const DOT_RADIUS_MIN: f64 = 4.0;
/// Density is divided by this to get the largest dot radius
pub const DOT_RADIUS_DIVISOR: f64 = 1.6;
/// Ratio between the primary and secondary chevron arm widths
pub const CHEVRON_ARM_RATIO: f64 = 1.3;
/// Offset of the secondary chevron layer on both axes, in pixels
pub const CHEVRON_OFFSET_PX: f64 = 12.0;

// Complexity score bounds
/// Lowest complexity score reported
pub const SCORE_MIN: f64 = 6.0;
/// Highest complexity score reported
pub const SCORE_MAX: f64 = 98.0;

// Output settings
/// Selector wrapping serialized declarations
pub const DEFAULT_SELECTOR: &str = ".pattern-surface";
/// Indentation before each serialized declaration
pub const DECLARATION_INDENT: &str = "  ";

// Default values for configurable parameters
/// Fixed seed for reproducible randomized configurations
pub const DEFAULT_SEED: u64 = 42;
/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
