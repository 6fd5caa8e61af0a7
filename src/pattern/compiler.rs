//! Configuration-to-style compilation
//!
//! Every kind follows the same shape: clamp the numeric fields once, build an
//! ordered list of [`Layer`]s from the clamped numbers and the configured
//! colors, then fold the layers into a [`DerivedStyle`] alongside the shared
//! declarations (base color, tile size, inset shadow) and a descriptor.
//!
//! Compilation is total and deterministic. Out-of-range numbers are clamped,
//! angles are embedded verbatim, and an unknown kind name compiles to a solid
//! fallback surface instead of failing.

use crate::io::configuration::{
    CHEVRON_ARM_RATIO, CHEVRON_OFFSET_PX, DOT_RADIUS_DIVISOR, DOT_RADIUS_MIN,
};
use crate::math::clamp::{clamp_finite, whole_percent};
use crate::pattern::config::{ClampedConfig, PatternConfig};
use crate::pattern::kind::PatternKind;
use crate::style::derived::{BlendMode, DerivedStyle, Layer, PatternMetrics, StyleProperty};
use crate::style::units::{band_stops, deg, number, px, translucent};

/// Compile `config` into the layered style for `kind`
pub fn compile(kind: PatternKind, config: &PatternConfig) -> DerivedStyle {
    let clamped = config.clamped();

    let style = match kind {
        PatternKind::Stripes => stripes(config, &clamped),
        PatternKind::Grid => grid(config, &clamped),
        PatternKind::Dots => dots(config, &clamped),
        PatternKind::Weave => weave(config, &clamped),
        PatternKind::Chevron => chevron(config, &clamped),
    };

    tracing::debug!(
        %kind,
        density = clamped.density,
        thickness = clamped.thickness,
        tile = style.metrics.tile_size,
        layers = style.layering.len(),
        "compiled pattern"
    );

    style
}

/// Compile by kind name, falling back to a solid surface for unknown names
pub fn compile_named(name: &str, config: &PatternConfig) -> DerivedStyle {
    match name.parse::<PatternKind>() {
        Ok(kind) => compile(kind, config),
        Err(err) => {
            tracing::warn!(%err, "using solid fallback surface");
            fallback(&err.name, config)
        }
    }
}

/// Solid secondary surface with no layers
fn fallback(name: &str, config: &PatternConfig) -> DerivedStyle {
    let clamped = config.clamped();
    let metrics = PatternMetrics {
        tile_size: 0.0,
        feature_size: 0.0,
        ..metrics(&clamped, clamped.thickness)
    };
    let descriptor = format!(
        "Unknown pattern '{name}' · solid {} surface",
        config.secondary_color
    );

    let mut style = DerivedStyle::new(descriptor, metrics);
    style.set(StyleProperty::BackgroundColor, config.secondary_color.as_str());
    style
}

fn metrics(clamped: &ClampedConfig, feature_size: f64) -> PatternMetrics {
    PatternMetrics {
        density: clamped.density,
        thickness: clamped.thickness,
        scale_factor: clamped.scale_factor,
        blur_strength: clamped.blur_strength,
        tile_size: clamped.tile_size(),
        feature_size,
        coverage: whole_percent(clamped.coverage()),
    }
}

/// Declarations every kind shares, plus the folded layers
fn assemble(
    config: &PatternConfig,
    clamped: &ClampedConfig,
    descriptor: String,
    feature_size: f64,
    layers: &[Layer],
) -> DerivedStyle {
    let mut style = DerivedStyle::new(descriptor, metrics(clamped, feature_size));
    let tile = px(clamped.tile_size());

    style.set(StyleProperty::BackgroundColor, config.secondary_color.as_str());
    style.set(StyleProperty::BackgroundSize, format!("{tile} {tile}"));
    style.push_layers(layers);

    // Zero softness means a crisp surface with no shadow at all
    if clamped.blur_strength > 0.0 {
        style.set(
            StyleProperty::BoxShadow,
            format!(
                "inset 0 0 {} {}",
                px(clamped.blur_strength * 0.6),
                translucent(&config.accent_color, clamped.blur_strength * 0.4)
            ),
        );
    }

    style
}

/// Degrees with a degree sign, for descriptors
fn degrees(value: f64) -> String {
    format!("{}°", number(value))
}

/// Percentage as shown in descriptors and layer summaries
fn percent(value: f64) -> String {
    format!("{}%", value.round())
}

fn stripes(config: &PatternConfig, c: &ClampedConfig) -> DerivedStyle {
    let wash = c.blur_strength.mul_add(0.45, 10.0);

    let layers = [
        Layer::new(
            "Diagonal bands",
            format!(
                "repeating-linear-gradient {} with {} bands every {}",
                deg(c.angle),
                px(c.thickness),
                px(c.density)
            ),
            format!(
                "repeating-linear-gradient({}, {})",
                deg(c.angle),
                band_stops(
                    &config.primary_color,
                    c.thickness,
                    &config.secondary_color,
                    c.density
                )
            ),
            BlendMode::Normal,
        ),
        Layer::new(
            "Perpendicular wash",
            format!(
                "linear-gradient {} at {} opacity",
                deg(c.angle + 90.0),
                percent(wash)
            ),
            format!(
                "linear-gradient({}, {} 0%, transparent 100%)",
                deg(c.angle + 90.0),
                translucent(&config.accent_color, wash)
            ),
            BlendMode::SoftLight,
        ),
    ];

    let descriptor = format!(
        "Stripes · {} bands at {} every {} · {}% coverage · {} tile · {} softness",
        px(c.thickness),
        degrees(c.angle),
        px(c.density),
        whole_percent(c.coverage()),
        px(c.tile_size()),
        percent(c.blur_strength)
    );

    assemble(config, c, descriptor, c.thickness, &layers)
}

fn grid(config: &PatternConfig, c: &ClampedConfig) -> DerivedStyle {
    let trace = c.blur_strength.mul_add(0.4, 60.0);
    let wash = c.blur_strength.mul_add(0.35, 8.0);

    let layers = [
        Layer::new(
            "Horizontal traces",
            format!(
                "repeating-linear-gradient 0deg, {} every {}",
                px(c.thickness),
                px(c.density)
            ),
            format!(
                "repeating-linear-gradient(0deg, {})",
                band_stops(&config.primary_color, c.thickness, "transparent", c.density)
            ),
            BlendMode::Screen,
        ),
        Layer::new(
            "Vertical traces",
            format!(
                "repeating-linear-gradient 90deg, {} every {} at {} opacity",
                px(c.thickness),
                px(c.density),
                percent(trace)
            ),
            format!(
                "repeating-linear-gradient(90deg, {})",
                band_stops(
                    &translucent(&config.accent_color, trace),
                    c.thickness,
                    "transparent",
                    c.density
                )
            ),
            BlendMode::Lighten,
        ),
        Layer::new(
            "Diagonal wash",
            format!("linear-gradient 135deg at {} opacity", percent(wash)),
            format!(
                "linear-gradient(135deg, {} 0%, transparent 70%)",
                translucent(&config.accent_color, wash)
            ),
            BlendMode::Normal,
        ),
    ];

    let descriptor = format!(
        "Grid · {} traces on a {} lattice · {}% coverage · {} tile · 135° wash",
        px(c.thickness),
        px(c.density),
        whole_percent(c.coverage()),
        px(c.tile_size())
    );

    let mut style = assemble(config, c, descriptor, c.thickness, &layers);
    style.set(StyleProperty::BackgroundAttachment, "fixed");
    style
}

fn dots(config: &PatternConfig, c: &ClampedConfig) -> DerivedStyle {
    let radius = clamp_finite(c.thickness, DOT_RADIUS_MIN, c.density / DOT_RADIUS_DIVISOR);
    let ring = c.blur_strength.mul_add(0.08, radius + 2.0).min(c.density);
    let ring_opacity = c.blur_strength.mul_add(0.3, 35.0);
    let halo = radius * DOT_RADIUS_DIVISOR;
    let halo_opacity = c.blur_strength.mul_add(0.22, 18.0);
    let halo_offset = "calc(50% / 3)";

    let layers = [
        Layer::new(
            "Dot fill",
            format!(
                "radial-gradient circle, {} radius with a ring to {}",
                px(radius),
                px(ring)
            ),
            format!(
                "radial-gradient(circle at center, {primary} 0px, {primary} {r}, {soft} {r}, transparent {ring})",
                primary = config.primary_color,
                r = px(radius),
                soft = translucent(&config.primary_color, ring_opacity),
                ring = px(ring)
            ),
            BlendMode::Normal,
        ),
        Layer::new(
            "Offset halo",
            format!(
                "radial-gradient circle, {} at {} opacity, offset {halo_offset}",
                px(halo),
                percent(halo_opacity)
            ),
            format!(
                "radial-gradient(circle at center, {} 0px, transparent {})",
                translucent(&config.accent_color, halo_opacity),
                px(halo)
            ),
            BlendMode::Screen,
        )
        .offset(format!("{halo_offset} {halo_offset}")),
    ];

    let descriptor = format!(
        "Dots · {} radius on a {} lattice · {} halo at {} · {} tile",
        px(radius),
        px(c.density),
        px(halo),
        percent(halo_opacity),
        px(c.tile_size())
    );

    assemble(config, c, descriptor, radius, &layers)
}

fn weave(config: &PatternConfig, c: &ClampedConfig) -> DerivedStyle {
    let gap = translucent(&config.accent_color, c.blur_strength.mul_add(0.3, 20.0));
    let sheen = c.blur_strength.mul_add(0.4, 12.0);

    let layers = [
        Layer::new(
            "Warp threads",
            format!(
                "repeating-linear-gradient 90deg, {} every {} with accent gaps",
                px(c.thickness),
                px(c.density)
            ),
            format!(
                "repeating-linear-gradient(90deg, {})",
                band_stops(&config.primary_color, c.thickness, &gap, c.density)
            ),
            BlendMode::SoftLight,
        ),
        Layer::new(
            "Weft threads",
            format!(
                "repeating-linear-gradient 0deg, {} every {}",
                px(c.thickness),
                px(c.density)
            ),
            format!(
                "repeating-linear-gradient(0deg, {})",
                band_stops(&config.accent_color, c.thickness, "transparent", c.density)
            ),
            BlendMode::Lighten,
        ),
        Layer::new(
            "Sheen",
            format!("linear-gradient {} at {} opacity", deg(c.angle), percent(sheen)),
            format!(
                "linear-gradient({}, {} 0%, transparent 60%)",
                deg(c.angle),
                translucent(&config.primary_color, sheen)
            ),
            BlendMode::Normal,
        ),
    ];

    let descriptor = format!(
        "Weave · {} threads every {} · sheen at {} · {}% coverage · {} tile",
        px(c.thickness),
        px(c.density),
        degrees(c.angle),
        whole_percent(c.coverage()),
        px(c.tile_size())
    );

    let mut style = assemble(config, c, descriptor, c.thickness, &layers);
    style.set(StyleProperty::BackgroundAttachment, "fixed");
    style
}

fn chevron(config: &PatternConfig, c: &ClampedConfig) -> DerivedStyle {
    let leading = c.thickness;
    let trailing = c.thickness / CHEVRON_ARM_RATIO;
    // Period tracks thickness so both arm sets interlock at any density
    let period = 2.0 * c.thickness;
    let emboss = c.blur_strength.mul_add(0.4, 10.0);
    let offset = px(CHEVRON_OFFSET_PX);

    let layers = [
        Layer::new(
            "Leading arms",
            format!(
                "repeating-linear-gradient {}, {} every {}",
                deg(c.angle),
                px(leading),
                px(period)
            ),
            format!(
                "repeating-linear-gradient({}, {})",
                deg(c.angle),
                band_stops(&config.primary_color, leading, "transparent", period)
            ),
            BlendMode::Normal,
        ),
        Layer::new(
            "Trailing arms",
            format!(
                "repeating-linear-gradient {}, {} every {}, offset {offset}",
                deg(c.angle - 90.0),
                px(trailing),
                px(period)
            ),
            format!(
                "repeating-linear-gradient({}, {})",
                deg(c.angle - 90.0),
                band_stops(&config.accent_color, trailing, "transparent", period)
            ),
            BlendMode::Multiply,
        )
        .offset(format!("{offset} {offset}")),
        Layer::new(
            "Emboss",
            format!("linear-gradient {} at {} opacity", deg(c.angle), percent(emboss)),
            format!(
                "linear-gradient({}, {} 0%, transparent 50%, {} 100%)",
                deg(c.angle),
                translucent(&config.accent_color, emboss),
                translucent(&config.secondary_color, emboss)
            ),
            BlendMode::Overlay,
        ),
    ];

    let descriptor = format!(
        "Chevron · {} and {} arms at {}/{} · repeats every {} · {} tile",
        px(leading),
        px(trailing),
        degrees(c.angle),
        degrees(c.angle - 90.0),
        px(period),
        px(c.tile_size())
    );

    assemble(config, c, descriptor, leading, &layers)
}
