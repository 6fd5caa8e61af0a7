//! Compiled style description
//!
//! A [`DerivedStyle`] is rebuilt from scratch on every compilation and never
//! mutated afterwards by the compiler. Declarations live in a map keyed by
//! [`StyleProperty`], whose ordering is the serialization order, so the order
//! in which a compiler sets them has no effect on the output.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Style attributes a compiled pattern may declare, in serialization order
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleProperty {
    /// Solid color under every layer
    BackgroundColor,
    /// Comma-separated gradient layers
    BackgroundImage,
    /// Tile size shared by every layer
    BackgroundSize,
    /// Whether layers scroll with the surface
    BackgroundAttachment,
    /// Per-layer offsets
    BackgroundPosition,
    /// Per-layer blend modes
    BackgroundBlendMode,
    /// Inset shadow softening the surface edges
    BoxShadow,
}

impl StyleProperty {
    /// Every property, in serialization order
    pub const ALL: [Self; 7] = [
        Self::BackgroundColor,
        Self::BackgroundImage,
        Self::BackgroundSize,
        Self::BackgroundAttachment,
        Self::BackgroundPosition,
        Self::BackgroundBlendMode,
        Self::BoxShadow,
    ];

    /// CSS property name
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::BackgroundColor => "background-color",
            Self::BackgroundImage => "background-image",
            Self::BackgroundSize => "background-size",
            Self::BackgroundAttachment => "background-attachment",
            Self::BackgroundPosition => "background-position",
            Self::BackgroundBlendMode => "background-blend-mode",
            Self::BoxShadow => "box-shadow",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// How a layer composites onto the layers beneath it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    /// Plain source-over compositing
    Normal,
    /// Lightens by inverting, multiplying and inverting again
    Screen,
    /// Keeps the lighter of both colors
    Lighten,
    /// Gentle contrast shift
    SoftLight,
    /// Darkens by multiplying colors
    Multiply,
    /// Multiply or screen depending on the backdrop
    Overlay,
}

impl BlendMode {
    /// CSS keyword
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Screen => "screen",
            Self::Lighten => "lighten",
            Self::SoftLight => "soft-light",
            Self::Multiply => "multiply",
            Self::Overlay => "overlay",
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// One generated visual contribution
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    /// Role shown in the layering list, e.g. "Warp threads"
    pub role: &'static str,
    /// Short human-readable summary of the expression
    pub summary: String,
    /// Gradient expression placed in `background-image`
    pub expression: String,
    /// Blend mode placed in `background-blend-mode`
    pub blend: BlendMode,
    /// Offset placed in `background-position`
    pub position: String,
}

impl Layer {
    /// Layer anchored at the tile origin
    pub fn new(
        role: &'static str,
        summary: String,
        expression: String,
        blend: BlendMode,
    ) -> Self {
        Self {
            role,
            summary,
            expression,
            blend,
            position: "0 0".to_string(),
        }
    }

    /// Same layer shifted by `position`
    #[must_use]
    pub fn offset(mut self, position: String) -> Self {
        self.position = position;
        self
    }

    /// Entry shown in the layering list
    pub fn label(&self) -> String {
        format!("{}: {}", self.role, self.summary)
    }
}

/// Derived numbers behind a compiled pattern
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternMetrics {
    /// Clamped density, in pixels
    pub density: f64,
    /// Clamped thickness, in pixels
    pub thickness: f64,
    /// Clamped scale divided by 100
    pub scale_factor: f64,
    /// Clamped softness
    pub blur_strength: f64,
    /// Side of the square background tile, in pixels (0 when nothing tiles)
    pub tile_size: f64,
    /// Size of the main feature: band width, or dot radius for dots
    pub feature_size: f64,
    /// Rounded share of each period covered by a feature, in percent
    pub coverage: u32,
}

/// Output of a compilation
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
pub struct DerivedStyle {
    declarations: BTreeMap<StyleProperty, String>,
    /// One-line summary of the derived numbers
    pub descriptor: String,
    /// One label per layer in `background-image` order (topmost first)
    pub layering: Vec<String>,
    /// Numbers the declarations were derived from
    pub metrics: PatternMetrics,
}

impl DerivedStyle {
    /// Empty style with the given descriptor and metrics
    pub const fn new(descriptor: String, metrics: PatternMetrics) -> Self {
        Self {
            declarations: BTreeMap::new(),
            descriptor,
            layering: Vec::new(),
            metrics,
        }
    }

    /// Set a declaration; blank values remove it instead
    pub fn set(&mut self, property: StyleProperty, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            self.declarations.remove(&property);
        } else {
            self.declarations.insert(property, value);
        }
    }

    /// Value of a declaration, if present
    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.declarations.get(&property).map(String::as_str)
    }

    /// Declarations in serialization order
    pub fn declarations(&self) -> impl Iterator<Item = (StyleProperty, &str)> {
        self.declarations
            .iter()
            .map(|(property, value)| (*property, value.as_str()))
    }

    /// Number of declarations present
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether no declaration is present
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Fold layers into the image, position and blend declarations
    ///
    /// Positions are only declared when at least one layer is offset.
    pub fn push_layers(&mut self, layers: &[Layer]) {
        let join = |part: fn(&Layer) -> String| {
            layers.iter().map(part).collect::<Vec<_>>().join(", ")
        };

        self.set(
            StyleProperty::BackgroundImage,
            join(|layer| layer.expression.clone()),
        );
        self.set(
            StyleProperty::BackgroundBlendMode,
            join(|layer| layer.blend.css_name().to_string()),
        );
        if layers.iter().any(|layer| layer.position != "0 0") {
            self.set(
                StyleProperty::BackgroundPosition,
                join(|layer| layer.position.clone()),
            );
        }
        self.layering.extend(layers.iter().map(Layer::label));
    }
}
