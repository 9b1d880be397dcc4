//! Dimensions, opacities and the value enum the catalog hands out.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::StyleError;

/// A non-negative pixel magnitude: a line width, radius or cell size.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Dimension(f32);

impl Dimension {
    /// A whole number of pixels. Always valid.
    pub const fn px(pixels: u16) -> Self {
        Self(pixels as f32)
    }

    pub fn new(pixels: f32) -> Result<Self, StyleError> {
        if pixels.is_finite() && pixels >= 0.0 {
            Ok(Self(pixels))
        } else {
            Err(StyleError::NegativeDimension {
                value: pixels.to_string(),
            })
        }
    }

    pub fn get(&self) -> f32 {
        self.0
    }
}

impl TryFrom<f32> for Dimension {
    type Error = StyleError;

    fn try_from(pixels: f32) -> Result<Self, Self::Error> {
        Self::new(pixels)
    }
}

impl From<Dimension> for f32 {
    fn from(dimension: Dimension) -> Self {
        dimension.0
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// A normalized opacity in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Opacity(f32);

impl Opacity {
    pub const OPAQUE: Opacity = Opacity(1.0);
    pub const TRANSPARENT: Opacity = Opacity(0.0);

    /// Literal opacities for the built-in catalog.
    pub(crate) const fn from_literal(value: f32) -> Self {
        Self(value)
    }

    pub fn new(value: f32) -> Result<Self, StyleError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(StyleError::OpacityOutOfRange {
                value: value.to_string(),
            })
        }
    }

    pub fn get(&self) -> f32 {
        self.0
    }

    /// Converts to an 8-bit alpha channel.
    pub fn to_alpha(&self) -> u8 {
        (self.0 * 255.0).round() as u8
    }
}

impl TryFrom<f32> for Opacity {
    type Error = StyleError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Opacity> for f32 {
    fn from(opacity: Opacity) -> Self {
        opacity.0
    }
}

impl std::fmt::Display for Opacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The semantic type of a style value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    Color,
    Dimension,
    Opacity,
}

impl std::fmt::Display for StyleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StyleKind::Color => "color",
            StyleKind::Dimension => "dimension",
            StyleKind::Opacity => "opacity",
        };
        f.write_str(name)
    }
}

/// A single catalog value, returned by dynamic lookups.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Color(Color),
    Dimension(Dimension),
    Opacity(Opacity),
}

impl StyleValue {
    pub fn kind(&self) -> StyleKind {
        match self {
            StyleValue::Color(_) => StyleKind::Color,
            StyleValue::Dimension(_) => StyleKind::Dimension,
            StyleValue::Opacity(_) => StyleKind::Opacity,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            StyleValue::Color(color) => Some(*color),
            _ => None,
        }
    }

    pub fn as_dimension(&self) -> Option<Dimension> {
        match self {
            StyleValue::Dimension(dimension) => Some(*dimension),
            _ => None,
        }
    }

    pub fn as_opacity(&self) -> Option<Opacity> {
        match self {
            StyleValue::Opacity(opacity) => Some(*opacity),
            _ => None,
        }
    }
}

impl From<Color> for StyleValue {
    fn from(color: Color) -> Self {
        StyleValue::Color(color)
    }
}

impl From<Dimension> for StyleValue {
    fn from(dimension: Dimension) -> Self {
        StyleValue::Dimension(dimension)
    }
}

impl From<Opacity> for StyleValue {
    fn from(opacity: Opacity) -> Self {
        StyleValue::Opacity(opacity)
    }
}
