//! RGBA colors.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use super::error::StyleError;
use super::value::Opacity;

/// An 8-bit RGBA color.
///
/// This is the canonical representation for every color in the catalog.
/// Normalized float channels and hex strings are converted at the boundary
/// through [`Color::from_rgba_f32`] and [`Color::from_hex`].
///
/// # Example
///
/// ```rust
/// use tfstyle::Color;
///
/// let fill = Color::from_rgba_f32(0.75, 0.75, 0.75, 0.5).unwrap();
/// assert_eq!(fill, Color::rgba(191, 191, 191, 128));
/// assert_eq!(fill.to_hex(), "#80BFBFBF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Medium gray, `(0.5, 0.5, 0.5)`.
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    /// Light gray, `#C0C0C0`.
    pub const LIGHT_GRAY: Color = Color::rgb(192, 192, 192);

    /// Creates a color from 8-bit channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Creates a color from normalized channels in `[0, 1]`.
    ///
    /// Each channel is scaled by 255 and rounded to the nearest integer.
    pub fn from_rgba_f32(r: f32, g: f32, b: f32, a: f32) -> Result<Self, StyleError> {
        Ok(Self {
            r: normalized_channel("red", r)?,
            g: normalized_channel("green", g)?,
            b: normalized_channel("blue", b)?,
            a: normalized_channel("alpha", a)?,
        })
    }

    /// Parses `#RRGGBB` or alpha-prefixed `#AARRGGBB`.
    pub fn from_hex(input: &str) -> Result<Self, StyleError> {
        let invalid = || StyleError::InvalidColor {
            input: input.to_string(),
        };

        let digits = input.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let packed = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        let [a, r, g, b] = packed.to_be_bytes();

        match digits.len() {
            6 => Ok(Self::rgb(r, g, b)),
            8 => Ok(Self::rgba(r, g, b, a)),
            _ => Err(invalid()),
        }
    }

    /// Formats as `#RRGGBB` when opaque, `#AARRGGBB` otherwise.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }

    /// Returns the channels normalized to `[0, 1]`.
    pub fn to_rgba_f32(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a].map(|c| c as f32 / 255.0)
    }

    pub fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Scales the alpha channel by an opacity.
    ///
    /// Used where the catalog stores a color and its opacity separately,
    /// as the range indicator does.
    pub fn with_opacity(self, opacity: Opacity) -> Self {
        let a = (self.a as f32 * opacity.get()).round() as u8;
        self.with_alpha(a)
    }
}

fn normalized_channel(channel: &'static str, value: f32) -> Result<u8, StyleError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(StyleError::ChannelOutOfRange {
            channel,
            value: value.to_string(),
        });
    }
    Ok((value * 255.0).round() as u8)
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Either boundary form a color can be written in.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Normalized([f32; 4]),
}

impl TryFrom<ColorRepr> for Color {
    type Error = StyleError;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Hex(hex) => Color::from_hex(&hex),
            ColorRepr::Normalized([r, g, b, a]) => Color::from_rgba_f32(r, g, b, a),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = ColorRepr::deserialize(deserializer)?;
        Color::try_from(repr).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_rgba_f32_rounds_to_nearest() {
        let color = Color::from_rgba_f32(0.75, 0.75, 0.75, 0.5).unwrap();
        assert_eq!(color, Color::rgba(191, 191, 191, 128));
    }

    #[test]
    fn test_from_rgba_f32_rejects_out_of_range() {
        let err = Color::from_rgba_f32(1.2, 0.0, 0.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            StyleError::ChannelOutOfRange { channel: "red", .. }
        ));
        assert!(Color::from_rgba_f32(0.0, 0.0, 0.0, f32::NAN).is_err());
    }

    #[test]
    fn test_from_hex_opaque() {
        assert_eq!(Color::from_hex("#CCCCCC").unwrap(), Color::rgb(204, 204, 204));
        assert_eq!(Color::from_hex("#e6e6e6").unwrap(), Color::rgb(230, 230, 230));
    }

    #[test]
    fn test_from_hex_alpha_prefix() {
        assert_eq!(
            Color::from_hex("#80BFBFBF").unwrap(),
            Color::rgba(191, 191, 191, 128)
        );
        assert_eq!(Color::from_hex("#FFCCCCCC").unwrap(), Color::rgb(204, 204, 204));
    }

    #[test]
    fn test_from_hex_invalid() {
        for input in ["CCCCCC", "#CCC", "#GGCCCC", "#+CCCCC", "", "#", "#CCCCCCCCCC"] {
            assert!(
                matches!(Color::from_hex(input), Err(StyleError::InvalidColor { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::BLACK.to_hex(), "#000000");
        assert_eq!(Color::rgba(255, 255, 255, 191).to_hex(), "#BFFFFFFF");
    }

    #[test]
    fn test_to_rgba_f32() {
        assert_eq!(Color::WHITE.to_rgba_f32(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Color::BLACK.with_alpha(0).to_rgba_f32(), [0.0; 4]);
    }

    #[test]
    fn test_with_opacity_scales_alpha() {
        let faded = Color::LIGHT_GRAY.with_opacity(Opacity::new(0.8).unwrap());
        assert_eq!(faded, Color::rgba(192, 192, 192, 204));
        assert_eq!(Color::WHITE.with_opacity(Opacity::OPAQUE), Color::WHITE);
    }

    #[test]
    fn test_serialize_as_hex() {
        let json = serde_json::to_string(&Color::rgba(1, 2, 3, 4)).unwrap();
        assert_eq!(json, r##""#04010203""##);
    }

    #[test]
    fn test_deserialize_both_forms() {
        let hex: Color = serde_json::from_str(r##""#808080""##).unwrap();
        assert_eq!(hex, Color::GRAY);

        let floats: Color = serde_json::from_str("[1.0, 1.0, 1.0, 0.75]").unwrap();
        assert_eq!(floats, Color::rgba(255, 255, 255, 191));

        assert!(serde_json::from_str::<Color>(r#""white""#).is_err());
        assert!(serde_json::from_str::<Color>("[2.0, 0.0, 0.0, 1.0]").is_err());
    }

    proptest! {
        #[test]
        fn prop_normalized_channels_stay_close(
            r in 0.0f32..=1.0,
            g in 0.0f32..=1.0,
            b in 0.0f32..=1.0,
            a in 0.0f32..=1.0,
        ) {
            let color = Color::from_rgba_f32(r, g, b, a).unwrap();
            for (got, want) in color.to_rgba_f32().iter().zip([r, g, b, a]) {
                prop_assert!((got - want).abs() <= 0.5 / 255.0 + 1e-5);
            }
        }

        #[test]
        fn prop_hex_accepts_any_packed_value(packed in any::<u32>()) {
            let [a, r, g, b] = packed.to_be_bytes();
            let color = Color::from_hex(&format!("#{:08X}", packed)).unwrap();
            prop_assert_eq!(color, Color::rgba(r, g, b, a));
        }
    }
}
