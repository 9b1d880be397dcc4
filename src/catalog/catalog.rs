//! The style catalog.

use tracing::debug;

use super::key::StyleKey;
use super::overrides::StyleOverrides;
use crate::style::{Color, Dimension, Opacity, StyleError, StyleValue};

/// The named style values used when drawing a transfer-function editor.
///
/// A catalog has no setters: once built it can only be read. Renderers take
/// it by shared reference, usually the process-wide instance from
/// [`global`](crate::global).
///
/// # Example
///
/// ```rust
/// use tfstyle::{Color, Dimension, StyleCatalog};
///
/// let styles = StyleCatalog::DEFAULT;
/// assert_eq!(styles.checkerboard_cell_size(), Dimension::px(10));
/// assert_eq!(styles.histogram_line_color(), Color::BLACK);
///
/// let radius = styles.get("rangeIndicatorCircleRadius").unwrap();
/// assert_eq!(radius.as_dimension(), Some(Dimension::px(20)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StyleCatalog {
    checkerboard_cell_size: Dimension,
    checkerboard_dark_gray: Color,
    checkerboard_light_gray: Color,
    controlpoints_line_width: Dimension,
    controlpoints_line_color: Color,
    controlpoints_circle_line_width: Dimension,
    controlpoints_circle_radius: Dimension,
    controlpoints_circle_fill_color: Color,
    controlpoints_circle_line_color: Color,
    histogram_line_width: Dimension,
    histogram_line_color: Color,
    range_indicator_rectangle_color: Color,
    range_indicator_rectangle_opacity: Opacity,
    range_indicator_circle_line_width: Dimension,
    range_indicator_circle_opacity: Opacity,
    range_indicator_circle_radius: Dimension,
    range_indicator_circle_color: Color,
}

impl StyleCatalog {
    /// The stock editor look.
    pub const DEFAULT: StyleCatalog = StyleCatalog {
        checkerboard_cell_size: Dimension::px(10),
        checkerboard_dark_gray: Color::rgb(0xCC, 0xCC, 0xCC),
        checkerboard_light_gray: Color::rgb(0xE6, 0xE6, 0xE6),
        controlpoints_line_width: Dimension::px(2),
        controlpoints_line_color: Color::GRAY,
        controlpoints_circle_line_width: Dimension::px(1),
        controlpoints_circle_radius: Dimension::px(8),
        controlpoints_circle_fill_color: Color::rgba(191, 191, 191, 128),
        controlpoints_circle_line_color: Color::rgba(255, 255, 255, 191),
        histogram_line_width: Dimension::px(2),
        histogram_line_color: Color::BLACK,
        range_indicator_rectangle_color: Color::LIGHT_GRAY,
        range_indicator_rectangle_opacity: Opacity::from_literal(0.7),
        range_indicator_circle_line_width: Dimension::px(1),
        range_indicator_circle_opacity: Opacity::from_literal(0.8),
        range_indicator_circle_radius: Dimension::px(20),
        range_indicator_circle_color: Color::WHITE,
    };

    pub fn checkerboard_cell_size(&self) -> Dimension {
        self.checkerboard_cell_size
    }

    pub fn checkerboard_dark_gray(&self) -> Color {
        self.checkerboard_dark_gray
    }

    pub fn checkerboard_light_gray(&self) -> Color {
        self.checkerboard_light_gray
    }

    pub fn controlpoints_line_width(&self) -> Dimension {
        self.controlpoints_line_width
    }

    pub fn controlpoints_line_color(&self) -> Color {
        self.controlpoints_line_color
    }

    pub fn controlpoints_circle_line_width(&self) -> Dimension {
        self.controlpoints_circle_line_width
    }

    pub fn controlpoints_circle_radius(&self) -> Dimension {
        self.controlpoints_circle_radius
    }

    pub fn controlpoints_circle_fill_color(&self) -> Color {
        self.controlpoints_circle_fill_color
    }

    pub fn controlpoints_circle_line_color(&self) -> Color {
        self.controlpoints_circle_line_color
    }

    pub fn histogram_line_width(&self) -> Dimension {
        self.histogram_line_width
    }

    pub fn histogram_line_color(&self) -> Color {
        self.histogram_line_color
    }

    /// Base color of the range rectangle; combine with
    /// [`range_indicator_rectangle_opacity`](Self::range_indicator_rectangle_opacity).
    pub fn range_indicator_rectangle_color(&self) -> Color {
        self.range_indicator_rectangle_color
    }

    pub fn range_indicator_rectangle_opacity(&self) -> Opacity {
        self.range_indicator_rectangle_opacity
    }

    pub fn range_indicator_circle_line_width(&self) -> Dimension {
        self.range_indicator_circle_line_width
    }

    pub fn range_indicator_circle_opacity(&self) -> Opacity {
        self.range_indicator_circle_opacity
    }

    pub fn range_indicator_circle_radius(&self) -> Dimension {
        self.range_indicator_circle_radius
    }

    pub fn range_indicator_circle_color(&self) -> Color {
        self.range_indicator_circle_color
    }

    /// Returns the value stored under `key`.
    pub fn value(&self, key: StyleKey) -> StyleValue {
        match key {
            StyleKey::CheckerboardCellSize => self.checkerboard_cell_size.into(),
            StyleKey::CheckerboardDarkGray => self.checkerboard_dark_gray.into(),
            StyleKey::CheckerboardLightGray => self.checkerboard_light_gray.into(),
            StyleKey::ControlpointsLineWidth => self.controlpoints_line_width.into(),
            StyleKey::ControlpointsLineColor => self.controlpoints_line_color.into(),
            StyleKey::ControlpointsCircleLineWidth => self.controlpoints_circle_line_width.into(),
            StyleKey::ControlpointsCircleRadius => self.controlpoints_circle_radius.into(),
            StyleKey::ControlpointsCircleFillColor => self.controlpoints_circle_fill_color.into(),
            StyleKey::ControlpointsCircleLineColor => self.controlpoints_circle_line_color.into(),
            StyleKey::HistogramLineWidth => self.histogram_line_width.into(),
            StyleKey::HistogramLineColor => self.histogram_line_color.into(),
            StyleKey::RangeIndicatorRectangleColor => self.range_indicator_rectangle_color.into(),
            StyleKey::RangeIndicatorRectangleOpacity => {
                self.range_indicator_rectangle_opacity.into()
            }
            StyleKey::RangeIndicatorCircleLineWidth => {
                self.range_indicator_circle_line_width.into()
            }
            StyleKey::RangeIndicatorCircleOpacity => self.range_indicator_circle_opacity.into(),
            StyleKey::RangeIndicatorCircleRadius => self.range_indicator_circle_radius.into(),
            StyleKey::RangeIndicatorCircleColor => self.range_indicator_circle_color.into(),
        }
    }

    /// Looks up a value by its published name.
    pub fn get(&self, name: &str) -> Result<StyleValue, StyleError> {
        let key: StyleKey = name.parse()?;
        Ok(self.value(key))
    }

    /// Iterates over every entry in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleKey, StyleValue)> + '_ {
        StyleKey::ALL.into_iter().map(move |key| (key, self.value(key)))
    }

    /// Builds a new catalog with `overrides` applied on top of this one.
    ///
    /// Fails on the first name that is unknown, whose value has the wrong
    /// kind, or whose value breaks a range invariant. `self` is untouched.
    pub fn with_overrides(&self, overrides: &StyleOverrides) -> Result<StyleCatalog, StyleError> {
        let mut catalog = self.clone();
        for (key, value) in overrides.resolve()? {
            debug!(key = key.name(), ?value, "applying style override");
            catalog.replace(key, value)?;
        }
        Ok(catalog)
    }

    /// Only reachable while building a new catalog in [`Self::with_overrides`].
    fn replace(&mut self, key: StyleKey, value: StyleValue) -> Result<(), StyleError> {
        let mismatch = || StyleError::TypeMismatch {
            name: key.name().to_string(),
            expected: key.kind(),
        };
        let color = || value.as_color().ok_or_else(mismatch);
        let dimension = || value.as_dimension().ok_or_else(mismatch);
        let opacity = || value.as_opacity().ok_or_else(mismatch);

        match key {
            StyleKey::CheckerboardCellSize => self.checkerboard_cell_size = dimension()?,
            StyleKey::CheckerboardDarkGray => self.checkerboard_dark_gray = color()?,
            StyleKey::CheckerboardLightGray => self.checkerboard_light_gray = color()?,
            StyleKey::ControlpointsLineWidth => self.controlpoints_line_width = dimension()?,
            StyleKey::ControlpointsLineColor => self.controlpoints_line_color = color()?,
            StyleKey::ControlpointsCircleLineWidth => {
                self.controlpoints_circle_line_width = dimension()?
            }
            StyleKey::ControlpointsCircleRadius => self.controlpoints_circle_radius = dimension()?,
            StyleKey::ControlpointsCircleFillColor => {
                self.controlpoints_circle_fill_color = color()?
            }
            StyleKey::ControlpointsCircleLineColor => {
                self.controlpoints_circle_line_color = color()?
            }
            StyleKey::HistogramLineWidth => self.histogram_line_width = dimension()?,
            StyleKey::HistogramLineColor => self.histogram_line_color = color()?,
            StyleKey::RangeIndicatorRectangleColor => {
                self.range_indicator_rectangle_color = color()?
            }
            StyleKey::RangeIndicatorRectangleOpacity => {
                self.range_indicator_rectangle_opacity = opacity()?
            }
            StyleKey::RangeIndicatorCircleLineWidth => {
                self.range_indicator_circle_line_width = dimension()?
            }
            StyleKey::RangeIndicatorCircleOpacity => {
                self.range_indicator_circle_opacity = opacity()?
            }
            StyleKey::RangeIndicatorCircleRadius => {
                self.range_indicator_circle_radius = dimension()?
            }
            StyleKey::RangeIndicatorCircleColor => self.range_indicator_circle_color = color()?,
        }
        Ok(())
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::DEFAULT
    }
}
