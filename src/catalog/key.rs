//! Names of catalog entries.

use std::str::FromStr;

use crate::style::{StyleError, StyleKind};

/// The closed set of style names a transfer-function editor reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleKey {
    CheckerboardCellSize,
    CheckerboardDarkGray,
    CheckerboardLightGray,
    ControlpointsLineWidth,
    ControlpointsLineColor,
    ControlpointsCircleLineWidth,
    ControlpointsCircleRadius,
    ControlpointsCircleFillColor,
    ControlpointsCircleLineColor,
    HistogramLineWidth,
    HistogramLineColor,
    RangeIndicatorRectangleColor,
    RangeIndicatorRectangleOpacity,
    RangeIndicatorCircleLineWidth,
    RangeIndicatorCircleOpacity,
    RangeIndicatorCircleRadius,
    RangeIndicatorCircleColor,
}

impl StyleKey {
    /// Every key, in catalog order.
    pub const ALL: [StyleKey; 17] = [
        StyleKey::CheckerboardCellSize,
        StyleKey::CheckerboardDarkGray,
        StyleKey::CheckerboardLightGray,
        StyleKey::ControlpointsLineWidth,
        StyleKey::ControlpointsLineColor,
        StyleKey::ControlpointsCircleLineWidth,
        StyleKey::ControlpointsCircleRadius,
        StyleKey::ControlpointsCircleFillColor,
        StyleKey::ControlpointsCircleLineColor,
        StyleKey::HistogramLineWidth,
        StyleKey::HistogramLineColor,
        StyleKey::RangeIndicatorRectangleColor,
        StyleKey::RangeIndicatorRectangleOpacity,
        StyleKey::RangeIndicatorCircleLineWidth,
        StyleKey::RangeIndicatorCircleOpacity,
        StyleKey::RangeIndicatorCircleRadius,
        StyleKey::RangeIndicatorCircleColor,
    ];

    /// The published name of this entry.
    ///
    /// `controlpointsCircleLineWith` keeps the spelling existing style files
    /// use; [`FromStr`] also accepts `controlpointsCircleLineWidth`.
    pub fn name(&self) -> &'static str {
        match self {
            StyleKey::CheckerboardCellSize => "checkerboardCellSize",
            StyleKey::CheckerboardDarkGray => "checkerboardDarkGray",
            StyleKey::CheckerboardLightGray => "checkerboardLightGray",
            StyleKey::ControlpointsLineWidth => "controlpointsLineWidth",
            StyleKey::ControlpointsLineColor => "controlpointsLineColor",
            StyleKey::ControlpointsCircleLineWidth => "controlpointsCircleLineWith",
            StyleKey::ControlpointsCircleRadius => "controlpointsCircleRadius",
            StyleKey::ControlpointsCircleFillColor => "controlpointsCircleFillColor",
            StyleKey::ControlpointsCircleLineColor => "controlpointsCircleLineColor",
            StyleKey::HistogramLineWidth => "histogramLineWidth",
            StyleKey::HistogramLineColor => "histogramLineColor",
            StyleKey::RangeIndicatorRectangleColor => "rangeIndicatorRectangleColor",
            StyleKey::RangeIndicatorRectangleOpacity => "rangeIndicatorRectangleOpacity",
            StyleKey::RangeIndicatorCircleLineWidth => "rangeIndicatorCircleLineWidth",
            StyleKey::RangeIndicatorCircleOpacity => "rangeIndicatorCircleOpacity",
            StyleKey::RangeIndicatorCircleRadius => "rangeIndicatorCircleRadius",
            StyleKey::RangeIndicatorCircleColor => "rangeIndicatorCircleColor",
        }
    }

    /// The kind of value stored under this key.
    pub fn kind(&self) -> StyleKind {
        match self {
            StyleKey::CheckerboardDarkGray
            | StyleKey::CheckerboardLightGray
            | StyleKey::ControlpointsLineColor
            | StyleKey::ControlpointsCircleFillColor
            | StyleKey::ControlpointsCircleLineColor
            | StyleKey::HistogramLineColor
            | StyleKey::RangeIndicatorRectangleColor
            | StyleKey::RangeIndicatorCircleColor => StyleKind::Color,
            StyleKey::RangeIndicatorRectangleOpacity | StyleKey::RangeIndicatorCircleOpacity => {
                StyleKind::Opacity
            }
            StyleKey::CheckerboardCellSize
            | StyleKey::ControlpointsLineWidth
            | StyleKey::ControlpointsCircleLineWidth
            | StyleKey::ControlpointsCircleRadius
            | StyleKey::HistogramLineWidth
            | StyleKey::RangeIndicatorCircleLineWidth
            | StyleKey::RangeIndicatorCircleRadius => StyleKind::Dimension,
        }
    }
}

impl FromStr for StyleKey {
    type Err = StyleError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name == "controlpointsCircleLineWidth" {
            return Ok(StyleKey::ControlpointsCircleLineWidth);
        }
        StyleKey::ALL
            .into_iter()
            .find(|key| key.name() == name)
            .ok_or_else(|| StyleError::UnknownStyleKey {
                name: name.to_string(),
            })
    }
}

impl std::fmt::Display for StyleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
