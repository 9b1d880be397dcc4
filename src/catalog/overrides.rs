//! Style files that restyle the catalog at startup.
//!
//! A style file is a flat map from catalog name to value, in YAML or JSON:
//!
//! ```yaml
//! checkerboardCellSize: 12
//! rangeIndicatorCircleOpacity: 0.6
//! histogramLineColor: "#404040"
//! controlpointsCircleFillColor: [0.75, 0.75, 0.75, 0.5]
//! ```
//!
//! Numbers apply to dimensions and opacities. Colors are written either as a
//! `#RRGGBB`/`#AARRGGBB` string or as four normalized channels. Names are
//! checked against the catalog when the overrides are applied, not when the
//! file is parsed.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use super::key::StyleKey;
use crate::style::{Color, Dimension, Opacity, StyleError, StyleKind, StyleValue};

/// Style file extensions and the format each one selects.
pub const STYLE_FILE_EXTENSIONS: &[(&str, StyleFormat)] = &[
    ("yaml", StyleFormat::Yaml),
    ("yml", StyleFormat::Yaml),
    ("json", StyleFormat::Json),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleFormat {
    Yaml,
    Json,
}

/// A value as written in a style file, before it is checked against its key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawStyleValue {
    Number(f32),
    Text(String),
    Channels([f32; 4]),
}

/// A parsed set of overrides, keyed by catalog name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct StyleOverrides {
    entries: BTreeMap<String, RawStyleValue>,
}

impl StyleOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an override, returning the updated set for chaining.
    pub fn add(mut self, name: &str, value: RawStyleValue) -> Self {
        self.entries.insert(name.to_string(), value);
        self
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, StyleError> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        let entries: Option<BTreeMap<String, RawStyleValue>> =
            serde_yaml::from_str(input).map_err(|e| StyleError::Parse {
                message: e.to_string(),
            })?;
        Ok(Self {
            entries: entries.unwrap_or_default(),
        })
    }

    pub fn from_json_str(input: &str) -> Result<Self, StyleError> {
        serde_json::from_str(input).map_err(|e| StyleError::Parse {
            message: e.to_string(),
        })
    }

    /// Reads a style file, choosing the format from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let format = format_for(path).ok_or_else(|| StyleError::UnsupportedFormat {
            path: path.display().to_string(),
        })?;
        let content = std::fs::read_to_string(path).map_err(|e| StyleError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        match format {
            StyleFormat::Yaml => Self::from_yaml_str(&content),
            StyleFormat::Json => Self::from_json_str(&content),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks every entry against the catalog and converts it to a typed value.
    pub(crate) fn resolve(&self) -> Result<Vec<(StyleKey, StyleValue)>, StyleError> {
        self.entries
            .iter()
            .map(|(name, raw)| {
                let key: StyleKey = name.parse()?;
                Ok((key, convert(key, raw)?))
            })
            .collect()
    }
}

fn format_for(path: &Path) -> Option<StyleFormat> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    STYLE_FILE_EXTENSIONS
        .iter()
        .find(|(candidate, _)| *candidate == ext)
        .map(|(_, format)| *format)
}

fn convert(key: StyleKey, raw: &RawStyleValue) -> Result<StyleValue, StyleError> {
    let value: StyleValue = match (key.kind(), raw) {
        (StyleKind::Dimension, RawStyleValue::Number(n)) => Dimension::new(*n)?.into(),
        (StyleKind::Opacity, RawStyleValue::Number(n)) => Opacity::new(*n)?.into(),
        (StyleKind::Color, RawStyleValue::Text(hex)) => Color::from_hex(hex)?.into(),
        (StyleKind::Color, RawStyleValue::Channels([r, g, b, a])) => {
            Color::from_rgba_f32(*r, *g, *b, *a)?.into()
        }
        (expected, _) => {
            return Err(StyleError::TypeMismatch {
                name: key.name().to_string(),
                expected,
            })
        }
    };
    Ok(value)
}
