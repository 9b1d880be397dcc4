//! # tfstyle - Style constants for transfer-function editors
//!
//! `tfstyle` holds the colors, line widths and sizes a transfer-function
//! editor widget draws with: the checkerboard behind transparent regions,
//! control-point markers, the histogram stroke and the range indicator.
//!
//! Every value has a semantic type ([`Color`], [`Dimension`] or [`Opacity`]),
//! so an opacity cannot be passed where a line width is expected. A
//! [`StyleCatalog`] is read-only: renderers either use the typed accessors or
//! look values up by their published name.
//!
//! ## Quick Start
//!
//! ```rust
//! use tfstyle::{Color, StyleCatalog};
//!
//! let styles = StyleCatalog::DEFAULT;
//! let cell = styles.checkerboard_cell_size().get();
//! assert_eq!(cell, 10.0);
//!
//! let fill = styles.get("controlpointsCircleFillColor").unwrap();
//! assert_eq!(fill.as_color(), Some(Color::rgba(191, 191, 191, 128)));
//! ```
//!
//! ## Restyling at startup
//!
//! A host can load a YAML or JSON style file once, apply it on top of the
//! defaults and freeze the result for the rest of the process:
//!
//! ```rust,no_run
//! use tfstyle::{StyleCatalog, StyleOverrides};
//!
//! # fn main() -> Result<(), tfstyle::StyleError> {
//! let overrides = StyleOverrides::from_path("tf-editor.yaml")?;
//! tfstyle::install(StyleCatalog::DEFAULT.with_overrides(&overrides)?)?;
//!
//! // Anywhere later, from any thread:
//! let radius = tfstyle::global().range_indicator_circle_radius();
//! # let _ = radius;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod style;

pub use catalog::{
    global, install, is_initialized, RawStyleValue, StyleCatalog, StyleFormat, StyleKey,
    StyleOverrides, STYLE_FILE_EXTENSIONS,
};
pub use style::{Color, Dimension, Opacity, StyleError, StyleKind, StyleValue};
