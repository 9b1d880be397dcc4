//! Catalog of named style values.
//!
//! This module provides:
//!
//! - [`StyleKey`]: the closed set of names a transfer-function editor reads
//! - [`StyleCatalog`]: typed, read-only access to every value, plus lookup by name
//! - [`StyleOverrides`]: YAML/JSON style files applied on top of a catalog
//! - [`install`] / [`global`]: the process-wide, initialize-once catalog

#[allow(clippy::module_inception)]
mod catalog;
mod global;
mod key;
mod overrides;

pub use catalog::StyleCatalog;
pub use global::{global, install, is_initialized};
pub use key::StyleKey;
pub use overrides::{RawStyleValue, StyleFormat, StyleOverrides, STYLE_FILE_EXTENSIONS};
