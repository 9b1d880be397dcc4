//! Semantic style value types.
//!
//! This module provides the typed primitives every catalog entry is built from:
//!
//! - [`Color`]: an 8-bit RGBA color with hex and normalized-float conversions
//! - [`Dimension`]: a non-negative pixel magnitude
//! - [`Opacity`]: a normalized opacity in `[0, 1]`
//! - [`StyleValue`]: any one of the above, as returned by dynamic lookups
//! - [`StyleError`]: errors from lookup, validation and loading
//!
//! Distinct types keep an opacity from being passed where a channel value or
//! a line width is expected.

mod color;
mod error;
mod value;

pub use color::Color;
pub use error::StyleError;
pub use value::{Dimension, Opacity, StyleKind, StyleValue};
