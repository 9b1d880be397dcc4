//! Style errors.

use super::value::StyleKind;

/// Error returned when a style value cannot be looked up, built or installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A name that is not part of the catalog was requested
    UnknownStyleKey { name: String },
    /// The process-wide catalog was already frozen
    ImmutableStateViolation,
    /// A color string is not `#RRGGBB` or `#AARRGGBB`
    InvalidColor { input: String },
    /// A normalized color channel is outside [0, 1]
    ChannelOutOfRange { channel: &'static str, value: String },
    /// A dimension is negative or not finite
    NegativeDimension { value: String },
    /// An opacity is outside [0, 1]
    OpacityOutOfRange { value: String },
    /// An override value does not fit the kind of its key
    TypeMismatch { name: String, expected: StyleKind },
    /// A style file extension is not recognized
    UnsupportedFormat { path: String },
    /// A style file could not be parsed
    Parse { message: String },
    /// A style file could not be read
    Io { path: String, message: String },
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleError::UnknownStyleKey { name } => write!(f, "unknown style key '{}'", name),
            StyleError::ImmutableStateViolation => {
                write!(f, "style catalog is already initialized and cannot be replaced")
            }
            StyleError::InvalidColor { input } => {
                write!(f, "invalid color '{}': expected #RRGGBB or #AARRGGBB", input)
            }
            StyleError::ChannelOutOfRange { channel, value } => {
                write!(f, "{} channel {} is outside [0, 1]", channel, value)
            }
            StyleError::NegativeDimension { value } => {
                write!(f, "dimension {} must be a finite, non-negative number", value)
            }
            StyleError::OpacityOutOfRange { value } => {
                write!(f, "opacity {} is outside [0, 1]", value)
            }
            StyleError::TypeMismatch { name, expected } => {
                write!(f, "style '{}' expects a {} value", name, expected)
            }
            StyleError::UnsupportedFormat { path } => {
                write!(f, "unsupported style file format: {}", path)
            }
            StyleError::Parse { message } => write!(f, "failed to parse styles: {}", message),
            StyleError::Io { path, message } => {
                write!(f, "failed to read style file {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for StyleError {}
