//! Unified error type for the sg-tiles public API.
//!
//! [`ConvertError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::palette::PaletteError;
use crate::validate::ValidationError;
use std::fmt;

/// Unified error type for the sg-tiles public API.
///
/// # Example
///
/// ```
/// use sg_tiles::{ConvertError, TransparentIndex};
///
/// fn parse(text: &str) -> Result<TransparentIndex, ConvertError> {
///     Ok(text.parse::<TransparentIndex>()?)
/// }
/// assert!(parse("16").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Image rejected before encoding (dimensions or tile color count)
    Validation(ValidationError),
    /// Invalid transparent index request
    Palette(PaletteError),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Validation(err) => write!(f, "validation error: {}", err),
            ConvertError::Palette(err) => write!(f, "palette error: {}", err),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Validation(err) => Some(err),
            ConvertError::Palette(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ConvertError {
    fn from(err: ValidationError) -> Self {
        ConvertError::Validation(err)
    }
}

impl From<PaletteError> for ConvertError {
    fn from(err: PaletteError) -> Self {
        ConvertError::Palette(err)
    }
}
