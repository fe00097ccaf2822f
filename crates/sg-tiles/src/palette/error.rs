//! Error types for palette operations
//!
//! Errors raised while validating a transparent index request.

use std::fmt;
use std::num::ParseIntError;

use crate::hardware::PALETTE_SIZE;

/// Error type for palette index requests.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// Requested transparent index is outside `1..=15`
    TransparentIndexOutOfRange {
        /// The rejected value
        value: i64,
    },
    /// Transparent index text is not a decimal integer
    InvalidIndex(ParseIntError),
}

impl From<ParseIntError> for PaletteError {
    fn from(err: ParseIntError) -> Self {
        PaletteError::InvalidIndex(err)
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::TransparentIndexOutOfRange { value } => {
                write!(
                    f,
                    "transparent palette index {} is out of range (expected 1-{})",
                    value,
                    PALETTE_SIZE - 1
                )
            }
            PaletteError::InvalidIndex(err) => {
                write!(f, "invalid palette index: {}", err)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::InvalidIndex(err) => Some(err),
            _ => None,
        }
    }
}
