use std::fmt;

use crate::hardware::{MAX_HEIGHT, MAX_WIDTH, TILE_HEIGHT, TILE_WIDTH};

/// Reasons an image is rejected before encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Image is larger than 256x192, empty, or not a multiple of 8 in
    /// either direction
    Dimension {
        /// Image width in pixels
        width: usize,
        /// Image height in pixels
        height: usize,
    },
    /// A tile holds more distinct colors than the hardware can represent
    ColorLimit {
        /// Tile column
        tile_x: usize,
        /// Tile row
        tile_y: usize,
        /// Distinct source colors found in the tile
        colors: usize,
        /// Allowed maximum
        limit: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Dimension { width, height } => {
                write!(
                    f,
                    "invalid image dimensions {}x{}: at most {}x{} and a multiple of {}x{} required",
                    width, height, MAX_WIDTH, MAX_HEIGHT, TILE_WIDTH, TILE_HEIGHT
                )
            }
            ValidationError::ColorLimit {
                tile_x,
                tile_y,
                colors,
                limit,
            } => {
                write!(
                    f,
                    "too many colors in tile ({}, {}): {} found, at most {} supported",
                    tile_x, tile_y, colors, limit
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
