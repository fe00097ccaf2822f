//! Up-front image checks.
//!
//! [`validate`] runs before anything is mapped or encoded. A failure aborts
//! the conversion with no output.

mod error;

pub use error::ValidationError;

use crate::hardware::{MAX_HEIGHT, MAX_WIDTH, TILE_COLOR_LIMIT, TILE_HEIGHT, TILE_WIDTH};
use crate::image::SourceImage;

/// Check dimensions, then the per-tile color ceiling.
///
/// The color check counts raw source colors over the whole 8x8 tile against
/// [`TILE_COLOR_LIMIT`]. It is deliberately coarse: the two-colors-per-line
/// rule is enforced later by the line quantizer, which may still merge
/// colors inside a tile that passed here.
pub fn validate(image: &SourceImage) -> Result<(), ValidationError> {
    check_dimensions(image.width(), image.height())?;

    for tile_y in 0..image.tiles_y() {
        for tile_x in 0..image.tiles_x() {
            let colors = image.tile_color_count(tile_x, tile_y);
            if colors > TILE_COLOR_LIMIT {
                return Err(ValidationError::ColorLimit {
                    tile_x,
                    tile_y,
                    colors,
                    limit: TILE_COLOR_LIMIT,
                });
            }
        }
    }

    Ok(())
}

/// Check that `width` x `height` is a non-empty, tile-aligned size that fits
/// the screen.
pub fn check_dimensions(width: usize, height: usize) -> Result<(), ValidationError> {
    let fits = width <= MAX_WIDTH && height <= MAX_HEIGHT;
    let aligned = width % TILE_WIDTH == 0 && height % TILE_HEIGHT == 0;
    if width == 0 || height == 0 || !fits || !aligned {
        return Err(ValidationError::Dimension { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_full_screen_is_valid() {
        assert_eq!(check_dimensions(256, 192), Ok(()));
    }

    #[test]
    fn test_too_wide_is_rejected() {
        assert_eq!(
            check_dimensions(257, 192),
            Err(ValidationError::Dimension {
                width: 257,
                height: 192
            })
        );
        assert!(check_dimensions(264, 8).is_err());
    }

    #[test]
    fn test_too_tall_is_rejected() {
        assert!(check_dimensions(8, 200).is_err());
    }

    #[test]
    fn test_unaligned_is_rejected() {
        assert!(check_dimensions(12, 8).is_err());
        assert!(check_dimensions(8, 15).is_err());
    }

    #[test]
    fn test_empty_is_rejected() {
        assert!(check_dimensions(0, 8).is_err());
    }

    #[test]
    fn test_fifteen_colors_per_tile_allowed() {
        let image = SourceImage::from_fn(8, 8, |x, y| Rgb::new(((y * 8 + x) % 15) as u8, 0, 0));
        assert_eq!(validate(&image), Ok(()));
    }

    #[test]
    fn test_sixteen_colors_in_second_tile_rejected() {
        let image = SourceImage::from_fn(16, 16, |x, y| {
            if x >= 8 && y >= 8 {
                Rgb::new(((y * 8 + x) % 16) as u8, 0, 0)
            } else {
                Rgb::new(255, 255, 255)
            }
        });
        assert_eq!(
            validate(&image),
            Err(ValidationError::ColorLimit {
                tile_x: 1,
                tile_y: 1,
                colors: 16,
                limit: 15
            })
        );
    }

    #[test]
    fn test_dimension_checked_before_colors() {
        let image = SourceImage::from_fn(12, 8, |x, y| Rgb::new((x * 20) as u8, (y * 20) as u8, 0));
        assert!(matches!(
            validate(&image),
            Err(ValidationError::Dimension { .. })
        ));
    }
}
