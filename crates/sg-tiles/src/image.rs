//! Source pixel grid handed to the converter.

use std::collections::HashSet;

use crate::color::Rgb;
use crate::hardware::{TILE_HEIGHT, TILE_WIDTH};

/// An RGB image, stored row-major.
///
/// Decoding from a file format is the caller's job; this type only holds
/// the pixels. Dimensions are not checked here, see
/// [`validate`](crate::validate::validate).
///
/// # Example
///
/// ```
/// use sg_tiles::{Rgb, SourceImage};
///
/// let image = SourceImage::solid(16, 8, Rgb::new(255, 255, 255));
/// assert_eq!(image.tiles_x(), 2);
/// assert_eq!(image.tiles_y(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl SourceImage {
    /// Create an image from row-major pixels.
    ///
    /// # Panics
    ///
    /// Panics if `pixels.len() != width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<Rgb>) -> Self {
        assert_eq!(
            pixels.len(),
            width * height,
            "pixel count ({}) must match width * height ({}x{})",
            pixels.len(),
            width,
            height,
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Rgb) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self::new(width, height, pixels)
    }

    /// Create an image filled with one color.
    pub fn solid(width: usize, height: usize, color: Rgb) -> Self {
        Self::new(width, height, vec![color; width * height])
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at column `x`, row `y`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Number of whole tile columns.
    #[inline]
    pub fn tiles_x(&self) -> usize {
        self.width / TILE_WIDTH
    }

    /// Number of whole tile rows.
    #[inline]
    pub fn tiles_y(&self) -> usize {
        self.height / TILE_HEIGHT
    }

    /// Distinct colors of the image in order of first appearance.
    pub fn distinct_colors(&self) -> Vec<Rgb> {
        let mut seen = HashSet::new();
        self.pixels
            .iter()
            .copied()
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Number of distinct raw colors inside tile (`tile_x`, `tile_y`).
    pub fn tile_color_count(&self, tile_x: usize, tile_y: usize) -> usize {
        let mut seen = HashSet::new();
        for y in 0..TILE_HEIGHT {
            for x in 0..TILE_WIDTH {
                seen.insert(self.pixel(tile_x * TILE_WIDTH + x, tile_y * TILE_HEIGHT + y));
            }
        }
        seen.len()
    }
}
