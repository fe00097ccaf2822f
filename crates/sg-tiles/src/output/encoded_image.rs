//! EncodedImage: the two parallel hardware streams plus geometry.
//!
//! The streams carry no header, so the tile grid size is kept alongside
//! them for decoding and preview.

use crate::color::Rgb;
use crate::encode::EncodedTileLine;
use crate::hardware::{TILE_HEIGHT, TILE_WIDTH};
use crate::palette::HardwarePalette;

/// The canonical output of the tile encoder.
///
/// Holds one bitmap byte and one attribute byte per tile line. Lines are
/// stored tile by tile (8 per tile), tiles in row-major order.
///
/// # Example
///
/// ```
/// use sg_tiles::{Rgb, SourceImage, TileConverter};
///
/// let image = SourceImage::solid(8, 8, Rgb::new(255, 255, 255));
/// let conversion = TileConverter::new().convert(&image).unwrap();
/// let encoded = &conversion.image;
///
/// assert_eq!(encoded.tile_count(), 1);
/// assert_eq!(encoded.tiles(), &[0x00; 8]);
/// assert_eq!(encoded.attributes(), &[0x0F; 8]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    tiles_x: usize,
    tiles_y: usize,
    tiles: Vec<u8>,
    attributes: Vec<u8>,
}

impl EncodedImage {
    /// Create an empty image for a `tiles_x` by `tiles_y` grid.
    pub fn with_grid(tiles_x: usize, tiles_y: usize) -> Self {
        let lines = tiles_x * tiles_y * TILE_HEIGHT;
        Self {
            tiles_x,
            tiles_y,
            tiles: Vec::with_capacity(lines),
            attributes: Vec::with_capacity(lines),
        }
    }

    /// Rebuild from existing streams.
    ///
    /// Returns `None` if either stream length doesn't match the grid.
    #[cfg(test)]
    pub(crate) fn from_streams(
        tiles_x: usize,
        tiles_y: usize,
        tiles: Vec<u8>,
        attributes: Vec<u8>,
    ) -> Option<Self> {
        let lines = tiles_x * tiles_y * TILE_HEIGHT;
        if tiles.len() != lines || attributes.len() != lines {
            return None;
        }
        Some(Self {
            tiles_x,
            tiles_y,
            tiles,
            attributes,
        })
    }

    /// Append the next line in scan order.
    pub(crate) fn push(&mut self, line: EncodedTileLine) {
        self.tiles.push(line.bitmap);
        self.attributes.push(line.attribute);
    }

    /// Bitmap stream, one byte per line.
    #[inline]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Attribute stream, one byte per line.
    #[inline]
    pub fn attributes(&self) -> &[u8] {
        &self.attributes
    }

    /// Tile columns.
    #[inline]
    pub fn tiles_x(&self) -> usize {
        self.tiles_x
    }

    /// Tile rows.
    #[inline]
    pub fn tiles_y(&self) -> usize {
        self.tiles_y
    }

    /// Number of tiles.
    #[inline]
    pub fn tile_count(&self) -> usize {
        self.tiles_x * self.tiles_y
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.tiles_x * TILE_WIDTH
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.tiles_y * TILE_HEIGHT
    }

    /// Line `line` of tile number `tile`.
    pub fn line(&self, tile: usize, line: usize) -> Option<EncodedTileLine> {
        let i = tile * TILE_HEIGHT + line;
        if line >= TILE_HEIGHT || i >= self.tiles.len() {
            return None;
        }
        Some(EncodedTileLine {
            bitmap: self.tiles[i],
            attribute: self.attributes[i],
        })
    }

    /// Decode to one palette index per pixel, row-major, in source
    /// orientation (the packing mirror is undone).
    pub fn to_indices(&self) -> Vec<u8> {
        let width = self.width();
        let mut indices = vec![0u8; width * self.height()];

        for (i, (&bitmap, &attribute)) in self.tiles.iter().zip(&self.attributes).enumerate() {
            let tile = i / TILE_HEIGHT;
            let line = i % TILE_HEIGHT;
            let x0 = (tile % self.tiles_x) * TILE_WIDTH;
            let y = (tile / self.tiles_x) * TILE_HEIGHT + line;
            let mirrored = EncodedTileLine { bitmap, attribute }.unpack();
            for (column, &idx) in mirrored.iter().enumerate() {
                indices[y * width + x0 + (TILE_WIDTH - 1 - column)] = idx;
            }
        }

        indices
    }

    /// Decode to RGB bytes through `palette`, `[R, G, B, ...]` row-major.
    ///
    /// The returned buffer has length `width * height * 3`.
    pub fn to_rgb(&self, palette: &HardwarePalette) -> Vec<u8> {
        self.to_indices()
            .into_iter()
            .flat_map(|idx| palette.color(idx).to_bytes())
            .collect()
    }

    /// Decode to colors through `palette`, row-major.
    pub fn to_colors(&self, palette: &HardwarePalette) -> Vec<Rgb> {
        self.to_indices()
            .into_iter()
            .map(|idx| palette.color(idx))
            .collect()
    }
}
