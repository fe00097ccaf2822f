//! Tile-by-tile encoding of a mapped image.

use super::tile::{EncodedTileLine, Tile};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::duplicates::DuplicateTracker;
use crate::hardware::TILE_HEIGHT;
use crate::image::SourceImage;
use crate::output::EncodedImage;
use crate::palette::{ColorIndexTable, TransparentIndex};
use crate::quantize::{LinePosition, LineQuantizer, LineRecompute};

/// Walks the tile grid and produces the bitmap and attribute streams.
///
/// Tiles are visited row-major. Each tile is mirrored, then every line is
/// reduced to two colors by a [`LineQuantizer`] and packed.
///
/// # Single-color lines
///
/// A line with only one index keeps the `(0, 0)` sentinel as its
/// background, so outside sprite mode a solid line of index `i` packs as
/// bitmap `0x00` with attribute `0x0i`: every pixel is drawn in the
/// foreground. This shows the same pixels as `0xFF` with `(i << 4) | i`,
/// but the bytes differ.
///
/// ```
/// use sg_tiles::{HardwarePalette, SourceImage, TileConverter};
///
/// let green = HardwarePalette::SG.color(3);
/// let result = TileConverter::new()
///     .convert(&SourceImage::solid(8, 8, green))
///     .unwrap();
/// assert_eq!(result.image.tiles(), &[0x00; 8]);
/// assert_eq!(result.image.attributes(), &[0x03; 8]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TileEncoder {
    transparent: Option<TransparentIndex>,
    recompute: LineRecompute,
}

impl TileEncoder {
    pub fn new(transparent: Option<TransparentIndex>, recompute: LineRecompute) -> Self {
        Self {
            transparent,
            recompute,
        }
    }

    /// Encode every tile of `image`.
    ///
    /// The image must already have passed validation. `duplicates` sees every
    /// tile; repeats are reported to `diagnostics` but still encoded.
    pub fn encode(
        &self,
        image: &SourceImage,
        table: &ColorIndexTable,
        duplicates: &mut DuplicateTracker,
        diagnostics: &mut Diagnostics,
    ) -> EncodedImage {
        let (tiles_x, tiles_y) = (image.tiles_x(), image.tiles_y());
        let mut encoded = EncodedImage::with_grid(tiles_x, tiles_y);
        let mut quantizer = LineQuantizer::new(self.transparent, self.recompute);

        for tile_y in 0..tiles_y {
            for tile_x in 0..tiles_x {
                let tile_number = tile_y * tiles_x + tile_x;
                let tile = Tile::from_image(image, table, tile_x, tile_y).mirrored();

                if let Some(first) = duplicates.observe(tile.signature(), tile_number) {
                    diagnostics.push(Diagnostic::DuplicateTile {
                        tile: tile_number,
                        first,
                    });
                }

                let tile_indices = tile.distinct_indices();
                quantizer.start_tile();
                for line in 0..TILE_HEIGHT {
                    let pixels = tile.line(line);
                    let at = LinePosition {
                        tile_x,
                        tile_y,
                        line,
                    };
                    let colors = quantizer.quantize(&pixels, &tile_indices, at, diagnostics);
                    encoded.push(EncodedTileLine::pack(&pixels, colors));
                }
            }
        }

        encoded
    }
}
