//! Tile blocks and their packed line form.

use std::collections::BTreeSet;

use crate::duplicates::TileSignature;
use crate::hardware::{TILE_HEIGHT, TILE_PIXELS, TILE_WIDTH};
use crate::image::SourceImage;
use crate::palette::ColorIndexTable;
use crate::quantize::LineColors;

/// An 8x8 block of palette indices, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pixels: TileSignature,
}

impl Tile {
    /// Cut tile (`tile_x`, `tile_y`) out of `image`, mapping each pixel
    /// through `table`.
    pub fn from_image(
        image: &SourceImage,
        table: &ColorIndexTable,
        tile_x: usize,
        tile_y: usize,
    ) -> Self {
        let mut pixels = [0u8; TILE_PIXELS];
        for y in 0..TILE_HEIGHT {
            for x in 0..TILE_WIDTH {
                let color = image.pixel(tile_x * TILE_WIDTH + x, tile_y * TILE_HEIGHT + y);
                pixels[y * TILE_WIDTH + x] = table.index_of(color);
            }
        }
        Self { pixels }
    }

    #[cfg(test)]
    pub(crate) fn from_indices(pixels: TileSignature) -> Self {
        Self { pixels }
    }

    /// The same tile flipped left to right.
    ///
    /// Packing walks columns from bit 0 upward, but the hardware shows bit 7
    /// leftmost, so tiles are mirrored before packing.
    pub fn mirrored(&self) -> Self {
        let mut pixels = self.pixels;
        for row in pixels.chunks_exact_mut(TILE_WIDTH) {
            row.reverse();
        }
        Self { pixels }
    }

    /// Row `n` of the tile.
    pub fn line(&self, n: usize) -> [u8; TILE_WIDTH] {
        let mut line = [0u8; TILE_WIDTH];
        line.copy_from_slice(&self.pixels[n * TILE_WIDTH..(n + 1) * TILE_WIDTH]);
        line
    }

    /// Distinct indices used anywhere in the tile, ascending.
    pub fn distinct_indices(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .copied()
            .collect::<BTreeSet<u8>>()
            .into_iter()
            .collect()
    }

    /// All 64 indices; identical tiles have identical signatures.
    #[inline]
    pub fn signature(&self) -> &TileSignature {
        &self.pixels
    }
}

/// One line as the hardware stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedTileLine {
    /// One bit per column; 1 selects the background index
    pub bitmap: u8,
    /// Background index in the high nibble, foreground in the low nibble
    pub attribute: u8,
}

impl EncodedTileLine {
    /// Pack an already mirrored line with its chosen colors.
    ///
    /// Bit `c` is set when column `c` equals the background. Columns with
    /// any other index read as foreground.
    pub fn pack(line: &[u8; TILE_WIDTH], colors: LineColors) -> Self {
        let bitmap = line
            .iter()
            .enumerate()
            .filter(|&(_, &idx)| idx == colors.background)
            .fold(0u8, |acc, (column, _)| acc | (1 << column));
        Self {
            bitmap,
            attribute: (colors.background << 4) | (colors.foreground & 0x0F),
        }
    }

    /// Background index from the attribute byte.
    #[inline]
    pub fn background(self) -> u8 {
        self.attribute >> 4
    }

    /// Foreground index from the attribute byte.
    #[inline]
    pub fn foreground(self) -> u8 {
        self.attribute & 0x0F
    }

    /// Indices the hardware will show, in mirrored column order.
    pub fn unpack(self) -> [u8; TILE_WIDTH] {
        let mut line = [0u8; TILE_WIDTH];
        for (column, idx) in line.iter_mut().enumerate() {
            *idx = if self.bitmap & (1 << column) != 0 {
                self.background()
            } else {
                self.foreground()
            };
        }
        line
    }
}
