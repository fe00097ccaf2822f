//! The fixed 16-color hardware palette and nearest-color matching.

use crate::color::Rgb;
use crate::hardware::PALETTE_SIZE;

/// Colors of the display processor, in hardware index order.
///
/// Entry 0 is transparent. It carries the same RGB value as entry 1 (black)
/// so that nearest-color search lands on 0 first for dark colors, which
/// [`ColorIndexTable`](super::ColorIndexTable) then bumps to 1.
const SG_COLORS: [Rgb; PALETTE_SIZE] = [
    Rgb::new(0x00, 0x00, 0x00), // transparent
    Rgb::new(0x00, 0x00, 0x00), // black
    Rgb::new(0x21, 0xC8, 0x42), // medium green
    Rgb::new(0x5E, 0xDC, 0x78), // light green
    Rgb::new(0x54, 0x55, 0xED), // dark blue
    Rgb::new(0x7D, 0x76, 0xFC), // light blue
    Rgb::new(0xD4, 0x52, 0x4D), // dark red
    Rgb::new(0x42, 0xEB, 0xF5), // cyan
    Rgb::new(0xFC, 0x55, 0x54), // medium red
    Rgb::new(0xFF, 0x79, 0x78), // light red
    Rgb::new(0xD4, 0xC1, 0x54), // dark yellow
    Rgb::new(0xE6, 0xCE, 0x80), // light yellow
    Rgb::new(0x21, 0xB0, 0x3B), // dark green
    Rgb::new(0xC9, 0x5B, 0xBA), // magenta
    Rgb::new(0xCC, 0xCC, 0xCC), // gray
    Rgb::new(0xFF, 0xFF, 0xFF), // white
];

/// Human readable names, same order as the colors.
const SG_NAMES: [&str; PALETTE_SIZE] = [
    "transparent",
    "black",
    "medium green",
    "light green",
    "dark blue",
    "light blue",
    "dark red",
    "cyan",
    "medium red",
    "light red",
    "dark yellow",
    "light yellow",
    "dark green",
    "magenta",
    "gray",
    "white",
];

/// The display processor's fixed palette.
///
/// This is a compiled-in table. There is exactly one instance,
/// [`HardwarePalette::SG`], and it is never mutated.
///
/// # Example
///
/// ```
/// use sg_tiles::{HardwarePalette, Rgb};
///
/// let palette = HardwarePalette::SG;
/// assert_eq!(palette.len(), 16);
/// assert_eq!(palette.nearest_index(Rgb::new(250, 250, 250)), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwarePalette {
    colors: [Rgb; PALETTE_SIZE],
}

impl HardwarePalette {
    /// The 16-color palette of the target display processor.
    pub const SG: Self = Self { colors: SG_COLORS };

    /// Returns the number of colors in the palette.
    #[inline]
    pub const fn len(&self) -> usize {
        PALETTE_SIZE
    }

    /// Always `false`; the palette has a fixed, non-zero size.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Get the color at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 16`.
    #[inline]
    pub fn color(&self, idx: u8) -> Rgb {
        self.colors[idx as usize]
    }

    /// Name of the color at the given index.
    #[inline]
    pub fn name(&self, idx: u8) -> &'static str {
        SG_NAMES[idx as usize]
    }

    /// All palette colors in index order.
    #[inline]
    pub fn colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.colors
    }

    /// Find the palette index closest to `color`.
    ///
    /// Distance is the sum of per-channel squared differences. On equal
    /// distance the lowest index wins, so the result is deterministic and
    /// total over all 2^24 inputs.
    #[inline]
    pub fn nearest_index(&self, color: Rgb) -> u8 {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, &entry) in self.colors.iter().enumerate() {
            let dist = color.distance_squared(entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        best_idx as u8
    }
}

impl Default for HardwarePalette {
    fn default() -> Self {
        Self::SG
    }
}
