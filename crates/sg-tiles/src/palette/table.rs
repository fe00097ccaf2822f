//! Per-image color to palette index table.

use std::collections::HashMap;

use super::palette::HardwarePalette;
use super::transparent::TransparentIndex;
use crate::color::Rgb;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::hardware::TRANSPARENT_INDEX;
use crate::image::SourceImage;

/// Index used for colors whose nearest match is the transparent slot.
const BLACK_INDEX: u8 = 1;

/// Mapping from each distinct source color to a palette index.
///
/// Built once per image by [`ColorIndexTable::build`]. Two rewrite rules are
/// applied to the nearest palette index, in this order, for every color:
///
/// 1. Index 0 (transparent) becomes 1 (black). Drawn colors never encode as
///    transparent by accident.
/// 2. If a [`TransparentIndex`] was requested, that index becomes 0.
///
/// Because rule 1 runs first, requesting index 1 turns every black-ish
/// color transparent.
#[derive(Debug, Clone)]
pub struct ColorIndexTable {
    palette: HardwarePalette,
    transparent: Option<TransparentIndex>,
    entries: HashMap<Rgb, u8>,
    order: Vec<Rgb>,
}

/// Outcome of mapping a single color.
struct Resolved {
    index: u8,
    bumped: bool,
    substituted: bool,
}

fn resolve(palette: &HardwarePalette, transparent: Option<TransparentIndex>, color: Rgb) -> Resolved {
    let mut index = palette.nearest_index(color);
    let mut bumped = false;
    let mut substituted = false;

    if index == TRANSPARENT_INDEX {
        index = BLACK_INDEX;
        bumped = true;
    }
    if let Some(t) = transparent {
        if index == t.get() {
            index = TRANSPARENT_INDEX;
            substituted = true;
        }
    }

    Resolved {
        index,
        bumped,
        substituted,
    }
}

impl ColorIndexTable {
    /// Build the table for every distinct color in `image`.
    ///
    /// Each rewrite is reported to `diagnostics` as
    /// [`Diagnostic::BlackRemapped`] or [`Diagnostic::TransparentSubstituted`].
    /// Colors are visited in order of first appearance.
    pub fn build(
        image: &SourceImage,
        palette: &HardwarePalette,
        transparent: Option<TransparentIndex>,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let order = image.distinct_colors();
        let mut entries = HashMap::with_capacity(order.len());

        for &color in &order {
            let resolved = resolve(palette, transparent, color);
            if resolved.bumped {
                diagnostics.push(Diagnostic::BlackRemapped { color });
            }
            if resolved.substituted {
                if let Some(t) = transparent {
                    diagnostics.push(Diagnostic::TransparentSubstituted {
                        color,
                        index: t.get(),
                    });
                }
            }
            entries.insert(color, resolved.index);
        }

        Self {
            palette: *palette,
            transparent,
            entries,
            order,
        }
    }

    /// Palette index for `color`, if the color occurred in the source image.
    #[inline]
    pub fn get(&self, color: Rgb) -> Option<u8> {
        self.entries.get(&color).copied()
    }

    /// Palette index for `color`.
    ///
    /// Colors that were not in the source image are resolved with the same
    /// rules, without being recorded.
    #[inline]
    pub fn index_of(&self, color: Rgb) -> u8 {
        match self.entries.get(&color) {
            Some(&index) => index,
            None => resolve(&self.palette, self.transparent, color).index,
        }
    }

    /// Number of distinct source colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if the source image had no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(color, index)` pairs in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (Rgb, u8)> + '_ {
        self.order.iter().map(move |c| (*c, self.entries[c]))
    }
}
