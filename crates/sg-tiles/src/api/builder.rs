//! TileConverter builder -- the primary ergonomic entry point for the crate.
//!
//! [`TileConverter`] runs the whole pipeline: validation, color table,
//! tile encoding with duplicate tracking, and diagnostics collection.

use super::error::ConvertError;
use crate::diagnostics::Diagnostics;
use crate::duplicates::DuplicateTracker;
use crate::encode::TileEncoder;
use crate::image::SourceImage;
use crate::output::EncodedImage;
use crate::palette::{ColorIndexTable, HardwarePalette, TransparentIndex};
use crate::quantize::LineRecompute;
use crate::validate::validate;

/// Everything one conversion produces.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The encoded bitmap and attribute streams
    pub image: EncodedImage,
    /// Source color to palette index table used for encoding
    pub table: ColorIndexTable,
    /// Findings collected along the way (empty when diagnostics are off)
    pub diagnostics: Diagnostics,
}

/// High-level converter from RGB images to hardware tile streams.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`convert()`](Self::convert) takes `&self` so the builder is **reusable**
///   across multiple images; no state is shared between runs
///
/// # Example
///
/// ```
/// use sg_tiles::{Rgb, SourceImage, TileConverter, TransparentIndex};
///
/// let converter = TileConverter::new()
///     .transparent(Some(TransparentIndex::new(13).unwrap()))
///     .diagnostics(true);
///
/// let image = SourceImage::solid(16, 8, Rgb::new(0xC9, 0x5B, 0xBA));
/// let result = converter.convert(&image).unwrap();
///
/// assert_eq!(result.image.tiles().len(), 16);
/// assert_eq!(result.image.attributes(), &[0x00; 16]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TileConverter {
    palette: HardwarePalette,
    transparent: Option<TransparentIndex>,
    diagnostics: bool,
    recompute: LineRecompute,
}

impl TileConverter {
    /// Create a converter with no transparency and diagnostics off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Designate a palette index as the transparency carrier (sprite mode).
    #[inline]
    pub fn transparent(mut self, index: Option<TransparentIndex>) -> Self {
        self.transparent = index;
        self
    }

    /// Collect diagnostics. Output bytes are the same either way.
    #[inline]
    pub fn diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    /// Select when sprite lines recompute their color ordering.
    #[inline]
    pub fn recompute(mut self, recompute: LineRecompute) -> Self {
        self.recompute = recompute;
        self
    }

    /// The hardware palette in use.
    #[inline]
    pub fn palette(&self) -> &HardwarePalette {
        &self.palette
    }

    /// Convert one image.
    ///
    /// Fails without producing anything if the image doesn't pass
    /// validation.
    pub fn convert(&self, image: &SourceImage) -> Result<Conversion, ConvertError> {
        validate(image)?;

        let mut diagnostics = Diagnostics::new(self.diagnostics);
        let table = ColorIndexTable::build(image, &self.palette, self.transparent, &mut diagnostics);

        let mut duplicates = DuplicateTracker::new();
        let encoder = TileEncoder::new(self.transparent, self.recompute);
        let encoded = encoder.encode(image, &table, &mut duplicates, &mut diagnostics);

        Ok(Conversion {
            image: encoded,
            table,
            diagnostics,
        })
    }
}
