#![allow(clippy::module_inception)]

//! sg-tiles: tile bitmap and attribute encoding for 16-color tile displays
//!
//! This library converts RGB images into the two byte streams consumed by a
//! tile/sprite video display processor with a fixed 16-color palette, 8x8
//! tiles and at most two colors per 8-pixel tile line.
//!
//! # Quick Start
//!
//! The [`TileConverter`] builder is the primary entry point:
//!
//! ```
//! use sg_tiles::{Rgb, SourceImage, TileConverter};
//!
//! let image = SourceImage::solid(16, 8, Rgb::new(0x21, 0xC8, 0x42));
//! let result = TileConverter::new().convert(&image).unwrap();
//!
//! // One bitmap byte and one attribute byte per tile line.
//! assert_eq!(result.image.tiles().len(), 2 * 8);
//! assert_eq!(result.image.attributes()[0], 0x02);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! SourceImage
//!     |
//!     v
//! validate()               (<= 256x192, multiple of 8, <= 15 colors per tile)
//!     |
//!     v
//! ColorIndexTable::build() (nearest palette index, 0 -> 1, request -> 0)
//!     |
//!     v
//! TileEncoder              (row-major tiles, mirrored)
//!     |   for each tile: DuplicateTracker
//!     |   for each line: LineQuantizer -> EncodedTileLine::pack
//!     v
//! EncodedImage             (tiles stream, attributes stream)
//!     |
//!     v
//! write_streams()
//! ```
//!
//! # Output Format
//!
//! Each tile line becomes two bytes:
//!
//! | Stream | Byte |
//! |--------|------|
//! | tiles | bit `c` set where mirrored column `c` shows the background |
//! | palette | `(background << 4) \| foreground` |
//!
//! A line that uses more than two palette indices keeps its two most frequent
//! ones; the rest are drawn in the foreground color. This is reported as a
//! [`Diagnostic::ColorClash`] when diagnostics are enabled.
//!
//! # Transparency
//!
//! Index 0 is the hardware's transparent color and is never produced for an
//! ordinary drawn color. Sprite artwork can request that one drawn index
//! (1-15) be encoded as 0 instead, see [`TransparentIndex`].

pub mod api;
pub mod color;
pub mod diagnostics;
pub mod duplicates;
pub mod encode;
pub mod hardware;
pub mod image;
pub mod output;
pub mod palette;
pub mod quantize;
pub mod validate;


pub use api::{Conversion, ConvertError, TileConverter};
pub use color::Rgb;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use duplicates::DuplicateTracker;
pub use encode::{EncodedTileLine, Tile, TileEncoder};
pub use image::SourceImage;
pub use output::{write_streams, EncodedImage, StreamPaths};
pub use palette::{ColorIndexTable, HardwarePalette, PaletteError, TransparentIndex};
pub use quantize::{LineColors, LinePosition, LineQuantizer, LineRecompute};
pub use validate::{validate, ValidationError};
