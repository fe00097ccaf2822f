//! Palette types and utilities
//!
//! This module provides the fixed hardware palette, nearest-color matching,
//! the per-image [`ColorIndexTable`], the transparent index request type and
//! their error types.

mod error;
mod palette;
mod table;
mod transparent;

pub use error::PaletteError;
pub use palette::HardwarePalette;
pub use table::ColorIndexTable;
pub use transparent::TransparentIndex;
