//! Fixed display processor constants.
//!
//! The target hardware has a 256x192 screen built from 8x8 tiles, a fixed
//! 16-entry palette and room for exactly two colors per 8-pixel tile line.
//! None of these values are configurable.

/// Tile width in pixels. Also the number of bits in one bitmap byte.
pub const TILE_WIDTH: usize = 8;

/// Tile height in pixels (number of encoded lines per tile).
pub const TILE_HEIGHT: usize = 8;

/// Number of pixels in one tile.
pub const TILE_PIXELS: usize = TILE_WIDTH * TILE_HEIGHT;

/// Maximum image width accepted by the converter.
pub const MAX_WIDTH: usize = 256;

/// Maximum image height accepted by the converter.
pub const MAX_HEIGHT: usize = 192;

/// Number of entries in the hardware palette.
pub const PALETTE_SIZE: usize = 16;

/// Palette index the hardware treats as transparent.
pub const TRANSPARENT_INDEX: u8 = 0;

/// Maximum number of distinct source colors allowed in one 8x8 tile.
///
/// Index 0 is reserved for transparency, which leaves one less than the
/// palette size for drawn colors.
pub const TILE_COLOR_LIMIT: usize = PALETTE_SIZE - 1;

/// Number of tiles on a full screen (32 x 24).
pub const MAX_TILES: usize = (MAX_WIDTH / TILE_WIDTH) * (MAX_HEIGHT / TILE_HEIGHT);
