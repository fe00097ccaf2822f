//! Tile partitioning and bit packing.

mod encoder;
mod tile;

pub use encoder::TileEncoder;
pub use tile::{EncodedTileLine, Tile};
