//! Detection of repeated tiles.

use std::collections::HashMap;

use crate::hardware::TILE_PIXELS;

/// Full 64-index content of a tile.
pub type TileSignature = [u8; TILE_PIXELS];

/// Remembers the first tile seen with each signature.
///
/// Only used for reporting: a duplicate is still encoded in full.
#[derive(Debug, Clone, Default)]
pub struct DuplicateTracker {
    first_seen: HashMap<TileSignature, usize>,
}

impl DuplicateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `signature` for tile number `tile`.
    ///
    /// Returns the first tile number with the same signature if there was
    /// one. The first occurrence is never overwritten.
    pub fn observe(&mut self, signature: &TileSignature, tile: usize) -> Option<usize> {
        match self.first_seen.get(signature) {
            Some(&first) => Some(first),
            None => {
                self.first_seen.insert(*signature, tile);
                None
            }
        }
    }
}
