//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

use sg_tiles::hardware::TILE_HEIGHT;

/// Assert both stream files exist with one byte per tile line
pub fn assert_stream_files(tiles: &Path, palette: &Path, tile_count: usize) {
    let expected = tile_count * TILE_HEIGHT;
    for path in [tiles, palette] {
        let len = std::fs::metadata(path)
            .unwrap_or_else(|e| panic!("Missing output {}: {}", path.display(), e))
            .len();
        assert_eq!(
            len as usize,
            expected,
            "Unexpected length for {}",
            path.display()
        );
    }
}

/// Assert bytes are a PNG image
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}
