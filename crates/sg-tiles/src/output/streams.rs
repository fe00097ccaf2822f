//! Serialization of the bitmap and attribute streams.
//!
//! Both streams are raw bytes with no header. Consumers must know the tile
//! grid size out of band.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::encoded_image::EncodedImage;

/// Output file locations derived from an input image path.
///
/// `art/title.png` becomes `art/title (tiles).bin` and
/// `art/title (palette).bin`.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use sg_tiles::StreamPaths;
///
/// let paths = StreamPaths::for_input(Path::new("art/title.png"));
/// assert_eq!(paths.tiles, Path::new("art/title (tiles).bin"));
/// assert_eq!(paths.palette, Path::new("art/title (palette).bin"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamPaths {
    /// Bitmap stream
    pub tiles: PathBuf,
    /// Attribute stream
    pub palette: PathBuf,
}

impl StreamPaths {
    /// Derive both paths from the input, keeping its directory.
    pub fn for_input(input: &Path) -> Self {
        Self {
            tiles: sibling(input, " (tiles).bin"),
            palette: sibling(input, " (palette).bin"),
        }
    }

    /// A further sibling with the given suffix, e.g. `" (preview).png"`.
    pub fn sibling(input: &Path, suffix: &str) -> PathBuf {
        sibling(input, suffix)
    }
}

fn sibling(input: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = input.file_stem().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    input.with_file_name(name)
}

/// Write the bitmap stream to `tiles` and the attribute stream to `palette`.
///
/// Both writers receive exactly `tile_count * 8` bytes.
pub fn write_streams<T: Write, P: Write>(
    image: &EncodedImage,
    mut tiles: T,
    mut palette: P,
) -> io::Result<()> {
    tiles.write_all(image.tiles())?;
    palette.write_all(image.attributes())?;
    tiles.flush()?;
    palette.flush()
}
