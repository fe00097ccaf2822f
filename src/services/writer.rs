use sg_tiles::{write_streams, EncodedImage, StreamPaths};
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Write the tiles and palette streams, and the preview if given, next to
/// the input file.
///
/// Every output is first written to a `.partial` sibling and only renamed
/// into place once all of them are complete. If anything fails, every file
/// this call created is removed again, so a failed run leaves no outputs.
pub fn write_outputs(
    paths: &StreamPaths,
    image: &EncodedImage,
    preview: Option<(&Path, &[u8])>,
) -> Result<(), AppError> {
    let mut staging = Staging::default();

    let (tiles_staged, tiles_file) = staging.create(&paths.tiles)?;
    let (palette_staged, palette_file) = staging.create(&paths.palette)?;
    write_streams(image, BufWriter::new(tiles_file), BufWriter::new(palette_file))?;

    let mut moves = vec![
        (tiles_staged, paths.tiles.as_path()),
        (palette_staged, paths.palette.as_path()),
    ];
    if let Some((path, bytes)) = preview {
        let (staged, mut file) = staging.create(path)?;
        file.write_all(bytes)?;
        file.flush()?;
        moves.push((staged, path));
    }

    staging.commit(moves)?;

    tracing::info!(
        tiles = %paths.tiles.display(),
        palette = %paths.palette.display(),
        preview = preview.is_some(),
        bytes = image.tiles().len(),
        "Wrote outputs"
    );
    Ok(())
}

/// Files created by one `write_outputs` call. Unless committed, all of them
/// are removed on drop.
#[derive(Default)]
struct Staging {
    created: Vec<PathBuf>,
    committed: bool,
}

impl Staging {
    fn create(&mut self, target: &Path) -> std::io::Result<(PathBuf, File)> {
        let staged = staged_path(target);
        let file = File::create(&staged)?;
        self.created.push(staged.clone());
        Ok((staged, file))
    }

    fn commit(mut self, moves: Vec<(PathBuf, &Path)>) -> std::io::Result<()> {
        for (staged, target) in moves {
            std::fs::rename(&staged, target)?;
            self.created.retain(|p| p != &staged);
            self.created.push(target.to_path_buf());
        }
        self.committed = true;
        Ok(())
    }
}

impl Drop for Staging {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        for path in &self.created {
            if let Err(e) = std::fs::remove_file(path) {
                tracing::warn!(path = %path.display(), %e, "Failed to remove incomplete output");
            }
        }
    }
}

fn staged_path(target: &Path) -> PathBuf {
    let mut name: OsString = target.file_name().map(OsString::from).unwrap_or_default();
    name.push(".partial");
    target.with_file_name(name)
}
