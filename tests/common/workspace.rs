//! Temporary directory holding test inputs and converter outputs.

use std::path::{Path, PathBuf};

use sg_tiles::{SourceImage, StreamPaths};
use tempfile::TempDir;

use super::fixtures;

/// A scratch directory that is removed when dropped
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write an image as `<name>` (RGB PNG) and return its path
    pub fn write_png(&self, name: &str, image: &SourceImage) -> PathBuf {
        self.write_bytes(name, &fixtures::encode_rgb_png(image))
    }

    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, bytes).expect("Failed to write fixture");
        path
    }

    /// Paths a conversion of `input` writes to
    pub fn outputs(&self, input: &Path) -> StreamPaths {
        StreamPaths::for_input(input)
    }

    pub fn preview_path(&self, input: &Path) -> PathBuf {
        StreamPaths::sibling(input, " (preview).png")
    }

    pub fn read(&self, path: &Path) -> Vec<u8> {
        std::fs::read(path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Names of all files in the workspace, sorted
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.dir.path())
            .expect("Failed to list temp dir")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
