use std::path::PathBuf;

use sg_tiles::{ConvertError, PaletteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("File {} doesn't exist", .0.display())]
    InputNotFound(PathBuf),

    #[error("Invalid transparent index: {0}")]
    TransparentIndex(#[from] PaletteError),

    #[error("Failed to decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
