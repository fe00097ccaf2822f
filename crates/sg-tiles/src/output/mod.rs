//! Output types for the encoding pipeline.
//!
//! [`EncodedImage`] is the canonical result: a bitmap stream and an
//! attribute stream of equal length, one byte each per tile line.
//! [`write_streams`] serializes them; [`StreamPaths`] names the files.

mod encoded_image;
mod streams;

pub use encoded_image::EncodedImage;
pub use streams::{write_streams, StreamPaths};
