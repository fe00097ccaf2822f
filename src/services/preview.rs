use sg_tiles::{EncodedImage, HardwarePalette};
use std::io::Cursor;

use crate::error::AppError;

/// Render the encoded streams back through the hardware palette as an RGB PNG.
///
/// The preview shows exactly what the display would draw, including lines
/// that lost colors to the two-per-line limit.
pub fn render_preview(image: &EncodedImage, palette: &HardwarePalette) -> Result<Vec<u8>, AppError> {
    let rgb = image.to_rgb(palette);
    encode_png(image.width() as u32, image.height() as u32, &rgb)
}

fn encode_png(width: u32, height: u32, rgb: &[u8]) -> Result<Vec<u8>, AppError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| AppError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgb)
            .map_err(|e| AppError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
