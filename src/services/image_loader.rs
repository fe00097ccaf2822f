use sg_tiles::{Rgb, SourceImage};
use std::io::Cursor;
use std::path::Path;

use crate::error::AppError;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Read a PNG file into a [`SourceImage`]
pub fn load_png(path: &Path) -> Result<SourceImage, AppError> {
    if !path.exists() {
        return Err(AppError::InputNotFound(path.to_path_buf()));
    }
    let data = std::fs::read(path)?;
    decode_png(&data).map_err(|e| match e {
        AppError::Decode { message, .. } => AppError::Decode {
            path: path.to_path_buf(),
            message,
        },
        other => other,
    })
}

/// Decode PNG bytes into RGB pixels.
///
/// Palette and low bit depth images are expanded, 16-bit samples are
/// stripped to 8 bits and alpha is discarded.
pub fn decode_png(data: &[u8]) -> Result<SourceImage, AppError> {
    if !data.starts_with(&PNG_SIGNATURE) {
        return Err(AppError::UnsupportedFormat(
            "only PNG input is supported".to_string(),
        ));
    }

    let decode_error = |e: png::DecodingError| AppError::Decode {
        path: Default::default(),
        message: e.to_string(),
    };

    let mut decoder = png::Decoder::new(Cursor::new(data));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info().map_err(decode_error)?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf).map_err(decode_error)?;
    buf.truncate(frame.buffer_size());

    let (width, height) = (frame.width as usize, frame.height as usize);

    let pixels: Vec<Rgb> = match frame.color_type {
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect(),
        png::ColorType::Rgba => buf
            .chunks_exact(4)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect(),
        png::ColorType::Grayscale => buf.iter().map(|&v| Rgb::new(v, v, v)).collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .map(|c| Rgb::new(c[0], c[0], c[0]))
            .collect(),
        png::ColorType::Indexed => {
            return Err(AppError::UnsupportedFormat(
                "indexed PNG was not expanded".to_string(),
            ))
        }
    };

    if pixels.len() != width * height {
        return Err(AppError::Decode {
            path: Default::default(),
            message: format!(
                "expected {} pixels, decoded {}",
                width * height,
                pixels.len()
            ),
        });
    }

    tracing::debug!(width, height, color_type = ?frame.color_type, "Decoded PNG");
    Ok(SourceImage::new(width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(
        width: u32,
        height: u32,
        color: png::ColorType,
        depth: png::BitDepth,
        plte: Option<&[u8]>,
        data: &[u8],
    ) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(color);
            encoder.set_depth(depth);
            if let Some(plte) = plte {
                encoder.set_palette(plte.to_vec());
            }
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buf
    }

    #[test]
    fn test_decode_rgb() {
        let data: Vec<u8> = (0..8 * 8).flat_map(|i| [i as u8, 0x10, 0xF0]).collect();
        let png = encode(8, 8, png::ColorType::Rgb, png::BitDepth::Eight, None, &data);

        let image = decode_png(&png).unwrap();
        assert_eq!(image.width(), 8);
        assert_eq!(image.height(), 8);
        assert_eq!(image.pixel(3, 1), Rgb::new(11, 0x10, 0xF0));
    }

    #[test]
    fn test_decode_rgba_discards_alpha() {
        let data: Vec<u8> = (0..8 * 8).flat_map(|_| [0xFF, 0x00, 0x00, 0x00]).collect();
        let png = encode(8, 8, png::ColorType::Rgba, png::BitDepth::Eight, None, &data);

        let image = decode_png(&png).unwrap();
        assert!(image.pixels().iter().all(|&p| p == Rgb::new(0xFF, 0, 0)));
    }

    #[test]
    fn test_decode_grayscale() {
        let data = vec![0x80u8; 16 * 8];
        let png = encode(16, 8, png::ColorType::Grayscale, png::BitDepth::Eight, None, &data);

        let image = decode_png(&png).unwrap();
        assert_eq!(image.width(), 16);
        assert_eq!(image.pixel(15, 7), Rgb::new(0x80, 0x80, 0x80));
    }

    #[test]
    fn test_decode_indexed_is_expanded() {
        let plte = [0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF];
        // 8 pixels per row at 1 bit: alternate black and white
        let data = vec![0b0101_0101u8; 8];
        let png = encode(
            8,
            8,
            png::ColorType::Indexed,
            png::BitDepth::One,
            Some(&plte),
            &data,
        );

        let image = decode_png(&png).unwrap();
        assert_eq!(image.pixel(0, 0), Rgb::new(0, 0, 0));
        assert_eq!(image.pixel(1, 0), Rgb::new(0xFF, 0xFF, 0xFF));
    }

    #[test]
    fn test_decode_16_bit_is_stripped() {
        let data: Vec<u8> = (0..8 * 8).flat_map(|_| [0xAB, 0xCD, 0x12, 0x34, 0x00, 0x00]).collect();
        let png = encode(8, 8, png::ColorType::Rgb, png::BitDepth::Sixteen, None, &data);

        let image = decode_png(&png).unwrap();
        assert_eq!(image.pixel(0, 0), Rgb::new(0xAB, 0x12, 0x00));
    }

    #[test]
    fn test_non_png_is_unsupported() {
        let result = decode_png(b"GIF89a....");
        assert!(matches!(result, Err(AppError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_truncated_png_is_decode_error() {
        let data = vec![0u8; 8 * 8 * 3];
        let png = encode(8, 8, png::ColorType::Rgb, png::BitDepth::Eight, None, &data);

        let result = decode_png(&png[..png.len() / 2]);
        assert!(matches!(result, Err(AppError::Decode { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_png(Path::new("/nonexistent/art.png"));
        assert!(matches!(result, Err(AppError::InputNotFound(_))));
    }

    #[test]
    fn test_load_reports_path_on_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        let mut bytes = PNG_SIGNATURE.to_vec();
        bytes.extend_from_slice(b"not a chunk stream");
        std::fs::write(&path, bytes).unwrap();

        match load_png(&path) {
            Err(AppError::Decode { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected Decode error, got {:?}", other),
        }
    }
}
