//! Test fixtures: palette colors and PNG encoding.

use sg_tiles::{HardwarePalette, Rgb, SourceImage};

/// Hardware palette colors by index
pub mod colors {
    use super::*;

    pub fn index(idx: u8) -> Rgb {
        HardwarePalette::SG.color(idx)
    }

    pub fn black() -> Rgb {
        index(1)
    }

    pub fn medium_green() -> Rgb {
        index(2)
    }

    pub fn light_green() -> Rgb {
        index(3)
    }

    pub fn dark_red() -> Rgb {
        index(6)
    }

    pub fn magenta() -> Rgb {
        index(13)
    }

    pub fn white() -> Rgb {
        index(15)
    }
}

/// Encode an image as an 8-bit RGB PNG
pub fn encode_rgb_png(image: &SourceImage) -> Vec<u8> {
    let data: Vec<u8> = image.pixels().iter().flat_map(|p| p.to_bytes()).collect();
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width() as u32, image.height() as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&data).unwrap();
    }
    buf
}

/// Encode an image as an 8-bit RGBA PNG with the given alpha everywhere
pub fn encode_rgba_png(image: &SourceImage, alpha: u8) -> Vec<u8> {
    let data: Vec<u8> = image
        .pixels()
        .iter()
        .flat_map(|p| [p.r, p.g, p.b, alpha])
        .collect();
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width() as u32, image.height() as u32);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&data).unwrap();
    }
    buf
}

/// Left half one color, right half another, split on a tile boundary
pub fn split_image(width: usize, height: usize, left: Rgb, right: Rgb) -> SourceImage {
    SourceImage::from_fn(width, height, |x, _| if x < width / 2 { left } else { right })
}

/// Every line of every tile uses three colors
pub fn clashing_image(width: usize, height: usize) -> SourceImage {
    let row = [
        colors::medium_green(),
        colors::medium_green(),
        colors::medium_green(),
        colors::medium_green(),
        colors::dark_red(),
        colors::dark_red(),
        colors::dark_red(),
        colors::white(),
    ];
    SourceImage::from_fn(width, height, |x, _| row[x % 8])
}
