//! Color types
//!
//! Only one color space exists here: 8-bit sRGB as read from the source
//! image. See [`Rgb`].

mod rgb;

pub use rgb::Rgb;
