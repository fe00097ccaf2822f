//! Reduction of tile lines to the hardware's two-colors-per-line limit.

mod line;

pub use line::{LineColors, LinePosition, LineQuantizer, LineRecompute};
