use std::fmt;
use std::str::FromStr;

use super::error::PaletteError;
use crate::hardware::PALETTE_SIZE;

/// A palette index chosen to stand in for hardware transparency.
///
/// Sprite artwork has no way to express "transparent" in RGB, so the caller
/// picks one drawn color (1-15) and every source color that maps to it is
/// rewritten to index 0. Index 0 itself can't be requested: it is already
/// the transparent slot.
///
/// # Example
///
/// ```
/// use sg_tiles::TransparentIndex;
///
/// let t = TransparentIndex::new(13).unwrap();
/// assert_eq!(t.get(), 13);
/// assert!(TransparentIndex::new(0).is_err());
/// assert!(TransparentIndex::new(16).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransparentIndex(u8);

impl TransparentIndex {
    /// Validate a requested index. Only `1..=15` is accepted.
    pub fn new(value: i64) -> Result<Self, PaletteError> {
        if (1..PALETTE_SIZE as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(PaletteError::TransparentIndexOutOfRange { value })
        }
    }

    /// The palette index.
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for TransparentIndex {
    type Error = PaletteError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for TransparentIndex {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.trim().parse()?;
        Self::new(value)
    }
}

impl fmt::Display for TransparentIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
