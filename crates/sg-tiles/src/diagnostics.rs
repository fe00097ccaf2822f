//! Non-fatal findings collected during one conversion.
//!
//! Quantization is lossy whenever the source art exceeds what the hardware
//! can show. Those losses are reported as [`Diagnostic`] values in a
//! [`Diagnostics`] collector that is returned with the result, instead of
//! being printed. Nothing recorded here changes the encoded output.

use std::fmt;

use crate::color::Rgb;

/// How loud a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Expected substitution, reported for transparency
    Info,
    /// Visible loss of detail in the output
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A source color landed on the transparent slot and was moved to black.
    BlackRemapped {
        /// Source color
        color: Rgb,
    },
    /// A source color matched the requested transparent index and now
    /// encodes as index 0.
    TransparentSubstituted {
        /// Source color
        color: Rgb,
        /// The requested transparent index
        index: u8,
    },
    /// A tile line used more than two palette indices; all but the two most
    /// frequent were folded into them.
    ColorClash {
        /// Tile column
        tile_x: usize,
        /// Tile row
        tile_y: usize,
        /// Line within the tile (0-7)
        line: usize,
        /// Number of distinct indices found in the line
        colors: usize,
    },
    /// A single-colored sprite line borrowed a second color from its tile,
    /// but the tile had more than one candidate.
    SpriteColorBudget {
        /// Tile column
        tile_x: usize,
        /// Tile row
        tile_y: usize,
        /// Line within the tile (0-7)
        line: usize,
        /// Number of tile indices missing from the line
        missing: usize,
    },
    /// A tile is pixel-identical to an earlier one.
    DuplicateTile {
        /// Row-major index of this tile
        tile: usize,
        /// Row-major index of the first identical tile
        first: usize,
    },
}

impl Diagnostic {
    /// Severity of this finding.
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::BlackRemapped { .. }
            | Diagnostic::TransparentSubstituted { .. }
            | Diagnostic::DuplicateTile { .. } => Severity::Info,
            Diagnostic::ColorClash { .. } | Diagnostic::SpriteColorBudget { .. } => {
                Severity::Warning
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::BlackRemapped { color } => {
                write!(
                    f,
                    "color {} matched the transparent slot, using black (index 1)",
                    color
                )
            }
            Diagnostic::TransparentSubstituted { color, index } => {
                write!(
                    f,
                    "color {} (index {}) is encoded as transparent (index 0)",
                    color, index
                )
            }
            Diagnostic::ColorClash {
                tile_x,
                tile_y,
                line,
                colors,
            } => {
                write!(
                    f,
                    "color clash in tile ({}, {}) line {}: {} colors, only 2 kept",
                    tile_x, tile_y, line, colors
                )
            }
            Diagnostic::SpriteColorBudget {
                tile_x,
                tile_y,
                line,
                missing,
            } => {
                write!(
                    f,
                    "tile ({}, {}) line {}: {} colors missing from line, sprite may exceed its color budget",
                    tile_x, tile_y, line, missing
                )
            }
            Diagnostic::DuplicateTile { tile, first } => {
                write!(f, "tile {} is a duplicate of tile {}", tile, first)
            }
        }
    }
}

/// Collector for [`Diagnostic`]s, scoped to one conversion.
///
/// A disabled collector drops everything pushed into it, so callers can
/// report unconditionally.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    enabled: bool,
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create a collector. When `enabled` is false nothing is recorded.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            entries: Vec::new(),
        }
    }

    /// Whether findings are being recorded.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a finding.
    #[inline]
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if self.enabled {
            self.entries.push(diagnostic);
        }
    }

    /// Recorded findings in the order they occurred.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Number of recorded findings.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded findings with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }

    /// Number of duplicate tile findings.
    pub fn duplicate_tiles(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| matches!(d, Diagnostic::DuplicateTile { .. }))
            .count()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
