//! Two-color reduction of a single tile line.
//!
//! The display processor stores one background and one foreground index per
//! 8-pixel line. [`LineQuantizer`] picks that pair from the line's palette
//! indices:
//!
//! 1. Count each index in the line, in order of first appearance.
//! 2. Sort ascending by count (stable, so ties keep appearance order) and
//!    prepend a `(0, 0)` sentinel.
//! 3. The last entry is the foreground, the one before it the background.
//!    A single-color line therefore gets background 0 from the sentinel.
//!
//! Lines with more than two indices keep only the two most frequent; the
//! rest fold into them when the bitmap is packed.
//!
//! Sprite encoding (a [`TransparentIndex`] was requested) adds two rules:
//!
//! - While the tile as a whole has at most two indices, the ordering chosen
//!   for the first line is reused for the rest of the tile, keeping the
//!   attribute pair stable. Tiles with more indices are recomputed line by
//!   line. [`LineRecompute::Always`] recomputes every line instead.
//! - A single-color line borrows the first tile index it doesn't contain as
//!   its second color, so the attribute still carries the sprite's outline
//!   color. The borrowed entry goes before the line's color when that color
//!   is 0, after it otherwise.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::hardware::{TILE_WIDTH, TRANSPARENT_INDEX};
use crate::palette::TransparentIndex;

/// `(palette index, occurrences)` in ascending count order, sentinel first.
type Ordering = Vec<(u8, usize)>;

/// When sprite lines get a fresh color ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineRecompute {
    /// Recompute per line only when the tile uses more than two indices;
    /// otherwise keep the ordering of the tile's first line.
    #[default]
    WhenTileExceedsPair,
    /// Recompute every line from its own distribution.
    Always,
}

/// The attribute pair chosen for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineColors {
    /// Index drawn where the bitmap bit is 1
    pub background: u8,
    /// Index drawn where the bitmap bit is 0
    pub foreground: u8,
}

/// Where a line sits in the image, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePosition {
    /// Tile column
    pub tile_x: usize,
    /// Tile row
    pub tile_y: usize,
    /// Line within the tile
    pub line: usize,
}

/// Per-line color reducer.
///
/// Holds the previous line's ordering for sprite tiles, so call
/// [`start_tile`](Self::start_tile) before the first line of each tile.
#[derive(Debug, Clone, Default)]
pub struct LineQuantizer {
    transparent: Option<TransparentIndex>,
    recompute: LineRecompute,
    previous: Option<Ordering>,
}

impl LineQuantizer {
    /// Create a quantizer. `transparent` switches on sprite handling.
    pub fn new(transparent: Option<TransparentIndex>, recompute: LineRecompute) -> Self {
        Self {
            transparent,
            recompute,
            previous: None,
        }
    }

    /// Forget the previous line's ordering.
    pub fn start_tile(&mut self) {
        self.previous = None;
    }

    /// Choose the background/foreground pair for `line`.
    ///
    /// `tile_indices` are the distinct indices of the enclosing tile in
    /// ascending order.
    pub fn quantize(
        &mut self,
        line: &[u8; TILE_WIDTH],
        tile_indices: &[u8],
        at: LinePosition,
        diagnostics: &mut Diagnostics,
    ) -> LineColors {
        let counts = count_indices(line);
        if counts.len() > 2 {
            diagnostics.push(Diagnostic::ColorClash {
                tile_x: at.tile_x,
                tile_y: at.tile_y,
                line: at.line,
                colors: counts.len(),
            });
        }

        let ordering = match self.transparent {
            None => ordered(counts),
            Some(_) => {
                let reuse = self.recompute == LineRecompute::WhenTileExceedsPair
                    && tile_indices.len() <= 2;
                match self.previous.take() {
                    Some(previous) if reuse => previous,
                    _ => {
                        let single = counts.len() == 1;
                        let mut ordering = ordered(counts);
                        if single {
                            borrow_missing(&mut ordering, tile_indices, at, diagnostics);
                        }
                        ordering
                    }
                }
            }
        };

        let colors = pick(&ordering);
        if self.transparent.is_some() {
            self.previous = Some(ordering);
        }
        colors
    }
}

/// Occurrences of each index, in order of first appearance.
fn count_indices(line: &[u8; TILE_WIDTH]) -> Vec<(u8, usize)> {
    let mut counts: Vec<(u8, usize)> = Vec::with_capacity(TILE_WIDTH);
    for &idx in line {
        match counts.iter_mut().find(|(i, _)| *i == idx) {
            Some((_, n)) => *n += 1,
            None => counts.push((idx, 1)),
        }
    }
    counts
}

/// Stable ascending sort by count, with the `(0, 0)` sentinel in front.
fn ordered(mut counts: Vec<(u8, usize)>) -> Ordering {
    counts.sort_by_key(|&(_, n)| n);
    let mut ordering = Vec::with_capacity(counts.len() + 2);
    ordering.push((TRANSPARENT_INDEX, 0));
    ordering.extend(counts);
    ordering
}

/// Give a single-color line a second color taken from its tile.
fn borrow_missing(
    ordering: &mut Ordering,
    tile_indices: &[u8],
    at: LinePosition,
    diagnostics: &mut Diagnostics,
) {
    let Some(&(sole, _)) = ordering.last() else {
        return;
    };
    let missing: Vec<u8> = tile_indices
        .iter()
        .copied()
        .filter(|&idx| idx != sole)
        .collect();
    let Some(&borrowed) = missing.first() else {
        return;
    };

    if missing.len() > 1 {
        diagnostics.push(Diagnostic::SpriteColorBudget {
            tile_x: at.tile_x,
            tile_y: at.tile_y,
            line: at.line,
            missing: missing.len(),
        });
    }

    if sole == TRANSPARENT_INDEX {
        let pos = ordering.len() - 1;
        ordering.insert(pos, (borrowed, 0));
    } else {
        ordering.push((borrowed, 0));
    }
}

/// Background is second to last, foreground last.
fn pick(ordering: &Ordering) -> LineColors {
    let n = ordering.len();
    let foreground = ordering.last().map_or(TRANSPARENT_INDEX, |&(i, _)| i);
    let background = if n >= 2 {
        ordering[n - 2].0
    } else {
        TRANSPARENT_INDEX
    };
    LineColors {
        background,
        foreground,
    }
}
