// Copyright 2025 Dustin McAfee
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Common types shared by the rectangle encodings.

use crate::color::Color;
use crate::grid::PixelGrid;

/// An axis-aligned rectangle with inclusive corners `(x1, y1)-(x2, y2)`.
///
/// A single pixel is the degenerate rectangle with `x1 == x2` and `y1 == y2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left column (inclusive).
    pub x1: u32,
    /// Top row (inclusive).
    pub y1: u32,
    /// Right column (inclusive).
    pub x2: u32,
    /// Bottom row (inclusive).
    pub y2: u32,
}

impl Rect {
    /// Creates a rectangle from inclusive corners.
    ///
    /// # Panics
    ///
    /// Panics if `x2 < x1` or `y2 < y1`.
    #[must_use]
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        assert!(x1 <= x2 && y1 <= y2, "malformed rectangle ({x1},{y1})-({x2},{y2})");
        Self { x1, y1, x2, y2 }
    }

    /// Creates a 1x1 rectangle.
    #[must_use]
    pub fn point(x: u32, y: u32) -> Self {
        Self::new(x, y, x, y)
    }

    /// Number of columns covered.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.x2 - self.x1 + 1
    }

    /// Number of rows covered.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.y2 - self.y1 + 1
    }

    /// Number of pixels covered.
    #[must_use]
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Returns `true` if `(x, y)` lies inside the rectangle.
    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.x1 <= x && x <= self.x2 && self.y1 <= y && y <= self.y2
    }

    /// Returns `true` if the two rectangles share at least one pixel.
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x1 <= other.x2 && other.x1 <= self.x2 && self.y1 <= other.y2 && other.y1 <= self.y2
    }
}

/// A distinct color, how often it occurs, and the rectangles that cover it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    /// The color.
    pub color: Color,
    /// Total number of pixels of this color in the grid.
    pub count: usize,
    /// Covering rectangles in raster-scan order. Always empty for the background.
    pub rects: Vec<Rect>,
    /// Raster position `(x, y)` of the first pixel with this color.
    ///
    /// Decomposition never looks for the color before this point.
    pub first_seen: (u32, u32),
}

impl ColorEntry {
    /// Creates an entry with no rectangles, first seen at the origin.
    #[must_use]
    pub fn new(color: Color, count: usize) -> Self {
        Self {
            color,
            count,
            rects: Vec::new(),
            first_seen: (0, 0),
        }
    }

    /// Sets the raster position of the color's first pixel.
    #[must_use]
    pub fn with_first_seen(mut self, x: u32, y: u32) -> Self {
        self.first_seen = (x, y);
        self
    }
}

/// Tracks which pixels have already been claimed by a rectangle.
///
/// One mask is shared by every color of a decomposition: it answers both "is
/// this pixel already inside one of my own rectangles" and "did a
/// higher-ranked color take it".
#[derive(Debug, Clone)]
pub struct ClaimMask {
    width: usize,
    height: usize,
    marked: Vec<bool>,
}

impl ClaimMask {
    /// Creates an empty mask for a `width` x `height` grid.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = (width as usize, height as usize);
        Self {
            width,
            height,
            marked: vec![false; width * height],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width + x as usize
    }

    /// Returns `true` if `(x, y)` is claimed.
    #[inline]
    #[must_use]
    pub fn is_claimed(&self, x: u32, y: u32) -> bool {
        self.marked[self.index(x, y)]
    }

    /// Claims every pixel of `rect`.
    ///
    /// # Panics
    ///
    /// Panics if `rect` leaves the grid or any of its pixels is already
    /// claimed. Either means the decomposition itself is wrong.
    pub fn claim(&mut self, rect: &Rect) {
        assert!(
            (rect.x2 as usize) < self.width && (rect.y2 as usize) < self.height,
            "rectangle {rect:?} exceeds {}x{} grid",
            self.width,
            self.height
        );
        for y in rect.y1..=rect.y2 {
            for x in rect.x1..=rect.x2 {
                let idx = self.index(x, y);
                assert!(!self.marked[idx], "pixel ({x},{y}) claimed twice");
                self.marked[idx] = true;
            }
        }
    }

    /// Number of claimed pixels.
    #[must_use]
    pub(crate) fn claimed_count(&self) -> usize {
        self.marked.iter().filter(|&&m| m).count()
    }
}

/// Returns `true` if `(x, y)` has `color` and is not yet claimed.
#[inline]
pub(crate) fn is_open<G: PixelGrid + ?Sized>(
    grid: &G,
    mask: &ClaimMask,
    color: Color,
    x: u32,
    y: u32,
) -> bool {
    !mask.is_claimed(x, y) && grid.color_at(x, y) == color
}

/// Extends a run rightward from `(x0, y)` and returns its last column.
///
/// `(x0, y)` itself must be open.
pub(crate) fn grow_right<G: PixelGrid + ?Sized>(
    grid: &G,
    mask: &ClaimMask,
    color: Color,
    x0: u32,
    y: u32,
) -> u32 {
    let mut x1 = x0;
    while x1 + 1 < grid.width() && is_open(grid, mask, color, x1 + 1, y) {
        x1 += 1;
    }
    x1
}

/// Extends the run `[x0, x1]` downward from row `y0` and returns the last row
/// on which every column is open.
pub(crate) fn grow_down<G: PixelGrid + ?Sized>(
    grid: &G,
    mask: &ClaimMask,
    color: Color,
    x0: u32,
    x1: u32,
    y0: u32,
) -> u32 {
    let mut y1 = y0;
    'rows: while y1 + 1 < grid.height() {
        let y = y1 + 1;
        for x in x0..=x1 {
            if !is_open(grid, mask, color, x, y) {
                break 'rows;
            }
        }
        y1 = y;
    }
    y1
}
