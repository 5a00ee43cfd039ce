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

//! Rectangle decomposition strategies.
//!
//! Every strategy walks the frequency-ranked color list, skips the first
//! (background) entry, and covers each remaining color with disjoint
//! rectangles. Pixels are claimed in a single [`ClaimMask`] so a pixel can never
//! belong to two rectangles.

use bytes::{BufMut, BytesMut};
use log::{debug, trace};

use crate::color::Color;
use crate::error::Result;
use crate::format::format_entries;
use crate::grid::{ensure_not_empty, PixelGrid};
use crate::palette::count_colors;
use self::common::is_open;

pub mod block;
pub mod common;
pub mod run;

// Re-export common types
pub use common::*;

// Re-export encoding implementations
pub use block::BlockEncoding;
pub use run::RunEncoding;

/// Rectangle growth strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Grow right, then down (maximal rectangles).
    #[default]
    Block,
    /// Grow right only (one rectangle per horizontal run).
    Runs,
}

/// Options for a full encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncoderOptions {
    /// Rectangle growth strategy.
    pub strategy: Strategy,
}

impl EncoderOptions {
    /// Sets the growth strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Trait defining the interface for rectangle encodings.
pub trait Encoding {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Fills in the rectangles of every entry except the first.
    ///
    /// `entries` must be the frequency-ranked output of
    /// [`count_colors`](crate::palette::count_colors) for the same grid.
    fn decompose(&self, grid: &dyn PixelGrid, entries: &mut [ColorEntry]);

    /// Counts, decomposes and formats `grid` into the text representation.
    ///
    /// # Returns
    ///
    /// The UTF-8 encoded text as `BytesMut`.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyImage`](crate::RbsError::EmptyImage) if the grid has zero
    /// width or height.
    fn encode(&self, grid: &dyn PixelGrid) -> Result<BytesMut> {
        ensure_not_empty(grid)?;
        let mut entries = count_colors(grid);
        self.decompose(grid, &mut entries);
        let text = format_entries(&entries);
        let mut buf = BytesMut::with_capacity(text.len());
        buf.put_slice(text.as_bytes());
        Ok(buf)
    }
}

/// Creates an encoder instance for the specified strategy.
#[must_use]
pub fn get_encoder(strategy: Strategy) -> Box<dyn Encoding> {
    match strategy {
        Strategy::Block => Box::new(BlockEncoding),
        Strategy::Runs => Box::new(RunEncoding),
    }
}

/// Grows one rectangle from an open pixel.
pub(crate) type GrowFn = fn(&dyn PixelGrid, &ClaimMask, Color, u32, u32) -> Rect;

/// Shared raster-scan driver: for each non-background entry, every open
/// pixel of its color seeds a rectangle built by `grow`.
///
/// A color's scan starts at its first-seen pixel and ends once all of its
/// pixels are claimed.
pub(crate) fn decompose_entries(
    grid: &dyn PixelGrid,
    entries: &mut [ColorEntry],
    strategy: &str,
    grow: GrowFn,
) {
    let (width, height) = (grid.width(), grid.height());
    let mut mask = ClaimMask::new(width, height);
    let mut claimed = 0u64;

    for (rank, entry) in entries.iter_mut().enumerate().skip(1) {
        let color = entry.color;
        let total = entry.count as u64;
        let (x0, y0) = entry.first_seen;
        let mut covered = 0u64;
        'scan: for y in y0..height {
            let start = if y == y0 { x0 } else { 0 };
            for x in start..width {
                if !is_open(grid, &mask, color, x, y) {
                    continue;
                }
                let rect = grow(grid, &mask, color, x, y);
                mask.claim(&rect);
                trace!("{} color #{} rect {:?}", strategy, rank, rect);
                covered += rect.area();
                entry.rects.push(rect);
                if covered >= total {
                    break 'scan;
                }
            }
        }
        debug!(
            "{} color #{} ({}): {} pixels in {} rects",
            strategy,
            rank,
            color,
            entry.count,
            entry.rects.len()
        );
        debug_assert!(covered <= total);
        claimed += covered;
    }
    debug_assert_eq!(mask.claimed_count() as u64, claimed);
}
