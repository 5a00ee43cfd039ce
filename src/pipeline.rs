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

//! Top-level encode entry points.
//!
//! These validate the input once, then run counting, decomposition and
//! formatting in order. Nothing is produced for an empty image.

use log::info;

use crate::encoding::{get_encoder, ColorEntry, EncoderOptions};
use crate::error::Result;
use crate::format::format_entries;
use crate::grid::{ensure_not_empty, PixelGrid};
use crate::palette::count_colors;

/// Size statistics for one encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSummary {
    /// Distinct colors, background included.
    pub colors: usize,
    /// Rectangles across all entries.
    pub rects: usize,
    /// Length of the text output in bytes.
    pub bytes: usize,
}

impl EncodeSummary {
    fn new(entries: &[ColorEntry], text: &str) -> Self {
        Self {
            colors: entries.len(),
            rects: entries.iter().map(|e| e.rects.len()).sum(),
            bytes: text.len(),
        }
    }
}

/// Encodes `grid` with the default (block) strategy.
///
/// # Errors
///
/// Returns [`EmptyImage`](crate::RbsError::EmptyImage) if the grid has zero
/// width or height.
pub fn encode<G: PixelGrid>(grid: &G) -> Result<String> {
    encode_with(grid, &EncoderOptions::default())
}

/// Encodes `grid` with explicit options.
///
/// # Errors
///
/// Returns [`EmptyImage`](crate::RbsError::EmptyImage) if the grid has zero
/// width or height.
pub fn encode_with<G: PixelGrid>(grid: &G, options: &EncoderOptions) -> Result<String> {
    encode_with_summary(grid, options).map(|(text, _)| text)
}

/// Encodes `grid` and also returns its [`EncodeSummary`].
///
/// # Errors
///
/// Returns [`EmptyImage`](crate::RbsError::EmptyImage) if the grid has zero
/// width or height.
pub fn encode_with_summary<G: PixelGrid>(
    grid: &G,
    options: &EncoderOptions,
) -> Result<(String, EncodeSummary)> {
    let entries = encode_entries(grid, options)?;
    let text = format_entries(&entries);
    let summary = EncodeSummary::new(&entries, &text);
    info!(
        "Encoded {}x{}: {} colors, {} rects, {} bytes",
        grid.width(),
        grid.height(),
        summary.colors,
        summary.rects,
        summary.bytes
    );
    Ok((text, summary))
}

/// Counts and decomposes `grid` without formatting.
///
/// The returned entries are in frequency order; entry 0 is the background
/// and carries no rectangles.
///
/// # Errors
///
/// Returns [`EmptyImage`](crate::RbsError::EmptyImage) if the grid has zero
/// width or height.
pub fn encode_entries<G: PixelGrid>(
    grid: &G,
    options: &EncoderOptions,
) -> Result<Vec<ColorEntry>> {
    ensure_not_empty(grid)?;

    let mut entries = count_colors(grid);
    get_encoder(options.strategy).decompose(grid, &mut entries);
    Ok(entries)
}
