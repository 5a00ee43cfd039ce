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

//! Color frequency counting.

use std::collections::HashMap;

use crate::color::Color;
use crate::encoding::ColorEntry;
use crate::grid::PixelGrid;

/// Builds the frequency-ranked color list for `grid`.
///
/// Pixels are visited in raster order. Entries are sorted by count descending;
/// the sort is stable, so colors with equal counts keep the order in which
/// they were first seen. Entry 0 is the background color.
///
/// A grid with zero width or height yields an empty list.
pub fn count_colors<G: PixelGrid + ?Sized>(grid: &G) -> Vec<ColorEntry> {
    let mut entries: Vec<ColorEntry> = Vec::new();
    let mut index: HashMap<Color, usize> = HashMap::new();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let color = grid.color_at(x, y);
            let slot = *index.entry(color).or_insert_with(|| {
                entries.push(ColorEntry::new(color, 0).with_first_seen(x, y));
                entries.len() - 1
            });
            entries[slot].count += 1;
        }
    }

    entries.sort_by_key(|entry| std::cmp::Reverse(entry.count));
    entries
}
