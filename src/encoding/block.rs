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


//! Block encoding: maximal rectangle growth.
//!
//! Each rectangle starts at the first open pixel in raster order, grows right
//! as far as the color allows, then grows down while every column of that run
//! still matches. The result is not the minimal rectangle count, but it is
//! fully determined by scan order.

use super::common::{grow_down, grow_right, ClaimMask, ColorEntry, Rect};
use super::{decompose_entries, Encoding};
use crate::color::Color;
use crate::grid::PixelGrid;

/// Implements the 2-D "Block" strategy (right, then down).
pub struct BlockEncoding;

impl Encoding for BlockEncoding {
    fn name(&self) -> &'static str {
        "block"
    }

    fn decompose(&self, grid: &dyn PixelGrid, entries: &mut [ColorEntry]) {
        decompose_entries(grid, entries, self.name(), grow_block);
    }
}

fn grow_block(grid: &dyn PixelGrid, mask: &ClaimMask, color: Color, x0: u32, y0: u32) -> Rect {
    let x1 = grow_right(grid, mask, color, x0, y0);
    let y1 = grow_down(grid, mask, color, x0, x1, y0);
    Rect::new(x0, y0, x1, y1)
}
