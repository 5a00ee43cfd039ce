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


//! Run encoding: one rectangle per horizontal run.
//!
//! Rows are never merged, so every rectangle is a single row. Output is larger
//! than the block strategy on solid areas, but each row can be decoded alone.

use super::common::{grow_right, ClaimMask, ColorEntry, Rect};
use super::{decompose_entries, Encoding};
use crate::color::Color;
use crate::grid::PixelGrid;

/// Implements the 1-D "Run" strategy.
pub struct RunEncoding;

impl Encoding for RunEncoding {
    fn name(&self) -> &'static str {
        "run"
    }

    fn decompose(&self, grid: &dyn PixelGrid, entries: &mut [ColorEntry]) {
        decompose_entries(grid, entries, self.name(), grow_run);
    }
}

fn grow_run(grid: &dyn PixelGrid, mask: &ClaimMask, color: Color, x0: u32, y0: u32) -> Rect {
    let x1 = grow_right(grid, mask, color, x0, y0);
    Rect::new(x0, y0, x1, y0)
}
