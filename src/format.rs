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

//! Text serialization of ranked color entries.
//!
//! # Format
//!
//! ```text
//! <color0>|<color1>=<rect>;<rect>;|<color2>=<rect>;
//! ```
//!
//! - Entry 0 (background) is written as its color only.
//! - Every other entry is `<color>=` followed by each rectangle and a `;`.
//! - Entries are separated by `|` with no trailing separator.
//!
//! A color is `R,G,B` when opaque, otherwise `R,G,B,A`. A rectangle is written
//! in one of three forms, told apart by field count:
//!
//! | Fields | Form          | Meaning                               |
//! |--------|---------------|---------------------------------------|
//! | 2      | `x,y`         | single pixel                          |
//! | 3      | `x,y,w`       | single row from `x` to `x + w`        |
//! | 4      | `x1,y1,x2,y2` | inclusive corners                     |
//!
//! Note that `w` in the row form is `x2 - x1`, not the pixel count.

use std::fmt::{self, Write};

use crate::encoding::{ColorEntry, Rect};

/// Separator between entries.
pub const ENTRY_SEPARATOR: char = '|';

/// Separator between a color and its rectangles.
pub const RECTS_MARKER: char = '=';

/// Terminator after every rectangle.
pub const RECT_TERMINATOR: char = ';';

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.y1 == self.y2 {
            if self.x1 == self.x2 {
                write!(f, "{},{}", self.x1, self.y1)
            } else {
                write!(f, "{},{},{}", self.x1, self.y1, self.x2 - self.x1)
            }
        } else {
            write!(f, "{},{},{},{}", self.x1, self.y1, self.x2, self.y2)
        }
    }
}

/// Serializes ranked entries into the text format.
///
/// Entry 0 contributes only its color. An empty slice gives an empty string.
#[must_use]
pub fn format_entries(entries: &[ColorEntry]) -> String {
    let mut out = String::new();
    // Writing into a String never fails.
    let _ = write_entries(&mut out, entries);
    out
}

/// Writes the text format to any `fmt::Write` sink.
///
/// # Errors
///
/// Propagates errors from the sink.
pub fn write_entries<W: Write>(out: &mut W, entries: &[ColorEntry]) -> fmt::Result {
    let mut iter = entries.iter();
    let Some(background) = iter.next() else {
        return Ok(());
    };
    write!(out, "{}", background.color)?;

    for entry in iter {
        write!(out, "{}{}{}", ENTRY_SEPARATOR, entry.color, RECTS_MARKER)?;
        for rect in &entry.rects {
            write!(out, "{}{}", rect, RECT_TERMINATOR)?;
        }
    }
    Ok(())
}
