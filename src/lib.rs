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


//! # rbscodec
//!
//! Lossless rectangle-based text encoding for raster images.
//!
//! Every distinct color of an image is described by the set of rectangles that
//! covers its pixels. Colors are ranked by pixel count; the most frequent one is
//! the background and is written without rectangles, since a decoder recovers
//! it as "everything not covered". Works best on images made of large flat
//! areas such as icons, pixel art and UI mockups.
//!
//! ## Features
//!
//! - **Two strategies**: maximal 2-D rectangles (default) or one rectangle per
//!   horizontal run
//! - **Deterministic**: output depends only on the pixels and raster scan order
//! - **Native precision**: 16-bit sources group by their real samples
//! - **Optional PNG input**: `png` feature (on by default)
//!
//! ## Quick Start
//!
//! ```
//! use rbscodec::{encode, RgbaImage};
//!
//! // 2x2: red, red / blue, red
//! let image = RgbaImage::from_fn(2, 2, |x, y| {
//!     if (x, y) == (0, 1) {
//!         [0, 0, 255, 255]
//!     } else {
//!         [255, 0, 0, 255]
//!     }
//! });
//!
//! assert_eq!(encode(&image).unwrap(), "255,0,0|0,0,255=0,1;");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐   ┌────────┐
//! │   PixelGrid   │──▶│    palette    │──▶│   encoding    │──▶│ format │
//! │ (RgbaImage,   │   │ count colors, │   │ claim mask,   │   │  text  │
//! │  PngImage)    │   │ rank by count │   │ grow rects    │   │        │
//! └───────────────┘   └───────────────┘   └───────────────┘   └────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod encoding;
pub mod error;
pub mod format;
pub mod grid;
pub mod palette;
pub mod pipeline;
#[cfg(feature = "png")]
pub mod png_image;

// Re-exports
pub use color::Color;
pub use encoding::{get_encoder, ColorEntry, EncoderOptions, Encoding, Rect, Strategy};
pub use error::{RbsError, Result};
pub use format::format_entries;
pub use grid::{PixelGrid, Rgba16Image, RgbaImage};
pub use palette::count_colors;
pub use pipeline::{encode, encode_entries, encode_with, encode_with_summary, EncodeSummary};

#[cfg(feature = "png")]
pub use png_image::PngImage;

/// Conventional file extension for encoded output.
pub const FILE_EXTENSION: &str = "rbs";
