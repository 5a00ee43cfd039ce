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

//! PNG-backed pixel grid.
//!
//! Decodes a PNG stream into native-precision samples. Palettes, `tRNS`
//! transparency and sub-byte grayscale are expanded by the decoder, so after
//! decoding every image is gray, gray+alpha, RGB or RGBA at 8 or 16 bits.
//! 8-bit samples are widened to 16 bits; 16-bit samples are kept as-is.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use png::{BitDepth, ColorType, Decoder, Transformations};

use crate::color::{widen, Color, CHANNEL_MAX};
use crate::error::{RbsError, Result};
use crate::grid::{PixelGrid, Rgba16Image};

/// A decoded PNG image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngImage {
    pixels: Rgba16Image,
    bit_depth: u8,
}

impl PngImage {
    /// Opens and decodes a PNG file.
    ///
    /// # Errors
    ///
    /// Returns [`RbsError::Io`] if the file cannot be opened, and the errors of
    /// [`PngImage::from_reader`] otherwise.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Decodes the first frame of a PNG stream.
    ///
    /// # Errors
    ///
    /// Returns [`RbsError::Decode`] for a malformed stream and
    /// [`RbsError::UnsupportedFormat`] if the decoded layout is not one of
    /// gray, gray+alpha, RGB or RGBA at 8 or 16 bits.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut decoder = Decoder::new(reader);
        decoder.set_transformations(Transformations::EXPAND);
        let mut reader = decoder.read_info()?;

        let mut buf = vec![0u8; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf)?;

        let bytes_per_sample = match info.bit_depth {
            BitDepth::Eight => 1,
            BitDepth::Sixteen => 2,
            other => {
                return Err(RbsError::UnsupportedFormat(format!(
                    "bit depth {:?} after expansion",
                    other
                )))
            }
        };
        let channels = match info.color_type {
            ColorType::Grayscale => 1,
            ColorType::GrayscaleAlpha => 2,
            ColorType::Rgb => 3,
            ColorType::Rgba => 4,
            ColorType::Indexed => {
                return Err(RbsError::UnsupportedFormat(
                    "indexed color after expansion".to_string(),
                ))
            }
        };

        debug!(
            "Decoded PNG {}x{} {:?} {:?}",
            info.width, info.height, info.color_type, info.bit_depth
        );

        let pixel_bytes = channels * bytes_per_sample;
        let row_bytes = info.width as usize * pixel_bytes;
        let mut samples = Vec::with_capacity(info.width as usize * info.height as usize * 4);

        for row in buf[..info.buffer_size()]
            .chunks(info.line_size)
            .take(info.height as usize)
        {
            for px in row[..row_bytes].chunks_exact(pixel_bytes) {
                let sample = |i: usize| read_sample(px, i, bytes_per_sample);
                let rgba = match channels {
                    1 => [sample(0), sample(0), sample(0), CHANNEL_MAX],
                    2 => [sample(0), sample(0), sample(0), sample(1)],
                    3 => [sample(0), sample(1), sample(2), CHANNEL_MAX],
                    _ => [sample(0), sample(1), sample(2), sample(3)],
                };
                samples.extend_from_slice(&rgba);
            }
        }

        let pixels = Rgba16Image::new(info.width, info.height, samples)?;
        Ok(Self {
            pixels,
            bit_depth: (bytes_per_sample * 8) as u8,
        })
    }

    /// Bits per channel in the source (8 or 16).
    #[must_use]
    pub fn bit_depth(&self) -> u8 {
        self.bit_depth
    }
}

/// Reads sample `index` of a pixel and returns it at 16-bit precision.
#[inline]
fn read_sample(px: &[u8], index: usize, bytes_per_sample: usize) -> u16 {
    if bytes_per_sample == 2 {
        u16::from_be_bytes([px[index * 2], px[index * 2 + 1]])
    } else {
        widen(px[index])
    }
}

impl PixelGrid for PngImage {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        self.pixels.color_at(x, y)
    }
}
