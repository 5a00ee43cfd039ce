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

//! Pixel grid abstraction and in-memory implementations.
//!
//! The encoder only ever reads pixels through [`PixelGrid`], so any decoded
//! image can be plugged in. Two owned buffers are provided: [`RgbaImage`] for
//! the usual RGBA32 layout (4 bytes per pixel, row-major) and [`Rgba16Image`]
//! for 16-bit-per-channel sources.

use crate::color::Color;
use crate::error::{RbsError, Result};

/// Read-only access to a decoded image.
pub trait PixelGrid {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Returns the color at `(x, y)`.
    ///
    /// Callers guarantee `x < width()` and `y < height()`.
    fn color_at(&self, x: u32, y: u32) -> Color;
}

impl<G: PixelGrid + ?Sized> PixelGrid for &G {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        (**self).color_at(x, y)
    }
}

/// Fails with [`RbsError::EmptyImage`] when `grid` has no pixels.
pub(crate) fn ensure_not_empty<G: PixelGrid + ?Sized>(grid: &G) -> Result<()> {
    let (width, height) = (grid.width(), grid.height());
    if width == 0 || height == 0 {
        return Err(RbsError::EmptyImage { width, height });
    }
    Ok(())
}

/// Number of samples a `width` x `height` buffer with `channels` per pixel needs.
fn sample_count(width: u32, height: u32, channels: usize) -> usize {
    width as usize * height as usize * channels
}

/// An owned RGBA32 image (R, G, B, A bytes per pixel, row-major).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaImage {
    /// Wraps an RGBA32 buffer.
    ///
    /// # Errors
    ///
    /// Returns [`RbsError::InvalidPixelData`] if `data.len()` is not
    /// `width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = sample_count(width, height, 4);
        if data.len() != expected {
            return Err(RbsError::InvalidPixelData {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds an image by evaluating `f(x, y)` for every pixel in raster order.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> [u8; 4],
    {
        let mut data = Vec::with_capacity(sample_count(width, height, 4));
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Returns the raw RGBA32 bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl PixelGrid for RgbaImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.data[offset..offset + 4];
        Color::rgba8(px[0], px[1], px[2], px[3])
    }
}

/// An owned image with 16-bit R, G, B, A samples per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rgba16Image {
    width: u32,
    height: u32,
    data: Vec<u16>,
}

impl Rgba16Image {
    /// Wraps a buffer of 16-bit samples.
    ///
    /// # Errors
    ///
    /// Returns [`RbsError::InvalidPixelData`] if `data.len()` is not
    /// `width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u16>) -> Result<Self> {
        let expected = sample_count(width, height, 4);
        if data.len() != expected {
            return Err(RbsError::InvalidPixelData {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }
}

impl PixelGrid for Rgba16Image {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.data[offset..offset + 4];
        Color::rgba16(px[0], px[1], px[2], px[3])
    }
}
