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

//! Pixel color values.
//!
//! Colors are kept at 16-bit native precision so that high-depth sources group
//! by their real samples. 8-bit sources are widened by 257 (`0xAB` becomes
//! `0xABAB`), which makes the 8-bit view an exact round trip.

use std::fmt;

/// Maximum 16-bit channel value. A color is opaque when its alpha equals this.
pub const CHANNEL_MAX: u16 = 0xFFFF;

/// An RGBA color sampled from a pixel grid.
///
/// Equality and hashing use the native 16-bit samples, so two pixels that
/// differ only below 8-bit precision are still different colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel (16-bit).
    pub r: u16,
    /// Green channel (16-bit).
    pub g: u16,
    /// Blue channel (16-bit).
    pub b: u16,
    /// Alpha channel (16-bit, `CHANNEL_MAX` = fully opaque).
    pub a: u16,
}

impl Color {
    /// Creates an opaque color from 8-bit channels.
    #[must_use]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, u8::MAX)
    }

    /// Creates a color from 8-bit channels.
    #[must_use]
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: widen(r),
            g: widen(g),
            b: widen(b),
            a: widen(a),
        }
    }

    /// Creates a color from native 16-bit channels.
    #[must_use]
    pub const fn rgba16(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Returns `true` if alpha is at its maximum.
    #[must_use]
    pub const fn is_opaque(&self) -> bool {
        self.a == CHANNEL_MAX
    }

    /// Returns the channels scaled down to 0-255 as `[r, g, b, a]`.
    #[must_use]
    pub const fn to_rgba8(&self) -> [u8; 4] {
        [narrow(self.r), narrow(self.g), narrow(self.b), narrow(self.a)]
    }
}

/// Serializes as `R,G,B` when opaque and `R,G,B,A` otherwise.
///
/// Channels are written straight, not premultiplied by alpha: half-transparent
/// red prints as `255,0,0,128`, never `128,0,0,128`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        if self.is_opaque() {
            write!(f, "{},{},{}", r, g, b)
        } else {
            write!(f, "{},{},{},{}", r, g, b, a)
        }
    }
}

/// Widens an 8-bit channel to 16 bits (`v * 257`).
#[inline]
pub(crate) const fn widen(value: u8) -> u16 {
    (value as u16) << 8 | value as u16
}

/// Scales a 16-bit channel to 8 bits as `floor(v / 257)`.
#[inline]
#[allow(clippy::cast_possible_truncation)] // 0xFFFF / 257 == 255
const fn narrow(value: u16) -> u8 {
    (value / 257) as u8
}
