//! Error types for the rbscodec library.

use std::io;
use thiserror::Error;

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, RbsError>;

/// Errors that can occur while reading an image or encoding it.
///
/// Only input problems are reported here. A broken coverage invariant inside
/// the decomposer is a bug and panics instead.
#[derive(Debug, Error)]
pub enum RbsError {
    /// The image has zero width or zero height.
    #[error("Cannot process input: image is {width}x{height}")]
    EmptyImage {
        /// Reported width.
        width: u32,
        /// Reported height.
        height: u32,
    },

    /// A pixel buffer does not match the dimensions it was given with.
    #[error("Invalid pixel data: expected {expected} samples, got {actual}")]
    InvalidPixelData {
        /// Number of samples implied by the dimensions.
        expected: usize,
        /// Number of samples actually supplied.
        actual: usize,
    },

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The PNG stream could not be decoded.
    #[cfg(feature = "png")]
    #[error("Decode error: {0}")]
    Decode(#[from] png::DecodingError),

    /// The PNG decoded into a layout that has no RGBA interpretation.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
