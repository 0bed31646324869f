// SPDX-License-Identifier: MPL-2.0
//! Image codec port definition.
//!
//! The codec is an external collaborator: it receives the raw bytes of one
//! file and hands back an owned RGB buffer. The loader never interprets
//! compressed data itself.

use crate::domain::media::DecodedImage;
use std::fmt;

// =============================================================================
// CodecError
// =============================================================================

/// Errors that a codec can report for one blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The blob is malformed or truncated.
    Corrupted(String),

    /// The codec produced a buffer that does not describe a valid image.
    InvalidDimensions {
        /// The width that was decoded.
        width: u32,
        /// The height that was decoded.
        height: u32,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Corrupted(msg) => write!(f, "Corrupted image data: {msg}"),
            CodecError::InvalidDimensions { width, height } => {
                write!(f, "Invalid dimensions: {width}x{height}")
            }
        }
    }
}

impl std::error::Error for CodecError {}

// =============================================================================
// ImageCodec Trait
// =============================================================================

/// Port for decoding one compressed image format.
///
/// # Example
///
/// ```
/// use iced_peek::application::port::{CodecError, ImageCodec};
/// use iced_peek::domain::media::DecodedImage;
///
/// /// Treats every blob as a single grey pixel.
/// struct Grey;
///
/// impl ImageCodec for Grey {
///     fn name(&self) -> &'static str {
///         "grey"
///     }
///
///     fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, CodecError> {
///         let level = bytes.first().copied().unwrap_or(0);
///         DecodedImage::from_rgb(1, 1, vec![level; 3])
///             .ok_or(CodecError::InvalidDimensions { width: 1, height: 1 })
///     }
/// }
///
/// let image = Grey.decode(&[7]).unwrap();
/// assert_eq!(image.pixel(0, 0), Some([7, 7, 7]));
/// ```
pub trait ImageCodec {
    /// Short format name used in log lines.
    fn name(&self) -> &'static str;

    /// Decodes a complete file blob into an RGB image.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] if the blob cannot be decoded.
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, CodecError>;
}
