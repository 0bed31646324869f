// SPDX-License-Identifier: MPL-2.0
//! Core media types: decoded pixel buffers and probe readouts.

use std::fmt;

/// Number of interleaved channels stored per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// A decoded raster image stored as interleaved 8-bit RGB.
///
/// The buffer is addressed by `(x, y, channel)` and never changes after
/// construction. A zero-sized instance is the placeholder recorded for
/// files the loader could not turn into pixels.
///
/// # Example
///
/// ```
/// use iced_peek::domain::media::DecodedImage;
///
/// let pixels = vec![0u8; 4 * 2 * 3];
/// let image = DecodedImage::from_rgb(4, 2, pixels).unwrap();
///
/// assert_eq!(image.width(), 4);
/// assert_eq!(image.sample(3, 1, 2), Some(0));
/// assert!(DecodedImage::placeholder().is_placeholder());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    /// RGB pixel data (3 bytes per pixel, row-major).
    pixels: Vec<u8>,
}

impl DecodedImage {
    /// Creates a `DecodedImage` from packed RGB pixels.
    ///
    /// Returns `None` when either dimension is zero or when the buffer
    /// length is not exactly `width * height * 3`.
    #[must_use]
    pub fn from_rgb(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let expected_len = (width as usize) * (height as usize) * CHANNELS;
        if pixels.len() != expected_len {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// The empty entry standing in for an undisplayable file.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.pixels.is_empty()
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns whether `(x, y)` lies inside `[0, width) x [0, height)`.
    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Returns the intensity of one channel, or `None` out of bounds.
    #[must_use]
    pub fn sample(&self, x: u32, y: u32, channel: usize) -> Option<u8> {
        if !self.contains(x, y) || channel >= CHANNELS {
            return None;
        }
        self.pixels.get(self.offset(x, y) + channel).copied()
    }

    /// Returns the three channel values stored at `(x, y)`.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; CHANNELS]> {
        if !self.contains(x, y) {
            return None;
        }
        let start = self.offset(x, y);
        let mut rgb = [0u8; CHANNELS];
        rgb.copy_from_slice(self.pixels.get(start..start + CHANNELS)?);
        Some(rgb)
    }

    /// Returns the raw RGB buffer.
    #[must_use]
    pub fn rgb_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Expands the buffer to opaque RGBA for upload to the renderer.
    #[must_use]
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len() / CHANNELS * 4);
        for rgb in self.pixels.chunks_exact(CHANNELS) {
            rgba.extend_from_slice(rgb);
            rgba.push(u8::MAX);
        }
        rgba
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * CHANNELS
    }
}

/// Channel values read under the cursor at one image coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelProbe {
    pub x: u32,
    pub y: u32,
    pub channels: [u8; CHANNELS],
}

impl PixelProbe {
    /// Reads the pixel at `(x, y)`; `None` outside the image.
    #[must_use]
    pub fn read(image: &DecodedImage, x: u32, y: u32) -> Option<Self> {
        image.pixel(x, y).map(|channels| Self { x, y, channels })
    }
}

impl fmt::Display for PixelProbe {
    /// Formats as `(x,y): (r, g, b)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{}): (", self.x, self.y)?;
        for (channel, value) in self.channels.iter().enumerate() {
            if channel > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(")")
    }
}
