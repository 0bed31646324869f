// SPDX-License-Identifier: MPL-2.0
//! Cursor-to-pixel mapping for the live probe readout.
//!
//! The current image is stretched to fill the window, so a cursor position
//! in window coordinates maps linearly onto image coordinates.

use crate::domain::media::{DecodedImage, PixelProbe};
use crate::domain::ui::WindowSize;

/// Cursor position in logical window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorPosition {
    pub x: f32,
    pub y: f32,
}

impl CursorPosition {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Converts a window position to the image pixel displayed under it.
///
/// Returns `None` for positions outside the window, for placeholders, and
/// for anything that would land outside `[0, width) x [0, height)`.
#[must_use]
pub fn image_coordinates(
    cursor: CursorPosition,
    view: WindowSize,
    image: &DecodedImage,
) -> Option<(u32, u32)> {
    if image.is_placeholder() || !cursor.x.is_finite() || !cursor.y.is_finite() {
        return None;
    }
    if cursor.x < 0.0 || cursor.y < 0.0 {
        return None;
    }

    let x = (cursor.x * image.width() as f32 / view.width as f32).floor();
    let y = (cursor.y * image.height() as f32 / view.height as f32).floor();
    let (x, y) = (x as u32, y as u32);

    image.contains(x, y).then_some((x, y))
}

/// Reads the pixel under `cursor`, if any.
#[must_use]
pub fn probe(cursor: CursorPosition, view: WindowSize, image: &DecodedImage) -> Option<PixelProbe> {
    let (x, y) = image_coordinates(cursor, view, image)?;
    PixelProbe::read(image, x, y)
}
