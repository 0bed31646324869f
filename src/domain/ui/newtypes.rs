// SPDX-License-Identifier: MPL-2.0
//! Window geometry newtypes.
//!
//! This module provides type-safe wrappers for window geometry,
//! ensuring ratios are always positive and sizes never collapse to zero.

/// Slack for `f32` noise when truncating to whole pixels, so that
/// `100 / 0.1` lands on 1000 rather than 999.
const PIXEL_SNAP: f32 = 1e-3;

fn truncate(value: f32) -> u32 {
    (value + PIXEL_SNAP) as u32
}

// =============================================================================
// WindowSize
// =============================================================================

/// Window dimensions in logical pixels, never smaller than 1x1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    /// Creates a size, raising each zero dimension to 1.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Converts toolkit floating point dimensions, truncating fractions.
    #[must_use]
    pub fn from_logical(width: f32, height: f32) -> Self {
        Self::new(width.max(0.0) as u32, height.max(0.0) as u32)
    }
}

// =============================================================================
// AspectRatio
// =============================================================================

/// Width divided by height, guaranteed finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio(f32);

impl AspectRatio {
    /// Creates a ratio from a raw value; `None` unless finite and positive.
    #[must_use]
    pub fn new(ratio: f32) -> Option<Self> {
        (ratio.is_finite() && ratio > 0.0).then_some(Self(ratio))
    }

    /// Ratio of a `width x height` rectangle; `None` for empty rectangles.
    #[must_use]
    pub fn of(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Self::new(width as f32 / height as f32)
    }

    /// Returns the raw ratio value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Largest size with this ratio that keeps one requested edge and fits
    /// the other inside the requested box.
    ///
    /// If `width / ratio <= height` the width is kept, otherwise the height.
    #[must_use]
    pub fn constrain(self, requested: WindowSize) -> WindowSize {
        let width = requested.width as f32;
        let height = requested.height as f32;

        if width / self.0 <= height {
            WindowSize::new(requested.width, truncate(width / self.0))
        } else {
            WindowSize::new(truncate(height * self.0), requested.height)
        }
    }

    /// Returns whether `size` already has this ratio to within one pixel on
    /// both axes.
    ///
    /// The toolkit reports our own resize commands back as resize events;
    /// sizes that conform need no further correction. Output of
    /// [`constrain`](Self::constrain) conforms after at most one more pass.
    #[must_use]
    pub fn conforms(self, size: WindowSize) -> bool {
        let width = size.width as f32;
        let height = size.height as f32;
        (width / self.0 - height).abs() < 1.0 && (height * self.0 - width).abs() < 1.0
    }

    /// Scales `natural` down (never up) so it fits inside `bounds`.
    #[must_use]
    pub fn fit_within(self, natural: WindowSize, bounds: WindowSize) -> WindowSize {
        if natural.width <= bounds.width && natural.height <= bounds.height {
            return natural;
        }
        self.constrain(WindowSize::new(
            natural.width.min(bounds.width),
            natural.height.min(bounds.height),
        ))
    }
}
