// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.

use crate::media::DecodeFailurePolicy;

// ==========================================================================
// Loading Defaults
// ==========================================================================

/// Corrupt files stop the run unless configured otherwise.
pub const DEFAULT_DECODE_FAILURE: DecodeFailurePolicy = DecodeFailurePolicy::Abort;

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// Print pixel values under the cursor by default.
pub const DEFAULT_PIXEL_PROBE: bool = true;

/// Interval at which accumulated wheel input is applied (milliseconds).
pub const WHEEL_TICK_MS: u64 = 50;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default maximum initial window width in logical pixels.
pub const DEFAULT_MAX_INITIAL_WIDTH: u32 = 1600;

/// Default maximum initial window height in logical pixels.
pub const DEFAULT_MAX_INITIAL_HEIGHT: u32 = 1000;

/// Smallest accepted maximum initial dimension.
pub const MIN_INITIAL_DIMENSION: u32 = 64;
