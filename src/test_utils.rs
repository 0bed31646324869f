// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Aspect ratios and wheel deltas are `f32`; compare them with `approx`
//! rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;
