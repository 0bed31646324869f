// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure value objects and their rules. It has no
//! dependencies on external crates (except `std`) so the viewer state
//! machine can be tested without a window or a codec.
//!
//! # Modules
//!
//! - [`media`]: Pixel data ([`DecodedImage`](media::DecodedImage),
//!   [`PixelProbe`](media::PixelProbe))
//! - [`ui`]: Window geometry ([`AspectRatio`](ui::AspectRatio),
//!   [`WindowSize`](ui::WindowSize))

pub mod media;
pub mod ui;
