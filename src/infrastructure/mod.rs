// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`webp`]: WebP decoding via the `image` crate (implements [`ImageCodec`])
//!
//! [`ImageCodec`]: crate::application::port::ImageCodec

pub mod webp;

pub use webp::WebpCodec;
