// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`codec`]: Decoding a compressed blob into a [`DecodedImage`](crate::domain::media::DecodedImage)
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no `image` crate types)
//! - Methods return `Result` with port-specific error types

pub mod codec;

pub use codec::{CodecError, ImageCodec};
