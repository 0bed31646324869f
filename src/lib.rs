// SPDX-License-Identifier: MPL-2.0
//! `iced_peek` is a minimal WebP viewer built with the Iced GUI framework.
//!
//! Every file named on the command line is decoded up front. The window keeps
//! the first image's aspect ratio, cycles through the collection with the
//! keyboard or mouse wheel, and prints the pixel under the cursor.

#![doc(html_root_url = "https://docs.rs/iced_peek/0.1.0")]

pub mod app;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod media;
pub mod viewer;

#[cfg(test)]
pub(crate) mod test_utils;
