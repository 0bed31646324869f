// SPDX-License-Identifier: MPL-2.0
//! Turning a list of file paths into the in-memory image collection.
//!
//! Format dispatch lives in [`registry`]; the batch loading policy
//! (fatal missing files, placeholder entries for unsupported suffixes)
//! lives in [`loader`].

pub mod loader;
pub mod registry;

pub use loader::{
    load_collection, ConsoleReporter, DecodeFailurePolicy, ImageCollection, ImageEntry,
    LoadReporter, LoadWarning,
};
pub use registry::CodecRegistry;
