// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports toward external collaborators.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The loader and viewer only ever see the port traits

pub mod port;
