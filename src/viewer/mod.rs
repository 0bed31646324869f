// SPDX-License-Identifier: MPL-2.0
//! Interactive viewing session: navigation, resize, and pixel probing.
//!
//! - [`session`]: the state machine, independent of any window
//! - [`input`]: translation of raw Iced events into session events
//! - [`probe`]: cursor-to-pixel mapping

pub mod input;
pub mod probe;
pub mod session;

pub use probe::CursorPosition;
pub use session::{Effect, Outcome, SessionEvent, SessionOptions, ViewerSession};
