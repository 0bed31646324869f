// SPDX-License-Identifier: MPL-2.0
//! Top-level messages consumed by `App::update`.

use crate::viewer::SessionEvent;
use iced::window;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    /// A native event already translated for the session, tagged with the
    /// window it came from so effects can target it.
    Input {
        window: window::Id,
        event: SessionEvent,
    },
    Tick(Instant), // Applies accumulated wheel motion
}
