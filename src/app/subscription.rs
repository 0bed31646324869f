// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard, mouse, and window events are translated into
//! [`SessionEvent`](crate::viewer::SessionEvent)s here; the tick only runs
//! while wheel motion is waiting to be applied.

use super::config::WHEEL_TICK_MS;
use super::Message;
use crate::viewer::input;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes every native event the session understands, captured or not.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        input::session_event(&event).map(|event| Message::Input {
            window: window_id,
            event,
        })
    })
}

/// Creates the wheel tick, active only while `has_pending_wheel` holds.
pub fn create_tick_subscription(has_pending_wheel: bool) -> Subscription<Message> {
    if has_pending_wheel {
        time::every(Duration::from_millis(WHEEL_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
