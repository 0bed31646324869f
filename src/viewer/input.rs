// SPDX-License-Identifier: MPL-2.0
//! Raw toolkit events to [`SessionEvent`]s.

use super::probe::CursorPosition;
use super::session::SessionEvent;
use crate::domain::ui::WindowSize;
use iced::keyboard::{self, key::Named};
use iced::{event, mouse, window};

/// Translates one Iced event; returns `None` for events the viewer ignores.
#[must_use]
pub fn session_event(event: &event::Event) -> Option<SessionEvent> {
    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            ..
        }) => key_event(*named),
        event::Event::Mouse(mouse_event) => match mouse_event {
            mouse::Event::WheelScrolled { delta } => {
                let y = match delta {
                    mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => *y,
                };
                (y != 0.0).then_some(SessionEvent::Wheel(y))
            }
            mouse::Event::CursorMoved { position } => Some(SessionEvent::CursorMoved(
                CursorPosition::new(position.x, position.y),
            )),
            mouse::Event::CursorLeft => Some(SessionEvent::CursorLeft),
            _ => None,
        },
        event::Event::Window(window_event) => match window_event {
            window::Event::Resized(size) => Some(SessionEvent::Resized(WindowSize::from_logical(
                size.width,
                size.height,
            ))),
            window::Event::CloseRequested => Some(SessionEvent::Exit),
            _ => None,
        },
        _ => None,
    }
}

fn key_event(key: Named) -> Option<SessionEvent> {
    match key {
        Named::ArrowRight | Named::PageDown => Some(SessionEvent::Next),
        Named::ArrowLeft | Named::PageUp => Some(SessionEvent::Previous),
        Named::Home => Some(SessionEvent::First),
        Named::End => Some(SessionEvent::Last),
        Named::Escape => Some(SessionEvent::Exit),
        _ => None,
    }
}
