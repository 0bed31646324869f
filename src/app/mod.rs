// SPDX-License-Identifier: MPL-2.0
//! Application root: wires the viewer session to an Iced window.
//!
//! All viewing policy lives in [`ViewerSession`]; this module only turns
//! native events into session events and session effects into window tasks.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::Message;

use crate::cli::Flags;
use crate::domain::ui::WindowSize;
use crate::error::Result;
use crate::media::{self, CodecRegistry, LoadReporter};
use crate::viewer::{Effect, SessionEvent, ViewerSession};
use iced::widget::image::Handle;
use iced::{window, Element, Size, Subscription, Task};
use std::fmt;

/// Root Iced application state.
pub struct App {
    session: ViewerSession,
    /// RGBA pixels of the current entry only, `None` for placeholders.
    shown: Option<Handle>,
    window_id: Option<window::Id>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_index", &self.session.current_index())
            .field("len", &self.session.len())
            .finish()
    }
}

/// Loads configuration, decodes every input, and starts a session.
///
/// Command-line flags take precedence over `settings.toml`. A broken config
/// file only produces a warning.
///
/// # Errors
///
/// Fails when a file cannot be read, when a decode failure is fatal under
/// the active policy, or when nothing displayable was loaded.
pub fn prepare_session(flags: &Flags, reporter: &mut dyn LoadReporter) -> Result<ViewerSession> {
    let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
    if let Some(warning) = config_warning {
        eprintln!("[WARN] {warning}");
    }

    let policy = flags
        .decode_failure
        .unwrap_or_else(|| config.decode_failure());
    let mut options = config.session_options();
    if flags.no_probe {
        options.pixel_probe = false;
    }

    let registry = CodecRegistry::default();
    let collection = media::load_collection(&flags.paths, &registry, policy, reporter)?;
    ViewerSession::new(collection, options)
}

/// Builds the window settings for the session's initial size.
pub fn window_settings(size: WindowSize) -> window::Settings {
    window::Settings {
        size: to_logical(size),
        // Close requests go through the session like the Escape key.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(session: ViewerSession) -> iced::Result {
    use std::cell::RefCell;

    let settings = window_settings(session.initial_window_size());

    // iced 0.14 requires Fn for boot; the session is moved in exactly once
    let boot_state = RefCell::new(Some(session));
    let boot = move || {
        let session = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(session)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

/// Expands the current image to RGBA for upload. Only one image is held
/// in this form at a time; navigation rebuilds it.
fn current_handle(session: &ViewerSession) -> Option<Handle> {
    session
        .current_image()
        .filter(|image| !image.is_placeholder())
        .map(|image| Handle::from_rgba(image.width(), image.height(), image.to_rgba()))
}

fn to_logical(size: WindowSize) -> Size {
    Size::new(size.width as f32, size.height as f32)
}

impl App {
    fn new(session: ViewerSession) -> (Self, Task<Message>) {
        let shown = current_handle(&session);
        let app = App {
            session,
            shown,
            window_id: None,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.session.title()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let outcome = match message {
            Message::Input { window, event } => {
                self.window_id = Some(window);
                self.session.handle(event)
            }
            Message::Tick(_) => self.session.handle(SessionEvent::Tick),
        };

        if let Some(reading) = outcome.probe {
            println!("{reading}");
        }

        match outcome.effect {
            Effect::None => Task::none(),
            Effect::ShowImage(_) => {
                self.shown = current_handle(&self.session);
                Task::none()
            }
            Effect::ResizeWindow(size) => match self.window_id {
                Some(id) => window::resize(id, to_logical(size)),
                None => Task::none(),
            },
            Effect::Exit => iced::exit(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            handle: self.shown.as_ref(),
            title: self.session.title(),
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.session.has_pending_wheel()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::DecodedImage;
    use crate::media::{ImageCollection, ImageEntry};
    use crate::viewer::SessionOptions;
    use std::path::PathBuf;

    fn entry(name: &str, image: DecodedImage) -> ImageEntry {
        ImageEntry {
            path: PathBuf::from(name),
            image,
        }
    }

    fn solid(width: u32, height: u32) -> DecodedImage {
        let len = (width * height) as usize * crate::domain::media::CHANNELS;
        DecodedImage::from_rgb(width, height, vec![128; len]).unwrap()
    }

    fn app() -> App {
        let collection = ImageCollection::new(vec![
            entry("a.webp", solid(4, 2)),
            entry("b.png", DecodedImage::placeholder()),
            entry("c.webp", solid(2, 2)),
        ]);
        let session = ViewerSession::new(collection, SessionOptions::default()).unwrap();
        App::new(session).0
    }

    fn press(app: &mut App, event: SessionEvent) {
        let _ = app.update(Message::Input {
            window: window::Id::unique(),
            event,
        });
    }

    #[test]
    fn only_current_image_is_expanded() {
        let mut app = app();
        assert!(app.shown.is_some());
        press(&mut app, SessionEvent::Next);
        assert!(app.shown.is_none(), "placeholder has no pixels");
        press(&mut app, SessionEvent::Next);
        assert!(app.shown.is_some());
    }

    #[test]
    fn handle_is_kept_when_nothing_is_shown() {
        let mut app = app();
        let before = app.shown.clone().map(|handle| handle.id());
        press(&mut app, SessionEvent::CursorLeft);
        assert_eq!(app.shown.map(|handle| handle.id()), before);
    }

    #[test]
    fn title_follows_navigation() {
        let mut app = app();
        assert_eq!(app.title(), "a.webp");
        press(&mut app, SessionEvent::Next);
        assert_eq!(app.title(), "b.png");
        press(&mut app, SessionEvent::Last);
        assert_eq!(app.title(), "c.webp");
    }

    #[test]
    fn input_remembers_window() {
        let mut app = app();
        let id = window::Id::unique();
        let _ = app.update(Message::Input {
            window: id,
            event: SessionEvent::CursorLeft,
        });
        assert_eq!(app.window_id, Some(id));
    }

    #[test]
    fn window_settings_use_session_size() {
        let settings = window_settings(WindowSize::new(640, 320));
        assert_eq!(settings.size, Size::new(640.0, 320.0));
        assert!(!settings.exit_on_close_request);
    }
}
