// SPDX-License-Identifier: MPL-2.0
//! The viewing session state machine.
//!
//! [`ViewerSession`] owns the image collection and every piece of state
//! the event loop mutates. Each input is a [`SessionEvent`]; handling it
//! returns an [`Outcome`] describing what the window adapter must do. No
//! windowing types appear here, so every transition is testable directly.

use super::probe::{self, CursorPosition};
use crate::app::config::{
    DEFAULT_MAX_INITIAL_HEIGHT, DEFAULT_MAX_INITIAL_WIDTH, DEFAULT_PIXEL_PROBE,
};
use crate::domain::media::{DecodedImage, PixelProbe};
use crate::domain::ui::{AspectRatio, WindowSize};
use crate::error::{Error, Result};
use crate::media::{ImageCollection, ImageEntry};

/// Default upper bound for the initial window size.
pub const DEFAULT_MAX_INITIAL_SIZE: WindowSize = WindowSize {
    width: DEFAULT_MAX_INITIAL_WIDTH,
    height: DEFAULT_MAX_INITIAL_HEIGHT,
};

/// Discrete inputs, already translated from toolkit events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// Right arrow or page down.
    Next,
    /// Left arrow or page up.
    Previous,
    /// Home key.
    First,
    /// End key.
    Last,
    /// Vertical wheel delta; negative scrolls toward the next image.
    Wheel(f32),
    /// One polling tick; applies accumulated wheel input.
    Tick,
    /// The user resized the window to this size.
    Resized(WindowSize),
    CursorMoved(CursorPosition),
    CursorLeft,
    /// Escape key or a close request.
    Exit,
}

/// What the window adapter must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The current image changed: redraw and retitle before the next input.
    ShowImage(usize),
    /// Apply this window size; the stored pixels are redrawn unchanged.
    ResizeWindow(WindowSize),
    Exit,
}

/// Result of handling one [`SessionEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub effect: Effect,
    /// Readout for the pixel under the cursor, when it should be printed.
    pub probe: Option<PixelProbe>,
}

impl Outcome {
    fn none() -> Self {
        Self::effect(Effect::None)
    }

    fn effect(effect: Effect) -> Self {
        Self {
            effect,
            probe: None,
        }
    }
}

/// Tunables supplied by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// The initial window is scaled down to fit inside this size.
    pub max_initial_size: WindowSize,
    /// Whether cursor movement produces probe readouts.
    pub pixel_probe: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            max_initial_size: DEFAULT_MAX_INITIAL_SIZE,
            pixel_probe: DEFAULT_PIXEL_PROBE,
        }
    }
}

/// Interactive viewing state over an exclusively owned [`ImageCollection`].
///
/// `current_index` is always a valid index: navigation wraps modulo the
/// collection length. The window aspect ratio is fixed when the session is
/// created and is never recomputed when navigating.
#[derive(Debug, Clone)]
pub struct ViewerSession {
    collection: ImageCollection,
    current_index: usize,
    aspect_ratio: AspectRatio,
    initial_size: WindowSize,
    view_size: WindowSize,
    cursor: Option<CursorPosition>,
    pending_wheel: f32,
    pixel_probe: bool,
}

impl ViewerSession {
    /// Starts a session on entry 0.
    ///
    /// The aspect ratio comes from entry 0, or from the first decoded entry
    /// when entry 0 is a placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if no entry holds actual pixels.
    pub fn new(collection: ImageCollection, options: SessionOptions) -> Result<Self> {
        let ratio_source = collection
            .first_displayable()
            .and_then(|index| collection.get(index))
            .map(|entry| &entry.image)
            .ok_or(Error::EmptyCollection)?;
        let aspect_ratio = AspectRatio::of(ratio_source.width(), ratio_source.height())
            .ok_or(Error::EmptyCollection)?;

        let natural = WindowSize::new(ratio_source.width(), ratio_source.height());
        let initial_size = aspect_ratio.fit_within(natural, options.max_initial_size);

        Ok(Self {
            collection,
            current_index: 0,
            aspect_ratio,
            initial_size,
            view_size: initial_size,
            cursor: None,
            pending_wheel: 0.0,
            pixel_probe: options.pixel_probe,
        })
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    #[must_use]
    pub fn collection(&self) -> &ImageCollection {
        &self.collection
    }

    #[must_use]
    pub fn current_entry(&self) -> Option<&ImageEntry> {
        self.collection.get(self.current_index)
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&DecodedImage> {
        self.current_entry().map(|entry| &entry.image)
    }

    /// Window title for the current entry.
    #[must_use]
    pub fn title(&self) -> String {
        self.current_entry()
            .map(ImageEntry::title)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    /// Size the window should be created with.
    #[must_use]
    pub fn initial_window_size(&self) -> WindowSize {
        self.initial_size
    }

    /// Last known window size.
    #[must_use]
    pub fn view_size(&self) -> WindowSize {
        self.view_size
    }

    /// Returns whether wheel input is waiting for the next tick.
    #[must_use]
    pub fn has_pending_wheel(&self) -> bool {
        self.pending_wheel != 0.0
    }

    /// Applies one input and reports what the window must do.
    pub fn handle(&mut self, event: SessionEvent) -> Outcome {
        match event {
            SessionEvent::Next => self.show(self.next_index()),
            SessionEvent::Previous => self.show(self.previous_index()),
            SessionEvent::First => self.show(0),
            SessionEvent::Last => self.show(self.len().saturating_sub(1)),
            SessionEvent::Wheel(delta) => {
                if delta.is_finite() {
                    self.pending_wheel += delta;
                }
                Outcome::none()
            }
            SessionEvent::Tick => self.apply_pending_wheel(),
            SessionEvent::Resized(size) => self.resized(size),
            SessionEvent::CursorMoved(position) => {
                self.cursor = Some(position);
                Outcome {
                    effect: Effect::None,
                    probe: self.probe_under_cursor(),
                }
            }
            SessionEvent::CursorLeft => {
                self.cursor = None;
                Outcome::none()
            }
            SessionEvent::Exit => Outcome::effect(Effect::Exit),
        }
    }

    /// Reads the current image under the last known cursor position.
    #[must_use]
    pub fn probe_under_cursor(&self) -> Option<PixelProbe> {
        if !self.pixel_probe {
            return None;
        }
        let cursor = self.cursor?;
        probe::probe(cursor, self.view_size, self.current_image()?)
    }

    fn next_index(&self) -> usize {
        (self.current_index + 1) % self.len()
    }

    fn previous_index(&self) -> usize {
        (self.current_index + self.len() - 1) % self.len()
    }

    fn show(&mut self, index: usize) -> Outcome {
        self.current_index = index;
        Outcome {
            effect: Effect::ShowImage(index),
            probe: self.probe_under_cursor(),
        }
    }

    /// Consumes the accumulated wheel delta so it is applied exactly once.
    fn apply_pending_wheel(&mut self) -> Outcome {
        let delta = std::mem::take(&mut self.pending_wheel);
        if delta < 0.0 {
            self.show(self.next_index())
        } else if delta > 0.0 {
            self.show(self.previous_index())
        } else {
            Outcome::none()
        }
    }

    /// The window keeps its reported size until the toolkit echoes our
    /// correction, and the image fills whatever the window really is.
    fn resized(&mut self, size: WindowSize) -> Outcome {
        self.view_size = size;
        if self.aspect_ratio.conforms(size) {
            return Outcome::none();
        }
        let target = self.aspect_ratio.constrain(size);
        Outcome::effect(Effect::ResizeWindow(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use std::path::PathBuf;

    fn solid(width: u32, height: u32, rgb: [u8; 3]) -> DecodedImage {
        let pixels = rgb
            .iter()
            .copied()
            .cycle()
            .take((width * height * 3) as usize)
            .collect();
        DecodedImage::from_rgb(width, height, pixels).unwrap()
    }

    fn entry(name: &str, image: DecodedImage) -> ImageEntry {
        ImageEntry {
            path: PathBuf::from(name),
            image,
        }
    }

    fn session_of(images: Vec<DecodedImage>) -> ViewerSession {
        let entries = images
            .into_iter()
            .enumerate()
            .map(|(i, image)| entry(&format!("{i}.webp"), image))
            .collect();
        ViewerSession::new(ImageCollection::new(entries), SessionOptions::default()).unwrap()
    }

    fn session_with(count: usize) -> ViewerSession {
        session_of((0..count).map(|i| solid(4, 2, [i as u8; 3])).collect())
    }

    #[test]
    fn next_n_times_returns_to_start() {
        for count in 1..=5 {
            let mut session = session_with(count);
            for start in 0..count {
                session.current_index = start;
                for _ in 0..count {
                    session.handle(SessionEvent::Next);
                }
                assert_eq!(session.current_index(), start, "n = {count}");
            }
        }
    }

    #[test]
    fn previous_undoes_next_and_vice_versa() {
        let mut session = session_with(3);
        for start in 0..3 {
            session.current_index = start;
            session.handle(SessionEvent::Next);
            session.handle(SessionEvent::Previous);
            assert_eq!(session.current_index(), start);
            session.handle(SessionEvent::Previous);
            session.handle(SessionEvent::Next);
            assert_eq!(session.current_index(), start);
        }
    }

    #[test]
    fn index_stays_in_range_under_any_sequence() {
        let mut session = session_with(4);
        let script = [
            SessionEvent::Previous,
            SessionEvent::Previous,
            SessionEvent::Last,
            SessionEvent::Next,
            SessionEvent::Next,
            SessionEvent::First,
            SessionEvent::Previous,
            SessionEvent::Wheel(2.0),
            SessionEvent::Tick,
            SessionEvent::Wheel(-1.0),
            SessionEvent::Tick,
        ];
        for event in script.iter().cycle().take(200) {
            session.handle(*event);
            assert!(session.current_index() < session.len());
        }
    }

    #[test]
    fn home_and_end_jump_to_bounds() {
        let mut session = session_with(5);
        assert_eq!(
            session.handle(SessionEvent::Last).effect,
            Effect::ShowImage(4)
        );
        assert_eq!(
            session.handle(SessionEvent::First).effect,
            Effect::ShowImage(0)
        );
    }

    #[test]
    fn navigation_retitles() {
        let mut session = session_with(2);
        assert_eq!(session.title(), "0.webp");
        session.handle(SessionEvent::Next);
        assert_eq!(session.title(), "1.webp");
    }

    #[test]
    fn wheel_waits_for_tick_and_is_consumed_once() {
        let mut session = session_with(3);

        assert_eq!(session.handle(SessionEvent::Wheel(-1.0)).effect, Effect::None);
        assert!(session.has_pending_wheel());

        assert_eq!(session.handle(SessionEvent::Tick).effect, Effect::ShowImage(1));
        assert!(!session.has_pending_wheel());

        for _ in 0..3 {
            assert_eq!(session.handle(SessionEvent::Tick).effect, Effect::None);
        }
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn positive_wheel_goes_back() {
        let mut session = session_with(3);
        session.handle(SessionEvent::Wheel(3.0));
        assert_eq!(session.handle(SessionEvent::Tick).effect, Effect::ShowImage(2));
    }

    #[test]
    fn wheel_deltas_within_one_tick_coalesce() {
        let mut session = session_with(5);
        session.handle(SessionEvent::Wheel(-0.4));
        session.handle(SessionEvent::Wheel(-0.4));
        session.handle(SessionEvent::Wheel(-0.4));
        session.handle(SessionEvent::Tick);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn non_finite_wheel_is_ignored() {
        let mut session = session_with(2);
        session.handle(SessionEvent::Wheel(f32::NAN));
        assert!(!session.has_pending_wheel());
        assert_eq!(session.handle(SessionEvent::Tick).effect, Effect::None);
    }

    #[test]
    fn resize_preserves_initial_aspect_ratio() {
        let mut session = session_of(vec![solid(200, 100, [0; 3]), solid(10, 40, [0; 3])]);
        assert_abs_diff_eq!(session.aspect_ratio().value(), 2.0, epsilon = F32_EPSILON);

        // Navigating to a portrait image must not change the window ratio.
        session.handle(SessionEvent::Next);

        let outcome = session.handle(SessionEvent::Resized(WindowSize::new(400, 300)));
        assert_eq!(outcome.effect, Effect::ResizeWindow(WindowSize::new(400, 200)));

        let outcome = session.handle(SessionEvent::Resized(WindowSize::new(400, 150)));
        assert_eq!(outcome.effect, Effect::ResizeWindow(WindowSize::new(300, 150)));
        assert_eq!(session.view_size(), WindowSize::new(400, 150));
    }

    #[test]
    fn long_axis_drift_is_corrected_at_extreme_ratios() {
        let mut wide = session_of(vec![solid(1000, 100, [0; 3])]);
        let outcome = wide.handle(SessionEvent::Resized(WindowSize::new(1009, 100)));
        assert_eq!(outcome.effect, Effect::ResizeWindow(WindowSize::new(1000, 100)));

        let mut tall = session_of(vec![solid(100, 1000, [0; 3])]);
        let outcome = tall.handle(SessionEvent::Resized(WindowSize::new(100, 1009)));
        assert_eq!(outcome.effect, Effect::ResizeWindow(WindowSize::new(100, 1000)));
    }

    #[test]
    fn cursor_maps_onto_real_window_until_resize_is_echoed() {
        let mut pixels = vec![0u8; 4 * 2 * 3];
        let offset = (4 + 1) * 3;
        pixels[offset..offset + 3].copy_from_slice(&[10, 20, 30]);
        let image = DecodedImage::from_rgb(4, 2, pixels).unwrap();
        let mut session = session_of(vec![image]);

        let outcome = session.handle(SessionEvent::Resized(WindowSize::new(400, 400)));
        assert_eq!(outcome.effect, Effect::ResizeWindow(WindowSize::new(400, 200)));
        assert_eq!(session.view_size(), WindowSize::new(400, 400));

        // The stretched image still covers the lower half of the window.
        let outcome = session.handle(SessionEvent::CursorMoved(CursorPosition::new(100.0, 300.0)));
        assert_eq!(outcome.probe.unwrap().to_string(), "(1,1): (10, 20, 30)");

        let outcome = session.handle(SessionEvent::Resized(WindowSize::new(400, 200)));
        assert_eq!(outcome.effect, Effect::None);
        let reading = session.probe_under_cursor();
        assert!(reading.is_none(), "cursor is now below the window");
    }

    #[test]
    fn conforming_resize_is_accepted_without_command() {
        let mut session = session_with(1);
        let outcome = session.handle(SessionEvent::Resized(WindowSize::new(800, 400)));
        assert_eq!(outcome.effect, Effect::None);
        assert_eq!(session.view_size(), WindowSize::new(800, 400));
    }

    #[test]
    fn resize_echo_settles() {
        let mut session = session_of(vec![solid(3, 7, [0; 3])]);
        let mut size = WindowSize::new(1000, 500);
        for _ in 0..3 {
            match session.handle(SessionEvent::Resized(size)).effect {
                Effect::ResizeWindow(target) => size = target,
                Effect::None => break,
                other => panic!("unexpected effect {other:?}"),
            }
        }
        assert_eq!(
            session.handle(SessionEvent::Resized(size)).effect,
            Effect::None
        );
    }

    #[test]
    fn probe_reports_current_image_inside_bounds() {
        let mut pixels = vec![0u8; 4 * 2 * 3];
        let offset = (4 + 1) * 3;
        pixels[offset..offset + 3].copy_from_slice(&[10, 20, 30]);
        let image = DecodedImage::from_rgb(4, 2, pixels).unwrap();
        let mut session = session_of(vec![image]);

        let outcome = session.handle(SessionEvent::CursorMoved(CursorPosition::new(1.0, 1.0)));
        assert_eq!(outcome.effect, Effect::None);
        assert_eq!(outcome.probe.unwrap().to_string(), "(1,1): (10, 20, 30)");
    }

    #[test]
    fn probe_outside_bounds_is_silent() {
        let mut session = session_with(1);
        let outcome = session.handle(SessionEvent::CursorMoved(CursorPosition::new(4.0, 0.0)));
        assert!(outcome.probe.is_none());
        let outcome = session.handle(SessionEvent::CursorMoved(CursorPosition::new(-1.0, 1.0)));
        assert!(outcome.probe.is_none());
    }

    #[test]
    fn navigation_reprobes_last_cursor_position() {
        let mut session = session_of(vec![solid(4, 2, [1, 1, 1]), solid(4, 2, [2, 2, 2])]);
        session.handle(SessionEvent::CursorMoved(CursorPosition::new(0.0, 0.0)));

        let outcome = session.handle(SessionEvent::Next);
        assert_eq!(outcome.probe.map(|p| p.channels), Some([2, 2, 2]));

        session.handle(SessionEvent::CursorLeft);
        assert!(session.handle(SessionEvent::Next).probe.is_none());
    }

    #[test]
    fn disabled_probe_reports_nothing() {
        let entries = vec![entry("a.webp", solid(4, 2, [1, 1, 1]))];
        let options = SessionOptions {
            pixel_probe: false,
            ..SessionOptions::default()
        };
        let mut session = ViewerSession::new(ImageCollection::new(entries), options).unwrap();
        let outcome = session.handle(SessionEvent::CursorMoved(CursorPosition::new(1.0, 1.0)));
        assert!(outcome.probe.is_none());
    }

    #[test]
    fn exit_is_reported() {
        let mut session = session_with(1);
        assert_eq!(session.handle(SessionEvent::Exit).effect, Effect::Exit);
    }

    #[test]
    fn empty_collection_refuses_to_start() {
        let err = ViewerSession::new(ImageCollection::default(), SessionOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::EmptyCollection));

        let only_placeholders = ImageCollection::new(vec![
            entry("a.png", DecodedImage::placeholder()),
            entry("b.gif", DecodedImage::placeholder()),
        ]);
        assert!(matches!(
            ViewerSession::new(only_placeholders, SessionOptions::default()),
            Err(Error::EmptyCollection)
        ));
    }

    #[test]
    fn placeholder_first_entry_borrows_ratio_from_next_image() {
        let collection = ImageCollection::new(vec![
            entry("a.png", DecodedImage::placeholder()),
            entry("b.webp", solid(30, 10, [0; 3])),
        ]);
        let mut session = ViewerSession::new(collection, SessionOptions::default()).unwrap();

        assert_eq!(session.current_index(), 0);
        assert_abs_diff_eq!(session.aspect_ratio().value(), 3.0, epsilon = F32_EPSILON);
        assert_eq!(session.initial_window_size(), WindowSize::new(30, 10));
        let outcome = session.handle(SessionEvent::CursorMoved(CursorPosition::new(1.0, 1.0)));
        assert!(outcome.probe.is_none());
    }

    #[test]
    fn large_images_open_scaled_down() {
        let entries = vec![entry("big.webp", solid(400, 100, [0; 3]))];
        let options = SessionOptions {
            max_initial_size: WindowSize::new(200, 200),
            ..SessionOptions::default()
        };
        let session = ViewerSession::new(ImageCollection::new(entries), options).unwrap();
        assert_eq!(session.initial_window_size(), WindowSize::new(200, 50));
        assert_eq!(session.view_size(), WindowSize::new(200, 50));
    }
}
