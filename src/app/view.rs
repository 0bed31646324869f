// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The current image is stretched over the whole window with nearest
//! filtering, so window coordinates map linearly onto source pixels.

use super::Message;
use iced::widget::image::{FilterMethod, Handle};
use iced::widget::{image, Container, Text};
use iced::{ContentFit, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    /// Pixels of the current entry; `None` for placeholders.
    pub handle: Option<&'a Handle>,
    pub title: String,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match ctx.handle {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Fill)
            .filter_method(FilterMethod::Nearest)
            .into(),
        None => Text::new(format!("Unsupported: {}", ctx.title)).into(),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
