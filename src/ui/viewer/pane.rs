// SPDX-License-Identifier: MPL-2.0
//! Page pane: renders the current page bitmap inside a scrollable surface.

use iced::widget::image::{Handle, Image};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{container, Container, Id, Scrollable};
use iced::{Element, Length, Theme};

/// Identifier used for the page scrollable widget.
pub const SCROLLABLE_ID: &str = "reader-page-scrollable";

/// Renders the page bitmap, centered and scrollable in both directions
/// when it overflows the viewport.
pub fn view<'a, Message: 'a>(handle: &Handle) -> Element<'a, Message> {
    let page = Image::new(handle.clone());

    let content = Container::new(page)
        .width(Length::Shrink)
        .height(Length::Shrink)
        .padding(16);

    let scroll = Scrollable::new(
        Container::new(content)
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center),
    )
    .id(Id::new(SCROLLABLE_ID))
    .direction(Direction::Both {
        vertical: Scrollbar::default(),
        horizontal: Scrollbar::default(),
    })
    .width(Length::Fill)
    .height(Length::Fill);

    Container::new(scroll)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(pane_background)
        .into()
}

/// Dimmed backdrop behind the rendered page.
fn pane_background(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(iced::Background::Color(palette.background.weak.color)),
        ..Default::default()
    }
}
