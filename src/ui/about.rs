// SPDX-License-Identifier: MPL-2.0
//! About screen with application version and credits.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Text},
    Element, Length,
};

/// Messages emitted by the about screen.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
}

/// Renders the about screen.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("about-title")).size(typography::TITLE_LG);

    let description = Text::new(i18n.tr("about-description")).size(typography::BODY);

    let version = Text::new(format!(
        "{}: {}",
        i18n.tr("about-version-label"),
        env!("CARGO_PKG_VERSION")
    ))
    .size(typography::CAPTION);

    let back_button = button(Text::new(i18n.tr("about-back-button"))).on_press(Message::Back);

    let content = Column::new()
        .push(title)
        .push(description)
        .push(version)
        .push(back_button)
        .spacing(spacing::LG)
        .align_x(Horizontal::Center);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_view_renders() {
        let i18n = I18n::default();
        let _element = view(&i18n);
    }
}
