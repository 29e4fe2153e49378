// SPDX-License-Identifier: MPL-2.0
//! Reader toolbar: zoom buttons, zoom label, page navigation, and direct
//! page entry.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::sizing;
use crate::ui::state::{PageState, ZoomState};
use iced::{
    alignment::Vertical,
    widget::{button, text_input, Column, Row, Space, Text},
    Element, Length,
};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    ZoomIn,
    ZoomOut,
    PreviousPage,
    NextPage,
    PageInputChanged(String),
    PageInputSubmitted,
}

pub fn view<'a>(
    ctx: ViewContext<'a>,
    zoom: &'a ZoomState,
    page: &'a PageState,
) -> Element<'a, Message> {
    let zoom_out_button = {
        let mut b = button(Text::new(ctx.i18n.tr("viewer-zoom-out-button"))).padding([6, 12]);
        if zoom.can_zoom_out() {
            b = b.on_press(Message::ZoomOut);
        }
        b
    };

    let zoom_in_button = {
        let mut b = button(Text::new(ctx.i18n.tr("viewer-zoom-in-button"))).padding([6, 12]);
        if zoom.can_zoom_in() {
            b = b.on_press(Message::ZoomIn);
        }
        b
    };

    let zoom_label = Text::new(zoom.percent_label());

    let prev_button = {
        let mut b = button(Text::new(ctx.i18n.tr("viewer-prev-button"))).padding([6, 12]);
        if page.can_go_previous() {
            b = b.on_press(Message::PreviousPage);
        }
        b
    };

    let next_button = {
        let mut b = button(Text::new(ctx.i18n.tr("viewer-next-button"))).padding([6, 12]);
        if page.can_go_next() {
            b = b.on_press(Message::NextPage);
        }
        b
    };

    let page_placeholder = ctx.i18n.tr("viewer-page-input-placeholder");
    let page_input = text_input(&page_placeholder, page.input_value())
        .on_input(Message::PageInputChanged)
        .on_submit(Message::PageInputSubmitted)
        .padding(6)
        .size(16)
        .width(Length::Fixed(sizing::PAGE_INPUT_WIDTH));

    let page_label = Text::new(page.label());

    let toolbar_row = Row::new()
        .spacing(10)
        .align_y(Vertical::Center)
        .push(zoom_out_button)
        .push(zoom_in_button)
        .push(zoom_label)
        .push(Space::new().width(Length::Fixed(16.0)).height(Length::Shrink))
        .push(prev_button)
        .push(next_button)
        .push(page_input)
        .push(page_label);

    let mut toolbar = Column::new().spacing(4).push(toolbar_row);

    if let Some(error_key) = page.input_error_key {
        let error_text = Text::new(ctx.i18n.tr(error_key)).size(14);
        toolbar = toolbar.push(error_text);
    }

    toolbar.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;
    use crate::ui::state::{PageState, ZoomState};

    #[test]
    fn toolbar_view_renders() {
        let i18n = I18n::default();
        let zoom = ZoomState::default();
        let mut page = PageState::default();
        page.apply(3, 12);
        let _element = view(ViewContext { i18n: &i18n }, &zoom, &page);
    }

    #[test]
    fn toolbar_view_renders_with_input_error() {
        let i18n = I18n::default();
        let zoom = ZoomState::default();
        let mut page = PageState::default();
        page.apply(1, 1);
        page.on_input_changed("abc".to_string());
        let _ = page.on_input_submitted();
        let _element = view(ViewContext { i18n: &i18n }, &zoom, &page);
    }
}
