// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! This module provides the hamburger menu that appears at the top of the
//! reader screen. The menu provides access to Open, Settings, and About.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    OpenFile,
    OpenSettings,
    OpenAbout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenFileDialog,
    OpenSettings,
    OpenAbout,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::OpenFile => {
            *menu_open = false;
            Event::OpenFileDialog
        }
        Message::OpenSettings => {
            *menu_open = false;
            Event::OpenSettings
        }
        Message::OpenAbout => {
            *menu_open = false;
            Event::OpenAbout
        }
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar());

    if ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

/// Build the top bar with the hamburger menu button.
fn build_top_bar<'a>() -> Element<'a, Message> {
    let menu_button = button(Text::new("☰"))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(menu_button);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .into()
}

/// Build the dropdown menu with Open, Settings, and About options.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let open_item = build_menu_item(ctx.i18n.tr("menu-open-file"), Message::OpenFile);
    let settings_item = build_menu_item(ctx.i18n.tr("menu-settings"), Message::OpenSettings);
    let about_item = build_menu_item(ctx.i18n.tr("menu-about"), Message::OpenAbout);

    let menu_column = Column::new()
        .spacing(spacing::XXS)
        .push(open_item)
        .push(settings_item)
        .push(about_item);

    Container::new(menu_column)
        .padding(spacing::XS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

/// Build a single menu item.
fn build_menu_item<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(menu_item_style)
        .into()
}

/// Style function for menu items.
fn menu_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            menu_open: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_with_menu_open() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            menu_open: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert!(matches!(event, Event::None));

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn menu_items_close_menu_and_emit_event() {
        let mut menu_open = true;

        let event = update(Message::OpenFile, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::OpenFileDialog));

        menu_open = true;
        let event = update(Message::OpenSettings, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::OpenSettings));

        menu_open = true;
        let event = update(Message::OpenAbout, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::OpenAbout));
    }
}
