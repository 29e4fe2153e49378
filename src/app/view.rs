// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen based on application state, with the toast overlay stacked on
//! top.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::about;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::settings::State as SettingsState;
use crate::ui::viewer::component;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub viewer: &'a component::State,
    pub settings: &'a SettingsState,
    pub menu_open: bool,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Viewer => view_viewer(ctx.viewer, ctx.i18n, ctx.menu_open),
        Screen::Settings => ctx.settings.view(ctx.i18n).map(Message::Settings),
        Screen::About => about::view(ctx.i18n).map(Message::About),
    };

    let content = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    if ctx.notifications.has_notifications() {
        let overlay =
            Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);
        Stack::new().push(content).push(overlay).into()
    } else {
        content.into()
    }
}

fn view_viewer<'a>(
    viewer: &'a component::State,
    i18n: &'a I18n,
    menu_open: bool,
) -> Element<'a, Message> {
    let navbar_view = navbar::view(NavbarViewContext { i18n, menu_open }).map(Message::Navbar);

    let viewer_content = viewer
        .view(component::ViewEnv { i18n })
        .map(Message::Viewer);

    Column::new()
        .push(navbar_view)
        .push(viewer_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
