// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module handles routing of native events (keyboard, window) to the
//! viewer component, plus the periodic tick driving notification
//! auto-dismiss.

use super::{Message, Screen};
use crate::ui::viewer::component;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Creates the appropriate event subscription based on the current screen.
///
/// File drop events are only handled on the Viewer screen; keyboard events
/// are routed to the viewer only when the Viewer screen is showing, so
/// text fields on other screens keep their input. Settings and About only
/// listen for Escape to return to the reader.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Viewer => event::listen_with(|event, status, window_id| {
            // Handle file drop only on Viewer screen
            if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
                return Some(Message::FileDropped(path.clone()));
            }

            match status {
                event::Status::Ignored => Some(Message::Viewer(component::Message::RawEvent {
                    window: window_id,
                    event: event.clone(),
                })),
                event::Status::Captured => None,
            }
        }),
        Screen::Settings | Screen::About => event::listen_with(|event, status, _window_id| {
            if matches!(status, event::Status::Captured) {
                return None;
            }

            match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Escape),
                    ..
                }) => Some(Message::SwitchScreen(Screen::Viewer)),
                _ => None,
            }
        }),
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(200)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
