// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the reader and
//! settings views.
//!
//! The `App` struct wires together the domains (reader, localization,
//! settings) and translates messages into side effects like config
//! persistence or document loading. This file intentionally keeps policy
//! decisions (window size, persistence format, localization switching)
//! close to the main update loop so it is easy to audit user-facing
//! behavior.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::ViewStateController;
use crate::i18n::fluent::I18n;
use crate::infrastructure::pdfium::PdfiumEngine;
use crate::ui::notifications;
use crate::ui::settings::State as SettingsState;
use crate::ui::state::ZoomStep;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::component;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use update::SharedController;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 500;

/// Root Iced application state that bridges UI components, localization,
/// and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    viewer: component::State,
    settings: SettingsState,
    theme_mode: ThemeMode,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// The pdfium engine behind the controller, kept for `supports` checks
    /// on dropped files.
    engine: Arc<PdfiumEngine>,
    /// View-state controller, serialized behind an async mutex.
    controller: SharedController,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("viewer_has_document", &self.viewer.has_document())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// document loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let engine = Arc::new(PdfiumEngine::new());
        let controller = Arc::new(Mutex::new(ViewStateController::new(
            Arc::clone(&engine) as Arc<dyn crate::application::port::DocumentSource>,
            Arc::clone(&engine) as Arc<dyn crate::application::port::PageRenderer>,
        )));

        let mut viewer = component::State::new();
        let zoom_step = config
            .display
            .zoom_step
            .map(ZoomStep::new)
            .unwrap_or_default();
        viewer.set_zoom_step(zoom_step);

        let theme_mode = config.general.theme_mode;

        let mut app = App {
            i18n,
            screen: Screen::Viewer,
            viewer,
            settings: SettingsState::new(zoom_step, theme_mode),
            theme_mode,
            menu_open: false,
            notifications: notifications::Manager::new(),
            engine,
            controller,
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let task = match flags.file_path {
            Some(path_str) => {
                let path = PathBuf::from(&path_str);
                let effect = app.viewer.request_open(path);
                let mut ctx = app.update_context();
                update::run_effect(&mut ctx, effect)
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.viewer.document_title() {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            viewer: &mut self.viewer,
            settings: &mut self.settings,
            menu_open: &mut self.menu_open,
            theme_mode: &mut self.theme_mode,
            notifications: &mut self.notifications,
            controller: &self.controller,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let supported = match &message {
            Message::FileDropped(path) => {
                use crate::application::port::DocumentSource;
                self.engine.supports(path)
            }
            _ => false,
        };

        let mut ctx = self.update_context();

        match message {
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::About(about_message) => update::handle_about_message(&mut ctx, about_message),
            Message::SwitchScreen(target) => {
                *ctx.screen = target;
                Task::none()
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_) => {
                ctx.notifications.tick();
                Task::none()
            }
            Message::OpenFileDialogResult(path) => {
                update::handle_open_dialog_result(&mut ctx, path)
            }
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path, supported),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            viewer: &self.viewer,
            settings: &self.settings,
            menu_open: self.menu_open,
            notifications: &self.notifications,
        })
    }
}
