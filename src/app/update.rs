// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers for different
//! parts of the application. Viewer [`Effect`]s are executed here: they
//! become asynchronous controller tasks, file dialogs, or notifications.

use super::{config, notifications, Message, Screen};
use crate::application::port::DocumentError;
use crate::application::{RenderedView, ViewError, ViewStateController};
use crate::i18n::fluent::I18n;
use crate::ui::about;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::settings::{self, Event as SettingsEvent, State as SettingsState};
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::component::{self, Effect};
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handle to the view-state controller.
pub type SharedController = Arc<Mutex<ViewStateController>>;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub viewer: &'a mut component::State,
    pub settings: &'a mut SettingsState,
    pub menu_open: &'a mut bool,
    pub theme_mode: &'a mut ThemeMode,
    pub notifications: &'a mut notifications::Manager,
    pub controller: &'a SharedController,
}

impl UpdateContext<'_> {
    /// Persists current preferences, surfacing a toast on failure.
    fn persist_preferences(&mut self) {
        let config = config::Config {
            general: config::GeneralConfig {
                language: Some(self.i18n.current_locale().to_string()),
                theme_mode: *self.theme_mode,
            },
            display: config::DisplayConfig {
                zoom_step: Some(self.viewer.zoom_step().value()),
            },
        };

        if config::save(&config).is_err() {
            self.notifications.push(notifications::Notification::warning(
                "notification-config-save-error",
            ));
        }
    }
}

/// Handles viewer component messages.
pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: component::Message,
) -> Task<Message> {
    // A successful load should clear stale load-error toasts.
    let is_successful_load = matches!(
        &message,
        component::Message::DocumentOpened { result: Ok(_), .. }
    );

    let effect = ctx.viewer.update(message);

    if is_successful_load {
        ctx.notifications.clear_load_errors();
    }

    run_effect(ctx, effect)
}

/// Executes a viewer effect.
pub fn run_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::OpenFileDialog => open_file_dialog_task(),
        Effect::OpenDocument { path, generation } => {
            open_document_task(Arc::clone(ctx.controller), path, generation)
        }
        Effect::RequestView {
            page,
            zoom,
            generation,
        } => set_view_task(Arc::clone(ctx.controller), page, zoom, generation),
        Effect::ShowErrorNotification { key } => {
            ctx.notifications
                .push(notifications::Notification::error(key));
            Task::none()
        }
    }
}

/// Handles navbar messages.
pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::OpenFileDialog => open_file_dialog_task(),
        NavbarEvent::OpenSettings => {
            *ctx.screen = Screen::Settings;
            Task::none()
        }
        NavbarEvent::OpenAbout => {
            *ctx.screen = Screen::About;
            Task::none()
        }
    }
}

/// Handles settings screen messages.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match ctx.settings.update(message) {
        SettingsEvent::None => Task::none(),
        SettingsEvent::Back => {
            *ctx.screen = Screen::Viewer;
            Task::none()
        }
        SettingsEvent::LanguageChanged(locale) => {
            ctx.i18n.set_locale(locale);
            ctx.persist_preferences();
            Task::none()
        }
        SettingsEvent::ThemeChanged(mode) => {
            *ctx.theme_mode = mode;
            ctx.persist_preferences();
            Task::none()
        }
        SettingsEvent::ZoomStepChanged(step) => {
            ctx.viewer.set_zoom_step(step);
            ctx.persist_preferences();
            Task::none()
        }
    }
}

/// Handles about screen messages.
pub fn handle_about_message(ctx: &mut UpdateContext<'_>, message: about::Message) -> Task<Message> {
    match message {
        about::Message::Back => {
            *ctx.screen = Screen::Viewer;
            Task::none()
        }
    }
}

/// Handles the result of the open file dialog.
pub fn handle_open_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    match path {
        Some(path) => {
            let effect = ctx.viewer.request_open(path);
            run_effect(ctx, effect)
        }
        None => Task::none(),
    }
}

/// Handles a file dropped on the window.
///
/// Unsupported file types are rejected with a toast instead of a failed
/// load round-trip.
pub fn handle_file_dropped(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    supported: bool,
) -> Task<Message> {
    if !supported {
        ctx.notifications.push(notifications::Notification::warning(
            "notification-unsupported-file",
        ));
        return Task::none();
    }

    let effect = ctx.viewer.request_open(path);
    run_effect(ctx, effect)
}

/// Opens the system file dialog filtered to PDF documents.
fn open_file_dialog_task() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("PDF Document", &["pdf"])
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Spawns the blocking document-open operation on a worker thread.
fn open_document_task(
    controller: SharedController,
    path: PathBuf,
    generation: u64,
) -> Task<Message> {
    Task::perform(
        async move { run_controller_op(controller, move |c| c.open_document(&path)).await },
        move |result| Message::Viewer(component::Message::DocumentOpened { generation, result }),
    )
}

/// Spawns the blocking page/zoom operation on a worker thread.
fn set_view_task(
    controller: SharedController,
    page: i64,
    zoom: f32,
    generation: u64,
) -> Task<Message> {
    Task::perform(
        async move { run_controller_op(controller, move |c| c.set_page_and_zoom(page, zoom)).await },
        move |result| Message::Viewer(component::Message::ViewRendered { generation, result }),
    )
}

/// Runs a controller operation inside `spawn_blocking`, serialized by the
/// controller mutex. One suspend point per UI operation.
async fn run_controller_op<F>(
    controller: SharedController,
    op: F,
) -> Result<RenderedView, ViewError>
where
    F: FnOnce(&mut ViewStateController) -> Result<RenderedView, ViewError> + Send + 'static,
{
    let joined = tokio::task::spawn_blocking(move || {
        let mut guard = controller.blocking_lock();
        op(&mut guard)
    })
    .await;

    match joined {
        Ok(result) => result,
        Err(join_err) => Err(ViewError::Load(DocumentError::Io(join_err.to_string()))),
    }
}
