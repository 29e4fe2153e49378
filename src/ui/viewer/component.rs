// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The component is pure UI state: it translates widget and keyboard
//! messages into [`Effect`]s for the application shell, and applies the
//! results of controller operations when they come back as messages. Each
//! outgoing request carries a generation number; responses from superseded
//! requests are dropped so a stale render can never overwrite a newer one.

use super::{empty_state, pane, toolbar};
use crate::application::{RenderedView, ViewError};
use crate::i18n::fluent::I18n;
use crate::ui::state::{PageState, ZoomState, ZoomStep};
use iced::widget::image::Handle;
use iced::widget::{Column, Container, Text};
use iced::{event, keyboard, window, Element, Length};
use std::path::PathBuf;

/// Messages emitted by reader widgets and controller tasks.
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(toolbar::Message),
    /// Request to open file dialog from the empty state.
    OpenFileRequested,
    /// A document open operation finished.
    DocumentOpened {
        generation: u64,
        result: Result<RenderedView, ViewError>,
    },
    /// A page/zoom change finished.
    ViewRendered {
        generation: u64,
        result: Result<RenderedView, ViewError>,
    },
    /// Clear all document state (view teardown).
    ClearDocument,
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
}

/// Side effects the application should perform after handling a viewer
/// message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Request to open the file dialog.
    OpenFileDialog,
    /// Open the document at the given path.
    OpenDocument { path: PathBuf, generation: u64 },
    /// Render `page` at `zoom`; both values may be out of range, the
    /// controller clamps.
    RequestView {
        page: i64,
        zoom: f32,
        generation: u64,
    },
    /// Show an error notification for a failed operation.
    ShowErrorNotification { key: &'static str },
}

/// Environment information required to render the viewer.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

/// Complete viewer component state.
///
/// A document counts as open exactly when a page bitmap is present; the
/// two always change together.
#[derive(Debug, Default)]
pub struct State {
    /// Bitmap of the current page, ready for the image widget.
    page_image: Option<Handle>,
    pub zoom: ZoomState,
    pub page: PageState,
    /// Title reported when the document was opened (usually the filename).
    document_title: Option<String>,
    /// Path of the open document.
    pub current_document_path: Option<PathBuf>,
    is_loading: bool,
    /// Generation of the most recent request; stale responses are dropped.
    generation: u64,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_document(&self) -> bool {
        self.page_image.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn document_title(&self) -> Option<&str> {
        self.document_title.as_deref()
    }

    pub fn zoom_step(&self) -> ZoomStep {
        self.zoom.step
    }

    pub fn set_zoom_step(&mut self, step: ZoomStep) {
        self.zoom.step = step;
    }

    /// Starts a document open request for `path`.
    ///
    /// Used by the app for CLI arguments, dialog results, and file drops.
    pub fn request_open(&mut self, path: PathBuf) -> Effect {
        self.is_loading = true;
        self.current_document_path = Some(path.clone());
        Effect::OpenDocument {
            path,
            generation: self.next_generation(),
        }
    }

    /// Handles a message, returning the side effect for the app to run.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Toolbar(toolbar_message) => self.update_toolbar(toolbar_message),
            Message::OpenFileRequested => Effect::OpenFileDialog,
            Message::DocumentOpened { generation, result } => {
                self.apply_result(generation, result)
            }
            Message::ViewRendered { generation, result } => self.apply_result(generation, result),
            Message::ClearDocument => {
                self.clear();
                Effect::None
            }
            Message::RawEvent { event, .. } => self.update_raw_event(&event),
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let Some(handle) = &self.page_image else {
            if self.is_loading {
                return Container::new(Text::new(env.i18n.tr("viewer-loading")))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(iced::alignment::Horizontal::Center)
                    .align_y(iced::alignment::Vertical::Center)
                    .into();
            }
            return empty_state::view(env.i18n);
        };

        let toolbar = toolbar::view(
            toolbar::ViewContext { i18n: env.i18n },
            &self.zoom,
            &self.page,
        )
        .map(Message::Toolbar);

        Column::new()
            .push(Container::new(toolbar).padding(8).width(Length::Fill))
            .push(pane::view(handle))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn update_toolbar(&mut self, message: toolbar::Message) -> Effect {
        match message {
            toolbar::Message::ZoomIn => {
                self.request_view(i64::from(self.page.current()), self.zoom.zoom_in_target())
            }
            toolbar::Message::ZoomOut => {
                self.request_view(i64::from(self.page.current()), self.zoom.zoom_out_target())
            }
            toolbar::Message::PreviousPage => {
                self.request_view(self.page.previous_target(), self.zoom.zoom().factor())
            }
            toolbar::Message::NextPage => {
                self.request_view(self.page.next_target(), self.zoom.zoom().factor())
            }
            toolbar::Message::PageInputChanged(input) => {
                self.page.on_input_changed(input);
                Effect::None
            }
            toolbar::Message::PageInputSubmitted => match self.page.on_input_submitted() {
                Some(requested) => self.request_view(requested, self.zoom.zoom().factor()),
                None => Effect::None,
            },
        }
    }

    fn update_raw_event(&mut self, raw: &event::Event) -> Effect {
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = raw else {
            return Effect::None;
        };

        if !self.has_document() {
            return Effect::None;
        }

        match key {
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                self.request_view(self.page.previous_target(), self.zoom.zoom().factor())
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                self.request_view(self.page.next_target(), self.zoom.zoom().factor())
            }
            keyboard::Key::Character(character) => match character.as_str() {
                "+" | "=" => {
                    self.request_view(i64::from(self.page.current()), self.zoom.zoom_in_target())
                }
                "-" => {
                    self.request_view(i64::from(self.page.current()), self.zoom.zoom_out_target())
                }
                _ => Effect::None,
            },
            _ => Effect::None,
        }
    }

    /// Issues a view request unless no document is open.
    fn request_view(&mut self, page: i64, zoom: f32) -> Effect {
        if !self.has_document() {
            return Effect::None;
        }
        Effect::RequestView {
            page,
            zoom,
            generation: self.next_generation(),
        }
    }

    /// Applies a controller result, dropping superseded responses.
    fn apply_result(
        &mut self,
        generation: u64,
        result: Result<RenderedView, ViewError>,
    ) -> Effect {
        if generation != self.generation {
            // A newer request is in flight; this response lost the race.
            return Effect::None;
        }

        self.is_loading = false;

        match result {
            Ok(view) => {
                self.document_title = view.title;
                self.page.apply(view.state.current, view.state.total);
                self.zoom.apply(view.state.zoom);
                self.page_image = Some(Handle::from_rgba(
                    view.image.width(),
                    view.image.height(),
                    view.image.pixels().to_vec(),
                ));
                Effect::None
            }
            Err(err) => Effect::ShowErrorNotification {
                key: err.i18n_key(),
            },
        }
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn clear(&mut self) {
        self.page_image = None;
        self.document_title = None;
        self.current_document_path = None;
        self.is_loading = false;
        self.page.reset();
        self.zoom.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{DocumentError, DocumentHandle, RenderedPage};
    use crate::application::ViewState;
    use crate::domain::reader::ZoomLevel;

    fn rendered_view(current: u32, total: u32, zoom: f32) -> RenderedView {
        RenderedView {
            state: ViewState {
                document: Some(DocumentHandle::from_raw(1)),
                total,
                current,
                zoom: ZoomLevel::new(zoom),
            },
            image: RenderedPage::from_rgba(1, 1, vec![0_u8; 4]).expect("valid bitmap"),
            title: Some("report.pdf".to_string()),
        }
    }

    fn opened_state() -> State {
        let mut state = State::new();
        let effect = state.request_open(PathBuf::from("report.pdf"));
        let Effect::OpenDocument { generation, .. } = effect else {
            panic!("expected open effect");
        };
        let _ = state.update(Message::DocumentOpened {
            generation,
            result: Ok(rendered_view(1, 10, 1.0)),
        });
        state
    }

    #[test]
    fn open_result_populates_document_state() {
        let state = opened_state();
        assert!(state.has_document());
        assert!(!state.is_loading());
        assert_eq!(state.page.current(), 1);
        assert_eq!(state.page.total(), 10);
        assert_eq!(state.document_title(), Some("report.pdf"));
    }

    #[test]
    fn toolbar_navigation_requests_adjacent_pages() {
        let mut state = opened_state();
        let _ = state.update(Message::ViewRendered {
            generation: state.generation,
            result: Ok(rendered_view(5, 10, 1.0)),
        });

        let effect = state.update(Message::Toolbar(toolbar::Message::NextPage));
        assert!(matches!(effect, Effect::RequestView { page: 6, .. }));

        let effect = state.update(Message::Toolbar(toolbar::Message::PreviousPage));
        assert!(matches!(effect, Effect::RequestView { page: 4, .. }));
    }

    #[test]
    fn zoom_buttons_request_stepped_factors() {
        let mut state = opened_state();

        let effect = state.update(Message::Toolbar(toolbar::Message::ZoomIn));
        let Effect::RequestView { page, zoom, .. } = effect else {
            panic!("expected view request");
        };
        assert_eq!(page, 1);
        assert!((zoom - 1.2).abs() < f32::EPSILON);
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut state = opened_state();

        // First request loses the race against a second one.
        let Effect::RequestView {
            generation: stale, ..
        } = state.update(Message::Toolbar(toolbar::Message::NextPage))
        else {
            panic!("expected view request");
        };
        let _ = state.update(Message::Toolbar(toolbar::Message::NextPage));

        let effect = state.update(Message::ViewRendered {
            generation: stale,
            result: Ok(rendered_view(9, 10, 3.0)),
        });

        assert_eq!(effect, Effect::None);
        // The stale page 9 never lands.
        assert_eq!(state.page.current(), 1);
    }

    #[test]
    fn failed_result_surfaces_notification_and_keeps_state() {
        let mut state = opened_state();

        let Effect::RequestView { generation, .. } =
            state.update(Message::Toolbar(toolbar::Message::NextPage))
        else {
            panic!("expected view request");
        };

        let effect = state.update(Message::ViewRendered {
            generation,
            result: Err(ViewError::Load(DocumentError::NotFound)),
        });

        assert!(matches!(effect, Effect::ShowErrorNotification { .. }));
        assert_eq!(state.page.current(), 1);
        assert!(state.has_document());
    }

    #[test]
    fn requests_without_document_are_ignored() {
        let mut state = State::new();
        let effect = state.update(Message::Toolbar(toolbar::Message::ZoomIn));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn clear_document_resets_everything() {
        let mut state = opened_state();
        let _ = state.update(Message::ClearDocument);

        assert!(!state.has_document());
        assert_eq!(state.page.total(), 0);
        assert!(state.document_title().is_none());
    }

    #[test]
    fn arrow_keys_navigate_pages() {
        let mut state = opened_state();
        let _ = state.update(Message::ViewRendered {
            generation: state.generation,
            result: Ok(rendered_view(5, 10, 1.0)),
        });

        let effect = state.update(Message::RawEvent {
            window: window::Id::unique(),
            event: event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                modified_key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                physical_key: keyboard::key::Physical::Code(keyboard::key::Code::ArrowRight),
                location: keyboard::Location::Standard,
                modifiers: keyboard::Modifiers::default(),
                text: None,
                repeat: false,
            }),
        });

        assert!(matches!(effect, Effect::RequestView { page: 6, .. }));
    }
}
