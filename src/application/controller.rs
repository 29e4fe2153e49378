// SPDX-License-Identifier: MPL-2.0
//! View-state controller: the single owner of what is currently shown.
//!
//! [`ViewStateController`] keeps the [`ViewState`] record (open document,
//! page count, current page, zoom) consistent with user actions and drives
//! the render calls through the [`DocumentSource`] and [`PageRenderer`]
//! ports. State is only ever committed after the corresponding port call
//! succeeds, so a failed load or render leaves the last-known-good view
//! intact.
//!
//! The controller itself is synchronous; the application shell invokes it
//! from a blocking worker task behind an async mutex, one operation at a
//! time.

use crate::application::port::{
    DocumentError, DocumentHandle, DocumentSource, PageRenderer, RenderError, RenderedPage,
};
use crate::domain::reader::{PageNumber, ZoomLevel};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// =============================================================================
// ViewError
// =============================================================================

/// Error returned by controller operations.
///
/// Both kinds are recoverable: the controller state is unchanged and the
/// caller surfaces the message to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The document or one of its pages could not be obtained.
    Load(DocumentError),
    /// Rasterization failed.
    Render(RenderError),
}

impl ViewError {
    /// Returns the i18n message key for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ViewError::Load(err) => err.i18n_key(),
            ViewError::Render(err) => err.i18n_key(),
        }
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::Load(err) => write!(f, "Load error: {err}"),
            ViewError::Render(err) => write!(f, "Render error: {err}"),
        }
    }
}

impl std::error::Error for ViewError {}

impl From<DocumentError> for ViewError {
    fn from(err: DocumentError) -> Self {
        ViewError::Load(err)
    }
}

impl From<RenderError> for ViewError {
    fn from(err: RenderError) -> Self {
        ViewError::Render(err)
    }
}

// =============================================================================
// ViewState
// =============================================================================

/// The mutable record describing what is currently shown.
///
/// Invariant: when `total > 0`, `current` is within `[1, total]`. Before a
/// document is opened `total` and `current` are both 0. Owned exclusively
/// by [`ViewStateController`] and replaced wholesale on each successful
/// operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Handle to the open document, if any.
    pub document: Option<DocumentHandle>,
    /// Number of pages in the open document (0 when none).
    pub total: u32,
    /// Current 1-based page (0 when no document is open).
    pub current: u32,
    /// Current zoom factor.
    pub zoom: ZoomLevel,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            document: None,
            total: 0,
            current: 0,
            zoom: ZoomLevel::default(),
        }
    }
}

impl ViewState {
    /// Returns whether a document is currently open.
    #[must_use]
    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }
}

// =============================================================================
// RenderedView
// =============================================================================

/// Result of a successful controller operation: the committed state
/// snapshot plus the bitmap to display.
#[derive(Debug, Clone)]
pub struct RenderedView {
    /// The view state after the operation.
    pub state: ViewState,
    /// The rasterized current page.
    pub image: RenderedPage,
    /// Document title, populated on open.
    pub title: Option<String>,
}

// =============================================================================
// ViewStateController
// =============================================================================

/// Keeps the view state consistent with user actions and drives renders.
pub struct ViewStateController {
    source: Arc<dyn DocumentSource>,
    renderer: Arc<dyn PageRenderer>,
    state: ViewState,
    /// Locator of the open document, if any.
    locator: Option<PathBuf>,
    title: Option<String>,
}

impl ViewStateController {
    /// Creates a controller with default (empty) view state.
    pub fn new(source: Arc<dyn DocumentSource>, renderer: Arc<dyn PageRenderer>) -> Self {
        Self {
            source,
            renderer,
            state: ViewState::default(),
            locator: None,
            title: None,
        }
    }

    /// Read access to the current view state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Locator of the open document, if any.
    #[must_use]
    pub fn locator(&self) -> Option<&Path> {
        self.locator.as_deref()
    }

    /// Opens the document at `locator` and renders its first page.
    ///
    /// On success the previous document (if any) is released, `current`
    /// resets to 1, `total` is derived from the loaded document, and zoom
    /// resets to the default factor. On failure the prior state, including
    /// any previously open document, is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Load`] when the document cannot be obtained and
    /// [`ViewError::Render`] when the first page cannot be rasterized. A
    /// document that loads but fails to render is released again before
    /// returning.
    pub fn open_document(&mut self, locator: &Path) -> Result<RenderedView, ViewError> {
        let opened = self.source.load(locator)?;

        let page = PageNumber::FIRST;
        let zoom = ZoomLevel::default();

        let handle = match self.source.page(opened.handle, page) {
            Ok(handle) => handle,
            Err(err) => {
                self.source.close(opened.handle);
                return Err(err.into());
            }
        };
        let image = match self.renderer.render(&handle, zoom) {
            Ok(image) => image,
            Err(err) => {
                self.source.close(opened.handle);
                return Err(err.into());
            }
        };

        // Commit: release the replaced document only once the new one is
        // fully on screen.
        if let Some(previous) = self.state.document.take() {
            self.source.close(previous);
        }

        self.state = ViewState {
            document: Some(opened.handle),
            total: opened.page_count,
            current: page.get(),
            zoom,
        };
        self.locator = Some(locator.to_path_buf());
        self.title = opened.title.clone();

        Ok(RenderedView {
            state: self.state.clone(),
            image,
            title: opened.title,
        })
    }

    /// Renders the requested page at the requested zoom and commits both on
    /// success.
    ///
    /// `index` is clamped into `[1, total]`, so out-of-range requests from
    /// Prev/Next at the document edges saturate rather than fail. `zoom` is
    /// clamped into the valid [`ZoomLevel`] range, so a non-positive value
    /// becomes the minimum factor instead of reaching the renderer.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::NoDocument`] (wrapped) when no document is
    /// open; render failures leave `current` and `zoom` unchanged.
    pub fn set_page_and_zoom(&mut self, index: i64, zoom: f32) -> Result<RenderedView, ViewError> {
        let document = self.state.document.ok_or(DocumentError::NoDocument)?;

        let page = PageNumber::clamped(index, self.state.total);
        let zoom = ZoomLevel::new(zoom);

        let handle = self.source.page(document, page)?;
        let image = self.renderer.render(&handle, zoom)?;

        self.state.current = page.get();
        self.state.zoom = zoom;

        Ok(RenderedView {
            state: self.state.clone(),
            image,
            title: self.title.clone(),
        })
    }

    /// Releases the open document and resets the view state to defaults.
    ///
    /// Called when the owning view is torn down. Safe to call with no
    /// document open.
    pub fn close_document(&mut self) {
        if let Some(handle) = self.state.document.take() {
            self.source.close(handle);
        }
        self.state = ViewState::default();
        self.locator = None;
        self.title = None;
    }
}

impl Drop for ViewStateController {
    fn drop(&mut self) {
        self.close_document();
    }
}

impl fmt::Debug for ViewStateController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewStateController")
            .field("state", &self.state)
            .field("locator", &self.locator)
            .finish()
    }
}
