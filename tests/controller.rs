// SPDX-License-Identifier: MPL-2.0
//! Controller-level integration tests with scripted document source and
//! renderer implementations.

use pdf_lens::application::port::{
    DocumentError, DocumentHandle, DocumentSource, OpenedDocument, PageHandle, PageRenderer,
    RenderError, RenderedPage,
};
use pdf_lens::application::{ViewError, ViewState, ViewStateController};
use pdf_lens::domain::reader::{PageNumber, ZoomLevel};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Scripted engine: per-path page counts, switchable failure modes, and a
/// record of every render request that reached the renderer.
#[derive(Default)]
struct ScriptedEngine {
    page_count: u32,
    missing_paths: Vec<&'static str>,
    render_fails: Mutex<bool>,
    next_id: AtomicU64,
    renders: Mutex<Vec<(u32, f32)>>,
}

impl ScriptedEngine {
    fn new(page_count: u32) -> Arc<Self> {
        Arc::new(Self {
            page_count,
            next_id: AtomicU64::new(1),
            ..Self::default()
        })
    }

    fn with_missing(page_count: u32, missing: Vec<&'static str>) -> Arc<Self> {
        Arc::new(Self {
            page_count,
            missing_paths: missing,
            next_id: AtomicU64::new(1),
            ..Self::default()
        })
    }

    fn set_render_fails(&self, fails: bool) {
        *self.render_fails.lock().expect("render flag lock") = fails;
    }

    fn rendered_requests(&self) -> Vec<(u32, f32)> {
        self.renders.lock().expect("render log lock").clone()
    }
}

impl DocumentSource for ScriptedEngine {
    fn load(&self, locator: &Path) -> Result<OpenedDocument, DocumentError> {
        let name = locator.to_string_lossy();
        if self.missing_paths.iter().any(|missing| name.contains(missing)) {
            return Err(DocumentError::NotFound);
        }

        Ok(OpenedDocument {
            handle: DocumentHandle::from_raw(self.next_id.fetch_add(1, Ordering::Relaxed)),
            page_count: self.page_count,
            title: locator
                .file_name()
                .and_then(|n| n.to_str())
                .map(String::from),
        })
    }

    fn page(&self, handle: DocumentHandle, index: PageNumber) -> Result<PageHandle, DocumentError> {
        if index.get() > self.page_count {
            return Err(DocumentError::PageOutOfBounds {
                index: index.get(),
                count: self.page_count,
            });
        }
        Ok(PageHandle::new(handle, index))
    }

    fn close(&self, _handle: DocumentHandle) {}

    fn supports(&self, locator: &Path) -> bool {
        locator
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
    }
}

impl PageRenderer for ScriptedEngine {
    fn render(&self, page: &PageHandle, zoom: ZoomLevel) -> Result<RenderedPage, RenderError> {
        if *self.render_fails.lock().expect("render flag lock") {
            return Err(RenderError::Failed("scripted failure".to_string()));
        }

        self.renders
            .lock()
            .expect("render log lock")
            .push((page.page().get(), zoom.factor()));
        RenderedPage::from_rgba(2, 2, vec![255_u8; 16])
    }
}

fn controller_for(engine: &Arc<ScriptedEngine>) -> ViewStateController {
    ViewStateController::new(
        Arc::clone(engine) as Arc<dyn DocumentSource>,
        Arc::clone(engine) as Arc<dyn PageRenderer>,
    )
}

#[test]
fn initial_state_is_empty() {
    let engine = ScriptedEngine::new(10);
    let controller = controller_for(&engine);

    assert_eq!(controller.state(), &ViewState::default());
    assert_eq!(controller.state().total, 0);
    assert_eq!(controller.state().current, 0);
    assert!((controller.state().zoom.factor() - 1.0).abs() < f32::EPSILON);
}

#[test]
fn open_document_renders_first_page() {
    let engine = ScriptedEngine::new(10);
    let mut controller = controller_for(&engine);

    let view = controller
        .open_document(Path::new("manual.pdf"))
        .expect("open should succeed");

    assert_eq!(view.state.current, 1);
    assert_eq!(view.state.total, 10);
    assert_eq!(view.title.as_deref(), Some("manual.pdf"));
    assert_eq!(controller.locator(), Some(Path::new("manual.pdf")));
    assert_eq!(engine.rendered_requests(), vec![(1, 1.0)]);
}

#[test]
fn set_page_and_zoom_clamps_current_into_range() {
    let engine = ScriptedEngine::new(10);
    let mut controller = controller_for(&engine);
    controller
        .open_document(Path::new("manual.pdf"))
        .expect("open should succeed");
    controller
        .set_page_and_zoom(5, 1.0)
        .expect("page 5 should render");
    assert_eq!(controller.state().current, 5);

    // total=10, current=5: request -3 lands on 1, request 99 lands on 10.
    let view = controller
        .set_page_and_zoom(-3, 1.0)
        .expect("negative request clamps");
    assert_eq!(view.state.current, 1);

    let view = controller
        .set_page_and_zoom(99, 1.0)
        .expect("oversized request clamps");
    assert_eq!(view.state.current, 10);
}

#[test]
fn renderer_only_ever_sees_clamped_values() {
    let engine = ScriptedEngine::new(10);
    let mut controller = controller_for(&engine);
    controller
        .open_document(Path::new("manual.pdf"))
        .expect("open should succeed");

    let _ = controller.set_page_and_zoom(-3, -2.0);
    let _ = controller.set_page_and_zoom(99, 0.0);

    for (page, zoom) in engine.rendered_requests() {
        assert!((1..=10).contains(&page));
        assert!(zoom > 0.0);
    }
}

#[test]
fn failed_open_leaves_previous_state_byte_for_byte() {
    let engine = ScriptedEngine::with_missing(10, vec!["missing"]);
    let mut controller = controller_for(&engine);

    controller
        .open_document(Path::new("manual.pdf"))
        .expect("open should succeed");
    controller
        .set_page_and_zoom(7, 1.4)
        .expect("view change should succeed");
    let before = controller.state().clone();

    let result = controller.open_document(Path::new("missing.pdf"));
    assert!(matches!(
        result,
        Err(ViewError::Load(DocumentError::NotFound))
    ));
    assert_eq!(controller.state(), &before);

    // The surviving document still responds to view changes.
    let view = controller
        .set_page_and_zoom(8, 1.4)
        .expect("old document still usable");
    assert_eq!(view.state.current, 8);
}

#[test]
fn failed_render_leaves_state_unchanged() {
    let engine = ScriptedEngine::new(10);
    let mut controller = controller_for(&engine);
    controller
        .open_document(Path::new("manual.pdf"))
        .expect("open should succeed");
    let before = controller.state().clone();

    engine.set_render_fails(true);
    let result = controller.set_page_and_zoom(2, 2.0);
    assert!(matches!(result, Err(ViewError::Render(_))));
    assert_eq!(controller.state(), &before);

    engine.set_render_fails(false);
    let view = controller
        .set_page_and_zoom(2, 2.0)
        .expect("render recovers");
    assert_eq!(view.state.current, 2);
}

#[test]
fn open_resets_current_page_on_reopen() {
    let engine = ScriptedEngine::new(6);
    let mut controller = controller_for(&engine);

    controller
        .open_document(Path::new("first.pdf"))
        .expect("open should succeed");
    controller
        .set_page_and_zoom(4, 2.5)
        .expect("view change should succeed");

    let view = controller
        .open_document(Path::new("second.pdf"))
        .expect("reopen should succeed");
    assert_eq!(view.state.current, 1);
    assert!((view.state.zoom.factor() - 1.0).abs() < f32::EPSILON);
}

#[test]
fn operations_without_document_are_rejected() {
    let engine = ScriptedEngine::new(6);
    let mut controller = controller_for(&engine);

    let result = controller.set_page_and_zoom(3, 1.0);
    assert!(matches!(
        result,
        Err(ViewError::Load(DocumentError::NoDocument))
    ));
    assert!(engine.rendered_requests().is_empty());
}

#[test]
fn single_page_document_pins_navigation() {
    let engine = ScriptedEngine::new(1);
    let mut controller = controller_for(&engine);
    controller
        .open_document(Path::new("single.pdf"))
        .expect("open should succeed");

    let view = controller
        .set_page_and_zoom(2, 1.0)
        .expect("clamped request renders");
    assert_eq!(view.state.current, 1);

    let view = controller
        .set_page_and_zoom(0, 1.0)
        .expect("clamped request renders");
    assert_eq!(view.state.current, 1);
}

#[test]
fn zoom_commits_only_on_success() {
    let engine = ScriptedEngine::new(3);
    let mut controller = controller_for(&engine);
    controller
        .open_document(Path::new("manual.pdf"))
        .expect("open should succeed");

    controller
        .set_page_and_zoom(1, 1.6)
        .expect("zoom change should render");
    assert!((controller.state().zoom.factor() - 1.6).abs() < f32::EPSILON);

    engine.set_render_fails(true);
    let _ = controller.set_page_and_zoom(1, 3.0);
    assert!((controller.state().zoom.factor() - 1.6).abs() < f32::EPSILON);
}
