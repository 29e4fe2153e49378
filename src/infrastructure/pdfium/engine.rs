// SPDX-License-Identifier: MPL-2.0
//! Pdfium adapter: concrete [`DocumentSource`] and [`PageRenderer`].
//!
//! Loaded documents are kept in a registry keyed by the opaque handle id,
//! so the application layer only ever sees [`DocumentHandle`] values. The
//! pdfium bindings are initialized once per process; binding looks for a
//! bundled library next to the executable first and falls back to the
//! system library.

use crate::application::port::{
    DocumentError, DocumentHandle, DocumentSource, OpenedDocument, PageHandle, PageRenderer,
    RenderError, RenderedPage,
};
use crate::domain::reader::{PageNumber, ZoomLevel};
use pdfium_render::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock};

/// Largest bitmap edge the engine will ask pdfium for. Anything bigger is
/// rejected as [`RenderError::SurfaceTooLarge`] before allocation.
const MAX_RENDER_DIM: u32 = 16_384;

static PDFIUM: OnceLock<Result<Pdfium, String>> = OnceLock::new();

/// Returns the process-wide pdfium instance, binding it on first use.
fn pdfium() -> Result<&'static Pdfium, DocumentError> {
    let bound = PDFIUM.get_or_init(|| {
        Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map(Pdfium::new)
            .map_err(|err| format!("{err:?}"))
    });

    match bound {
        Ok(pdfium) => Ok(pdfium),
        Err(msg) => Err(DocumentError::Io(format!("pdfium unavailable: {msg}"))),
    }
}

/// Pdfium-backed engine implementing both application ports.
///
/// A single engine instance is shared by the whole application; document
/// handles stay valid until [`DocumentSource::close`] releases them.
pub struct PdfiumEngine {
    documents: Mutex<HashMap<u64, PdfDocument<'static>>>,
    next_id: AtomicU64,
}

impl PdfiumEngine {
    /// Creates an engine with an empty document registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            documents: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Classifies a pdfium load failure into a [`DocumentError`].
    fn classify_load_error(locator: &Path, err: &PdfiumError) -> DocumentError {
        if !locator.exists() {
            return DocumentError::NotFound;
        }

        let msg = format!("{err:?}");
        if msg.contains("Password") {
            DocumentError::PasswordProtected
        } else if msg.contains("Format") || msg.contains("Parse") {
            DocumentError::Malformed(msg)
        } else {
            DocumentError::Io(msg)
        }
    }
}

impl Default for PdfiumEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PdfiumEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.documents.lock().map(|docs| docs.len()).unwrap_or(0);
        f.debug_struct("PdfiumEngine")
            .field("open_documents", &count)
            .finish()
    }
}

impl DocumentSource for PdfiumEngine {
    fn load(&self, locator: &Path) -> Result<OpenedDocument, DocumentError> {
        let pdfium = pdfium()?;

        let document = pdfium
            .load_pdf_from_file(locator, None)
            .map_err(|err| Self::classify_load_error(locator, &err))?;

        let page_count = u32::from(document.pages().len());
        if page_count == 0 {
            return Err(DocumentError::Malformed(
                "document contains no pages".to_string(),
            ));
        }

        let title = locator
            .file_name()
            .and_then(|name| name.to_str())
            .map(String::from);

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.documents
            .lock()
            .map_err(|_| DocumentError::Io("document registry poisoned".to_string()))?
            .insert(id, document);

        Ok(OpenedDocument {
            handle: DocumentHandle::from_raw(id),
            page_count,
            title,
        })
    }

    fn page(&self, handle: DocumentHandle, index: PageNumber) -> Result<PageHandle, DocumentError> {
        let documents = self
            .documents
            .lock()
            .map_err(|_| DocumentError::Io("document registry poisoned".to_string()))?;
        let document = documents
            .get(&handle.raw())
            .ok_or(DocumentError::NoDocument)?;

        let count = u32::from(document.pages().len());
        if index.get() > count {
            return Err(DocumentError::PageOutOfBounds {
                index: index.get(),
                count,
            });
        }

        Ok(PageHandle::new(handle, index))
    }

    fn close(&self, handle: DocumentHandle) {
        if let Ok(mut documents) = self.documents.lock() {
            documents.remove(&handle.raw());
        }
    }

    fn supports(&self, locator: &Path) -> bool {
        locator
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
    }
}

impl PageRenderer for PdfiumEngine {
    fn render(&self, page: &PageHandle, zoom: ZoomLevel) -> Result<RenderedPage, RenderError> {
        let documents = self
            .documents
            .lock()
            .map_err(|_| RenderError::Failed("document registry poisoned".to_string()))?;
        let document = documents
            .get(&page.document().raw())
            .ok_or_else(|| RenderError::Failed("document was released".to_string()))?;

        let index = page.page().zero_based() as u16;
        let pdf_page = document
            .pages()
            .get(index)
            .map_err(|err| RenderError::Failed(format!("{err:?}")))?;

        let (width, height) =
            scaled_page_size(pdf_page.width().value, pdf_page.height().value, zoom)?;

        let config = PdfRenderConfig::new()
            .set_target_width(width as i32)
            .set_maximum_height(height as i32);

        let bitmap = pdf_page
            .render_with_config(&config)
            .map_err(|err| RenderError::Failed(format!("{err:?}")))?;

        let image: image_rs::RgbaImage = bitmap.as_image().into_rgba8();
        let (width, height) = image.dimensions();
        RenderedPage::from_rgba(width, height, image.into_raw())
    }
}

/// Scales a page's point dimensions by the zoom factor, rejecting surfaces
/// pdfium could not allocate.
fn scaled_page_size(
    width_pts: f32,
    height_pts: f32,
    zoom: ZoomLevel,
) -> Result<(u32, u32), RenderError> {
    let width = (width_pts * zoom.factor()).round().max(1.0);
    let height = (height_pts * zoom.factor()).round().max(1.0);

    if width > MAX_RENDER_DIM as f32 || height > MAX_RENDER_DIM as f32 {
        return Err(RenderError::SurfaceTooLarge);
    }

    Ok((width as u32, height as u32))
}
