// SPDX-License-Identifier: MPL-2.0
//! Pdfium-backed document engine.
//!
//! [`PdfiumEngine`] implements both the [`DocumentSource`] and
//! [`PageRenderer`] ports over the `pdfium-render` bindings, so the rest of
//! the application never touches the PDF library directly.
//!
//! [`DocumentSource`]: crate::application::port::DocumentSource
//! [`PageRenderer`]: crate::application::port::PageRenderer

mod engine;

pub use engine::PdfiumEngine;
