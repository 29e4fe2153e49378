// SPDX-License-Identifier: MPL-2.0
//! Ports: abstract interfaces between the application layer and
//! infrastructure adapters.
//!
//! The controller only ever talks to a [`DocumentSource`] and a
//! [`PageRenderer`]; the pdfium adapter in `infrastructure::pdfium`
//! implements both.

pub mod document;
pub mod render;

pub use document::{DocumentError, DocumentHandle, DocumentSource, OpenedDocument, PageHandle};
pub use render::{PageRenderer, RenderError, RenderedPage};
