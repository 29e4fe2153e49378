// SPDX-License-Identifier: MPL-2.0
//! Document loading port definition.
//!
//! This module defines the [`DocumentSource`] trait for loading PDF
//! documents and resolving their pages. Infrastructure adapters implement
//! this trait to provide concrete loading logic.

use crate::domain::reader::PageNumber;
use std::fmt;
use std::path::Path;

// =============================================================================
// DocumentError
// =============================================================================

/// Errors that can occur while obtaining a document or one of its pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The file was not found.
    NotFound,

    /// The file could not be read (I/O error).
    Io(String),

    /// The file exists but is not a well-formed document.
    Malformed(String),

    /// The document requires a password to open.
    PasswordProtected,

    /// A page outside the document was requested.
    PageOutOfBounds {
        /// The 1-based page that was requested.
        index: u32,
        /// The number of pages in the document.
        count: u32,
    },

    /// An operation that needs an open document was invoked without one.
    NoDocument,
}

impl DocumentError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DocumentError::NotFound => "notification-load-error-not-found",
            DocumentError::Io(_) => "notification-load-error-io",
            DocumentError::Malformed(_) => "notification-load-error-malformed",
            DocumentError::PasswordProtected => "notification-load-error-password",
            DocumentError::PageOutOfBounds { .. } => "notification-load-error-page",
            DocumentError::NoDocument => "notification-load-error-no-document",
        }
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::NotFound => write!(f, "File not found"),
            DocumentError::Io(msg) => write!(f, "I/O error: {msg}"),
            DocumentError::Malformed(msg) => write!(f, "Malformed document: {msg}"),
            DocumentError::PasswordProtected => write!(f, "Document is password protected"),
            DocumentError::PageOutOfBounds { index, count } => {
                write!(f, "Page {index} out of bounds (document has {count} pages)")
            }
            DocumentError::NoDocument => write!(f, "No document is open"),
        }
    }
}

impl std::error::Error for DocumentError {}

// =============================================================================
// Handles
// =============================================================================

/// Opaque reference to a loaded document.
///
/// Minted by a [`DocumentSource`] and passed back to it to fetch pages or
/// release the document. The application layer assumes no internal
/// structure beyond identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentHandle(u64);

impl DocumentHandle {
    /// Creates a handle from a raw source-assigned id.
    #[must_use]
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id for adapter-side bookkeeping.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Opaque reference to a single page of a loaded document.
///
/// Produced by [`DocumentSource::page`] and consumed by a
/// [`crate::application::port::PageRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageHandle {
    document: DocumentHandle,
    page: PageNumber,
}

impl PageHandle {
    /// Creates a page handle. Adapters call this when resolving a page.
    #[must_use]
    pub fn new(document: DocumentHandle, page: PageNumber) -> Self {
        Self { document, page }
    }

    /// Returns the owning document's handle.
    #[must_use]
    pub fn document(self) -> DocumentHandle {
        self.document
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub fn page(self) -> PageNumber {
        self.page
    }
}

// =============================================================================
// OpenedDocument
// =============================================================================

/// Result of successfully loading a document.
#[derive(Debug, Clone)]
pub struct OpenedDocument {
    /// Handle to pass back to the source for page access and release.
    pub handle: DocumentHandle,
    /// Number of pages in the document. Always at least 1 for a
    /// well-formed document.
    pub page_count: u32,
    /// Document title from its metadata, if present.
    pub title: Option<String>,
}

// =============================================================================
// DocumentSource Trait
// =============================================================================

/// Port for loading documents and resolving their pages.
///
/// Implementations must be `Send + Sync`: the application invokes them from
/// blocking worker tasks off the UI thread.
pub trait DocumentSource: Send + Sync {
    /// Loads a document from a filesystem locator.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentError`] if the file cannot be read, is not a
    /// well-formed document, or requires a password.
    fn load(&self, locator: &Path) -> Result<OpenedDocument, DocumentError>;

    /// Resolves one page of a previously loaded document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::NoDocument`] for an unknown or released
    /// handle and [`DocumentError::PageOutOfBounds`] for a page outside
    /// the document.
    fn page(&self, handle: DocumentHandle, index: PageNumber) -> Result<PageHandle, DocumentError>;

    /// Releases a loaded document and its resources.
    ///
    /// Releasing an unknown handle is a no-op.
    fn close(&self, handle: DocumentHandle);

    /// Checks if a file path looks like a supported document.
    ///
    /// This performs a quick check based on file extension only,
    /// without reading the file contents.
    fn supports(&self, locator: &Path) -> bool;
}
