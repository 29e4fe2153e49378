// SPDX-License-Identifier: MPL-2.0
//! Page rendering port definition.
//!
//! This module defines the [`PageRenderer`] trait for rasterizing document
//! pages into RGBA bitmaps the UI can display.

use super::document::PageHandle;
use crate::domain::reader::ZoomLevel;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// RenderError
// =============================================================================

/// Errors that can occur during page rasterization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The engine failed to rasterize the page.
    Failed(String),

    /// The requested zoom level produces a bitmap larger than the engine
    /// can allocate.
    SurfaceTooLarge,
}

impl RenderError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            RenderError::Failed(_) => "notification-render-error",
            RenderError::SurfaceTooLarge => "notification-render-error-too-large",
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Failed(msg) => write!(f, "Rendering failed: {msg}"),
            RenderError::SurfaceTooLarge => write!(f, "Page too large to render"),
        }
    }
}

impl std::error::Error for RenderError {}

// =============================================================================
// RenderedPage
// =============================================================================

/// A rasterized page: tightly packed RGBA pixels.
///
/// The pixel buffer is shared so cloning a rendered page (for message
/// passing between the worker task and the UI) does not copy the bitmap.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    width: u32,
    height: u32,
    pixels: Arc<Vec<u8>>,
}

impl RenderedPage {
    /// Wraps a raw RGBA buffer.
    ///
    /// The buffer length must be exactly `width * height * 4`; a mismatch
    /// yields a [`RenderError::Failed`].
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, RenderError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(RenderError::Failed(format!(
                "pixel buffer length {} does not match {width}x{height} RGBA",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels: Arc::new(pixels),
        })
    }

    /// Bitmap width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Bitmap height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Shared handle to the pixel buffer.
    #[must_use]
    pub fn pixels_arc(&self) -> Arc<Vec<u8>> {
        Arc::clone(&self.pixels)
    }
}

// =============================================================================
// PageRenderer Trait
// =============================================================================

/// Port for rasterizing a page at a given zoom level.
///
/// Implementations must be `Send + Sync`: rendering runs on blocking
/// worker tasks off the UI thread.
pub trait PageRenderer: Send + Sync {
    /// Renders the page into an RGBA bitmap scaled by `zoom`.
    ///
    /// A zoom of 1.0 corresponds to the page's natural size at screen
    /// resolution.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if rasterization fails or the target
    /// surface would be too large.
    fn render(&self, page: &PageHandle, zoom: ZoomLevel) -> Result<RenderedPage, RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_page_validates_buffer_length() {
        let page = RenderedPage::from_rgba(2, 2, vec![0_u8; 16]).expect("valid buffer");
        assert_eq!(page.width(), 2);
        assert_eq!(page.height(), 2);
        assert_eq!(page.pixels().len(), 16);

        let result = RenderedPage::from_rgba(2, 2, vec![0_u8; 15]);
        assert!(matches!(result, Err(RenderError::Failed(_))));
    }

    #[test]
    fn rendered_page_clone_shares_pixels() {
        let page = RenderedPage::from_rgba(1, 1, vec![1, 2, 3, 4]).expect("valid buffer");
        let clone = page.clone();
        assert!(Arc::ptr_eq(&page.pixels_arc(), &clone.pixels_arc()));
    }

    #[test]
    fn render_error_display_and_keys() {
        let err = RenderError::Failed("bitmap allocation".to_string());
        assert!(format!("{err}").contains("bitmap allocation"));
        assert_eq!(err.i18n_key(), "notification-render-error");
        assert_eq!(
            RenderError::SurfaceTooLarge.i18n_key(),
            "notification-render-error-too-large"
        );
    }
}
