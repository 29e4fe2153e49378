// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! This module handles zoom-related UI state: the last committed zoom
//! level, the configurable zoom step, and the formatted percent label.
//! The committed value itself is owned by the view-state controller; this
//! state mirrors it for display and computes the factors the toolbar
//! buttons request.

use crate::domain::reader::{zoom_bounds, ZoomLevel};

/// Zoom step factor, guaranteed to be within valid range (0.05–2.0).
///
/// This type ensures that zoom step values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep(f32);

impl ZoomStep {
    /// Creates a new zoom step, clamping the value to the valid range.
    #[must_use]
    pub fn new(step: f32) -> Self {
        if !step.is_finite() {
            return Self(zoom_bounds::DEFAULT_STEP);
        }
        Self(step.clamp(zoom_bounds::MIN_STEP, zoom_bounds::MAX_STEP))
    }

    /// Returns the raw step value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self(zoom_bounds::DEFAULT_STEP)
    }
}

/// Manages zoom display state for the reader toolbar.
#[derive(Debug, Clone, Default)]
pub struct ZoomState {
    /// Last committed zoom level, mirrored from the controller.
    zoom: ZoomLevel,

    /// Zoom step for zoom in/out operations (guaranteed valid by type).
    pub step: ZoomStep,
}

impl ZoomState {
    /// Mirrors a committed zoom level for display.
    pub fn apply(&mut self, zoom: ZoomLevel) {
        self.zoom = zoom;
    }

    /// Resets to the default zoom display.
    pub fn reset(&mut self) {
        self.zoom = ZoomLevel::default();
    }

    /// Returns the committed zoom level.
    #[must_use]
    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    /// The factor the next zoom-in request should ask for.
    #[must_use]
    pub fn zoom_in_target(&self) -> f32 {
        self.zoom.zoom_in(self.step.value()).factor()
    }

    /// The factor the next zoom-out request should ask for.
    #[must_use]
    pub fn zoom_out_target(&self) -> f32 {
        self.zoom.zoom_out(self.step.value()).factor()
    }

    /// Whether zooming in can still change the view.
    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        !self.zoom.is_max()
    }

    /// Whether zooming out can still change the view.
    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        !self.zoom.is_min()
    }

    /// Formatted percent label, e.g. `100%`.
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{}%", self.zoom.as_percent())
    }
}
