// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the configuration system.
//!
//! Zoom bounds live in the domain layer (`domain::reader::zoom_bounds`);
//! this module re-exports them so settings code has a single import point.

pub use crate::domain::reader::zoom_bounds::{
    DEFAULT_STEP as DEFAULT_ZOOM_STEP, MAX_STEP as MAX_ZOOM_STEP, MIN_STEP as MIN_ZOOM_STEP,
};
