// SPDX-License-Identifier: MPL-2.0
//! Reader domain types: page numbers and zoom levels.

pub mod newtypes;

pub use newtypes::{zoom_bounds, PageNumber, ZoomLevel};
