// SPDX-License-Identifier: MPL-2.0
//! Reusable UI state management for the reader screen.

pub mod page;
pub mod zoom;

pub use page::PageState;
pub use zoom::{ZoomState, ZoomStep};
