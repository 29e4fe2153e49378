// SPDX-License-Identifier: MPL-2.0
//! Application layer.
//!
//! Contains the view-state controller and the ports (abstract interfaces)
//! it drives. Infrastructure adapters implement the ports; the UI invokes
//! the controller through asynchronous tasks.

pub mod controller;
pub mod port;

pub use controller::{RenderedView, ViewError, ViewState, ViewStateController};
