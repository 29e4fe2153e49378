// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Load and render failures are recoverable; they surface here as toasts
//! instead of interrupting the reader.

pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
