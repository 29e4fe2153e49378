// SPDX-License-Identifier: MPL-2.0
//! Internationalization via Fluent.
//!
//! Locale bundles are embedded `.ftl` files; resolution order is CLI
//! argument, then the configured language, then the OS locale.

pub mod fluent;
