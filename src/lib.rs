// SPDX-License-Identifier: MPL-2.0
//! `pdf_lens` is a simple PDF reader built with the Iced GUI framework.
//!
//! It renders documents through the pdfium engine and demonstrates
//! internationalization with Fluent, user preference management, and
//! modular UI design.

#![doc(html_root_url = "https://docs.rs/pdf_lens/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
