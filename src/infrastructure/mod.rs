// SPDX-License-Identifier: MPL-2.0
//! Infrastructure adapters implementing the application-layer ports.

pub mod pdfium;
