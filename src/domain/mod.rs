// SPDX-License-Identifier: MPL-2.0
//! Domain layer: core value types shared across the application.
//!
//! Types here carry no UI or infrastructure dependencies and enforce
//! their own invariants on construction.

pub mod reader;
