// SPDX-License-Identifier: MPL-2.0
//! Top-level screens the application can display.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Viewer,
    Settings,
    About,
}
