// SPDX-License-Identifier: MPL-2.0
//! Design system constants shared by the UI widgets.

use iced::Color;

/// Color palette for semantic and neutral tones.
pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const GRAY_400: Color = Color::from_rgb(0.61, 0.64, 0.69);

    pub const SUCCESS_500: Color = Color::from_rgb(0.13, 0.70, 0.36);
    pub const INFO_500: Color = Color::from_rgb(0.23, 0.51, 0.96);
    pub const WARNING_500: Color = Color::from_rgb(0.96, 0.62, 0.04);
    pub const ERROR_500: Color = Color::from_rgb(0.94, 0.27, 0.27);
}

/// Spacing scale in logical pixels.
pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

/// Font sizes.
pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 16.0;
    pub const TITLE_LG: f32 = 28.0;
}

/// Widget dimensions.
pub mod sizing {
    /// Fixed width of toast notification cards.
    pub const TOAST_WIDTH: f32 = 340.0;
    /// Width of the page number input in the toolbar.
    pub const PAGE_INPUT_WIDTH: f32 = 64.0;
}

/// Border radii.
pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}
