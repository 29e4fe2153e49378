// SPDX-License-Identifier: MPL-2.0
//! Page indicator and direct-entry state for the reader toolbar.

pub const PAGE_INPUT_INVALID_KEY: &str = "viewer-page-input-error-invalid";

/// Tracks the committed page position and the direct-entry text field.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    /// Last committed 1-based page (0 before a document is open).
    current: u32,
    /// Page count of the open document (0 before a document is open).
    total: u32,
    /// Current page input string (for the text field).
    input: String,
    /// Whether the input has been modified but not submitted.
    input_dirty: bool,
    /// Error key for page input validation.
    pub input_error_key: Option<&'static str>,
}

impl PageState {
    /// Mirrors a committed page position for display.
    pub fn apply(&mut self, current: u32, total: u32) {
        self.current = current;
        self.total = total;
        self.input = current.to_string();
        self.input_dirty = false;
        self.input_error_key = None;
    }

    /// Clears the state when the document is closed.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns the committed 1-based page.
    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Returns the page count.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Indicator label, e.g. `5 / 10`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} / {}", self.current, self.total)
    }

    /// The page the next Prev request should ask for.
    ///
    /// May fall below 1; the controller clamps.
    #[must_use]
    pub fn previous_target(&self) -> i64 {
        i64::from(self.current) - 1
    }

    /// The page the next Next request should ask for.
    ///
    /// May exceed the total; the controller clamps.
    #[must_use]
    pub fn next_target(&self) -> i64 {
        i64::from(self.current) + 1
    }

    /// Whether Prev can still change the view.
    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.current > 1
    }

    /// Whether Next can still change the view.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.total > 0 && self.current < self.total
    }

    /// Handles page input change.
    pub fn on_input_changed(&mut self, input: String) {
        self.input = input;
        self.input_dirty = true;
        self.input_error_key = None;
    }

    /// Handles page input submission.
    ///
    /// Returns the requested page on a parsable entry; flags a validation
    /// error otherwise.
    pub fn on_input_submitted(&mut self) -> Option<i64> {
        self.input_dirty = false;

        match self.input.trim().parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                self.input_error_key = Some(PAGE_INPUT_INVALID_KEY);
                None
            }
        }
    }

    /// Gets the page input value.
    #[must_use]
    pub fn input_value(&self) -> &str {
        &self.input
    }
}
