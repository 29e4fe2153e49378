// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **Environment variable** (`PDF_LENS_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "PdfLens";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PDF_LENS_CONFIG_DIR";

/// Returns the application config directory path.
///
/// This directory is used for storing user preferences (settings.toml).
///
/// Returns `None` if the config directory cannot be determined (rare edge
/// case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// # Resolution Order
///
/// 1. `override_path` parameter (if `Some`) - most specific, for tests
/// 2. `PDF_LENS_CONFIG_DIR` environment variable (if set and non-empty)
/// 3. Platform-specific config directory:
///    - Linux: `~/.config/PdfLens/`
///    - macOS: `~/Library/Application Support/PdfLens/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\PdfLens\`
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_takes_priority() {
        let override_path = PathBuf::from("/tmp/pdf-lens-test-config");
        let resolved = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(resolved, Some(override_path));
    }

    #[test]
    fn default_resolution_appends_app_name() {
        // Only meaningful when the env var is not set and a platform config
        // dir exists; both hold in CI.
        if std::env::var(ENV_CONFIG_DIR).is_ok() {
            return;
        }
        if let Some(path) = get_app_config_dir() {
            assert!(path.ends_with(APP_NAME));
        }
    }
}
