// SPDX-License-Identifier: MPL-2.0
use pdf_lens::app::config::{self, Config, DEFAULT_ZOOM_STEP};
use pdf_lens::i18n::fluent::I18n;
use pdf_lens::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());

    let i18n = I18n::new(Some("fr".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn locale_switch_changes_translations() {
    let mut i18n = I18n::default();

    i18n.set_locale("en-US".parse().expect("valid locale"));
    let english = i18n.tr("viewer-prev-button");

    i18n.set_locale("fr".parse().expect("valid locale"));
    let french = i18n.tr("viewer-prev-button");

    assert_ne!(english, french);
    assert!(!english.starts_with("MISSING:"));
    assert!(!french.starts_with("MISSING:"));
}

#[test]
fn config_round_trip_preserves_reader_preferences() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Light;
    config.display.zoom_step = Some(0.4);

    config::save_to_path(&config, &path).expect("Failed to save config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");

    assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    assert_eq!(loaded.display.zoom_step, Some(0.4));
}

#[test]
fn fresh_config_uses_default_zoom_step() {
    let config = Config::default();
    assert_eq!(config.display.zoom_step, Some(DEFAULT_ZOOM_STEP));
}
