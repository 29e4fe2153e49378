// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language selection, theme mode, and zoom step.

use crate::app::config::{MAX_ZOOM_STEP, MIN_ZOOM_STEP};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::state::ZoomStep;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Horizontal,
    widget::{button, text_input, Button, Column, Row, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

pub const ZOOM_STEP_INVALID_KEY: &str = "settings-zoom-step-error-invalid";
pub const ZOOM_STEP_RANGE_KEY: &str = "settings-zoom-step-error-range";

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    ZoomStepChanged(String),
    ZoomStepSubmitted,
    Back,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Back,
    LanguageChanged(LanguageIdentifier),
    ThemeChanged(ThemeMode),
    ZoomStepChanged(ZoomStep),
}

/// Settings screen state: the zoom step entry field and its validation.
#[derive(Debug, Clone)]
pub struct State {
    zoom_step_input: String,
    zoom_step_error_key: Option<&'static str>,
    theme_mode: ThemeMode,
}

impl Default for State {
    fn default() -> Self {
        Self::new(ZoomStep::default(), ThemeMode::default())
    }
}

impl State {
    /// Creates settings state seeded from the active preferences.
    #[must_use]
    pub fn new(zoom_step: ZoomStep, theme_mode: ThemeMode) -> Self {
        Self {
            zoom_step_input: format_step(zoom_step.value()),
            zoom_step_error_key: None,
            theme_mode,
        }
    }

    /// Currently selected theme mode.
    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    /// Processes a settings message and returns the resulting event.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
            Message::ThemeModeSelected(mode) => {
                self.theme_mode = mode;
                Event::ThemeChanged(mode)
            }
            Message::ZoomStepChanged(input) => {
                self.zoom_step_input = input;
                self.zoom_step_error_key = None;
                Event::None
            }
            Message::ZoomStepSubmitted => match self.zoom_step_input.trim().parse::<f32>() {
                Ok(value) if (MIN_ZOOM_STEP..=MAX_ZOOM_STEP).contains(&value) => {
                    let step = ZoomStep::new(value);
                    self.zoom_step_input = format_step(step.value());
                    Event::ZoomStepChanged(step)
                }
                Ok(_) => {
                    self.zoom_step_error_key = Some(ZOOM_STEP_RANGE_KEY);
                    Event::None
                }
                Err(_) => {
                    self.zoom_step_error_key = Some(ZOOM_STEP_INVALID_KEY);
                    Event::None
                }
            },
            Message::Back => Event::Back,
        }
    }

    /// Renders the settings screen.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = Text::new(i18n.tr("settings-title")).size(typography::TITLE_LG);

        let language_section = self.view_language_section(i18n);
        let theme_section = self.view_theme_section(i18n);
        let zoom_section = self.view_zoom_step_section(i18n);

        let back_button =
            button(Text::new(i18n.tr("settings-back-button"))).on_press(Message::Back);

        Column::new()
            .push(title)
            .push(language_section)
            .push(theme_section)
            .push(zoom_section)
            .push(back_button)
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .into()
    }

    fn view_language_section<'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut column = Column::new()
            .push(Text::new(i18n.tr("select-language-label")))
            .spacing(spacing::SM);

        for locale in &i18n.available_locales {
            let display_name = locale.to_string();

            let translated_name_key = format!("language-name-{}", locale);
            let translated_name = i18n.tr(&translated_name_key);
            let button_text = if translated_name.starts_with("MISSING:") {
                display_name.clone()
            } else {
                format!("{} ({})", translated_name, display_name)
            };

            let is_current_locale = i18n.current_locale() == locale;
            let mut item = Button::new(Text::new(button_text))
                .on_press(Message::LanguageSelected(locale.clone()));

            if is_current_locale {
                item = item.style(button::primary);
            } else {
                item = item.style(button::secondary);
            }

            column = column.push(item);
        }

        column.into()
    }

    fn view_theme_section<'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut row = Row::new().spacing(spacing::SM);

        for mode in ThemeMode::ALL {
            let mut item = Button::new(Text::new(i18n.tr(mode.label_key())))
                .on_press(Message::ThemeModeSelected(mode));
            if mode == self.theme_mode {
                item = item.style(button::primary);
            } else {
                item = item.style(button::secondary);
            }
            row = row.push(item);
        }

        Column::new()
            .push(Text::new(i18n.tr("settings-theme-label")))
            .push(row)
            .spacing(spacing::SM)
            .into()
    }

    fn view_zoom_step_section<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let input = text_input("0.2", &self.zoom_step_input)
            .on_input(Message::ZoomStepChanged)
            .on_submit(Message::ZoomStepSubmitted)
            .padding(6)
            .width(Length::Fixed(90.0));

        let mut column = Column::new()
            .push(Text::new(i18n.tr("settings-zoom-step-label")))
            .push(input)
            .spacing(spacing::SM);

        if let Some(error_key) = self.zoom_step_error_key {
            let error_text = i18n.tr_with_args(
                error_key,
                &[
                    ("min", &format_step(MIN_ZOOM_STEP)),
                    ("max", &format_step(MAX_ZOOM_STEP)),
                ],
            );
            column = column.push(Text::new(error_text).size(typography::CAPTION));
        }

        column.into()
    }
}

/// Formats a step value for display (removes unnecessary decimal places).
fn format_step(value: f32) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
