// SPDX-License-Identifier: MPL-2.0
//! Settings screen: home page, language, and theme.
//!
//! The home-URL input follows the commit-on-leave pattern: edits mark the
//! field dirty, and the value is validated and committed when the user
//! submits or leaves the screen. Invalid input keeps the user on the screen
//! with an error message instead of silently persisting garbage.

use crate::document::url;
use crate::error::LoadError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, pick_list, text, text_input, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};
use std::fmt;
use unic_langid::LanguageIdentifier;

pub const HOME_URL_EMPTY_KEY: &str = "settings-home-url-empty";
pub const HOME_URL_INVALID_KEY: &str = "settings-home-url-invalid";

/// Initial values for the settings screen.
pub struct StateConfig {
    pub home_url: String,
    pub language: Option<LanguageIdentifier>,
    pub theme_mode: ThemeMode,
}

/// Settings screen state.
#[derive(Debug, Default)]
pub struct State {
    home_url_input: String,
    home_url_dirty: bool,
    home_url_error_key: Option<&'static str>,
    language: Option<LanguageIdentifier>,
    theme_mode: ThemeMode,
}

/// Messages emitted by the settings widgets.
#[derive(Debug, Clone)]
pub enum Message {
    HomeUrlChanged(String),
    HomeUrlSubmitted,
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    Done,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The home URL was committed to a new value; persist it.
    HomeUrlCommitted(String),
    /// A new UI language was picked; apply and persist it.
    LanguageChanged(LanguageIdentifier),
    /// A new theme mode was picked; apply and persist it.
    ThemeModeChanged(ThemeMode),
    /// The user asked to leave the screen.
    CloseRequested,
}

impl State {
    #[must_use]
    pub fn new(config: StateConfig) -> Self {
        Self {
            home_url_input: config.home_url,
            home_url_dirty: false,
            home_url_error_key: None,
            language: config.language,
            theme_mode: config.theme_mode,
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::HomeUrlChanged(value) => {
                self.home_url_input = value;
                self.home_url_dirty = true;
                self.home_url_error_key = None;
                Event::None
            }
            Message::HomeUrlSubmitted => match self.ensure_home_url_committed() {
                Ok(Some(committed)) => Event::HomeUrlCommitted(committed),
                _ => Event::None,
            },
            Message::LanguageSelected(locale) => {
                self.language = Some(locale.clone());
                Event::LanguageChanged(locale)
            }
            Message::ThemeModeSelected(mode) => {
                self.theme_mode = mode;
                Event::ThemeModeChanged(mode)
            }
            Message::Done => Event::CloseRequested,
        }
    }

    /// Validates and commits a dirty home-URL input.
    ///
    /// Returns `Ok(Some(url))` when a new value was committed, `Ok(None)`
    /// when there was nothing to commit, and `Err(())` when the input is
    /// invalid; the error key is then set for the view.
    pub fn ensure_home_url_committed(&mut self) -> Result<Option<String>, ()> {
        if !self.home_url_dirty {
            return Ok(None);
        }

        let normalized = url::normalize(&self.home_url_input);
        match url::validate(&normalized) {
            Ok(()) => {
                self.home_url_input = normalized.clone();
                self.home_url_dirty = false;
                self.home_url_error_key = None;
                Ok(Some(normalized))
            }
            Err(LoadError::EmptyAddress) => {
                self.home_url_error_key = Some(HOME_URL_EMPTY_KEY);
                Err(())
            }
            Err(_) => {
                self.home_url_error_key = Some(HOME_URL_INVALID_KEY);
                Err(())
            }
        }
    }

    #[must_use]
    pub fn home_url_input_value(&self) -> &str {
        &self.home_url_input
    }

    #[must_use]
    pub fn home_url_dirty(&self) -> bool {
        self.home_url_dirty
    }

    #[must_use]
    pub fn home_url_error_key(&self) -> Option<&'static str> {
        self.home_url_error_key
    }

    #[must_use]
    pub fn language(&self) -> Option<&LanguageIdentifier> {
        self.language.as_ref()
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }
}

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Wrapper so `pick_list` can display a theme mode with a localized label.
#[derive(Clone, PartialEq)]
struct ThemeOption {
    mode: ThemeMode,
    label: String,
}

impl fmt::Display for ThemeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Wrapper so `pick_list` can display a locale.
#[derive(Clone, PartialEq)]
struct LanguageOption {
    locale: LanguageIdentifier,
    label: String,
}

impl fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let title = Text::new(i18n.tr("settings-title")).size(typography::TITLE_LG);

    // Home URL input with inline validation error
    let home_url_label = Text::new(i18n.tr("settings-home-url-label")).size(typography::BODY);
    let placeholder = i18n.tr("settings-home-url-placeholder");
    let home_url_input = text_input(&placeholder, state.home_url_input_value())
        .on_input(Message::HomeUrlChanged)
        .on_submit(Message::HomeUrlSubmitted)
        .size(typography::BODY_LG)
        .padding(spacing::XS)
        .width(Length::Fill);

    let mut home_url_section = Column::new()
        .spacing(spacing::XXS)
        .push(home_url_label)
        .push(home_url_input);

    if let Some(error_key) = state.home_url_error_key() {
        home_url_section = home_url_section.push(
            Text::new(i18n.tr(error_key))
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().danger.base.color),
                }),
        );
    }

    // Language picker
    let language_options: Vec<LanguageOption> = i18n
        .available_locales
        .iter()
        .map(|locale| LanguageOption {
            locale: locale.clone(),
            label: locale.to_string(),
        })
        .collect();
    let selected_language = state.language().map(|locale| LanguageOption {
        locale: locale.clone(),
        label: locale.to_string(),
    });
    let language_picker = pick_list(language_options, selected_language, |option| {
        Message::LanguageSelected(option.locale)
    })
    .width(Length::Fill)
    .padding(spacing::XS);

    // Theme picker
    let theme_options: Vec<ThemeOption> = ThemeMode::ALL
        .iter()
        .map(|mode| ThemeOption {
            mode: *mode,
            label: i18n.tr(mode.i18n_key()),
        })
        .collect();
    let selected_theme = Some(ThemeOption {
        mode: state.theme_mode(),
        label: i18n.tr(state.theme_mode().i18n_key()),
    });
    let theme_picker = pick_list(theme_options, selected_theme, |option| {
        Message::ThemeModeSelected(option.mode)
    })
    .width(Length::Fill)
    .padding(spacing::XS);

    let done_button = button(Text::new(i18n.tr("settings-back-button")).size(typography::BODY))
        .on_press(Message::Done)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);

    let form = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fixed(sizing::SETTINGS_FORM_WIDTH))
        .push(title)
        .push(home_url_section)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(i18n.tr("settings-language-label")).size(typography::BODY))
                .push(language_picker),
        )
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(i18n.tr("settings-theme-label")).size(typography::BODY))
                .push(theme_picker),
        )
        .push(done_button);

    Container::new(
        Container::new(form)
            .padding(spacing::XL)
            .style(|theme: &Theme| styles::container::panel(theme)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
