// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the browser chrome, the document view,
//! the fullscreen presenter, localization, and persisted state, and
//! translates messages into side effects like config persistence or window
//! mode changes. Policy decisions (startup URL resolution, commit-on-leave
//! for settings, back-navigation ordering) stay close to the main update
//! loop so user-facing behavior is easy to audit.

pub mod back;
pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::document::{DocumentSettings, DocumentView, HeadlessDocument};
use crate::i18n::fluent::I18n;
use crate::ui::browser;
use crate::ui::fullscreen::Presenter;
use crate::ui::notifications;
use crate::ui::settings::{State as SettingsState, StateConfig as SettingsConfig};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Root Iced application state bridging UI components, the document view,
/// localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    browser: browser::State,
    settings: SettingsState,
    document: Box<dyn DocumentView>,
    presenter: Presenter,
    config: config::Config,
    persisted: persisted_state::AppState,
    window_id: Option<window::Id>,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("presenter_phase", &self.presenter.phase())
            .field("current_url", &self.browser.current_url)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = config::Config::default();
        Self {
            i18n: I18n::default(),
            screen: Screen::Browser,
            browser: browser::State::new(),
            settings: SettingsState::default(),
            document: Box::new(HeadlessDocument::default()),
            presenter: Presenter::new(config.fade_duration()),
            config,
            persisted: persisted_state::AppState::default(),
            window_id: None,
            theme_mode: ThemeMode::System,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and starts loading the startup page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let document_settings = DocumentSettings {
            javascript_enabled: config
                .browser
                .javascript
                .unwrap_or(config::DEFAULT_JAVASCRIPT_ENABLED),
            user_agent: config
                .browser
                .user_agent
                .clone()
                .unwrap_or_else(|| config::DEFAULT_USER_AGENT.to_string()),
        };

        let mut app = App {
            i18n,
            document: Box::new(HeadlessDocument::new(document_settings)),
            presenter: Presenter::new(config.fade_duration()),
            theme_mode: config.general.theme_mode,
            config,
            ..Self::default()
        };

        app.settings = SettingsState::new(SettingsConfig {
            home_url: app.config.home_url(),
            language: Some(app.i18n.current_locale().clone()),
            theme_mode: app.config.general.theme_mode,
        });

        let (persisted, state_warning) = persisted_state::AppState::load();
        app.persisted = persisted;

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }
        if let Some(key) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        // The startup page: CLI argument first, configured home page
        // otherwise. The load completes through the tick subscription.
        let startup_url = crate::document::url::normalize(
            &flags.start_url.unwrap_or_else(|| app.config.home_url()),
        );
        app.browser.address_input = startup_url.clone();
        app.document.load(&startup_url);

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.browser.page_title {
            Some(page_title) => format!("{page_title} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.presenter.is_animating(),
            self.document.is_loading(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            browser: &mut self.browser,
            settings: &mut self.settings,
            document: &mut *self.document,
            presenter: &mut self.presenter,
            config: &mut self.config,
            persisted: &mut self.persisted,
            window_id: &mut self.window_id,
            theme_mode: &mut self.theme_mode,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Browser(browser_message) => {
                update::handle_browser_message(&mut ctx, browser_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::Favorites(favorites_message) => {
                update::handle_favorites_message(&mut ctx, favorites_message)
            }
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::BackRequested => update::handle_back_request(&mut ctx),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::RawEvent { window, event } => {
                update::handle_raw_event(&mut ctx, window, event)
            }
            Message::WindowCloseRequested(id) => update::handle_window_close(&mut ctx, id),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            browser: &self.browser,
            settings: &self.settings,
            document: &*self.document,
            presenter: &self.presenter,
            persisted: &self.persisted,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::fullscreen::Phase;
    use crate::ui::settings;
    use std::fs;
    use std::path::Path;
    use std::sync::{Mutex, OnceLock};
    use std::time::{Duration, Instant};
    use tempfile::tempdir;

    fn dirs_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    /// Points both the config and data directories at a temp dir for the
    /// duration of the test.
    fn with_temp_dirs<F>(test: F)
    where
        F: FnOnce(&Path),
    {
        let _guard = dirs_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous_config = std::env::var(paths::ENV_CONFIG_DIR).ok();
        let previous_data = std::env::var(paths::ENV_DATA_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());
        std::env::set_var(paths::ENV_DATA_DIR, temp_dir.path());

        test(temp_dir.path());

        match previous_config {
            Some(value) => std::env::set_var(paths::ENV_CONFIG_DIR, value),
            None => std::env::remove_var(paths::ENV_CONFIG_DIR),
        }
        match previous_data {
            Some(value) => std::env::set_var(paths::ENV_DATA_DIR, value),
            None => std::env::remove_var(paths::ENV_DATA_DIR),
        }
    }

    /// Ticks until in-flight loads have committed.
    fn finish_loads(app: &mut App) {
        for _ in 0..8 {
            let _ = app.update(Message::Tick(Instant::now()));
        }
    }

    /// Loads a page and waits for it to commit.
    fn load_page(app: &mut App, url: &str) {
        let _ = app.update(Message::Browser(browser::Message::AddressChanged(
            url.to_string(),
        )));
        let _ = app.update(Message::Browser(browser::Message::AddressSubmitted));
        finish_loads(app);
    }

    /// Enters fullscreen via the engine round trip and settles the fade.
    fn enter_fullscreen(app: &mut App) {
        let _ = app.update(Message::Browser(browser::Message::EnterFullscreen));
        let _ = app.update(Message::Tick(Instant::now() + Duration::from_millis(300)));
    }

    /// A tick far enough in the future to complete any fade.
    fn settle_animation(app: &mut App) {
        let _ = app.update(Message::Tick(Instant::now() + Duration::from_millis(300)));
    }

    #[test]
    fn new_starts_on_browser_screen_and_loads_home() {
        with_temp_dirs(|_| {
            let (mut app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Browser);
            assert!(app.document.is_loading());
            assert_eq!(app.browser.address_input, config::DEFAULT_HOME_URL);

            finish_loads(&mut app);
            assert_eq!(
                app.browser.current_url.as_deref(),
                Some(config::DEFAULT_HOME_URL)
            );
        });
    }

    #[test]
    fn start_url_flag_overrides_home_page() {
        with_temp_dirs(|_| {
            let flags = Flags {
                start_url: Some("example.com".to_string()),
                ..Flags::default()
            };
            let (mut app, _task) = App::new(flags);
            finish_loads(&mut app);
            assert_eq!(
                app.browser.current_url.as_deref(),
                Some("https://example.com")
            );
        });
    }

    #[test]
    fn load_failure_shows_a_toast_and_stops_progress() {
        let mut app = App::default();
        load_page(&mut app, "bad url with spaces");

        assert!(app.notifications.has_notifications());
        assert!(!app.browser.is_loading());
        assert!(app.browser.current_url.is_none());
    }

    #[test]
    fn successful_load_clears_stale_load_errors() {
        with_temp_dirs(|_| {
            let mut app = App::default();
            load_page(&mut app, "bad url with spaces");
            assert!(app.notifications.has_notifications());

            load_page(&mut app, "example.com");

            assert_eq!(
                app.browser.current_url.as_deref(),
                Some("https://example.com")
            );
            assert!(!app.notifications.has_notifications());
        });
    }

    #[test]
    fn fullscreen_round_trip_through_engine_events() {
        let mut app = App::default();
        load_page(&mut app, "example.com");
        assert_eq!(app.presenter.phase(), Phase::Inline);

        let _ = app.update(Message::Browser(browser::Message::EnterFullscreen));
        assert_eq!(app.presenter.phase(), Phase::EnteringFullscreen);
        assert!(!app.presenter.inline_ui_visible());

        settle_animation(&mut app);
        assert_eq!(app.presenter.phase(), Phase::Fullscreen);
        assert_eq!(
            app.presenter.active_view().map(|v| v.title.as_str()),
            Some("example.com")
        );

        let _ = app.update(Message::BackRequested);
        assert_eq!(app.presenter.phase(), Phase::ExitingFullscreen);

        settle_animation(&mut app);
        assert_eq!(app.presenter.phase(), Phase::Inline);
        assert!(app.presenter.inline_ui_visible());
        assert!(app.presenter.active_view().is_none());
    }

    #[test]
    fn reentrant_show_request_tears_down_current_session() {
        with_temp_dirs(|_| {
            let (mut app, _task) = App::new(Flags::default());
            finish_loads(&mut app);
            enter_fullscreen(&mut app);
            assert_eq!(app.presenter.phase(), Phase::Fullscreen);

            // A second show request while a session is active finalizes the
            // running session synchronously and drops the new one.
            let _ = app.update(Message::Browser(browser::Message::EnterFullscreen));
            assert_eq!(app.presenter.phase(), Phase::Inline);
            assert!(app.presenter.active_view().is_none());
        });
    }

    #[test]
    fn back_falls_through_to_history_then_propagates() {
        let mut app = App::default();
        load_page(&mut app, "a.example");
        load_page(&mut app, "b.example");

        let _ = app.update(Message::BackRequested);
        finish_loads(&mut app);
        assert_eq!(app.browser.current_url.as_deref(), Some("https://a.example"));

        // No more history; without a window id the propagation is a no-op,
        // but the state stays consistent.
        let _ = app.update(Message::BackRequested);
        finish_loads(&mut app);
        assert_eq!(app.browser.current_url.as_deref(), Some("https://a.example"));
    }

    #[test]
    fn back_closes_sub_screens_before_touching_history() {
        let mut app = App::default();
        load_page(&mut app, "a.example");
        load_page(&mut app, "b.example");

        let _ = app.update(Message::SwitchScreen(Screen::Favorites));
        let _ = app.update(Message::BackRequested);

        assert_eq!(app.screen, Screen::Browser);
        // History untouched by the screen close.
        assert_eq!(app.browser.current_url.as_deref(), Some("https://b.example"));
    }

    #[test]
    fn toolbar_back_button_navigates_history() {
        let mut app = App::default();
        load_page(&mut app, "a.example");
        load_page(&mut app, "b.example");

        let _ = app.update(Message::Browser(browser::Message::Back));
        finish_loads(&mut app);

        assert_eq!(app.browser.current_url.as_deref(), Some("https://a.example"));

        let _ = app.update(Message::Browser(browser::Message::Forward));
        finish_loads(&mut app);

        assert_eq!(app.browser.current_url.as_deref(), Some("https://b.example"));
    }

    #[test]
    fn fullscreen_back_exits_before_history() {
        let mut app = App::default();
        load_page(&mut app, "a.example");
        load_page(&mut app, "b.example");
        enter_fullscreen(&mut app);

        let _ = app.update(Message::BackRequested);
        settle_animation(&mut app);

        // Fullscreen consumed the back action; history is unchanged.
        assert_eq!(app.presenter.phase(), Phase::Inline);
        assert_eq!(app.browser.current_url.as_deref(), Some("https://b.example"));
    }

    #[test]
    fn exit_completion_shows_feedback_toast() {
        let mut app = App::default();
        load_page(&mut app, "example.com");
        enter_fullscreen(&mut app);

        let _ = app.update(Message::BackRequested);
        settle_animation(&mut app);

        let has_exit_toast = app
            .notifications
            .visible()
            .any(|n| n.message_key() == "notification-fullscreen-exited");
        assert!(has_exit_toast);
    }

    #[test]
    fn window_resize_relayouts_fullscreen_view_without_state_change() {
        let mut app = App::default();
        load_page(&mut app, "example.com");
        enter_fullscreen(&mut app);

        let _ = app.update(Message::RawEvent {
            window: window::Id::unique(),
            event: iced::event::Event::Window(iced::window::Event::Resized(iced::Size::new(
                1024.0, 768.0,
            ))),
        });

        assert_eq!(app.presenter.phase(), Phase::Fullscreen);
        assert!(app.presenter.active_view().is_some());
    }

    #[test]
    fn window_close_tears_down_fullscreen_synchronously() {
        let mut app = App::default();
        load_page(&mut app, "example.com");
        enter_fullscreen(&mut app);

        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));

        assert_eq!(app.presenter.phase(), Phase::Inline);
        assert!(app.presenter.active_view().is_none());
    }

    #[test]
    fn settings_commit_blocks_leaving_with_invalid_home_url() {
        with_temp_dirs(|_| {
            let mut app = App::default();
            let _ = app.update(Message::SwitchScreen(Screen::Settings));
            let _ = app.update(Message::Settings(settings::Message::HomeUrlChanged(
                "not a url".to_string(),
            )));

            let _ = app.update(Message::SwitchScreen(Screen::Browser));

            assert_eq!(app.screen, Screen::Settings);
            assert!(app.settings.home_url_error_key().is_some());
        });
    }

    #[test]
    fn settings_commit_persists_home_url_on_leave() {
        with_temp_dirs(|config_root| {
            let mut app = App::default();
            let _ = app.update(Message::SwitchScreen(Screen::Settings));
            let _ = app.update(Message::Settings(settings::Message::HomeUrlChanged(
                "example.org".to_string(),
            )));

            let _ = app.update(Message::SwitchScreen(Screen::Browser));

            assert_eq!(app.screen, Screen::Browser);
            assert_eq!(
                app.config.browser.home_url.as_deref(),
                Some("https://example.org")
            );
            let contents =
                fs::read_to_string(config_root.join("settings.toml")).expect("config written");
            assert!(contents.contains("https://example.org"));
        });
    }

    #[test]
    fn language_selection_updates_config_file() {
        with_temp_dirs(|config_root| {
            let mut app = App::default();
            let _ = app.update(Message::Settings(settings::Message::LanguageSelected(
                "zh-CN".parse().unwrap(),
            )));

            assert_eq!(app.i18n.current_locale().to_string(), "zh-CN");
            let contents =
                fs::read_to_string(config_root.join("settings.toml")).expect("config written");
            assert!(contents.contains("zh-CN"));
        });
    }

    #[test]
    fn favorites_add_open_and_remove() {
        with_temp_dirs(|_| {
            let mut app = App::default();
            load_page(&mut app, "example.com");

            let _ = app.update(Message::Browser(browser::Message::OpenFavorites));
            assert_eq!(app.screen, Screen::Favorites);

            let _ = app.update(Message::Favorites(crate::ui::favorites::Message::AddCurrent));
            assert_eq!(app.persisted.favorites.len(), 1);
            assert_eq!(app.persisted.favorites[0].url, "https://example.com");

            // Adding the same page again is refused.
            let _ = app.update(Message::Favorites(crate::ui::favorites::Message::AddCurrent));
            assert_eq!(app.persisted.favorites.len(), 1);

            load_page(&mut app, "other.example");
            let _ = app.update(Message::Browser(browser::Message::OpenFavorites));
            let _ = app.update(Message::Favorites(crate::ui::favorites::Message::Open(0)));
            finish_loads(&mut app);

            assert_eq!(app.screen, Screen::Browser);
            assert_eq!(
                app.browser.current_url.as_deref(),
                Some("https://example.com")
            );

            let _ = app.update(Message::Favorites(crate::ui::favorites::Message::Remove(0)));
            assert!(app.persisted.favorites.is_empty());
        });
    }

    #[test]
    fn title_shows_app_name_without_a_page() {
        let mut app = App::default();
        app.i18n.set_locale("en-US".parse().unwrap());
        assert_eq!(app.title(), "IcedSurf");
    }

    #[test]
    fn title_shows_page_title_when_loaded() {
        let mut app = App::default();
        app.i18n.set_locale("en-US".parse().unwrap());
        load_page(&mut app, "example.com");
        assert_eq!(app.title(), "example.com - IcedSurf");
    }

    #[test]
    fn escape_key_runs_the_back_chain() {
        let mut app = App::default();
        load_page(&mut app, "a.example");
        load_page(&mut app, "b.example");

        let _ = app.update(Message::RawEvent {
            window: window::Id::unique(),
            event: iced::event::Event::Keyboard(iced::keyboard::Event::KeyPressed {
                key: iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape),
                modified_key: iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape),
                physical_key: iced::keyboard::key::Physical::Code(
                    iced::keyboard::key::Code::Escape,
                ),
                location: iced::keyboard::Location::Standard,
                modifiers: iced::keyboard::Modifiers::default(),
                text: None,
                repeat: false,
            }),
        });
        finish_loads(&mut app);

        assert_eq!(app.browser.current_url.as_deref(), Some("https://a.example"));
    }
}
