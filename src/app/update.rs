// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! All state transitions funnel through the handlers here. Document-view
//! events are drained after every command and on every tick; fullscreen
//! presenter effects are translated into window tasks in one place.

use super::{back, config, persistence, Message, Screen};
use crate::app::persisted_state::AppState;
use crate::document::{DocumentEvent, DocumentView};
use crate::i18n::fluent::I18n;
use crate::ui::browser;
use crate::ui::favorites::{self, Event as FavoritesEvent};
use crate::ui::fullscreen::{presenter::Effect as PresenterEffect, Presenter};
use crate::ui::notifications::{self, Notification};
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::theming::ThemeMode;
use iced::{keyboard, window, Task};
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub browser: &'a mut browser::State,
    pub settings: &'a mut settings::State,
    pub document: &'a mut dyn DocumentView,
    pub presenter: &'a mut Presenter,
    pub config: &'a mut config::Config,
    pub persisted: &'a mut AppState,
    pub window_id: &'a mut Option<window::Id>,
    pub theme_mode: &'a mut ThemeMode,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles browser chrome messages.
pub fn handle_browser_message(
    ctx: &mut UpdateContext<'_>,
    message: browser::Message,
) -> Task<Message> {
    match ctx.browser.update(message) {
        browser::Effect::None => Task::none(),
        browser::Effect::LoadUrl(url) => {
            ctx.document.load(&url);
            drain_document_events(ctx)
        }
        browser::Effect::HistoryBack => {
            if ctx.document.can_go_back() {
                ctx.document.go_back();
            }
            drain_document_events(ctx)
        }
        browser::Effect::HistoryForward => {
            if ctx.document.can_go_forward() {
                ctx.document.go_forward();
            }
            drain_document_events(ctx)
        }
        browser::Effect::Reload => {
            ctx.document.reload();
            drain_document_events(ctx)
        }
        browser::Effect::RequestCustomView => {
            ctx.document.request_custom_view();
            drain_document_events(ctx)
        }
        browser::Effect::OpenFavorites => handle_screen_switch(ctx, Screen::Favorites),
        browser::Effect::OpenSettings => handle_screen_switch(ctx, Screen::Settings),
    }
}

/// Handles settings screen messages.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match ctx.settings.update(message) {
        SettingsEvent::None => Task::none(),
        SettingsEvent::HomeUrlCommitted(url) => {
            ctx.config.browser.home_url = Some(url);
            persistence::persist_preferences(ctx.config, ctx.notifications);
            Task::none()
        }
        SettingsEvent::LanguageChanged(locale) => {
            ctx.i18n.set_locale(locale.clone());
            ctx.config.general.language = Some(locale.to_string());
            persistence::persist_preferences(ctx.config, ctx.notifications);
            Task::none()
        }
        SettingsEvent::ThemeModeChanged(mode) => {
            *ctx.theme_mode = mode;
            ctx.config.general.theme_mode = mode;
            persistence::persist_preferences(ctx.config, ctx.notifications);
            Task::none()
        }
        SettingsEvent::CloseRequested => handle_screen_switch(ctx, Screen::Browser),
    }
}

/// Handles favorites screen messages.
pub fn handle_favorites_message(
    ctx: &mut UpdateContext<'_>,
    message: favorites::Message,
) -> Task<Message> {
    match favorites::update(message) {
        FavoritesEvent::AddCurrent => {
            let Some(url) = ctx.browser.current_url.clone() else {
                return Task::none();
            };
            let title = ctx
                .browser
                .page_title
                .clone()
                .unwrap_or_else(|| ctx.i18n.tr("pane-untitled"));

            if ctx
                .persisted
                .add_favorite(crate::app::persisted_state::Favorite::new(title, url))
            {
                ctx.notifications
                    .push(Notification::success("notification-favorite-added"));
                save_persisted(ctx);
            } else {
                ctx.notifications
                    .push(Notification::info("notification-favorite-duplicate"));
            }
            Task::none()
        }
        FavoritesEvent::Open(index) => {
            let Some(url) = ctx.persisted.favorites.get(index).map(|f| f.url.clone()) else {
                return Task::none();
            };
            *ctx.screen = Screen::Browser;
            ctx.browser.address_input = url.clone();
            ctx.document.load(&url);
            drain_document_events(ctx)
        }
        FavoritesEvent::Remove(index) => {
            if ctx.persisted.remove_favorite(index).is_some() {
                ctx.notifications
                    .push(Notification::success("notification-favorite-removed"));
                save_persisted(ctx);
            }
            Task::none()
        }
        FavoritesEvent::CloseRequested => handle_screen_switch(ctx, Screen::Browser),
    }
}

/// Handles screen switches, enforcing the settings commit-on-leave rule.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen == Screen::Settings && target != Screen::Settings {
        match ctx.settings.ensure_home_url_committed() {
            Ok(Some(url)) => {
                ctx.config.browser.home_url = Some(url);
                persistence::persist_preferences(ctx.config, ctx.notifications);
            }
            Ok(None) => {}
            Err(()) => {
                // Invalid input keeps the user on the settings screen.
                return Task::none();
            }
        }
    }

    *ctx.screen = target;
    Task::none()
}

/// Handles a back action: leaves sub-screens first, then runs the
/// fullscreen/history/default chain on the browser screen.
pub fn handle_back_request(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.screen != Screen::Browser {
        return handle_screen_switch(ctx, Screen::Browser);
    }

    let (outcome, effects) = back::dispatch(ctx.presenter, ctx.document, Instant::now());
    match outcome {
        back::BackOutcome::ExitedFullscreen => presenter_effects_task(*ctx.window_id, &effects),
        back::BackOutcome::WentBack => drain_document_events(ctx),
        back::BackOutcome::Propagate => close_window(ctx),
    }
}

/// Handles the periodic tick: advances fades and simulated loads, expires
/// toasts.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let effects = ctx.presenter.tick(now);
    if effects.contains(&PresenterEffect::RestoreWindowChrome) {
        ctx.notifications
            .push(Notification::info("notification-fullscreen-exited"));
    }
    let presenter_task = presenter_effects_task(*ctx.window_id, &effects);

    let document_task = drain_document_events(ctx);
    ctx.notifications.tick();

    Task::batch([presenter_task, document_task])
}

/// Handles raw keyboard and window events.
pub fn handle_raw_event(
    ctx: &mut UpdateContext<'_>,
    window: window::Id,
    event: iced::event::Event,
) -> Task<Message> {
    *ctx.window_id = Some(window);

    match event {
        iced::event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            match key {
                keyboard::Key::Named(keyboard::key::Named::Escape) => handle_back_request(ctx),
                keyboard::Key::Named(keyboard::key::Named::ArrowLeft) if modifiers.alt() => {
                    handle_browser_message(ctx, browser::Message::Back)
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowRight) if modifiers.alt() => {
                    handle_browser_message(ctx, browser::Message::Forward)
                }
                _ => Task::none(),
            }
        }
        iced::event::Event::Window(iced::window::Event::Resized(_)) => {
            let effects = ctx.presenter.orientation_changed();
            presenter_effects_task(*ctx.window_id, &effects)
        }
        _ => Task::none(),
    }
}

/// Handles a window close request: forced teardown, then close.
pub fn handle_window_close(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    // The window is going away; the chrome effects are moot.
    let _ = ctx.presenter.host_destroyed();
    ctx.document.destroy();
    window::close(id)
}

/// Drains pending document-view events into app state, feeding custom-view
/// requests to the fullscreen presenter.
pub fn drain_document_events(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let now = Instant::now();
    let mut tasks = Vec::new();

    for event in ctx.document.poll_events() {
        match event {
            DocumentEvent::ProgressChanged(progress) => {
                ctx.browser.apply_progress(progress);
            }
            DocumentEvent::PageFinished { url, title } => {
                ctx.browser.apply_page_finished(url.clone(), title);
                ctx.notifications.clear_load_errors();
                ctx.persisted.last_visited_url = Some(url);
                save_persisted(ctx);
            }
            DocumentEvent::LoadFailed { url, error } => {
                ctx.browser.apply_load_failed();
                eprintln!("Failed to load {url}: {error}");
                ctx.notifications.push(Notification::error(error.i18n_key()));
            }
            DocumentEvent::ShowCustomView { view, on_hidden } => {
                let effects = ctx.presenter.enter_requested(view, on_hidden, now);
                tasks.push(presenter_effects_task(*ctx.window_id, &effects));
            }
            DocumentEvent::HideCustomView => {
                let effects = ctx.presenter.exit_requested(now);
                tasks.push(presenter_effects_task(*ctx.window_id, &effects));
            }
        }
    }

    if tasks.is_empty() {
        Task::none()
    } else {
        Task::batch(tasks)
    }
}

/// Translates presenter effects into window tasks.
///
/// Re-layout needs no task: the overlay container always fills the window,
/// so the next redraw re-attaches the view at the new size.
fn presenter_effects_task(
    window_id: Option<window::Id>,
    effects: &[PresenterEffect],
) -> Task<Message> {
    let Some(id) = window_id else {
        return Task::none();
    };

    let tasks: Vec<Task<Message>> = effects
        .iter()
        .filter_map(|effect| match effect {
            PresenterEffect::ApplyFullscreenChrome => {
                Some(window::set_mode(id, window::Mode::Fullscreen))
            }
            PresenterEffect::RestoreWindowChrome => {
                Some(window::set_mode(id, window::Mode::Windowed))
            }
            PresenterEffect::RelayoutFullscreenView => None,
        })
        .collect();

    if tasks.is_empty() {
        Task::none()
    } else {
        Task::batch(tasks)
    }
}

/// Closes the window via the same teardown path as a close request.
fn close_window(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(id) = *ctx.window_id else {
        return Task::none();
    };
    handle_window_close(ctx, id)
}

fn save_persisted(ctx: &mut UpdateContext<'_>) {
    if let Some(key) = ctx.persisted.save() {
        ctx.notifications.push(Notification::warning(&key));
    }
}
