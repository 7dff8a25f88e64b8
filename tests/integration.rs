// SPDX-License-Identifier: MPL-2.0
//! Cross-module integration tests: configuration flowing into localization,
//! the document view driving the fullscreen presenter, and the back chain
//! over real component state.

use iced_surf::app::config::{self, Config};
use iced_surf::app::persisted_state::{AppState, Favorite};
use iced_surf::document::{DocumentEvent, DocumentView, HeadlessDocument};
use iced_surf::i18n::fluent::I18n;
use iced_surf::ui::fullscreen::{Phase, Presenter};
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn language_change_via_config_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    config::save_to_path(&initial, &config_path).expect("failed to write initial config");

    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let i18n_en = I18n::new(None, None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut chinese = Config::default();
    chinese.general.language = Some("zh-CN".to_string());
    config::save_to_path(&chinese, &config_path).expect("failed to write config");

    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let i18n_zh = I18n::new(None, None, &loaded);
    assert_eq!(i18n_zh.current_locale().to_string(), "zh-CN");
    assert_eq!(i18n_zh.tr("pane-untitled"), "未加载网页");
}

#[test]
fn cli_language_overrides_config_language() {
    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());

    let i18n = I18n::new(Some("zh-CN".to_string()), None, &config);
    assert_eq!(i18n.current_locale().to_string(), "zh-CN");
}

/// The full engine round trip: a page load, a custom-view request, the
/// presenter session, and the dismissal acknowledgement back to the engine.
#[test]
fn document_events_drive_presenter_session_to_completion() {
    let mut document = HeadlessDocument::default();
    let mut presenter = Presenter::new(Duration::from_millis(200));
    let start = Instant::now();

    document.load("https://example.com");
    document.finish_pending_loads();
    document.request_custom_view();

    let mut entered = false;
    for event in document.poll_events() {
        if let DocumentEvent::ShowCustomView { view, on_hidden } = event {
            presenter.enter_requested(view, on_hidden, start);
            entered = true;
        }
    }
    assert!(entered, "engine should have offered a custom view");
    presenter.tick(start + Duration::from_millis(200));
    assert_eq!(presenter.phase(), Phase::Fullscreen);
    assert!(!document.custom_view_dismissed());

    presenter.exit_requested(start + Duration::from_millis(200));
    presenter.tick(start + Duration::from_millis(500));

    assert_eq!(presenter.phase(), Phase::Inline);
    assert!(
        document.custom_view_dismissed(),
        "the engine must be told exactly once that its view is gone"
    );
}

/// Engine-initiated hide requests (the page leaving fullscreen by itself)
/// surface as events the shell maps onto `exit_requested`.
#[test]
fn engine_hide_event_follows_show_event() {
    let mut document = HeadlessDocument::default();
    document.load("https://example.com");
    document.finish_pending_loads();

    document.request_custom_view();
    document.dismiss_custom_view();

    let events = document.poll_events();
    assert!(matches!(
        events.as_slice(),
        [
            DocumentEvent::ShowCustomView { .. },
            DocumentEvent::HideCustomView
        ]
    ));
}

#[test]
fn forced_teardown_acknowledges_engine_view() {
    let mut document = HeadlessDocument::default();
    let mut presenter = Presenter::new(Duration::from_millis(200));
    let start = Instant::now();

    document.load("https://example.com");
    document.finish_pending_loads();
    document.request_custom_view();
    for event in document.poll_events() {
        if let DocumentEvent::ShowCustomView { view, on_hidden } = event {
            presenter.enter_requested(view, on_hidden, start);
        }
    }

    // No animation, no ticks: the host is going away.
    presenter.host_destroyed();
    document.destroy();

    assert_eq!(presenter.phase(), Phase::Inline);
    assert!(document.custom_view_dismissed());
    assert!(document.is_destroyed());
}

#[test]
fn persisted_favorites_survive_a_restart() {
    let dir = tempdir().expect("failed to create temporary directory");
    let base = dir.path().to_path_buf();

    let mut state = AppState::default();
    state.add_favorite(Favorite::new("Example", "https://example.com"));
    state.add_favorite(Favorite::new("必应", "https://www.bing.com"));
    state.last_visited_url = Some("https://example.com/deep/link".to_string());
    assert!(state.save_to(Some(base.clone())).is_none());

    let (restored, warning) = AppState::load_from(Some(base));
    assert!(warning.is_none());
    assert_eq!(restored.favorites.len(), 2);
    assert_eq!(restored.favorites[1].title, "必应");
    assert_eq!(
        restored.last_visited_url.as_deref(),
        Some("https://example.com/deep/link")
    );
}
