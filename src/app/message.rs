// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::browser;
use crate::ui::favorites;
use crate::ui::notifications;
use crate::ui::settings;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Browser(browser::Message),
    Settings(settings::Message),
    Favorites(favorites::Message),
    SwitchScreen(Screen),
    Notification(notifications::NotificationMessage),
    /// A back action (Escape key): fullscreen exit, history back, or screen
    /// close, in that order.
    BackRequested,
    /// Periodic tick driving fades, simulated loads, and toast expiry.
    Tick(Instant),
    /// Raw window/keyboard event routed from the subscription.
    RawEvent {
        window: iced::window::Id,
        event: iced::event::Event,
    },
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `zh-CN`, `en-US`).
    pub lang: Option<String>,
    /// Optional URL to load instead of the configured home page.
    pub start_url: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional data directory override (for the state file).
    /// Takes precedence over the `ICED_SURF_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for `settings.toml`).
    /// Takes precedence over the `ICED_SURF_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
