// SPDX-License-Identifier: MPL-2.0
//! Preference persistence helper.
//!
//! Saves are best-effort: a failed write surfaces as a warning toast and the
//! session carries on with its in-memory state.

use super::config::{self, Config};
use crate::ui::notifications::{Manager, Notification};

/// Persists the current preferences, reporting failures via notifications.
pub fn persist_preferences(config: &Config, notifications: &mut Manager) {
    if config::save(config).is_err() {
        notifications.push(Notification::warning("notification-config-save-error"));
    }
}
