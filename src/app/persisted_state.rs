// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! This module handles state that should persist across sessions but is not
//! user-configurable (unlike preferences in `settings.toml`): the favorites
//! list and the last visited page. Stored in CBOR for compact binary storage
//! and a clear separation from the user-editable TOML preferences.

use super::paths;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// A bookmarked page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Favorite {
    pub title: String,
    pub url: String,
    pub added_at: DateTime<Utc>,
}

impl Favorite {
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            added_at: Utc::now(),
        }
    }
}

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Bookmarked pages, oldest first.
    #[serde(default)]
    pub favorites: Vec<Favorite>,

    /// URL of the last page the user visited, restored as a fallback home.
    #[serde(default)]
    pub last_visited_url: Option<String>,
}

impl AppState {
    /// Adds a favorite unless its URL is already bookmarked.
    ///
    /// Returns `false` (and leaves the list untouched) for duplicates.
    pub fn add_favorite(&mut self, favorite: Favorite) -> bool {
        if self.favorites.iter().any(|f| f.url == favorite.url) {
            return false;
        }
        self.favorites.push(favorite);
        true
    }

    /// Removes the favorite at `index`, if it exists.
    pub fn remove_favorite(&mut self, index: usize) -> Option<Favorite> {
        if index < self.favorites.len() {
            Some(self.favorites.remove(index))
        } else {
            None
        }
    }

    /// Loads application state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning). If loading fails,
    /// returns default state with a warning key that can be surfaced via
    /// notifications.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(_) => (
                        Self::default(),
                        Some("notification-state-parse-error".to_string()),
                    ),
                }
            }
            Err(_) => (
                Self::default(),
                Some("notification-state-read-error".to_string()),
            ),
        }
    }

    /// Saves application state to the default location.
    ///
    /// Creates the parent directory if it doesn't exist. Returns an optional
    /// warning key if the save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves application state to a custom directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-create-error".to_string()),
        }
    }

    /// Returns the full path to the state file with an optional override.
    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_is_empty() {
        let state = AppState::default();
        assert!(state.favorites.is_empty());
        assert!(state.last_visited_url.is_none());
    }

    #[test]
    fn add_favorite_rejects_duplicate_urls() {
        let mut state = AppState::default();
        assert!(state.add_favorite(Favorite::new("Example", "https://example.com")));
        assert!(!state.add_favorite(Favorite::new("Other title", "https://example.com")));
        assert_eq!(state.favorites.len(), 1);
    }

    #[test]
    fn remove_favorite_out_of_bounds_is_none() {
        let mut state = AppState::default();
        state.add_favorite(Favorite::new("Example", "https://example.com"));

        assert!(state.remove_favorite(3).is_none());
        let removed = state.remove_favorite(0).expect("favorite exists");
        assert_eq!(removed.url, "https://example.com");
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();

        let mut state = AppState::default();
        state.add_favorite(Favorite::new("Example", "https://example.com"));
        state.last_visited_url = Some("https://example.com/page".to_string());

        assert!(state.save_to(Some(base.clone())).is_none());
        let (loaded, warning) = AppState::load_from(Some(base));

        assert!(warning.is_none());
        assert_eq!(loaded, state);
    }

    #[test]
    fn load_from_missing_file_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn load_from_corrupted_file_warns_and_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        fs::write(base.join(STATE_FILE), b"not cbor at all").expect("write garbage");

        let (state, warning) = AppState::load_from(Some(base));

        assert_eq!(warning, Some("notification-state-parse-error".to_string()));
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("deep").join("path");

        let state = AppState::default();
        assert!(state.save_to(Some(nested.clone())).is_none());
        assert!(nested.join(STATE_FILE).exists());
    }
}
