// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for user-configurable settings.

/// Home page loaded on startup when nothing else is configured.
pub const DEFAULT_HOME_URL: &str = "https://www.bing.com";

/// User-agent string reported by the document view. Servers are told this is
/// a desktop browser so they do not serve stripped-down mobile pages.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Whether script execution is enabled by default.
pub const DEFAULT_JAVASCRIPT_ENABLED: bool = true;

/// Fullscreen fade transition duration in milliseconds.
pub const DEFAULT_FADE_MS: u64 = 200;
/// Zero disables the transition entirely.
pub const MIN_FADE_MS: u64 = 0;
pub const MAX_FADE_MS: u64 = 1_000;
