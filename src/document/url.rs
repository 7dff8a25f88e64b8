// SPDX-License-Identifier: MPL-2.0
//! Address normalization and validation.
//!
//! The shell accepts whatever the user types and massages it into a loadable
//! URL before handing it to the document view, mirroring what every mobile
//! address bar does: a bare host gets an `https://` prefix, obvious garbage
//! is rejected with a typed error instead of being sent to the engine.

use crate::error::LoadError;

/// Schemes the shell will pass through untouched.
const KNOWN_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Normalizes raw address-bar input into a loadable URL.
///
/// Leading and trailing whitespace is stripped; input without a known scheme
/// is prefixed with `https://`. Empty input is returned unchanged so that
/// validation can report it.
pub fn normalize(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if KNOWN_SCHEMES
        .iter()
        .any(|scheme| trimmed.to_ascii_lowercase().starts_with(scheme))
    {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Validates a normalized URL before it is handed to the document view.
pub fn validate(url: &str) -> Result<(), LoadError> {
    if url.is_empty() {
        return Err(LoadError::EmptyAddress);
    }

    // Inner whitespace can only come from user input; no engine will take it.
    if url.chars().any(char::is_whitespace) {
        return Err(LoadError::InvalidUrl(url.to_string()));
    }

    match host(url) {
        Some(h) if !h.is_empty() => Ok(()),
        _ => Err(LoadError::InvalidUrl(url.to_string())),
    }
}

/// Extracts the host portion of an `http(s)` URL.
pub fn host(url: &str) -> Option<&str> {
    let rest = KNOWN_SCHEMES
        .iter()
        .find_map(|scheme| {
            if url.to_ascii_lowercase().starts_with(scheme) {
                Some(&url[scheme.len()..])
            } else {
                None
            }
        })?;

    let end = rest
        .find(|c| c == '/' || c == '?' || c == '#' || c == ':')
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Derives a human-readable page title from a URL.
///
/// The real engine reports the document title once the page has parsed; the
/// headless engine falls back to the host with the `www.` prefix dropped.
pub fn derive_title(url: &str) -> String {
    host(url)
        .map(|h| h.strip_prefix("www.").unwrap_or(h).to_string())
        .unwrap_or_else(|| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_prefixes_bare_host_with_https() {
        assert_eq!(normalize("example.com"), "https://example.com");
    }

    #[test]
    fn normalize_keeps_existing_schemes() {
        assert_eq!(normalize("http://example.com"), "http://example.com");
        assert_eq!(normalize("https://example.com"), "https://example.com");
    }

    #[test]
    fn normalize_trims_whitespace() {
        assert_eq!(normalize("  example.com  "), "https://example.com");
    }

    #[test]
    fn normalize_empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn validate_rejects_empty_address() {
        assert_eq!(validate(""), Err(LoadError::EmptyAddress));
    }

    #[test]
    fn validate_rejects_inner_whitespace() {
        let url = "https://exa mple.com";
        assert_eq!(validate(url), Err(LoadError::InvalidUrl(url.to_string())));
    }

    #[test]
    fn validate_rejects_missing_host() {
        let url = "https:///path";
        assert_eq!(validate(url), Err(LoadError::InvalidUrl(url.to_string())));
    }

    #[test]
    fn validate_accepts_normalized_addresses() {
        assert_eq!(validate(&normalize("example.com/a/b?q=1")), Ok(()));
    }

    #[test]
    fn host_stops_at_path_query_and_port() {
        assert_eq!(host("https://example.com/path"), Some("example.com"));
        assert_eq!(host("https://example.com?q=1"), Some("example.com"));
        assert_eq!(host("https://example.com:8080/x"), Some("example.com"));
        assert_eq!(host("ftp://example.com"), None);
    }

    #[test]
    fn derive_title_drops_www_prefix() {
        assert_eq!(derive_title("https://www.bing.com"), "bing.com");
        assert_eq!(derive_title("https://codeberg.org/x"), "codeberg.org");
    }
}
