//! Target URL validation.
//!
//! This is a guard against obviously malformed or non-HTTP input, not an
//! RFC 3986 parser. The accepted character classes are fixed; widening or
//! narrowing them changes which links can be created.

use regex::Regex;
use std::sync::LazyLock;

/// Absolute http(s) URL with at least one dotted host label and an optional
/// conservative path/query suffix. Not anchored.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]+(/[A-Za-z0-9_\- ./?%&=]*)?")
        .expect("URL pattern is a valid regex")
});

/// Returns `true` if `candidate` is an acceptable redirect target.
///
/// Both of the following must hold:
///
/// - the URL pattern matches somewhere in the string
/// - the string itself starts with `h`, so a URL buried in other text is
///   rejected
///
/// # Examples
///
/// ```
/// use kv_shortener::utils::url_validator::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/a?b=c"));
/// assert!(!is_valid_url("ftp://example.com"));
/// assert!(!is_valid_url("see https://example.com"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    URL_PATTERN.is_match(candidate) && candidate.starts_with('h')
}
