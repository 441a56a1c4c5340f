//! Entity redaction patterns.
//!
//! Best-effort heuristic patterns for URLs, email addresses, and phone
//! numbers. Each replacement substitutes every match with a caller-chosen
//! placeholder token. The patterns are not exhaustive over real-world
//! formats; unmatched text passes through untouched.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// Default placeholder for redacted URLs.
pub const DEFAULT_URL_TOKEN: &str = "<URL>";
/// Default placeholder for redacted email addresses.
pub const DEFAULT_EMAIL_TOKEN: &str = "<EMAIL>";
/// Default placeholder for redacted phone numbers.
pub const DEFAULT_PHONE_TOKEN: &str = "<PHONE>";

// Pre-compiled redaction patterns.

static RE_URL: Lazy<Regex> = Lazy::new(|| {
    // http/https scheme followed by letters, digits, common URL-safe
    // punctuation, and percent-encoded octets.
    Regex::new(r"https?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\\(),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+")
        .unwrap()
});

static RE_EMAIL: Lazy<Regex> = Lazy::new(|| {
    // local-part@domain, each a run of word chars, dots, or hyphens.
    Regex::new(r"[\w.-]+@[\w.-]+").unwrap()
});

static RE_PHONE: Lazy<Regex> = Lazy::new(|| {
    // Optional +country-code (1-3 digits), optional parenthesized area
    // code, then 3+4 digits, with space/hyphen/dot separators allowed
    // between groups.
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

/// Replace every URL match with `token`.
pub fn replace_urls(text: &str, token: &str) -> String {
    RE_URL.replace_all(text, NoExpand(token)).into_owned()
}

/// Replace every email-address match with `token`.
pub fn replace_emails(text: &str, token: &str) -> String {
    RE_EMAIL.replace_all(text, NoExpand(token)).into_owned()
}

/// Replace every phone-number match with `token`.
pub fn replace_phones(text: &str, token: &str) -> String {
    RE_PHONE.replace_all(text, NoExpand(token)).into_owned()
}
