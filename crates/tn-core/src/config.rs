//! Normalization pipeline configuration.
//!
//! One field per pipeline step, every step independently toggleable.
//! The struct is a plain value: the pipeline never mutates it and a
//! single config can drive any number of `normalize` calls.

use crate::redact::{DEFAULT_EMAIL_TOKEN, DEFAULT_PHONE_TOKEN, DEFAULT_URL_TOKEN};
use serde::{Deserialize, Serialize};

/// Configuration for a single `normalize` call.
///
/// The three `replace_*` fields double as toggles: `None` disables the
/// corresponding redaction step, `Some(token)` enables it with that
/// placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// Fold all characters to lowercase.
    #[serde(default = "default_true")]
    pub lowercase: bool,

    /// Strip accents/diacritics via NFKD decomposition.
    #[serde(default = "default_true")]
    pub remove_accents: bool,

    /// Expand English contractions by ordered substring replacement.
    #[serde(default = "default_true")]
    pub expand_contractions: bool,

    /// Expand whole-token abbreviations (mr., dr., e.g., ...).
    #[serde(default)]
    pub expand_abbreviations: bool,

    /// Delete characters that are neither word characters nor whitespace.
    #[serde(default)]
    pub remove_punctuation: bool,

    /// Delete every maximal run of decimal digits.
    #[serde(default)]
    pub remove_numbers: bool,

    /// Collapse whitespace runs to single spaces and trim the ends.
    #[serde(default = "default_true")]
    pub remove_extra_whitespace: bool,

    /// Replacement token for URLs; `None` skips URL redaction.
    #[serde(default = "default_url_token")]
    pub replace_urls: Option<String>,

    /// Replacement token for email addresses; `None` skips the step.
    #[serde(default = "default_email_token")]
    pub replace_emails: Option<String>,

    /// Replacement token for phone numbers; `None` skips the step.
    #[serde(default = "default_phone_token")]
    pub replace_phone_numbers: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_url_token() -> Option<String> {
    Some(DEFAULT_URL_TOKEN.to_string())
}

fn default_email_token() -> Option<String> {
    Some(DEFAULT_EMAIL_TOKEN.to_string())
}

fn default_phone_token() -> Option<String> {
    Some(DEFAULT_PHONE_TOKEN.to_string())
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            remove_accents: true,
            expand_contractions: true,
            expand_abbreviations: false,
            remove_punctuation: false,
            remove_numbers: false,
            remove_extra_whitespace: true,
            replace_urls: default_url_token(),
            replace_emails: default_email_token(),
            replace_phone_numbers: default_phone_token(),
        }
    }
}
