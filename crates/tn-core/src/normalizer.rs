//! The normalization pipeline.
//!
//! [`Normalizer::normalize`] runs a fixed ordered sequence of
//! transformations over the input, each independently toggleable through
//! [`NormalizeConfig`]. The order is contractual, not incidental:
//! redaction runs first so placeholder tokens are inserted before any
//! reshaping, abbreviation expansion sees the original casing because it
//! runs before the lowercase step, and whitespace collapse runs last to
//! absorb any spacing the earlier steps introduced.

use crate::config::NormalizeConfig;
use crate::redact;
use crate::tables::{ABBREVIATIONS, CONTRACTIONS};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static RE_DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

static RE_PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Immutable text normalizer.
///
/// Holds read-only references to the shared expansion tables, so
/// construction is free and instances can be cloned or shared across
/// threads without synchronization.
#[derive(Clone)]
pub struct Normalizer {
    abbreviations: &'static HashMap<&'static str, &'static str>,
    contractions: &'static [(&'static str, &'static str)],
}

impl Normalizer {
    /// Create a normalizer backed by the fixed expansion tables.
    pub fn new() -> Self {
        Self {
            abbreviations: &ABBREVIATIONS,
            contractions: CONTRACTIONS,
        }
    }

    /// Normalize `text` according to `config`.
    ///
    /// Runs the enabled steps in this fixed order, each consuming the
    /// output of the previous one:
    ///
    /// 1. URL redaction
    /// 2. Email redaction
    /// 3. Phone-number redaction
    /// 4. Accent removal (NFKD, combining marks dropped)
    /// 5. Abbreviation expansion (whole-token)
    /// 6. Contraction expansion (ordered substring)
    /// 7. Number removal
    /// 8. Punctuation removal
    /// 9. Lowercasing
    /// 10. Whitespace collapse
    ///
    /// Empty input is returned unchanged without running any step.
    pub fn normalize(&self, text: &str, config: &NormalizeConfig) -> String {
        if text.is_empty() {
            return String::new();
        }
        tracing::debug!(len = text.len(), "normalizing text");

        let mut normalized = text.to_string();

        if let Some(token) = &config.replace_urls {
            normalized = redact::replace_urls(&normalized, token);
        }

        if let Some(token) = &config.replace_emails {
            normalized = redact::replace_emails(&normalized, token);
        }

        if let Some(token) = &config.replace_phone_numbers {
            normalized = redact::replace_phones(&normalized, token);
        }

        if config.remove_accents {
            normalized = remove_accents(&normalized);
        }

        if config.expand_abbreviations {
            normalized = self.expand_abbreviations(&normalized);
        }

        if config.expand_contractions {
            normalized = self.expand_contractions(&normalized);
        }

        if config.remove_numbers {
            normalized = RE_DIGIT_RUN.replace_all(&normalized, "").into_owned();
        }

        if config.remove_punctuation {
            normalized = RE_PUNCTUATION.replace_all(&normalized, "").into_owned();
        }

        if config.lowercase {
            normalized = normalized.to_lowercase();
        }

        if config.remove_extra_whitespace {
            normalized = collapse_whitespace(&normalized);
        }

        tracing::debug!(len = normalized.len(), "normalization complete");
        normalized
    }

    /// Whole-token abbreviation expansion.
    ///
    /// Splits on whitespace, looks up each token's lowercase form, and
    /// replaces the entire token on a hit. Rejoins with single spaces,
    /// so token boundaries collapse even when nothing matched.
    fn expand_abbreviations(&self, text: &str) -> String {
        let words: Vec<&str> = text
            .split_whitespace()
            .map(|word| {
                self.abbreviations
                    .get(word.to_lowercase().as_str())
                    .copied()
                    .unwrap_or(word)
            })
            .collect();
        words.join(" ")
    }

    /// Ordered substring contraction expansion.
    ///
    /// Each key is replaced everywhere it occurs, in table order. Suffix
    /// keys like `'s` fire inside longer tokens too; full forms earlier
    /// in the table take precedence at overlapping sites.
    fn expand_contractions(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (contraction, expansion) in self.contractions {
            if result.contains(contraction) {
                result = result.replace(contraction, expansion);
            }
        }
        result
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// NFKD-decompose and drop combining marks, keeping base characters.
fn remove_accents(text: &str) -> String {
    text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Collapse any whitespace run to a single space and trim the ends.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
