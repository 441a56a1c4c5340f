//! Fixed expansion tables.
//!
//! Both tables are process-wide constants built on first use and shared
//! by read-only reference across every [`Normalizer`](crate::Normalizer)
//! instance. The entries themselves are part of the public contract, not
//! illustrative samples.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Abbreviation expansions, keyed by the lowercase surface token
/// (trailing punctuation included, e.g. `"mr."`). Lookup is an exact
/// whole-token match against the lowercased token.
pub static ABBREVIATIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("mr.", "mister"),
        ("mrs.", "missus"),
        ("dr.", "doctor"),
        ("st.", "saint"),
        ("co.", "company"),
        ("jr.", "junior"),
        ("sr.", "senior"),
        ("etc.", "et cetera"),
        ("e.g.", "for example"),
        ("i.e.", "that is"),
    ])
});

/// Contraction expansions, applied as plain substring replacements in
/// exactly this order. Order matters: `won't` and `can't` must be
/// consumed before the bare `n't` suffix key can fire, and suffix keys
/// like `'s` intentionally match inside longer tokens as well.
pub static CONTRACTIONS: &[(&str, &str)] = &[
    ("won't", "will not"),
    ("can't", "cannot"),
    ("n't", " not"),
    ("'re", " are"),
    ("'s", " is"),
    ("'d", " would"),
    ("'ll", " will"),
    ("'ve", " have"),
    ("'m", " am"),
];
