//! Text normalization pipeline for downstream text processing.
//!
//! This crate provides a single, reusable normalizer that canonicalizes
//! raw natural-language text for search, matching, and tokenization.
//!
//! # Key Features
//!
//! - **Entity redaction**: URLs, email addresses, and phone numbers are
//!   replaced with configurable placeholder tokens before any other
//!   transformation runs.
//! - **Accent stripping**: NFKD decomposition with combining marks
//!   dropped, leaving bare base characters.
//! - **Expansion tables**: fixed abbreviation (whole-token) and
//!   contraction (ordered substring) tables, built once and shared
//!   read-only across all normalizer instances.
//! - **Fixed step order**: every step is independently toggleable, but
//!   the order they run in is part of the contract. Abbreviation
//!   expansion sees the original casing because it runs before the
//!   lowercase step; redaction tokens are inserted before case folding.
//!
//! # Example
//!
//! ```
//! use tn_core::{NormalizeConfig, Normalizer};
//!
//! let normalizer = Normalizer::new();
//! let config = NormalizeConfig::default();
//!
//! let out = normalizer.normalize("Mr. O'Brien won't go.", &config);
//! assert_eq!(out, "mr. o'brien will not go.");
//! ```
//!
//! Every operation is total: there is no error type, and malformed or
//! match-free input simply passes through each step unchanged. The
//! normalizer holds no mutable state, so one instance can serve any
//! number of threads without synchronization.

pub mod config;
pub mod normalizer;
pub mod redact;
pub mod tables;

pub use config::NormalizeConfig;
pub use normalizer::Normalizer;
pub use redact::{DEFAULT_EMAIL_TOKEN, DEFAULT_PHONE_TOKEN, DEFAULT_URL_TOKEN};
