//! Integration tests for tn-core.
//!
//! These tests verify:
//! - Fixed points (empty input, idempotent steps)
//! - The documented default-config behavior end to end
//! - Step ordering effects that callers can observe
//! - Thread safety of a shared normalizer

use std::sync::Arc;
use std::thread;
use tn_core::{NormalizeConfig, Normalizer};

/// Config with every step disabled; tests enable one at a time.
fn all_off() -> NormalizeConfig {
    NormalizeConfig {
        lowercase: false,
        remove_accents: false,
        expand_contractions: false,
        expand_abbreviations: false,
        remove_punctuation: false,
        remove_numbers: false,
        remove_extra_whitespace: false,
        replace_urls: None,
        replace_emails: None,
        replace_phone_numbers: None,
    }
}

#[test]
fn empty_input_is_a_fixed_point_for_every_config() {
    let normalizer = Normalizer::new();
    let configs = [
        NormalizeConfig::default(),
        all_off(),
        NormalizeConfig {
            remove_punctuation: true,
            remove_numbers: true,
            expand_abbreviations: true,
            ..NormalizeConfig::default()
        },
    ];
    for config in &configs {
        assert_eq!(normalizer.normalize("", config), "");
    }
}

#[test]
fn defaults_on_worked_example() {
    let normalizer = Normalizer::new();
    let out = normalizer.normalize("Mr. O'Brien won't go.", &NormalizeConfig::default());
    assert_eq!(out, "mr. o'brien will not go.");
}

#[test]
fn contraction_only_expands_wont() {
    let normalizer = Normalizer::new();
    let config = NormalizeConfig {
        expand_contractions: true,
        ..all_off()
    };
    assert_eq!(normalizer.normalize("won't", &config), "will not");
}

#[test]
fn abbreviation_expansion_preserves_surrounding_case() {
    let normalizer = Normalizer::new();
    let config = NormalizeConfig {
        expand_abbreviations: true,
        ..all_off()
    };
    assert_eq!(normalizer.normalize("Dr. Smith", &config), "doctor Smith");
}

#[test]
fn url_redaction_runs_before_lowercasing() {
    let normalizer = Normalizer::new();
    let out = normalizer.normalize(
        "Visit https://example.com/page now",
        &NormalizeConfig::default(),
    );
    // The placeholder itself is folded by the later lowercase step.
    assert_eq!(out, "visit <url> now");
}

#[test]
fn email_and_phone_redaction_with_defaults() {
    let normalizer = Normalizer::new();
    let out = normalizer.normalize(
        "Reach Bob at bob@example.com or 555-123-4567.",
        &NormalizeConfig::default(),
    );
    assert_eq!(out, "reach bob at <email> or <phone>.");
}

#[test]
fn custom_redaction_tokens_are_used_verbatim() {
    let normalizer = Normalizer::new();
    let config = NormalizeConfig {
        replace_urls: Some("[link]".to_string()),
        ..all_off()
    };
    assert_eq!(
        normalizer.normalize("go to http://example.com now", &config),
        "go to [link] now"
    );
}

#[test]
fn number_removal_keeps_letter_suffix() {
    let normalizer = Normalizer::new();
    let config = NormalizeConfig {
        remove_numbers: true,
        ..all_off()
    };
    assert_eq!(normalizer.normalize("Room 42B", &config), "Room B");
}

#[test]
fn accent_removal_on_real_diacritics() {
    let normalizer = Normalizer::new();
    let config = NormalizeConfig {
        remove_accents: true,
        ..all_off()
    };
    assert_eq!(
        normalizer.normalize("El niño comió jalapeños", &config),
        "El nino comio jalapenos"
    );
}

#[test]
fn whitespace_output_has_no_runs_or_padding() {
    let normalizer = Normalizer::new();
    let config = NormalizeConfig {
        remove_extra_whitespace: true,
        ..all_off()
    };
    let out = normalizer.normalize("  several\t\twords \n here  ", &config);
    assert_eq!(out, "several words here");
    assert!(!out.contains("  "));
    assert_eq!(out, out.trim());
    // Idempotent: a second pass changes nothing.
    assert_eq!(normalizer.normalize(&out, &config), out);
}

#[test]
fn full_pipeline_with_everything_enabled() {
    let normalizer = Normalizer::new();
    let config = NormalizeConfig {
        expand_abbreviations: true,
        remove_punctuation: true,
        remove_numbers: true,
        ..NormalizeConfig::default()
    };
    let out = normalizer.normalize(
        "Dr. Núñez won't visit https://example.com (room 42)!",
        &config,
    );
    // Redaction inserts <URL> first; punctuation removal then strips the
    // angle brackets; digits vanish; everything folds and collapses.
    assert_eq!(out, "doctor nunez will not visit url room");
}

#[test]
fn shared_normalizer_is_safe_across_threads() {
    let normalizer = Arc::new(Normalizer::new());
    let mut handles = Vec::new();
    for _ in 0..8 {
        let normalizer = Arc::clone(&normalizer);
        handles.push(thread::spawn(move || {
            let config = NormalizeConfig::default();
            for _ in 0..100 {
                let out = normalizer.normalize("Mr. O'Brien won't go.", &config);
                assert_eq!(out, "mr. o'brien will not go.");
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}
