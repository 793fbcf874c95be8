//! Integration tests for the public generation API.
//!
//! Exercises the crate the way a downstream user would: top-level functions,
//! the builder, named alphabets and error reporting.

use alphaid::alphabet::{self, ASCII_LETTERS, DIGITS, HEX_DIGITS, URL_SAFE};
use alphaid::{checked_length, generate, generate_unsecure, Generator, IdError, Mode};

#[test]
fn generate_returns_requested_length() {
    for length in 1..20 {
        let id = generate(length, None).expect("generate should succeed");
        assert_eq!(id.chars().count(), length, "expected {length} symbols");
    }
}

#[test]
fn generate_unsecure_returns_requested_length() {
    for length in 1..20 {
        let id = generate_unsecure(length, None).expect("generate_unsecure should succeed");
        assert_eq!(id.chars().count(), length, "expected {length} symbols");
    }
}

#[test]
fn omitted_alphabet_defaults_to_url_safe() {
    let id = generate(500, None).unwrap();
    assert!(id.chars().all(|c| URL_SAFE.contains(c)));

    let id = generate_unsecure(500, None).unwrap();
    assert!(id.chars().all(|c| URL_SAFE.contains(c)));
}

#[test]
fn every_named_alphabet_produces_members_only() {
    for (name, symbols) in alphabet::NAMED {
        let secure = generate(64, Some(symbols)).unwrap();
        let fast = generate_unsecure(64, Some(symbols)).unwrap();
        assert!(
            secure.chars().all(|c| symbols.contains(c)),
            "secure id from {name} has foreign symbols: {secure:?}"
        );
        assert!(
            fast.chars().all(|c| symbols.contains(c)),
            "fast id from {name} has foreign symbols: {fast:?}"
        );
    }
}

#[test]
fn non_ascii_alphabet_is_drawn_by_symbol() {
    let symbols = "αβγδεζηθικλμνξοπρστυφχψω";
    let id = generate(40, Some(symbols)).unwrap();
    assert_eq!(id.chars().count(), 40);
    assert!(id.chars().all(|c| symbols.contains(c)));
}

#[test]
fn invalid_length_is_rejected() {
    assert!(matches!(generate(0, None), Err(IdError::InvalidLength(0))));
    assert!(matches!(
        generate_unsecure(0, Some(DIGITS)),
        Err(IdError::InvalidLength(0))
    ));
    assert!(matches!(checked_length(0), Err(IdError::InvalidLength(0))));
    assert!(matches!(checked_length(-1), Err(IdError::InvalidLength(-1))));
}

#[test]
fn oversized_alphabet_is_rejected() {
    let big = "_".repeat(300);
    assert!(matches!(
        generate(10, Some(&big)),
        Err(IdError::AlphabetTooLarge(300))
    ));
    assert!(matches!(
        generate_unsecure(10, Some(&big)),
        Err(IdError::AlphabetTooLarge(300))
    ));
}

#[test]
fn empty_alphabet_is_rejected() {
    assert!(matches!(generate(10, Some("")), Err(IdError::EmptyAlphabet)));
    assert!(matches!(
        generate_unsecure(10, Some("")),
        Err(IdError::EmptyAlphabet)
    ));
}

#[test]
fn error_messages_are_descriptive() {
    let err = generate(10, Some(&"x".repeat(256))).unwrap_err();
    assert!(err.to_string().contains("256"));
    assert!(err.to_string().contains("255"));

    let err = checked_length(-3).unwrap_err();
    assert!(err.to_string().contains("-3"));
}

#[test]
fn builder_configures_mode_and_alphabet() {
    let generator = Generator::builder()
        .named("hex")
        .unsecure()
        .build()
        .expect("builder should succeed");

    assert_eq!(generator.mode(), Mode::Fast);
    assert_eq!(generator.alphabet().len(), HEX_DIGITS.len());

    let ids = generator.generate_many(50, 12).unwrap();
    assert_eq!(ids.len(), 50);
    for id in &ids {
        assert_eq!(id.len(), 12);
        assert!(id.chars().all(|c| HEX_DIGITS.contains(c)));
    }
}

#[test]
fn shared_generator_serves_many_calls() {
    let generator = Generator::builder().alphabet(ASCII_LETTERS).build().unwrap();
    let first = generator.generate(32).unwrap();
    let second = generator.generate(32).unwrap();
    assert_ne!(first, second);
}
