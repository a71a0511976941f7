//! Property-based tests for the tokenizer
//!
//! These tests check the guarantees every consumer relies on: tokens are never empty,
//! normalization is idempotent and tokenizing joined tokens is stable.

use ingredient_tokenizer::ingredient::tokenization::join_tokens;
use ingredient_tokenizer::{clump_fractions, normalize, tokenize};
use proptest::prelude::*;

/// Fragments ingredient lines are built from
const VOCABULARY: &[&str] = &[
    "2 1/2",
    "12/13",
    "100g",
    "cups/300",
    "grams",
    "flour",
    "(optional),",
    "Chopped",
    "(diced)",
    ",",
    "milk",
    "or",
    "3 Tbsp.",
    "onion (sliced) thin",
    "salt,",
    "ounces),",
    "(chopped),",
];

/// True when re-tokenizing the joined tokens is expected to give them back: no token
/// before the last is a word with `,` `(` or `)` glued to its end.
fn rejoins_cleanly(tokens: &[String]) -> bool {
    let Some((_, init)) = tokens.split_last() else {
        return true;
    };
    !init
        .iter()
        .any(|token| token.len() > 1 && token.ends_with([',', '(', ')']))
}

/// Generate ingredient-like phrases from the vocabulary
fn phrase_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..12)
        .prop_map(|fragments| fragments.join(" "))
}

proptest! {
    #[test]
    fn tokens_are_never_empty(phrase in any::<String>()) {
        for token in tokenize(&phrase) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(char::is_whitespace), "token {:?}", token);
        }
    }

    #[test]
    fn tokenize_never_panics_on_printable_text(phrase in "\\PC*") {
        let _ = tokenize(&phrase);
    }

    #[test]
    fn normalize_is_idempotent(phrase in phrase_strategy()) {
        let once = normalize(&phrase);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn tokenizing_joined_tokens_is_stable(phrase in phrase_strategy()) {
        let tokens = tokenize(&phrase);
        let retokenized = tokenize(&join_tokens(&tokens));
        if rejoins_cleanly(&tokens) {
            prop_assert_eq!(retokenized, tokens);
        } else {
            // Glued punctuation splits off, everything else is unchanged
            prop_assert!(retokenized.len() > tokens.len());
            prop_assert_eq!(retokenized.concat(), tokens.concat());
        }
    }

    #[test]
    fn single_digit_mixed_numbers_are_clumped(
        whole in 0u32..1000,
        numerator in 1u32..10,
        denominator in 1u32..10,
    ) {
        let phrase = format!("{whole} {numerator}/{denominator} cups");
        prop_assert_eq!(
            clump_fractions(&phrase),
            format!("{whole}${numerator}/{denominator} cups")
        );
        prop_assert_eq!(
            tokenize(&phrase),
            vec![format!("{whole}${numerator}/{denominator}"), "cups".to_string()]
        );
    }

    #[test]
    fn multi_digit_fractions_are_not_clumped(
        whole in 0u32..1000,
        numerator in 10u32..100,
        denominator in 10u32..100,
    ) {
        let phrase = format!("{whole} {numerator}/{denominator}");
        prop_assert_eq!(clump_fractions(&phrase), phrase);
    }
}
