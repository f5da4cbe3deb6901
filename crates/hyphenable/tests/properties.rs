//! Property tests for soft-hyphen insertion.
//!
//! Run: cargo test -p hyphenable --features handle --test properties

use hyphenable::{Hyphenator, LocaleTag, SOFT_HYPHEN, SOFT_HYPHEN_STR};
use proptest::prelude::*;

const PATTERNS: &str = "hy3ph he2n hena4 hen5at 1na n2at 1tio 2io o2n 1ba 2ss";

fn hyphenator() -> Hyphenator {
    let mut hyphenator = Hyphenator::new();
    hyphenator
        .load_patterns("en", PATTERNS)
        .expect("patterns load");
    hyphenator
}

fn locale(tag: &str) -> LocaleTag {
    LocaleTag::parse(tag).unwrap()
}

/// Text without soft hyphens: Finnish and English letters, punctuation,
/// spaces and a combining diaeresis.
fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Zäöå .,'\\-\u{0308}]{0,48}"
}

fn arb_locale() -> impl Strategy<Value = LocaleTag> {
    prop_oneof![
        Just(locale("fi")),
        Just(locale("fi-FI")),
        Just(locale("en")),
        Just(locale("sv")),
    ]
}

proptest! {
    #[test]
    fn stripping_markers_restores_input(text in arb_text(), locale in arb_locale()) {
        let hyphenator = hyphenator();
        let out = hyphenator.hyphenate(&text, &locale);
        prop_assert_eq!(hyphenator.strip(&out), text);
    }

    #[test]
    fn rehyphenating_stripped_output_is_stable(text in arb_text(), locale in arb_locale()) {
        let hyphenator = hyphenator();
        let first = hyphenator.hyphenate(&text, &locale);
        let second = hyphenator.hyphenate(&hyphenator.strip(&first), &locale);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn no_marker_at_either_edge(text in arb_text(), locale in arb_locale()) {
        let out = hyphenator().hyphenate(&text, &locale);
        prop_assert!(!out.starts_with(SOFT_HYPHEN));
        prop_assert!(!out.ends_with(SOFT_HYPHEN));
    }

    #[test]
    fn markers_are_never_doubled(text in arb_text(), locale in arb_locale()) {
        let out = hyphenator().hyphenate(&text, &locale);
        let doubled = format!("{SOFT_HYPHEN_STR}{SOFT_HYPHEN_STR}");
        prop_assert!(!out.contains(&doubled));
    }

    #[test]
    fn word_mode_preserves_delimiters(
        text in arb_text(),
        locale in arb_locale(),
        minimum in 0usize..8,
    ) {
        let hyphenator = hyphenator();
        let out = hyphenator.hyphenate_by_word_with_min(&text, &locale, minimum);
        prop_assert_eq!(out.matches(' ').count(), text.matches(' ').count());

        let stripped = hyphenator.strip(&out);
        let original: Vec<&str> = text.split(' ').collect();
        let restored: Vec<&str> = stripped.split(' ').collect();
        prop_assert_eq!(original, restored);
    }

    #[test]
    fn short_words_are_never_marked(text in arb_text(), minimum in 0usize..8) {
        let out = hyphenator().hyphenate_by_word_with_min(&text, &locale("fi"), minimum);
        for word in out.split(' ') {
            let plain = word.replace(SOFT_HYPHEN_STR, "");
            if hyphenable_core::text::grapheme_len(&plain) < minimum {
                prop_assert_eq!(word, plain.as_str());
            }
        }
    }

    #[test]
    fn word_break_set_matches_word_mode(
        text in arb_text(),
        locale in arb_locale(),
        minimum in 0usize..8,
    ) {
        let mut hyphenator = hyphenator();
        hyphenator.set_minimum_word_length(minimum);
        let expected = hyphenator.hyphenate_by_word(&text, &locale);
        match hyphenator.word_break_set(&text, &locale) {
            Some(set) => {
                let graphemes = hyphenable_core::GraphemeText::new(&text);
                prop_assert_eq!(set.apply(&graphemes, SOFT_HYPHEN_STR), expected);
            }
            None => prop_assert_eq!(expected, text),
        }
    }

    #[test]
    fn unsupported_locale_is_identity(text in any::<String>()) {
        let hyphenator = hyphenator();
        let sv = locale("sv");
        prop_assert_eq!(hyphenator.hyphenate(&text, &sv), text.clone());
        prop_assert_eq!(hyphenator.hyphenate_by_word_with_min(&text, &sv, 0), text);
    }

    #[test]
    fn single_grapheme_never_gains_a_marker(c in any::<char>(), locale in arb_locale()) {
        let text = c.to_string();
        prop_assert_eq!(hyphenator().hyphenate(&text, &locale), text);
    }
}
