// Whole-string marker insertion.

use hyphenable_core::{GraphemeText, LocaleTag};

use crate::breakset::BreakSet;
use crate::oracle::HyphenationOracle;

/// Insert `marker` at every break `oracle` reports for `text` in `locale`.
///
/// Returns `text` unchanged when the locale is unsupported or the text is
/// empty. Removing every `marker` that was not already present in `text`
/// gives back the input.
pub fn hyphenate<O: HyphenationOracle + ?Sized>(
    oracle: &O,
    text: &str,
    locale: &LocaleTag,
    marker: &str,
) -> String {
    if text.is_empty() {
        return String::new();
    }
    if !oracle.is_hyphenation_supported(locale) {
        tracing::debug!(locale = %locale, "hyphenation not supported, text left unchanged");
        return text.to_string();
    }

    let graphemes = GraphemeText::new(text);
    let breaks = BreakSet::collect(oracle, &graphemes, locale, marker);
    tracing::trace!(
        locale = %locale,
        graphemes = graphemes.len(),
        breaks = breaks.count(),
        pattern = %breaks.pattern(),
        "hyphenated"
    );
    breaks.apply(&graphemes, marker)
}

/// [`hyphenate`] with the soft hyphen as marker.
pub fn soft_hyphenate<O: HyphenationOracle + ?Sized>(
    oracle: &O,
    text: &str,
    locale: &LocaleTag,
) -> String {
    hyphenate(oracle, text, locale, hyphenable_core::SOFT_HYPHEN_STR)
}

/// The break positions [`hyphenate`] would use, without building the
/// output. `None` means the locale is unsupported.
pub fn break_set<O: HyphenationOracle + ?Sized>(
    oracle: &O,
    text: &str,
    locale: &LocaleTag,
    marker: &str,
) -> Option<BreakSet> {
    if !oracle.is_hyphenation_supported(locale) {
        return None;
    }
    let graphemes = GraphemeText::new(text);
    Some(BreakSet::collect(oracle, &graphemes, locale, marker))
}
