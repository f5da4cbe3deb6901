// Word-by-word hyphenation with a length threshold.

use hyphenable_core::text::grapheme_len;
use hyphenable_core::{GraphemeText, LocaleTag};

use crate::breakset::BreakSet;
use crate::inserter::{break_set, hyphenate};
use crate::oracle::HyphenationOracle;

/// Words are separated by this character only; tabs, newlines and other
/// whitespace stay inside words.
pub const WORD_DELIMITER: char = ' ';

/// Hyphenate each space-separated word of `text` on its own.
///
/// Words with fewer than `minimum_word_length` graphemes are copied
/// verbatim. The delimiters themselves are preserved exactly, including
/// leading, trailing and repeated spaces, and the oracle never sees text
/// outside the word it is hyphenating.
pub fn hyphenate_by_word<O: HyphenationOracle + ?Sized>(
    oracle: &O,
    text: &str,
    locale: &LocaleTag,
    minimum_word_length: usize,
    marker: &str,
) -> String {
    let mut output = String::with_capacity(text.len());
    let mut hyphenated = 0usize;
    for (i, word) in text.split(WORD_DELIMITER).enumerate() {
        if i > 0 {
            output.push(WORD_DELIMITER);
        }
        if grapheme_len(word) < minimum_word_length {
            output.push_str(word);
        } else {
            output.push_str(&hyphenate(oracle, word, locale, marker));
            hyphenated += 1;
        }
    }
    tracing::trace!(locale = %locale, minimum_word_length, hyphenated, "hyphenated by word");
    output
}

/// The breaks [`hyphenate_by_word`] would use, as grapheme indices into the
/// whole of `text`. `None` if `locale` is unsupported.
///
/// Words below `minimum_word_length` contribute nothing, exactly as they are
/// copied verbatim by [`hyphenate_by_word`].
pub fn word_break_set<O: HyphenationOracle + ?Sized>(
    oracle: &O,
    text: &str,
    locale: &LocaleTag,
    minimum_word_length: usize,
    marker: &str,
) -> Option<BreakSet> {
    if !oracle.is_hyphenation_supported(locale) {
        return None;
    }
    let line = GraphemeText::new(text);
    let mut set = BreakSet::new(line.len());
    let mut word_start = 0;
    for word in text.split(WORD_DELIMITER) {
        if grapheme_len(word) >= minimum_word_length {
            if let Some(breaks) = break_set(oracle, word, locale, marker) {
                let graphemes = GraphemeText::new(word);
                for position in breaks.positions() {
                    let index = graphemes
                        .byte_offset(position)
                        .and_then(|offset| line.index_at_byte(word_start + offset));
                    if let Some(index) = index {
                        set.insert(index);
                    }
                }
            }
        }
        word_start += word.len() + WORD_DELIMITER.len_utf8();
    }
    Some(set)
}
