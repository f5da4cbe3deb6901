// Hyphenation oracles: locale-aware sources of break positions.
//
// An oracle answers two questions: whether it can hyphenate a locale at all,
// and where the nearest valid break before a given grapheme index lies. The
// inserter never looks at linguistic data itself; everything language
// specific sits behind this trait.

use std::ops::Range;
use std::sync::Arc;

use hyphenable_core::{GraphemeText, LocaleTag};

#[cfg(feature = "finnish")]
pub mod finnish;
#[cfg(feature = "patterns")]
pub mod patterns;
pub mod registry;

/// A locale-aware hyphenation service.
///
/// Implementations must be pure: the same inputs always give the same answer
/// and `text` is never modified. Oracles shared between threads must also be
/// reentrant, which `&self` receivers plus `Send + Sync` express.
pub trait HyphenationOracle {
    /// Whether this oracle can hyphenate text in `locale`.
    fn is_hyphenation_supported(&self, locale: &LocaleTag) -> bool;

    /// The nearest valid break position strictly before grapheme `index`,
    /// searching only inside `range`.
    ///
    /// A break at position `p` means a hyphen may go between graphemes
    /// `p - 1` and `p`. Returns `None` when there is no such position or the
    /// locale is unsupported.
    fn break_before(
        &self,
        text: &GraphemeText<'_>,
        index: usize,
        range: Range<usize>,
        locale: &LocaleTag,
    ) -> Option<usize>;

    /// Every position [`break_before`](Self::break_before) reports for some
    /// index in `range`, ascending and without duplicates.
    ///
    /// The default asks once per index. Oracles that can find all breaks of
    /// a range in one pass override it with an equivalent, linear version.
    fn breaks_in(
        &self,
        text: &GraphemeText<'_>,
        range: Range<usize>,
        locale: &LocaleTag,
    ) -> Vec<usize> {
        let mut breaks: Vec<usize> = range
            .clone()
            .filter_map(|index| self.break_before(text, index, range.clone(), locale))
            .collect();
        breaks.sort_unstable();
        breaks.dedup();
        breaks
    }
}

impl<O: HyphenationOracle + ?Sized> HyphenationOracle for &O {
    fn is_hyphenation_supported(&self, locale: &LocaleTag) -> bool {
        (**self).is_hyphenation_supported(locale)
    }

    fn break_before(
        &self,
        text: &GraphemeText<'_>,
        index: usize,
        range: Range<usize>,
        locale: &LocaleTag,
    ) -> Option<usize> {
        (**self).break_before(text, index, range, locale)
    }

    fn breaks_in(
        &self,
        text: &GraphemeText<'_>,
        range: Range<usize>,
        locale: &LocaleTag,
    ) -> Vec<usize> {
        (**self).breaks_in(text, range, locale)
    }
}

impl<O: HyphenationOracle + ?Sized> HyphenationOracle for Box<O> {
    fn is_hyphenation_supported(&self, locale: &LocaleTag) -> bool {
        (**self).is_hyphenation_supported(locale)
    }

    fn break_before(
        &self,
        text: &GraphemeText<'_>,
        index: usize,
        range: Range<usize>,
        locale: &LocaleTag,
    ) -> Option<usize> {
        (**self).break_before(text, index, range, locale)
    }

    fn breaks_in(
        &self,
        text: &GraphemeText<'_>,
        range: Range<usize>,
        locale: &LocaleTag,
    ) -> Vec<usize> {
        (**self).breaks_in(text, range, locale)
    }
}

impl<O: HyphenationOracle + ?Sized> HyphenationOracle for Arc<O> {
    fn is_hyphenation_supported(&self, locale: &LocaleTag) -> bool {
        (**self).is_hyphenation_supported(locale)
    }

    fn break_before(
        &self,
        text: &GraphemeText<'_>,
        index: usize,
        range: Range<usize>,
        locale: &LocaleTag,
    ) -> Option<usize> {
        (**self).break_before(text, index, range, locale)
    }

    fn breaks_in(
        &self,
        text: &GraphemeText<'_>,
        range: Range<usize>,
        locale: &LocaleTag,
    ) -> Vec<usize> {
        (**self).breaks_in(text, range, locale)
    }
}

/// An oracle that supports no locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHyphenation;

impl HyphenationOracle for NoHyphenation {
    fn is_hyphenation_supported(&self, _locale: &LocaleTag) -> bool {
        false
    }

    fn break_before(
        &self,
        _text: &GraphemeText<'_>,
        _index: usize,
        _range: Range<usize>,
        _locale: &LocaleTag,
    ) -> Option<usize> {
        None
    }
}

/// Clamp `range` to `0..len`.
pub(crate) fn clamp_range(range: Range<usize>, len: usize) -> Range<usize> {
    let end = range.end.min(len);
    range.start.min(end)..end
}

/// The nearest break strictly before `index` inside `range`, hyphenating
/// only the runs that can hold it.
///
/// A run is a maximal stretch of graphemes whose base characters satisfy
/// `in_run`. The walk goes backward from `index`; `word_breaks` gets the
/// base characters of one whole run and returns a flag per character (flag
/// `o` allows a break before character `o`). The first run with a break
/// before `index` ends the walk, so a query touches a bounded number of runs
/// whenever breaks are dense. A run's first character never starts a break.
pub(crate) fn nearest_run_break(
    text: &GraphemeText<'_>,
    range: Range<usize>,
    index: usize,
    in_run: impl Fn(char) -> bool,
    mut word_breaks: impl FnMut(&[char]) -> Vec<bool>,
) -> Option<usize> {
    let range = clamp_range(range, text.len());
    let base = |i: usize| {
        text.grapheme(i)
            .map(hyphenable_core::character::base_char)
            .unwrap_or('\0')
    };

    let mut cursor = index.min(range.end);
    while cursor > range.start {
        if !in_run(base(cursor - 1)) {
            cursor -= 1;
            continue;
        }
        let mut start = cursor - 1;
        while start > range.start && in_run(base(start - 1)) {
            start -= 1;
        }
        let mut end = cursor;
        while end < range.end && in_run(base(end)) {
            end += 1;
        }

        let word: Vec<char> = (start..end).map(&base).collect();
        let flags = word_breaks(&word);
        let nearest = (1..cursor - start)
            .rev()
            .find(|&offset| flags.get(offset).copied().unwrap_or(false));
        if let Some(offset) = nearest {
            return Some(start + offset);
        }
        cursor = start;
    }
    None
}

/// All breaks [`nearest_run_break`] reports for the indices of `range`,
/// hyphenating each run exactly once.
pub(crate) fn run_breaks(
    text: &GraphemeText<'_>,
    range: Range<usize>,
    in_run: impl Fn(char) -> bool,
    mut word_breaks: impl FnMut(&[char]) -> Vec<bool>,
) -> Vec<usize> {
    // Only an index above a break can report it.
    let last_index = range.end.saturating_sub(1);
    let range = clamp_range(range, text.len());
    let bases: Vec<char> = text
        .graphemes()
        .skip(range.start)
        .take(range.len())
        .map(hyphenable_core::character::base_char)
        .collect();

    let mut breaks = Vec::new();
    let mut offset = 0;
    while offset < bases.len() {
        if !in_run(bases[offset]) {
            offset += 1;
            continue;
        }
        let start = offset;
        while offset < bases.len() && in_run(bases[offset]) {
            offset += 1;
        }
        let flags = word_breaks(&bases[start..offset]);
        breaks.extend(
            (1..offset - start)
                .filter(|&o| flags.get(o).copied().unwrap_or(false))
                .map(|o| range.start + start + o)
                .filter(|&p| p < last_index),
        );
    }
    breaks
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn no_hyphenation_supports_nothing() {
        let oracle = NoHyphenation;
        let text = GraphemeText::new("kissa");
        assert!(!oracle.is_hyphenation_supported(&locale("fi")));
        assert_eq!(oracle.break_before(&text, 4, 0..5, &locale("fi")), None);
    }

    #[test]
    fn wrappers_delegate() {
        let oracle = Arc::new(FixedOracle::new(&["en"], &[2]));
        let boxed: Box<dyn HyphenationOracle> = Box::new(FixedOracle::new(&["en"], &[2]));
        let text = GraphemeText::new("abcd");
        assert_eq!(oracle.break_before(&text, 4, 0..4, &locale("en")), Some(2));
        assert_eq!(boxed.break_before(&text, 4, 0..4, &locale("en")), Some(2));
        assert_eq!((&boxed).break_before(&text, 2, 0..4, &locale("en")), None);
    }

    #[test]
    fn clamp_range_limits_to_len() {
        assert_eq!(clamp_range(0..10, 4), 0..4);
        assert_eq!(clamp_range(6..10, 4), 4..4);
        assert_eq!(clamp_range(1..3, 4), 1..3);
    }

    /// Break before the third character of every run longer than three.
    fn third(word: &[char]) -> Vec<bool> {
        (0..word.len()).map(|o| o == 2 && word.len() > 3).collect()
    }

    #[test]
    fn nearest_run_break_walks_back_over_runs() {
        let text = GraphemeText::new("abcd ef  ghij");
        let not_space = |c: char| c != ' ';
        let range = text.full_range();
        assert_eq!(nearest_run_break(&text, range.clone(), 4, not_space, third), Some(2));
        // "ef" has no break, so the walk continues into "abcd"
        assert_eq!(nearest_run_break(&text, range.clone(), 7, not_space, third), Some(2));
        assert_eq!(nearest_run_break(&text, range.clone(), 12, not_space, third), Some(11));
        assert_eq!(nearest_run_break(&text, range.clone(), 11, not_space, third), Some(2));
        assert_eq!(nearest_run_break(&text, range, 2, not_space, third), None);
    }

    #[test]
    fn nearest_run_break_respects_range() {
        let text = GraphemeText::new("abcd ef  ghij");
        let not_space = |c: char| c != ' ';
        // the range cuts "abcd" down to "bcd", whose third character is 'd'
        assert_eq!(nearest_run_break(&text, 1..13, 4, not_space, third), None);
        assert_eq!(nearest_run_break(&text, 1..13, 7, not_space, third), None);
        // and "ghij" down to "ghi"
        assert_eq!(nearest_run_break(&text, 0..12, 13, not_space, third), Some(2));
        assert_eq!(nearest_run_break(&text, 0..40, 99, not_space, third), Some(11));
    }

    #[test]
    fn nearest_run_break_work_grows_linearly() {
        let source = "kissa koira talo ".repeat(200);
        let text = GraphemeText::new(&source);
        let mut hyphenated = 0usize;
        for index in 0..text.len() {
            nearest_run_break(&text, text.full_range(), index, |c| c != ' ', |word| {
                hyphenated += word.len();
                third(word)
            });
        }
        // every query stops within the current or previous word
        assert!(
            hyphenated <= 12 * text.len(),
            "{hyphenated} characters hyphenated for {} graphemes",
            text.len()
        );
    }

    #[test]
    fn run_breaks_match_per_index_answers() {
        let text = GraphemeText::new("abcd ef  ghij");
        let not_space = |c: char| c != ' ';
        for range in [0..13, 1..13, 0..12, 0..11, 3..40] {
            let mut expected: Vec<usize> = range
                .clone()
                .filter_map(|i| nearest_run_break(&text, range.clone(), i, not_space, third))
                .collect();
            expected.sort_unstable();
            expected.dedup();
            assert_eq!(
                run_breaks(&text, range.clone(), not_space, third),
                expected,
                "range {range:?}"
            );
        }
        assert_eq!(run_breaks(&text, 0..13, not_space, third), vec![2, 11]);
    }

    #[test]
    fn run_breaks_hyphenate_each_run_once() {
        // short words never break, so a backward walk would see every run
        let source = "ja on ".repeat(500);
        let text = GraphemeText::new(&source);
        let mut hyphenated = 0usize;
        let breaks = run_breaks(&text, text.full_range(), |c| c != ' ', |word| {
            hyphenated += word.len();
            third(word)
        });
        assert!(breaks.is_empty());
        assert_eq!(hyphenated, 2000);
    }

    #[test]
    fn default_breaks_in_collects_every_answer() {
        let oracle = FixedOracle::new(&["en"], &[1, 3]);
        let text = GraphemeText::new("abcdef");
        assert_eq!(oracle.breaks_in(&text, text.full_range(), &locale("en")), vec![1, 3]);
        assert_eq!(oracle.breaks_in(&text, 0..3, &locale("en")), vec![1]);
        assert!(oracle.breaks_in(&text, text.full_range(), &locale("de")).is_empty());
    }
}
