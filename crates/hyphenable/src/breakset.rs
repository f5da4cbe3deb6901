// BreakSet: per-grapheme "insert a marker here" decisions.
//
// A BreakSet is computed in a read-only pass over the original text and only
// then applied. Application walks indices from high to low, so inserting at
// index i never shifts the byte offset of any lower index still to be
// processed.

use hyphenable_core::{GraphemeText, LocaleTag};

use crate::oracle::HyphenationOracle;

/// One flag per grapheme of the original text; a set flag at `i` means a
/// marker goes immediately before grapheme `i`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BreakSet {
    flags: Vec<bool>,
}

impl BreakSet {
    /// An empty set for a text of `len` graphemes.
    pub fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    /// Ask `oracle` for the nearest break before every grapheme index of
    /// `text` and record each answer that lies strictly inside the text.
    ///
    /// Answers at 0 or at/after the end would produce a leading or trailing
    /// marker and are dropped, as are answers directly next to an existing
    /// `marker`. The oracle always sees the original, unmodified text.
    pub fn collect<O: HyphenationOracle + ?Sized>(
        oracle: &O,
        text: &GraphemeText<'_>,
        locale: &LocaleTag,
        marker: &str,
    ) -> Self {
        let len = text.len();
        let mut set = Self::new(len);
        if len == 0 {
            return set;
        }

        for position in oracle.breaks_in(text, text.full_range(), locale) {
            if position == 0 || position >= len {
                tracing::debug!(position, len, "discarded out-of-range break");
                continue;
            }
            if is_redundant(text, position, marker) {
                continue;
            }
            set.flags[position] = true;
        }
        set
    }

    /// Number of graphemes covered.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Mark a break before grapheme `index`. Returns false if `index` is
    /// outside the set.
    pub fn insert(&mut self, index: usize) -> bool {
        match self.flags.get_mut(index) {
            Some(flag) => {
                *flag = true;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Number of set flags, which equals the number of markers `apply`
    /// inserts.
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&flag| flag).count()
    }

    /// Set positions in ascending order.
    pub fn positions(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(index, &flag)| flag.then_some(index))
    }

    /// Build the hyphenated copy of `text`.
    ///
    /// `text` must be the text this set was collected from.
    pub fn apply(&self, text: &GraphemeText<'_>, marker: &str) -> String {
        let mut output = String::with_capacity(text.as_str().len() + self.count() * marker.len());
        output.push_str(text.as_str());
        for index in self.positions().rev() {
            if let Some(offset) = text.byte_offset(index) {
                output.insert_str(offset, marker);
            }
        }
        output
    }

    /// Render the set as one character per grapheme: `-` where a marker goes,
    /// a space elsewhere.
    pub fn pattern(&self) -> String {
        self.flags
            .iter()
            .map(|&flag| if flag { '-' } else { ' ' })
            .collect()
    }
}

/// Whether a break before `position` would sit directly next to an existing
/// `marker`. Compares bytes, so markers spanning several graphemes count too.
fn is_redundant(text: &GraphemeText<'_>, position: usize, marker: &str) -> bool {
    if marker.is_empty() {
        return false;
    }
    let Some(offset) = text.byte_offset(position) else {
        return false;
    };
    let source = text.as_str();
    source[..offset].ends_with(marker) || source[offset..].starts_with(marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::testing::{ConstantOracle, FixedOracle, locale};

    const SHY: &str = "\u{00AD}";

    #[test]
    fn collect_queries_original_text() {
        let oracle = FixedOracle::new(&["fi"], &[3]);
        let text = GraphemeText::new("kissa");
        let set = BreakSet::collect(&oracle, &text, &locale("fi"), SHY);
        assert_eq!(set.len(), 5);
        assert_eq!(set.positions().collect::<Vec<_>>(), vec![3]);
        assert_eq!(set.pattern(), "   - ");
    }

    #[test]
    fn break_before_last_grapheme_is_never_found() {
        // querying indices 0..len only ever yields positions below len - 1
        let oracle = FixedOracle::new(&["fi"], &[4]);
        let text = GraphemeText::new("kissa");
        let set = BreakSet::collect(&oracle, &text, &locale("fi"), SHY);
        assert_eq!(set.count(), 0);
    }

    #[test]
    fn out_of_range_answers_are_dropped() {
        let text = GraphemeText::new("abc");
        for position in [0, 3, 7] {
            let set = BreakSet::collect(&ConstantOracle(position), &text, &locale("en"), SHY);
            assert_eq!(set.count(), 0, "position {position}");
        }
        let set = BreakSet::collect(&ConstantOracle(1), &text, &locale("en"), SHY);
        assert_eq!(set.positions().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn no_marker_next_to_existing_marker() {
        let text = GraphemeText::new("ab\u{00AD}cd");
        for position in [2, 3] {
            let set = BreakSet::collect(&ConstantOracle(position), &text, &locale("en"), SHY);
            assert_eq!(set.count(), 0, "position {position}");
        }
        // a different marker is not affected by existing soft hyphens
        let set = BreakSet::collect(&ConstantOracle(2), &text, &locale("en"), "|");
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn multi_grapheme_marker_is_recognized() {
        let text = GraphemeText::new("ab--cd");
        for position in [2, 4] {
            let set = BreakSet::collect(&ConstantOracle(position), &text, &locale("en"), "--");
            assert_eq!(set.count(), 0, "position {position}");
        }
        // a single dash is only half the marker
        let set = BreakSet::collect(&ConstantOracle(3), &text, &locale("en"), "--");
        assert_eq!(set.positions().collect::<Vec<_>>(), vec![3]);
        let set = BreakSet::collect(&ConstantOracle(1), &text, &locale("en"), "--");
        assert_eq!(set.apply(&text, "--"), "a--b--cd");
    }

    #[test]
    fn visible_hyphen_does_not_block_a_break() {
        let text = GraphemeText::new("ab-cdef");
        let set = BreakSet::collect(&ConstantOracle(3), &text, &locale("en"), "|");
        assert_eq!(set.apply(&text, "|"), "ab-|cdef");
        let text = GraphemeText::new("ab\u{2010}cd");
        let set = BreakSet::collect(&ConstantOracle(3), &text, &locale("en"), SHY);
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn empty_text_makes_no_queries() {
        struct Panicking;
        impl HyphenationOracle for Panicking {
            fn is_hyphenation_supported(&self, _: &LocaleTag) -> bool {
                true
            }
            fn break_before(
                &self,
                _: &GraphemeText<'_>,
                _: usize,
                _: std::ops::Range<usize>,
                _: &LocaleTag,
            ) -> Option<usize> {
                panic!("queried on empty text")
            }
        }
        let text = GraphemeText::new("");
        let set = BreakSet::collect(&Panicking, &text, &locale("en"), SHY);
        assert!(set.is_empty());
    }

    #[test]
    fn apply_inserts_in_descending_order() {
        let text = GraphemeText::new("hyphenation");
        let mut set = BreakSet::new(text.len());
        assert!(set.insert(2));
        assert!(set.insert(6));
        assert!(!set.insert(11));
        assert_eq!(set.apply(&text, "-"), "hy-phen-ation");
        assert_eq!(set.apply(&text, SHY).matches(SHY).count(), set.count());
    }

    #[test]
    fn apply_respects_multibyte_graphemes() {
        // "hätä" with a decomposed ä in the middle
        let text = GraphemeText::new("ha\u{0308}ta\u{0308}");
        let mut set = BreakSet::new(text.len());
        set.insert(2);
        assert_eq!(set.apply(&text, "|"), "ha\u{0308}|ta\u{0308}");
    }

    #[test]
    fn contains_and_bounds() {
        let mut set = BreakSet::new(3);
        set.insert(1);
        assert!(set.contains(1));
        assert!(!set.contains(0));
        assert!(!set.contains(99));
    }
}
