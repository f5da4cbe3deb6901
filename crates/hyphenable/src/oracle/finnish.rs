// Rule-based Finnish hyphenation oracle.
//
// Finnish syllabification is regular enough to be captured by a handful of
// phonological rules applied per word:
// 1. Split explicit hyphens into components
// 2. Apply syllable rules within each component
// 3. Report the plain break points to the inserter

use std::ops::Range;

use hyphenable_core::character::{is_consonant, is_vowel, is_whitespace, simple_lower};
use hyphenable_core::{GraphemeText, LocaleTag};

use super::{HyphenationOracle, nearest_run_break, run_breaks};

/// Consonant sequences that are never split. A break falling inside one of
/// them moves to the front of the cluster.
const LONG_CONSONANTS: &[&[char]] = &[
    &['\u{0161}', 't', '\u{0161}'], // štš
    &['s', 'h', 't', 's', 'h'],     // shtsh
    &['t', 's', 'h'],               // tsh
    &['t', '\u{0161}'],             // tš
    &['z', 'h'],                    // zh
];

/// Vowel pairs that do not form a diphthong and may be split.
const SPLIT_VOWELS: &[[char; 2]] = &[
    ['a', 'e'],
    ['a', 'o'],
    ['e', 'a'],
    ['e', 'o'],
    ['i', 'a'],
    ['i', 'o'],
    ['o', 'a'],
    ['o', 'e'],
    ['u', 'a'],
    ['u', 'e'],
    ['y', 'e'],
    ['e', '\u{00E4}'], // eä
    ['e', '\u{00F6}'], // eö
    ['i', '\u{00E4}'], // iä
    ['i', '\u{00F6}'], // iö
    ['y', '\u{00E4}'], // yä
    ['\u{00E4}', 'e'], // äe
    ['\u{00F6}', 'e'], // öe
];

/// Diphthongs after which a following vowel may be split off (ugly mode only).
const SPLIT_AFTER: &[[char; 2]] = &[['i', 'e'], ['a', 'i']];

/// A consonant directly after one of these never starts a new syllable.
const NO_BREAK_AFTER: &[char] = &['/', '.', ':', '&', '%', '\''];

/// Break classification of one character in a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordBreak {
    /// No break here.
    None,
    /// A hyphen may go before this character; the character stays.
    Before,
    /// The break replaces this character (an explicit hyphen or an
    /// apostrophe between vowels).
    Replace,
}

/// Options for the Finnish oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinnishOptions {
    /// Keep correct but unattractive breaks, such as a single letter split
    /// off at a word edge or a split between two vowels.
    pub ugly_hyphenation: bool,

    /// Words and hyphen-separated components shorter than this are left
    /// whole.
    pub min_hyphenated_word_length: usize,
}

impl Default for FinnishOptions {
    fn default() -> Self {
        Self {
            ugly_hyphenation: true,
            min_hyphenated_word_length: 2,
        }
    }
}

/// Hyphenation oracle for Finnish (`fi`, any region or script).
#[derive(Debug, Clone, Default)]
pub struct FinnishOracle {
    options: FinnishOptions,
}

impl FinnishOracle {
    pub fn new(options: FinnishOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FinnishOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: FinnishOptions) {
        self.options = options;
    }

    /// Classify every character of a single word.
    pub fn word_breaks(&self, word: &[char]) -> Vec<WordBreak> {
        let len = word.len();
        let mut points = vec![WordBreak::None; len];
        if len < self.options.min_hyphenated_word_length {
            return points;
        }

        if allow_rule_hyphenation(word, self.options.ugly_hyphenation) {
            for i in 1..len.saturating_sub(1) {
                if word[i] == '-' {
                    points[i] = WordBreak::Replace;
                }
            }
        }

        self.hyphenate_components(word, &mut points);
        points
    }

    /// One flag per character: whether a marker may go before it.
    fn insertion_points(&self, word: &[char]) -> Vec<bool> {
        self.word_breaks(word)
            .into_iter()
            .map(|point| point == WordBreak::Before)
            .collect()
    }

    /// Run the syllable rules on each hyphen-separated component.
    fn hyphenate_components(&self, word: &[char], points: &mut [WordBreak]) {
        let len = word.len();
        let min_len = self.options.min_hyphenated_word_length;
        let ugly = self.options.ugly_hyphenation;

        let mut start = 0;
        while start < len && points[start] == WordBreak::Replace {
            start += 1;
        }

        let mut end = start + 1;
        while end < len {
            if points[end] == WordBreak::None {
                end += 1;
                continue;
            }
            if end >= start + min_len {
                rule_hyphenation(&word[start..end], &mut points[start..end], ugly);
            }
            start = if points[end] == WordBreak::Replace {
                end + 1
            } else {
                end
            };
            end = start + 1;
        }

        if end == len && start < end && end >= start + min_len {
            rule_hyphenation(&word[start..end], &mut points[start..end], ugly);
        }
    }
}

impl HyphenationOracle for FinnishOracle {
    fn is_hyphenation_supported(&self, locale: &LocaleTag) -> bool {
        locale.language() == "fi"
    }

    fn break_before(
        &self,
        text: &GraphemeText<'_>,
        index: usize,
        range: Range<usize>,
        locale: &LocaleTag,
    ) -> Option<usize> {
        if !self.is_hyphenation_supported(locale) {
            return None;
        }
        nearest_run_break(
            text,
            range,
            index,
            |c| !is_whitespace(c),
            |word| self.insertion_points(word),
        )
    }

    fn breaks_in(
        &self,
        text: &GraphemeText<'_>,
        range: Range<usize>,
        locale: &LocaleTag,
    ) -> Vec<usize> {
        if !self.is_hyphenation_supported(locale) {
            return Vec::new();
        }
        run_breaks(
            text,
            range,
            |c| !is_whitespace(c),
            |word| self.insertion_points(word),
        )
    }
}

/// Whether rule-based hyphenation may run on `word` at all.
///
/// Single characters never qualify. Without ugly hyphenation, URLs, email
/// addresses and words ending in a digit are also left alone.
fn allow_rule_hyphenation(word: &[char], ugly_hyphenation: bool) -> bool {
    let len = word.len();
    if len <= 1 {
        return false;
    }
    if !ugly_hyphenation {
        if is_nonword(word) {
            return false;
        }
        if word[len - 1].is_ascii_digit() {
            return false;
        }
    }
    true
}

/// Detect URL and email shaped strings: `X*//X*.X+`, `X*@X+.X+` and
/// `www.X+.X+`.
fn is_nonword(word: &[char]) -> bool {
    let len = word.len();
    if len < 4 {
        return false;
    }
    let head = &word[..len - 3];

    if let Some(slash) = head.iter().position(|&c| c == '/') {
        if word[slash + 1] == '/' && word[slash + 2..].contains(&'.') {
            return true;
        }
    }

    if let Some(at) = head.iter().position(|&c| c == '@') {
        if word[at + 1] != '.' && word[at + 2..].contains(&'.') {
            return true;
        }
    }

    len >= 7 && word[..4] == ['w', 'w', 'w', '.'] && word[4] != '.' && word[5..].contains(&'.')
}

/// Apply the Finnish syllable rules to one component.
///
/// `word` and `points` cover exactly the component.
fn rule_hyphenation(word: &[char], points: &mut [WordBreak], ugly_hyphenation: bool) {
    if !allow_rule_hyphenation(word, ugly_hyphenation) {
        return;
    }
    let len = word.len();
    let lower: Vec<char> = word.iter().map(|&c| simple_lower(c)).collect();

    // -CV: break before a consonant that starts a syllable. Leading
    // consonants belong to the first syllable.
    let mut i = lower.iter().take_while(|&&c| is_consonant(c)).count();
    while i + 2 <= len {
        if i >= 1
            && is_consonant(lower[i])
            && is_vowel(lower[i + 1])
            && !NO_BREAK_AFTER.contains(&lower[i - 1])
            && (i <= 1 || ugly_hyphenation || lower[i - 2] != '\'')
        {
            points[i] = WordBreak::Before;
        }
        i += 1;
    }

    // 'V: an apostrophe before a vowel separates syllables.
    for i in 1..len - 1 {
        if lower[i] == '\'' && is_vowel(lower[i + 1]) {
            points[i] = WordBreak::Replace;
        }
    }

    // VV: a long vowel keeps apart from its neighbouring vowels.
    for i in 1..len - 1 {
        if !is_vowel(lower[i]) || lower[i] != lower[i + 1] {
            continue;
        }
        if is_vowel(lower[i - 1]) && is_good_break(&lower, points, i) {
            points[i] = WordBreak::Before;
        }
        if i + 2 < len && is_good_break(&lower, points, i + 2) {
            points[i + 2] = WordBreak::Before;
        }
    }

    // V-V: vowel pairs that are not diphthongs.
    for i in 0..len - 1 {
        if points[i + 1] == WordBreak::None
            && SPLIT_VOWELS.contains(&[lower[i], lower[i + 1]])
        {
            points[i + 1] = WordBreak::Before;
        }
    }

    // Indivisible consonant clusters pull an inner break to their front.
    for i in 1..len - 1 {
        for cluster in LONG_CONSONANTS {
            let end = i + cluster.len();
            if end > len || lower[i..end] != **cluster {
                continue;
            }
            for k in (i + 1)..=end.min(len - 1) {
                if points[k] == WordBreak::Before {
                    points[k] = WordBreak::None;
                    points[i] = WordBreak::Before;
                }
            }
        }
    }

    if !ugly_hyphenation {
        points[1] = WordBreak::None;
        points[len - 1] = WordBreak::None;
        for i in 0..len - 1 {
            if is_vowel(lower[i]) && is_vowel(lower[i + 1]) {
                points[i + 1] = WordBreak::None;
            }
        }
    } else if len >= 3 {
        // VV-V: a vowel after "ie" or "ai" may be split off.
        for i in 0..len - 3 {
            for pair in SPLIT_AFTER {
                if points[i + 1] != WordBreak::Before
                    && [lower[i], lower[i + 1]] == *pair
                    && is_vowel(lower[i + 2])
                    && is_good_break(&lower, points, i + 2)
                {
                    points[i + 2] = WordBreak::Before;
                }
            }
        }
    }
}

/// Whether a new break at `pos` leaves a vowel on both sides, counting only
/// up to the neighbouring existing breaks.
fn is_good_break(word: &[char], points: &[WordBreak], pos: usize) -> bool {
    let len = word.len();
    if pos == 0 || pos + 1 >= len {
        return false;
    }

    // The first character is never inspected for a vowel.
    let mut vowel_before = false;
    let mut i = pos - 1;
    loop {
        if points[i] != WordBreak::None || i == 0 {
            break;
        }
        if is_vowel(word[i]) {
            vowel_before = true;
        }
        i -= 1;
    }
    if !vowel_before {
        return false;
    }

    for i in pos..len {
        if points[i] != WordBreak::None || word[i] == '.' {
            break;
        }
        if is_vowel(word[i]) {
            return true;
        }
    }
    false
}
