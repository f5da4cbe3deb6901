// Liang pattern hyphenation oracle.
//
// Loads TeX-style hyphenation patterns (`hy3ph`, `.ach4`, ...) and exception
// words (`as-so-ciate`). A word is padded with `.` on both sides, every
// pattern matching a substring contributes its digits by point-wise maximum,
// and odd values mark break points.

use std::ops::Range;

use hashbrown::HashMap;
use hyphenable_core::character::simple_lower;
use hyphenable_core::{GraphemeText, LocaleTag};

use super::{HyphenationOracle, nearest_run_break, run_breaks};

/// Error type for pattern loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("line {line}: malformed pattern {pattern:?}")]
    Malformed { line: usize, pattern: String },
    #[error("line {line}: pattern {pattern:?} has no letters")]
    NoLetters { line: usize, pattern: String },
    #[error("line {line}: pattern {pattern:?} conflicts with an earlier pattern")]
    Conflict { line: usize, pattern: String },
    #[error("line {line}: malformed exception {word:?}")]
    MalformedException { line: usize, word: String },
    #[error("no patterns found")]
    Empty,
}

/// Limits on how close to a word edge a break may fall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternOptions {
    /// Minimum number of characters before a break.
    pub left_min: usize,
    /// Minimum number of characters after a break.
    pub right_min: usize,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            left_min: 2,
            right_min: 3,
        }
    }
}

impl PatternOptions {
    /// The options with both limits raised to at least 1.
    pub fn clamped(self) -> Self {
        Self {
            left_min: self.left_min.max(1),
            right_min: self.right_min.max(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Patterns,
    Exceptions,
}

/// Hyphenation oracle driven by Liang patterns for one language.
#[derive(Debug, Clone)]
pub struct PatternOracle {
    locale: LocaleTag,
    /// Pattern letters -> inter-letter scores (one more than the letters).
    patterns: HashMap<String, Vec<u8>>,
    /// Lowercased word -> break positions.
    exceptions: HashMap<String, Vec<usize>>,
    max_pattern_len: usize,
    options: PatternOptions,
}

impl PatternOracle {
    /// Parse patterns and exceptions from `source`.
    ///
    /// Tokens are separated by whitespace; `%` starts a comment. Tokens are
    /// patterns unless they appear inside a `\hyphenation{ ... }` block. A
    /// `\patterns{ ... }` wrapper is accepted and ignored.
    pub fn parse(
        locale: LocaleTag,
        source: &str,
        options: PatternOptions,
    ) -> Result<Self, PatternError> {
        let mut oracle = Self {
            locale,
            patterns: HashMap::new(),
            exceptions: HashMap::new(),
            max_pattern_len: 0,
            options: options.clamped(),
        };

        let mut section = Section::Patterns;
        for (line_index, raw_line) in source.lines().enumerate() {
            let line = line_index + 1;
            let content = raw_line.split('%').next().unwrap_or_default();
            for token in content.split_whitespace() {
                let (token, closes) = match token.strip_suffix('}') {
                    Some(rest) => (rest, true),
                    None => (token, false),
                };
                match token {
                    "\\patterns{" => section = Section::Patterns,
                    "\\hyphenation{" => section = Section::Exceptions,
                    "" => {}
                    _ => match section {
                        Section::Patterns => oracle.add_pattern(line, token)?,
                        Section::Exceptions => oracle.add_exception(line, token)?,
                    },
                }
                if closes {
                    section = Section::Patterns;
                }
            }
        }

        if oracle.patterns.is_empty() && oracle.exceptions.is_empty() {
            return Err(PatternError::Empty);
        }
        tracing::debug!(
            locale = %oracle.locale,
            patterns = oracle.patterns.len(),
            exceptions = oracle.exceptions.len(),
            "loaded hyphenation patterns"
        );
        Ok(oracle)
    }

    fn add_pattern(&mut self, line: usize, token: &str) -> Result<(), PatternError> {
        let malformed = || PatternError::Malformed {
            line,
            pattern: token.to_string(),
        };

        let mut letters = String::new();
        let mut scores = vec![0u8];
        let mut pending_digit = false;
        let char_count = token.chars().count();
        for (position, c) in token.chars().enumerate() {
            if let Some(digit) = c.to_digit(10) {
                if pending_digit {
                    return Err(malformed());
                }
                // Only single digits are valid, so this fits in a u8.
                if let Some(last) = scores.last_mut() {
                    *last = digit as u8;
                }
                pending_digit = true;
                continue;
            }
            if c == '.' && position != 0 && position + 1 != char_count {
                return Err(malformed());
            }
            letters.push(simple_lower(c));
            scores.push(0);
            pending_digit = false;
        }

        if letters.chars().all(|c| c == '.') {
            return Err(PatternError::NoLetters {
                line,
                pattern: token.to_string(),
            });
        }

        if let Some(existing) = self.patterns.get(&letters) {
            if *existing != scores {
                return Err(PatternError::Conflict {
                    line,
                    pattern: token.to_string(),
                });
            }
            return Ok(());
        }
        self.max_pattern_len = self.max_pattern_len.max(letters.chars().count());
        self.patterns.insert(letters, scores);
        Ok(())
    }

    fn add_exception(&mut self, line: usize, token: &str) -> Result<(), PatternError> {
        let mut word = String::new();
        let mut breaks = Vec::new();
        let mut len = 0;
        let mut last_was_hyphen = true;
        for c in token.chars() {
            if c == '-' {
                if last_was_hyphen {
                    return Err(PatternError::MalformedException {
                        line,
                        word: token.to_string(),
                    });
                }
                breaks.push(len);
                last_was_hyphen = true;
            } else {
                word.push(simple_lower(c));
                len += 1;
                last_was_hyphen = false;
            }
        }
        if last_was_hyphen {
            return Err(PatternError::MalformedException {
                line,
                word: token.to_string(),
            });
        }
        self.exceptions.insert(word, breaks);
        Ok(())
    }

    pub fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    pub fn options(&self) -> &PatternOptions {
        &self.options
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    /// Break flags for a single word: `true` at `p` allows a break between
    /// characters `p - 1` and `p`.
    pub fn word_breaks(&self, word: &[char]) -> Vec<bool> {
        let len = word.len();
        let mut flags = vec![false; len];
        let PatternOptions {
            left_min,
            right_min,
        } = self.options;
        if len < left_min + right_min {
            return flags;
        }
        let allowed = left_min..=len - right_min;

        let lower: Vec<char> = word.iter().map(|&c| simple_lower(c)).collect();
        let key: String = lower.iter().collect();
        if let Some(breaks) = self.exceptions.get(&key) {
            for &p in breaks.iter().filter(|&&p| allowed.contains(&p)) {
                flags[p] = true;
            }
            return flags;
        }

        let mut dotted = Vec::with_capacity(len + 2);
        dotted.push('.');
        dotted.extend_from_slice(&lower);
        dotted.push('.');

        // scores[k] is the value between dotted[k - 1] and dotted[k].
        let mut scores = vec![0u8; dotted.len() + 1];
        let mut candidate = String::new();
        for start in 0..dotted.len() {
            candidate.clear();
            let end = (start + self.max_pattern_len).min(dotted.len());
            for &c in &dotted[start..end] {
                candidate.push(c);
                if let Some(values) = self.patterns.get(candidate.as_str()) {
                    for (offset, &value) in values.iter().enumerate() {
                        let slot = &mut scores[start + offset];
                        *slot = (*slot).max(value);
                    }
                }
            }
        }

        // Word character p sits at dotted[p + 1].
        for p in allowed {
            if scores[p + 1] % 2 == 1 {
                flags[p] = true;
            }
        }
        flags
    }
}

impl HyphenationOracle for PatternOracle {
    fn is_hyphenation_supported(&self, locale: &LocaleTag) -> bool {
        locale.language() == self.locale.language()
            && self
                .locale
                .region()
                .is_none_or(|region| locale.region() == Some(region))
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
            char::is_alphabetic,
            |word| self.word_breaks(word),
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
            char::is_alphabetic,
            |word| self.word_breaks(word),
        )
    }
}
