// Caller-facing hyphenation options.

use hyphenable_core::SOFT_HYPHEN_STR;
use serde::{Deserialize, Serialize};

/// Options shared by every hyphenation call made through a handle.
///
/// Deserializes from camelCase keys with every field optional, so `{}` gives
/// the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HyphenationOptions {
    /// Inserted at every break. Defaults to U+00AD SOFT HYPHEN.
    pub marker: String,

    /// Words shorter than this many graphemes are not hyphenated by the
    /// word-wise operations. 0 hyphenates every word.
    pub minimum_word_length: usize,
}

impl Default for HyphenationOptions {
    fn default() -> Self {
        Self {
            marker: SOFT_HYPHEN_STR.to_string(),
            minimum_word_length: 0,
        }
    }
}

impl HyphenationOptions {
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn with_minimum_word_length(mut self, minimum_word_length: usize) -> Self {
        self.minimum_word_length = minimum_word_length;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = HyphenationOptions::default();
        assert_eq!(options.marker, "\u{00AD}");
        assert_eq!(options.minimum_word_length, 0);
    }

    #[test]
    fn builders() {
        let options = HyphenationOptions::default()
            .with_marker("|")
            .with_minimum_word_length(5);
        assert_eq!(options.marker, "|");
        assert_eq!(options.minimum_word_length, 5);
    }
}
