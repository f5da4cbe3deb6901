// Hyphenator: top-level handle bundling oracles and options.
//
// Owns an OracleRegistry plus the caller's HyphenationOptions and forwards
// to the inserter and the word-segmented layer. All hyphenation methods take
// `&self`, so one handle can be shared across threads once configured.

use hyphenable_core::text::strip_markers;
use hyphenable_core::{LocaleError, LocaleTag};

use crate::breakset::BreakSet;
use crate::inserter;
use crate::options::HyphenationOptions;
use crate::oracle::HyphenationOracle;
use crate::oracle::finnish::{FinnishOptions, FinnishOracle};
use crate::oracle::patterns::{PatternError, PatternOptions, PatternOracle};
use crate::oracle::registry::OracleRegistry;
use crate::render::HyphenableText;
use crate::segmented;

/// Error type for handle configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HyphenableError {
    /// A locale tag could not be parsed.
    #[error("invalid locale: {0}")]
    Locale(#[from] LocaleError),

    /// A pattern file could not be loaded.
    #[error("failed to load patterns: {0}")]
    Pattern(#[from] PatternError),
}

/// Top-level handle for soft-hyphen insertion.
#[derive(Debug)]
pub struct Hyphenator {
    registry: OracleRegistry,
    options: HyphenationOptions,

    /// Options of the built-in Finnish oracle.
    finnish_options: FinnishOptions,

    /// Applied to pattern files loaded after the change.
    pattern_options: PatternOptions,
}

impl Default for Hyphenator {
    fn default() -> Self {
        Self::new()
    }
}

impl Hyphenator {
    /// A handle with the built-in Finnish oracle registered for `fi`.
    pub fn new() -> Self {
        let mut hyphenator = Self::empty();
        hyphenator.register_finnish();
        hyphenator
    }

    /// A handle with no oracles; every locale is unsupported until one is
    /// registered.
    pub fn empty() -> Self {
        Self {
            registry: OracleRegistry::new(),
            options: HyphenationOptions::default(),
            finnish_options: FinnishOptions::default(),
            pattern_options: PatternOptions::default(),
        }
    }

    pub fn with_options(mut self, options: HyphenationOptions) -> Self {
        self.options = options;
        self
    }

    // =========================================================================
    // Oracles
    // =========================================================================

    /// Register `oracle` for the locale tag `locale`.
    pub fn register(
        &mut self,
        locale: &str,
        oracle: impl HyphenationOracle + Send + Sync + 'static,
    ) -> Result<LocaleTag, HyphenableError> {
        let tag = LocaleTag::parse(locale)?;
        self.registry.register(tag.clone(), oracle);
        Ok(tag)
    }

    /// Parse Liang patterns from `source` and register them for `locale`.
    pub fn load_patterns(
        &mut self,
        locale: &str,
        source: &str,
    ) -> Result<LocaleTag, HyphenableError> {
        let tag = LocaleTag::parse(locale)?;
        let oracle = PatternOracle::parse(tag.clone(), source, self.pattern_options)?;
        self.registry.register(tag.clone(), oracle);
        Ok(tag)
    }

    pub fn registry(&self) -> &OracleRegistry {
        &self.registry
    }

    /// Locales with a registered oracle, sorted.
    pub fn locales(&self) -> Vec<LocaleTag> {
        self.registry.locales()
    }

    /// Whether text in `locale` would be hyphenated.
    pub fn is_supported(&self, locale: &LocaleTag) -> bool {
        self.registry.is_hyphenation_supported(locale)
    }

    // =========================================================================
    // Hyphenation
    // =========================================================================

    /// Insert the configured marker at every break in `text`.
    pub fn hyphenate(&self, text: &str, locale: &LocaleTag) -> String {
        inserter::hyphenate(&self.registry, text, locale, &self.options.marker)
    }

    pub fn hyphenate_with_marker(&self, text: &str, locale: &LocaleTag, marker: &str) -> String {
        inserter::hyphenate(&self.registry, text, locale, marker)
    }

    /// Hyphenate space-separated words, skipping those shorter than the
    /// configured minimum word length.
    pub fn hyphenate_by_word(&self, text: &str, locale: &LocaleTag) -> String {
        self.hyphenate_by_word_with_min(text, locale, self.options.minimum_word_length)
    }

    pub fn hyphenate_by_word_with_min(
        &self,
        text: &str,
        locale: &LocaleTag,
        minimum_word_length: usize,
    ) -> String {
        segmented::hyphenate_by_word(
            &self.registry,
            text,
            locale,
            minimum_word_length,
            &self.options.marker,
        )
    }

    /// Break positions for `text`, or `None` if `locale` is unsupported.
    pub fn break_set(&self, text: &str, locale: &LocaleTag) -> Option<BreakSet> {
        inserter::break_set(&self.registry, text, locale, &self.options.marker)
    }

    /// Break positions [`hyphenate_by_word`](Self::hyphenate_by_word) would
    /// use, as grapheme indices into `text`, or `None` if `locale` is
    /// unsupported.
    pub fn word_break_set(&self, text: &str, locale: &LocaleTag) -> Option<BreakSet> {
        segmented::word_break_set(
            &self.registry,
            text,
            locale,
            self.options.minimum_word_length,
            &self.options.marker,
        )
    }

    /// Body of `text` rendered through this handle's oracles.
    pub fn render_body(&self, text: &HyphenableText) -> String {
        text.body(&self.registry)
    }

    /// Replace every configured marker in `hyphenated` with `-`, for
    /// terminals that do not show soft hyphens.
    pub fn render_visible(&self, hyphenated: &str) -> String {
        if self.options.marker.is_empty() {
            return hyphenated.to_string();
        }
        hyphenated.replace(self.options.marker.as_str(), "-")
    }

    /// Remove every configured marker from `text`.
    pub fn strip(&self, text: &str) -> String {
        strip_markers(text, &self.options.marker)
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    pub fn options(&self) -> &HyphenationOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: HyphenationOptions) {
        self.options = options;
    }

    pub fn set_marker(&mut self, marker: impl Into<String>) {
        self.options.marker = marker.into();
    }

    pub fn set_minimum_word_length(&mut self, value: usize) {
        self.options.minimum_word_length = value;
    }

    /// Replace the Finnish oracle's options. Re-registers the built-in
    /// oracle for `fi`, replacing anything registered there.
    pub fn set_finnish_options(&mut self, options: FinnishOptions) {
        self.finnish_options = options;
        self.register_finnish();
    }

    pub fn set_no_ugly_hyphenation(&mut self, value: bool) {
        let options = FinnishOptions {
            ugly_hyphenation: !value,
            ..self.finnish_options
        };
        self.set_finnish_options(options);
    }

    pub fn set_min_hyphenated_word_length(&mut self, value: usize) {
        let options = FinnishOptions {
            min_hyphenated_word_length: value,
            ..self.finnish_options
        };
        self.set_finnish_options(options);
    }

    /// Options used by subsequent [`load_patterns`](Self::load_patterns)
    /// calls.
    pub fn set_pattern_options(&mut self, options: PatternOptions) {
        self.pattern_options = options.clamped();
    }

    fn register_finnish(&mut self) {
        // "fi" is a well-formed tag
        if let Ok(tag) = LocaleTag::parse("fi") {
            self.registry
                .register(tag, FinnishOracle::new(self.finnish_options));
        }
    }
}
