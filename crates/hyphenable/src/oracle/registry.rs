// Locale-keyed dispatch over several oracles.

use std::ops::Range;

use hashbrown::HashMap;
use hyphenable_core::{GraphemeText, LocaleTag};

use super::HyphenationOracle;

type SharedOracle = Box<dyn HyphenationOracle + Send + Sync>;

/// A set of oracles keyed by locale, itself usable as an oracle.
///
/// Lookup tries the exact tag first and then the bare language, so an oracle
/// registered for `de` also serves `de-AT` while one registered for `de-CH`
/// takes precedence for that region. The chosen oracle still has the final
/// word on support.
#[derive(Default)]
pub struct OracleRegistry {
    oracles: HashMap<LocaleTag, SharedOracle>,
}

impl OracleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `oracle` for `locale`, replacing any previous registration.
    pub fn register(
        &mut self,
        locale: LocaleTag,
        oracle: impl HyphenationOracle + Send + Sync + 'static,
    ) {
        tracing::debug!(locale = %locale, "registered hyphenation oracle");
        self.oracles.insert(locale, Box::new(oracle));
    }

    /// Remove the oracle registered for exactly `locale`.
    pub fn unregister(&mut self, locale: &LocaleTag) -> bool {
        self.oracles.remove(locale).is_some()
    }

    /// The oracle that would answer queries for `locale`.
    pub fn resolve(&self, locale: &LocaleTag) -> Option<&(dyn HyphenationOracle + Send + Sync)> {
        if let Some(oracle) = self.oracles.get(locale) {
            return Some(&**oracle);
        }
        if locale.is_language_only() {
            return None;
        }
        self.oracles
            .get(&locale.language_only())
            .map(|oracle| &**oracle)
    }

    /// Registered locales in sorted order.
    pub fn locales(&self) -> Vec<LocaleTag> {
        let mut locales: Vec<LocaleTag> = self.oracles.keys().cloned().collect();
        locales.sort();
        locales
    }

    pub fn len(&self) -> usize {
        self.oracles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.oracles.is_empty()
    }
}

impl HyphenationOracle for OracleRegistry {
    fn is_hyphenation_supported(&self, locale: &LocaleTag) -> bool {
        self.resolve(locale)
            .is_some_and(|oracle| oracle.is_hyphenation_supported(locale))
    }

    fn break_before(
        &self,
        text: &GraphemeText<'_>,
        index: usize,
        range: Range<usize>,
        locale: &LocaleTag,
    ) -> Option<usize> {
        self.resolve(locale)?
            .break_before(text, index, range, locale)
    }

    fn breaks_in(
        &self,
        text: &GraphemeText<'_>,
        range: Range<usize>,
        locale: &LocaleTag,
    ) -> Vec<usize> {
        self.resolve(locale)
            .map(|oracle| oracle.breaks_in(text, range, locale))
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for OracleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleRegistry")
            .field("locales", &self.locales())
            .finish()
    }
}
