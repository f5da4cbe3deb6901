//! Locale-aware soft-hyphen insertion.
//!
//! Given a string and a locale, asks a hyphenation oracle for every valid
//! break position and inserts a marker (U+00AD SOFT HYPHEN by default) at
//! each one. The original text is never altered otherwise: removing the
//! inserted markers gives back the input.
//!
//! # Architecture
//!
//! - [`oracle`] -- The [`HyphenationOracle`] trait and its implementations
//!   (Finnish rules, Liang patterns, a locale-keyed registry)
//! - [`breakset`] -- Per-grapheme break decisions and their application
//! - [`inserter`] -- Whole-string hyphenation
//! - [`segmented`] -- Word-by-word hyphenation with a length threshold
//! - [`options`] -- Caller-facing options
//! - [`render`] -- Presentational wrapper for a styled-text display
//! - [`handle`] -- [`Hyphenator`], bundling oracles and options
//!
//! Hyphenation never fails: an unsupported locale or an oracle with no
//! answer leaves the text unchanged. Errors arise only while configuring,
//! e.g. parsing a locale tag or loading a pattern file.

pub mod breakset;
pub mod inserter;
pub mod options;
pub mod oracle;
pub mod segmented;

#[cfg(feature = "render")]
pub mod render;

#[cfg(feature = "handle")]
pub mod handle;

pub use breakset::BreakSet;
pub use hyphenable_core::{LocaleError, LocaleTag, SOFT_HYPHEN, SOFT_HYPHEN_STR};
pub use inserter::{hyphenate, soft_hyphenate};
pub use options::HyphenationOptions;
pub use oracle::HyphenationOracle;
pub use segmented::{WORD_DELIMITER, hyphenate_by_word, word_break_set};

#[cfg(feature = "handle")]
pub use handle::{HyphenableError, Hyphenator};
