//! Shared types for soft-hyphen insertion.
//!
//! - [`character`] -- marker constants and character classification
//! - [`locale`] -- locale tags selecting a hyphenation oracle
//! - [`text`] -- grapheme-indexed views of a string

pub mod character;
pub mod locale;
pub mod text;

pub use character::{SOFT_HYPHEN, SOFT_HYPHEN_STR};
pub use locale::{LocaleError, LocaleTag};
pub use text::GraphemeText;
