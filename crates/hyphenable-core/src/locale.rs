// Locale tags used to select a hyphenation oracle.

use std::fmt;
use std::str::FromStr;

/// Error type for locale tag parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("empty locale tag")]
    Empty,
    #[error("invalid language subtag {0:?}")]
    InvalidLanguage(String),
    #[error("invalid subtag {subtag:?} in locale tag {tag:?}")]
    InvalidSubtag { subtag: String, tag: String },
}

/// A language tag of the form `language[-Script][-REGION]`.
///
/// Parsing accepts both BCP 47 (`fi-FI`) and POSIX (`fi_FI.UTF-8@euro`)
/// spellings; the encoding and modifier of the POSIX form are dropped.
/// Subtags are case-normalized, so `FI_fi` and `fi-FI` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleTag {
    language: String,
    script: Option<String>,
    region: Option<String>,
}

impl LocaleTag {
    /// Parse a locale tag.
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        let trimmed = tag.trim();
        // POSIX: ll_CC.ENCODING@modifier
        let core = trimmed
            .split(['.', '@'])
            .next()
            .unwrap_or_default();
        if core.is_empty() {
            return Err(LocaleError::Empty);
        }

        let mut subtags = core.split(['-', '_']);
        let language = subtags.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return Err(LocaleError::InvalidLanguage(language.to_string()));
        }

        let mut locale = LocaleTag {
            language: language.to_ascii_lowercase(),
            script: None,
            region: None,
        };

        for subtag in subtags {
            let is_alpha = subtag.bytes().all(|b| b.is_ascii_alphabetic());
            let is_digit = subtag.bytes().all(|b| b.is_ascii_digit());
            match subtag.len() {
                4 if is_alpha && locale.script.is_none() && locale.region.is_none() => {
                    let mut script = subtag.to_ascii_lowercase();
                    script[..1].make_ascii_uppercase();
                    locale.script = Some(script);
                }
                2 if is_alpha && locale.region.is_none() => {
                    locale.region = Some(subtag.to_ascii_uppercase());
                }
                3 if is_digit && locale.region.is_none() => {
                    locale.region = Some(subtag.to_string());
                }
                _ => {
                    return Err(LocaleError::InvalidSubtag {
                        subtag: subtag.to_string(),
                        tag: tag.to_string(),
                    });
                }
            }
        }

        Ok(locale)
    }

    /// Lowercase ISO 639 language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Titlecase ISO 15924 script code, if present.
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Uppercase region code, if present.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The same tag with script and region removed.
    pub fn language_only(&self) -> LocaleTag {
        LocaleTag {
            language: self.language.clone(),
            script: None,
            region: None,
        }
    }

    /// Whether this tag carries nothing beyond the language.
    pub fn is_language_only(&self) -> bool {
        self.script.is_none() && self.region.is_none()
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{script}")?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        Ok(())
    }
}

impl FromStr for LocaleTag {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocaleTag::parse(s)
    }
}
