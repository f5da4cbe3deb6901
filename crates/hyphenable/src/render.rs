// Presentational wrapper: hyphenate by word, then hand off to a display.
//
// Nothing here inspects or alters the style; it travels to the display
// primitive untouched.

use hyphenable_core::{LocaleTag, SOFT_HYPHEN_STR};

use crate::oracle::HyphenationOracle;
use crate::segmented::hyphenate_by_word;

/// Horizontal alignment of rendered text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Leading,
    Center,
    Trailing,
}

/// Styling forwarded to the display primitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub font: Option<String>,
    pub color: Option<String>,
    pub alignment: Alignment,
}

/// A styled-text display primitive, e.g. a terminal line or a UI label.
pub trait TextDisplay {
    fn display(&mut self, text: &str, style: &TextStyle);
}

impl<F: FnMut(&str, &TextStyle)> TextDisplay for F {
    fn display(&mut self, text: &str, style: &TextStyle) {
        self(text, style)
    }
}

/// Text to be shown with soft hyphens inserted for its locale.
///
/// The locale is explicit configuration; there is no ambient default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyphenableText {
    text: String,
    locale: LocaleTag,
    minimum_word_length: Option<usize>,
    style: TextStyle,
}

impl HyphenableText {
    pub fn new(text: impl Into<String>, locale: LocaleTag) -> Self {
        Self {
            text: text.into(),
            locale,
            minimum_word_length: None,
            style: TextStyle::default(),
        }
    }

    pub fn minimum_word_length(mut self, length: usize) -> Self {
        self.minimum_word_length = Some(length);
        self
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.style.font = Some(font.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.style.color = Some(color.into());
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.style.alignment = alignment;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// The text with soft hyphens inserted word by word.
    pub fn body<O: HyphenationOracle + ?Sized>(&self, oracle: &O) -> String {
        hyphenate_by_word(
            oracle,
            &self.text,
            &self.locale,
            self.minimum_word_length.unwrap_or(0),
            SOFT_HYPHEN_STR,
        )
    }

    /// Hyphenate and pass the result with this text's style to `display`.
    pub fn render<O, D>(&self, oracle: &O, display: &mut D)
    where
        O: HyphenationOracle + ?Sized,
        D: TextDisplay + ?Sized,
    {
        display.display(&self.body(oracle), &self.style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::testing::{FixedOracle, locale};

    #[test]
    fn body_hyphenates_long_words_only() {
        let oracle = FixedOracle::new(&["en"], &[2]);
        let text = HyphenableText::new("cat elephant", locale("en")).minimum_word_length(5);
        assert_eq!(text.body(&oracle), "cat el\u{00AD}ephant");
    }

    #[test]
    fn render_forwards_style_unchanged() {
        let oracle = FixedOracle::new(&["en"], &[2]);
        let text = HyphenableText::new("elephant", locale("en"))
            .font("serif")
            .color("#333")
            .alignment(Alignment::Center);

        let mut seen = Vec::new();
        let mut display = |body: &str, style: &TextStyle| seen.push((body.to_string(), style.clone()));
        text.render(&oracle, &mut display);

        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "el\u{00AD}ephant");
        assert_eq!(&seen[0].1, text.style());
        assert_eq!(seen[0].1.alignment, Alignment::Center);
    }

    #[test]
    fn unsupported_locale_renders_plain_text() {
        let oracle = FixedOracle::new(&["en"], &[2]);
        let text = HyphenableText::new("elephant", locale("de"));
        assert_eq!(text.body(&oracle), "elephant");
    }
}
