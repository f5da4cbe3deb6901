// WASM bindings for soft-hyphen insertion.
//
// Provides a `WasmHyphenator` class exported via wasm-bindgen that wraps
// the `Hyphenator` handle. Options come in and break details go out as
// plain JavaScript objects through serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const h = new WasmHyphenator({ minimumWordLength: 5 });
//   h.isSupported("fi");                  // => true
//   h.hyphenate("kissa", "fi");           // => "kis\u{AD}sa"
//   h.hyphenateByWord("talo kissa", "fi"); // => "talo kis\u{AD}sa"
//   h.loadPatterns("en", patternText);    // => "en"
//   h.breaks("kissa", "fi");              // => [3]
//   h.locales();                          // => ["en", "fi"]

use serde::Serialize;
use wasm_bindgen::prelude::*;

use hyphenable::{HyphenableError, HyphenationOptions, Hyphenator, LocaleTag};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable break details for one string.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsBreakInfo {
    graphemes: usize,
    positions: Vec<usize>,
    pattern: String,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn error_to_js(e: HyphenableError) -> JsError {
    JsError::new(&e.to_string())
}

fn parse_locale(locale: &str) -> Result<LocaleTag, JsError> {
    LocaleTag::parse(locale).map_err(|e| error_to_js(e.into()))
}

// ============================================================================
// WasmHyphenator
// ============================================================================

/// Soft-hyphen insertion for WebAssembly.
///
/// Finnish is available out of the box; other languages need a pattern
/// file loaded with `loadPatterns`.
#[wasm_bindgen]
pub struct WasmHyphenator {
    handle: Hyphenator,
}

#[wasm_bindgen]
impl WasmHyphenator {
    /// Create a new instance.
    ///
    /// `options` is an optional object with `marker` and
    /// `minimumWordLength`; missing fields keep their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<WasmHyphenator, JsError> {
        let options: HyphenationOptions = if options.is_undefined() || options.is_null() {
            HyphenationOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options).map_err(|e| JsError::new(&e.to_string()))?
        };
        Ok(WasmHyphenator {
            handle: Hyphenator::new().with_options(options),
        })
    }

    /// Load Liang patterns for `locale`. Returns the normalized tag.
    #[wasm_bindgen(js_name = "loadPatterns")]
    pub fn load_patterns(&mut self, locale: &str, source: &str) -> Result<String, JsError> {
        self.handle
            .load_patterns(locale, source)
            .map(|tag| tag.to_string())
            .map_err(error_to_js)
    }

    /// Whether text in `locale` would be hyphenated.
    #[wasm_bindgen(js_name = "isSupported")]
    pub fn is_supported(&self, locale: &str) -> Result<bool, JsError> {
        Ok(self.handle.is_supported(&parse_locale(locale)?))
    }

    /// Insert the configured marker at every break in `text`.
    pub fn hyphenate(&self, text: &str, locale: &str) -> Result<String, JsError> {
        Ok(self.handle.hyphenate(text, &parse_locale(locale)?))
    }

    /// Hyphenate space-separated words; words shorter than
    /// `minimumWordLength` graphemes are left alone.
    #[wasm_bindgen(js_name = "hyphenateByWord")]
    pub fn hyphenate_by_word(
        &self,
        text: &str,
        locale: &str,
        minimum_word_length: Option<usize>,
    ) -> Result<String, JsError> {
        let locale = parse_locale(locale)?;
        Ok(match minimum_word_length {
            Some(min) => self.handle.hyphenate_by_word_with_min(text, &locale, min),
            None => self.handle.hyphenate_by_word(text, &locale),
        })
    }

    /// Grapheme indices where a marker would be inserted, or null if the
    /// locale is unsupported.
    pub fn breaks(&self, text: &str, locale: &str) -> Result<Option<Vec<u32>>, JsError> {
        let locale = parse_locale(locale)?;
        Ok(self
            .handle
            .break_set(text, &locale)
            .map(|set| set.positions().map(|p| p as u32).collect()))
    }

    /// Break details as `{ graphemes, positions, pattern }`, or null if the
    /// locale is unsupported.
    #[wasm_bindgen(js_name = "breakInfo")]
    pub fn break_info(&self, text: &str, locale: &str) -> Result<JsValue, JsError> {
        let locale = parse_locale(locale)?;
        let Some(set) = self.handle.break_set(text, &locale) else {
            return Ok(JsValue::NULL);
        };
        let info = JsBreakInfo {
            graphemes: set.len(),
            positions: set.positions().collect(),
            pattern: set.pattern(),
        };
        serde_wasm_bindgen::to_value(&info).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Remove every configured marker from `text`.
    pub fn strip(&self, text: &str) -> String {
        self.handle.strip(text)
    }

    /// Replace markers with a visible `-`.
    #[wasm_bindgen(js_name = "renderVisible")]
    pub fn render_visible(&self, text: &str) -> String {
        self.handle.render_visible(text)
    }

    /// Locales with an oracle, as BCP 47 strings.
    pub fn locales(&self) -> js_sys::Array {
        self.handle
            .locales()
            .iter()
            .map(|tag| JsValue::from_str(&tag.to_string()))
            .collect()
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the marker inserted at breaks.
    #[wasm_bindgen(js_name = "setMarker")]
    pub fn set_marker(&mut self, marker: &str) {
        self.handle.set_marker(marker);
    }

    /// Set the default minimum word length for `hyphenateByWord`.
    #[wasm_bindgen(js_name = "setMinimumWordLength")]
    pub fn set_minimum_word_length(&mut self, value: usize) {
        self.handle.set_minimum_word_length(value);
    }

    /// Set whether to suppress ugly but correct Finnish hyphenation points.
    #[wasm_bindgen(js_name = "setNoUglyHyphenation")]
    pub fn set_no_ugly_hyphenation(&mut self, value: bool) {
        self.handle.set_no_ugly_hyphenation(value);
    }
}
