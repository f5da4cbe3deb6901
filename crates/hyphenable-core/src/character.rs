// Character classification used by the hyphenation oracles.

// ---------------------------------------------------------------------------
// Marker characters
// ---------------------------------------------------------------------------

/// SOFT HYPHEN (U+00AD): invisible unless the renderer breaks the line at it.
pub const SOFT_HYPHEN: char = '\u{00AD}';

/// [`SOFT_HYPHEN`] as a string slice, the default marker for insertion.
pub const SOFT_HYPHEN_STR: &str = "\u{00AD}";

// ---------------------------------------------------------------------------
// Finnish phonological constants
// ---------------------------------------------------------------------------

/// Finnish vowels (lowercase): a e i o u y ä ö
const FINNISH_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y', '\u{00E4}', '\u{00F6}'];

/// Finnish consonants (lowercase), including the loan letters š and ž.
const FINNISH_CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'z', '\u{0161}', '\u{017E}',
];

/// Check whether a character is a Finnish vowel (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    FINNISH_VOWELS.contains(&simple_lower(c))
}

/// Check whether a character is a Finnish consonant (case-insensitive).
pub fn is_consonant(c: char) -> bool {
    FINNISH_CONSONANTS.contains(&simple_lower(c))
}

// ---------------------------------------------------------------------------
// Case and whitespace
// ---------------------------------------------------------------------------

/// One-to-one lowercase mapping.
///
/// Characters whose lowercase form expands to several characters map to the
/// first character of the expansion, so indices never shift.
pub fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Whitespace as understood by the word-run scanners.
///
/// Covers the C0 separators, U+0085, the no-break spaces and the Unicode
/// space separators.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || cp == 0x180E
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
}

/// The base character of a grapheme cluster (its first scalar value).
///
/// Classification of clusters such as `a` + COMBINING DIAERESIS goes by the
/// base letter. An empty string yields U+0000.
pub fn base_char(grapheme: &str) -> char {
    grapheme.chars().next().unwrap_or('\0')
}
