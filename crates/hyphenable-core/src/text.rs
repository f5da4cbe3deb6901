// Grapheme-indexed text.
//
// Every index handed to or returned by an oracle counts extended grapheme
// clusters, never bytes or scalar values, so an insertion can never land
// inside a user-perceived character.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

/// A string segmented once into extended grapheme clusters.
///
/// Keeps the byte offset of every cluster so that a grapheme index can be
/// turned into an insertion point in the underlying `str`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphemeText<'a> {
    source: &'a str,
    clusters: Vec<(usize, &'a str)>,
}

impl<'a> GraphemeText<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            clusters: source.grapheme_indices(true).collect(),
        }
    }

    /// Number of grapheme clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// The cluster at grapheme index `index`.
    pub fn grapheme(&self, index: usize) -> Option<&'a str> {
        self.clusters.get(index).map(|&(_, g)| g)
    }

    /// Byte offset of grapheme `index`; `len()` maps to the end of the text.
    pub fn byte_offset(&self, index: usize) -> Option<usize> {
        match index.cmp(&self.clusters.len()) {
            std::cmp::Ordering::Less => Some(self.clusters[index].0),
            std::cmp::Ordering::Equal => Some(self.source.len()),
            std::cmp::Ordering::Greater => None,
        }
    }

    /// Grapheme index starting at byte `offset`, the inverse of
    /// [`byte_offset`](Self::byte_offset). `None` unless `offset` is a
    /// cluster boundary.
    pub fn index_at_byte(&self, offset: usize) -> Option<usize> {
        if offset == self.source.len() {
            return Some(self.clusters.len());
        }
        self.clusters
            .binary_search_by_key(&offset, |&(start, _)| start)
            .ok()
    }

    /// The substring covering grapheme range `range`, clamped to the text.
    pub fn slice(&self, range: Range<usize>) -> &'a str {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        // Both offsets exist after clamping.
        let from = self.byte_offset(start).unwrap_or(self.source.len());
        let to = self.byte_offset(end).unwrap_or(self.source.len());
        &self.source[from..to]
    }

    /// Iterate over the clusters in order.
    pub fn graphemes(&self) -> impl DoubleEndedIterator<Item = &'a str> + ExactSizeIterator + '_ {
        self.clusters.iter().map(|&(_, g)| g)
    }

    /// The full grapheme range `0..len()`.
    pub fn full_range(&self) -> Range<usize> {
        0..self.len()
    }

    pub fn as_str(&self) -> &'a str {
        self.source
    }
}

/// Number of extended grapheme clusters in `text`.
pub fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Remove every occurrence of `marker` from `text`.
///
/// An empty marker leaves the text as is.
pub fn strip_markers(text: &str, marker: &str) -> String {
    if marker.is_empty() {
        return text.to_string();
    }
    text.replace(marker, "")
}
