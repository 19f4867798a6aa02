//! Paragraph extraction: HTML to ordered text spans.
//!
//! A lightweight scanning pass over `<p>` blocks. No DOM is built; only
//! paragraph boundaries and raw byte offsets matter. Malformed or unmatched
//! paragraph tags are silently skipped - extraction never fails, and an HTML
//! body with zero paragraph blocks yields an empty sequence.

use crate::patterns::{ANCHOR_OPEN, ANY_TAG, PARAGRAPH_BLOCK, WHITESPACE_NORMALIZE};

/// One paragraph of the document as a plain-text span.
///
/// Spans are produced in document order and never overlap;
/// `cumulative_word_count` is monotonically non-decreasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphSpan {
    /// 0-based position in document order.
    pub index: usize,

    /// Tag-stripped, whitespace-normalized text content.
    pub text: String,

    /// Number of whitespace-separated words in `text`.
    pub word_count: usize,

    /// Running word total up to and including this paragraph.
    pub cumulative_word_count: usize,

    /// Whether the paragraph already contains anchor-tag markup.
    pub has_existing_link: bool,

    /// Byte offset of the opening `<p` in the original HTML.
    pub start_offset: usize,

    /// Byte offset just past the closing `</p>` in the original HTML.
    pub end_offset: usize,
}

impl ParagraphSpan {
    /// Whether this paragraph may host a new link: long enough and not
    /// already linked.
    #[must_use]
    pub fn is_linkable(&self, min_words: usize) -> bool {
        self.word_count >= min_words && !self.has_existing_link
    }
}

/// Segment HTML into ordered paragraph spans with cumulative word counts.
///
/// Short paragraphs are retained in the sequence for offset bookkeeping;
/// it is the candidate generator's job to skip them.
#[must_use]
pub fn extract_paragraphs(html: &str) -> Vec<ParagraphSpan> {
    let mut spans = Vec::new();
    let mut cumulative = 0usize;

    for (index, caps) in PARAGRAPH_BLOCK.captures_iter(html).enumerate() {
        let whole = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };
        let body = match caps.get(1) {
            Some(m) => m.as_str(),
            None => continue,
        };

        let has_existing_link = ANCHOR_OPEN.is_match(body);
        let stripped = ANY_TAG.replace_all(body, " ");
        let text = WHITESPACE_NORMALIZE
            .replace_all(stripped.trim(), " ")
            .into_owned();
        let word_count = text.split_whitespace().count();
        cumulative += word_count;

        spans.push(ParagraphSpan {
            index,
            text,
            word_count,
            cumulative_word_count: cumulative,
            has_existing_link,
            start_offset: whole.start(),
            end_offset: whole.end(),
        });
    }

    spans
}
