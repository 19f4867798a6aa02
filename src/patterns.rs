//! Compiled regex patterns for paragraph scanning and link injection.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Paragraph Scanning Patterns
// =============================================================================

/// Matches a complete paragraph block including its tags.
///
/// Case-insensitive, dot matches newlines, non-greedy body so adjacent
/// paragraphs never merge. Attributes on the opening tag are allowed.
/// Unmatched `<p>` tags simply produce no match and are skipped, which is
/// the extractor's failure policy.
pub static PARAGRAPH_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<p\b[^>]*>(.*?)</p\s*>").expect("PARAGRAPH_BLOCK regex")
});

/// Matches any HTML tag, for stripping paragraph bodies down to plain text.
pub static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("ANY_TAG regex"));

/// Matches an opening anchor tag, with or without attributes.
pub static ANCHOR_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<a(\s[^>]*)?>").expect("ANCHOR_OPEN regex"));

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

/// Matches separators used between slug words (`-`, `_`, `/`).
pub static SLUG_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_/]+").expect("SLUG_SEPARATOR regex"));
