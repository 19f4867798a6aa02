//! # linkforge
//!
//! Internal-link placement engine for article HTML.
//!
//! Given a block of article HTML and a catalog of candidate target pages,
//! the engine chooses a small set of natural-reading anchor phrases inside
//! the article text, each pointing to a distinct target page, respecting
//! spacing and quality constraints, then rewrites the HTML to insert those
//! anchors without corrupting markup or double-linking existing anchors.
//!
//! ## Quick Start
//!
//! ```rust
//! use linkforge::{LinkEngine, SitePage};
//!
//! let engine = LinkEngine::default();
//! engine.set_catalog(vec![SitePage::new(
//!     "https://example.com/guides/sourdough-baking",
//!     "Sourdough Baking Guide",
//! )]);
//!
//! let html = "<p>The complete guide to sourdough baking requires patience \
//!             and the right flour</p>";
//! let decisions = engine.find_link_opportunities(html, None);
//! let rewritten = engine.inject_links(html, &decisions);
//! assert_eq!(LinkEngine::count_existing_links(&rewritten), decisions.len());
//! ```
//!
//! ## Pipeline
//!
//! HTML + catalog → paragraph spans → scored anchor candidates → greedy
//! constrained selection → offset-safe injection. Every stage degrades to
//! partial or empty results instead of failing: no paragraphs, no viable
//! candidates, or an unlocatable anchor at injection time all shrink the
//! output rather than raising an error.
//!
//! The engine builds no DOM; it scans `<p>` blocks into lightweight text
//! spans with byte offsets and performs string surgery on the markup.

mod engine;
mod error;
mod options;
mod patterns;

/// Site-page catalog types and keyword derivation.
pub mod catalog;

/// Anchor candidate generation and scoring.
pub mod candidate;

/// Offset-safe link injection.
pub mod injector;

/// Paragraph extraction into ordered text spans.
pub mod paragraph;

/// Greedy constrained selection of final links.
pub mod selector;

/// Token normalization and heuristic stemming.
pub mod stem;

// Public API - re-exports
pub use catalog::{pages_from_json, SitePage};
pub use engine::LinkEngine;
pub use error::{Error, Result};
pub use options::Options;
pub use selector::LinkDecision;

use stem::HeuristicStemmer;

/// Find link opportunities with an explicit catalog and options.
///
/// Convenience for callers that do not hold a [`LinkEngine`]; one-shot
/// equivalent of [`LinkEngine::find_link_opportunities`].
#[must_use]
pub fn find_link_opportunities(
    html: &str,
    pages: &[SitePage],
    max_links: Option<usize>,
    options: &Options,
) -> Vec<LinkDecision> {
    if pages.is_empty() {
        return Vec::new();
    }
    let spans = paragraph::extract_paragraphs(html);
    if spans.is_empty() {
        return Vec::new();
    }
    let candidates = candidate::generate_candidates(&spans, pages, options, &HeuristicStemmer);
    selector::select_candidates(
        &candidates,
        &spans,
        max_links.unwrap_or(options.max_links),
        options,
    )
}

/// Rewrite HTML to insert the decided links, with explicit options.
///
/// One-shot equivalent of [`LinkEngine::inject_links`].
#[must_use]
pub fn inject_links(html: &str, decisions: &[LinkDecision], options: &Options) -> String {
    injector::inject_links(html, decisions, options.min_anchor_chars)
}

/// Count anchor tags already present in an HTML document.
#[must_use]
pub fn count_existing_links(html: &str) -> usize {
    injector::count_existing_links(html)
}
