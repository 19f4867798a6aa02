//! Greedy, constraint-respecting selection of final links.
//!
//! Reduces the candidate pool to a decision list under three constraints:
//! one link per destination page, one link per paragraph, and a minimum
//! word-distance between any two placed links. Greedy in score order is an
//! approximation to a constrained maximum-weight selection; constraints are
//! never violated, optimality is not guaranteed.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::candidate::AnchorCandidate;
use crate::options::Options;
use crate::paragraph::ParagraphSpan;

/// A candidate that survived global selection and will be physically
/// inserted into the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkDecision {
    /// The span of document text that becomes the clickable label.
    pub anchor_text: String,

    /// Destination URL.
    pub target_url: String,

    /// Truncated surrounding text for UI display.
    pub context_snippet: String,

    /// Score clamped to a bounded display range.
    pub score: f64,
}

/// Select the final link list from the candidate pool.
///
/// Candidates are visited in score-descending order with a stable tie-break
/// (lower paragraph index first, then catalog order), so selection is fully
/// deterministic. The returned decisions are in document order.
#[must_use]
pub fn select_candidates(
    candidates: &[AnchorCandidate],
    spans: &[ParagraphSpan],
    max_links: usize,
    options: &Options,
) -> Vec<LinkDecision> {
    if max_links == 0 || candidates.is_empty() {
        return Vec::new();
    }

    let cumulative_by_paragraph: HashMap<usize, usize> = spans
        .iter()
        .map(|s| (s.index, s.cumulative_word_count))
        .collect();

    let mut ordered: Vec<&AnchorCandidate> = candidates.iter().collect();
    ordered.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.paragraph_index.cmp(&b.paragraph_index))
            .then_with(|| a.page_order.cmp(&b.page_order))
    });

    let mut used_urls: HashSet<&str> = HashSet::new();
    let mut used_paragraphs: HashSet<usize> = HashSet::new();
    let mut accepted: Vec<(usize, &AnchorCandidate)> = Vec::new();

    for candidate in ordered {
        if accepted.len() >= max_links {
            break;
        }
        if used_urls.contains(candidate.target_url.as_str()) {
            continue;
        }
        if used_paragraphs.contains(&candidate.paragraph_index) {
            continue;
        }
        let Some(&cumulative) = cumulative_by_paragraph.get(&candidate.paragraph_index) else {
            continue;
        };
        // Spacing holds against every accepted link, not just the most
        // recent one, so the pairwise document-order guarantee survives
        // out-of-order greedy acceptance.
        let too_close = accepted
            .iter()
            .any(|(c, _)| c.abs_diff(cumulative) < options.min_spacing_words);
        if too_close {
            debug!(
                anchor = %candidate.anchor_text,
                paragraph = candidate.paragraph_index,
                "rejected: spacing constraint"
            );
            continue;
        }

        debug!(
            anchor = %candidate.anchor_text,
            url = %candidate.target_url,
            score = candidate.score,
            "accepted link"
        );
        used_urls.insert(candidate.target_url.as_str());
        used_paragraphs.insert(candidate.paragraph_index);
        accepted.push((cumulative, candidate));
    }

    accepted.sort_by_key(|(_, c)| c.paragraph_index);
    accepted
        .into_iter()
        .map(|(_, c)| LinkDecision {
            anchor_text: c.anchor_text.clone(),
            target_url: c.target_url.clone(),
            context_snippet: c.context_snippet.clone(),
            score: c.score.clamp(0.0, options.max_display_score),
        })
        .collect()
}
