//! Anchor candidate generation: windowed scoring of paragraph text against
//! catalog pages.
//!
//! For each eligible (paragraph, page) pair, a 3-7 word window slides over
//! the paragraph looking for the highest-scoring natural phrase. Windows that
//! start or end on a stop-word are disqualified outright. When no window
//! clears the score floor, a verbatim title-run fallback is tried.

use std::collections::HashSet;

use tracing::trace;

use crate::catalog::SitePage;
use crate::options::Options;
use crate::paragraph::ParagraphSpan;
use crate::stem::{clean_token, is_stop_word, stem_word, Normalizer};

/// A scored, not-yet-committed (paragraph, page, anchor phrase) proposal.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorCandidate {
    /// Contiguous run of original-casing words from the paragraph.
    pub anchor_text: String,

    /// URL of the target page.
    pub target_url: String,

    /// Position of the target page in the catalog, for deterministic
    /// tie-breaking.
    pub page_order: usize,

    /// Index of the paragraph hosting the anchor.
    pub paragraph_index: usize,

    /// Raw score; higher is better.
    pub score: f64,

    /// Truncated surrounding text for UI display.
    pub context_snippet: String,
}

/// Produce the full candidate pool: the union over all eligible
/// paragraphs x pages, at most one candidate per pairing.
#[must_use]
pub fn generate_candidates(
    spans: &[ParagraphSpan],
    pages: &[SitePage],
    options: &Options,
    normalizer: &dyn Normalizer,
) -> Vec<AnchorCandidate> {
    let mut candidates = Vec::new();

    let page_stems: Vec<_> = pages
        .iter()
        .map(|page| page.target_stems(normalizer))
        .collect();

    for span in spans {
        if !span.is_linkable(options.min_paragraph_words) {
            continue;
        }
        let words: Vec<&str> = span.text.split_whitespace().collect();

        for (page_order, (page, (title_stems, target_stems))) in
            pages.iter().zip(&page_stems).enumerate()
        {
            if target_stems.is_empty() {
                continue;
            }

            let best = best_window(&words, title_stems, target_stems, options)
                .filter(|(_, score)| *score >= options.score_floor)
                .or_else(|| title_run_fallback(&words, &page.title, options));

            if let Some((anchor_text, score)) = best {
                trace!(
                    paragraph = span.index,
                    url = %page.url,
                    anchor = %anchor_text,
                    score,
                    "candidate found"
                );
                candidates.push(AnchorCandidate {
                    context_snippet: context_snippet(
                        &span.text,
                        &anchor_text,
                        options.snippet_radius,
                    ),
                    anchor_text,
                    target_url: page.url.clone(),
                    page_order,
                    paragraph_index: span.index,
                    score,
                });
            }
        }
    }

    candidates
}

/// Slide a window over the paragraph words and return the best-scoring
/// anchor phrase, if any window overlaps the target set at all.
///
/// Ties keep the earliest, shortest window, so generation is deterministic.
fn best_window(
    words: &[&str],
    title_stems: &HashSet<String>,
    target_stems: &HashSet<String>,
    options: &Options,
) -> Option<(String, f64)> {
    let mut best: Option<(String, f64)> = None;

    for window_len in options.min_window_words..=options.max_window_words {
        if window_len > words.len() {
            break;
        }
        for window in words.windows(window_len) {
            let Some(score) = score_window(window, title_stems, target_stems, options) else {
                continue;
            };
            if best.as_ref().is_none_or(|(_, b)| score > *b) {
                best = Some((window.join(" "), score));
            }
        }
    }

    best
}

/// Score one window, or `None` if it is disqualified (stop-word boundary,
/// no comparable stems, or zero overlap).
fn score_window(
    window: &[&str],
    title_stems: &HashSet<String>,
    target_stems: &HashSet<String>,
    options: &Options,
) -> Option<f64> {
    let first = clean_token(window.first()?);
    let last = clean_token(window.last()?);
    // Natural phrases do not start or end on function words
    if first.is_empty() || last.is_empty() || is_stop_word(&first) || is_stop_word(&last) {
        return None;
    }

    let window_stems: HashSet<String> = window
        .iter()
        .map(|w| clean_token(w))
        .filter(|t| t.len() > 2 && !is_stop_word(t))
        .map(|t| stem_word(&t))
        .collect();
    if window_stems.is_empty() {
        return None;
    }

    let overlap = window_stems.intersection(target_stems).count();
    if overlap == 0 {
        return None;
    }
    let overlap_ratio = overlap as f64 / window_stems.len() as f64;
    let title_overlap = window_stems.intersection(title_stems).count();

    let length_bonus = match window.len() {
        4..=6 => options.mid_length_bonus,
        7 => options.long_length_bonus,
        _ => 0.0,
    };

    Some(
        overlap_ratio * options.overlap_ratio_weight
            + overlap as f64 * options.overlap_count_weight
            + length_bonus
            + title_overlap as f64 * options.title_stem_bonus,
    )
}

/// Fallback: look for 2-4 word runs taken verbatim from the page title
/// inside the paragraph (case-insensitive, whole words), scored by run
/// length. Longer runs are tried first.
fn title_run_fallback(words: &[&str], title: &str, options: &Options) -> Option<(String, f64)> {
    let title_words: Vec<&str> = title.split_whitespace().collect();

    for run_len in (2..=4usize).rev() {
        if run_len > title_words.len() || run_len > words.len() {
            continue;
        }
        let score = run_len as f64 * options.fallback_word_score;
        if score < options.fallback_min_score {
            continue;
        }
        for run in title_words.windows(run_len) {
            // Boundary discipline applies to fallback anchors too
            let first = clean_token(run[0]);
            let last = clean_token(run[run_len - 1]);
            if first.is_empty() || last.is_empty() || is_stop_word(&first) || is_stop_word(&last) {
                continue;
            }
            for span_window in words.windows(run_len) {
                let matches = span_window
                    .iter()
                    .zip(run)
                    .all(|(a, b)| a.eq_ignore_ascii_case(b));
                if matches {
                    return Some((span_window.join(" "), score));
                }
            }
        }
    }

    None
}

/// Truncate the paragraph around the anchor for UI display.
fn context_snippet(text: &str, anchor: &str, radius: usize) -> String {
    let Some(pos) = text.find(anchor) else {
        return anchor.to_string();
    };
    let end = pos + anchor.len();

    let prefix: String = text[..pos]
        .chars()
        .rev()
        .take(radius)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let suffix: String = text[end..].chars().take(radius).collect();

    format!("{}{anchor}{}", prefix.trim_start(), suffix.trim_end())
}
