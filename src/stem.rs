//! Token normalization and heuristic stemming.
//!
//! Maps free text to a set of comparable stems: lowercase, punctuation
//! stripped, stop-words and short tokens dropped, common suffixes collapsed.
//! This is a hand-rolled heuristic, not a dictionary-backed stemmer. It must
//! stay a pure function from string to set of strings - candidate scoring
//! reproducibility depends on it.

use std::collections::HashSet;

/// Closed list of function words, pronouns, and generic adjectives that
/// never carry anchor-worthy meaning.
const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "because",
    "been", "best", "but", "by", "can", "could", "did", "do", "does", "each", "few", "for", "from",
    "get", "good", "great", "had", "has", "have", "he", "her", "here", "his", "how", "i", "if",
    "in", "into", "is", "it", "its", "just", "like", "many", "may", "more", "most", "my", "new",
    "no", "not", "now", "of", "on", "one", "only", "or", "other", "our", "out", "over", "own",
    "said", "same", "she", "should", "so", "some", "such", "than", "that", "the", "their", "them",
    "then", "there", "these", "they", "this", "those", "through", "to", "too", "under", "up", "us",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "why", "will",
    "with", "would", "you", "your",
];

/// Suffixes stripped in order; longest patterns first so "-ness" wins
/// over "-s". Each strip requires the remaining stem to keep at least
/// three characters.
const SUFFIXES: &[&str] = &[
    "tion", "ness", "ment", "able", "ing", "ies", "ed", "es", "ly", "s",
];

/// Maps free text to stems for overlap comparison.
///
/// Implementations must be deterministic and side-effect-free. The trait
/// exists so a dictionary-backed linguistic stemmer can be substituted
/// without touching scoring or selection logic.
pub trait Normalizer: Send + Sync {
    /// Reduce `text` to its set of stems.
    fn stems(&self, text: &str) -> HashSet<String>;
}

/// The default suffix-stripping normalizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicStemmer;

impl Normalizer for HeuristicStemmer {
    fn stems(&self, text: &str) -> HashSet<String> {
        stem_set(text)
    }
}

/// Check whether a (lowercased, punctuation-stripped) token is a stop-word.
#[must_use]
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.binary_search(&token).is_ok()
}

/// Lowercase a raw word and strip surrounding/internal punctuation.
///
/// Returns an empty string for tokens that are pure punctuation.
#[must_use]
pub fn clean_token(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Reduce a cleaned token to its stem by stripping one known suffix.
///
/// "-ies" becomes "y" ("categories" -> "category"); other suffixes are
/// dropped outright. The stem keeps at least three characters, so short
/// words like "sing" or "red" pass through unchanged.
#[must_use]
pub fn stem_word(token: &str) -> String {
    for suffix in SUFFIXES {
        if let Some(base) = token.strip_suffix(suffix) {
            if base.len() < 3 {
                continue;
            }
            if *suffix == "ies" {
                return format!("{base}y");
            }
            return base.to_string();
        }
    }
    token.to_string()
}

/// Map free text to its set of stems.
///
/// Splits on whitespace, cleans each token, discards tokens of length <= 2
/// and stop-words, and stems the rest. Pure function; equal inputs always
/// produce equal sets.
#[must_use]
pub fn stem_set(text: &str) -> HashSet<String> {
    text.split_whitespace()
        .map(clean_token)
        .filter(|t| t.len() > 2 && !is_stop_word(t))
        .map(|t| stem_word(&t))
        .collect()
}
