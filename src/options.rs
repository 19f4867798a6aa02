//! Configuration options for the link placement engine.
//!
//! Every scoring weight, floor, and spacing threshold is a field here rather
//! than a hardcoded constant. The defaults reproduce the calibration the
//! engine shipped with; they are tunable configuration, not architecture.

/// Configuration options for link placement.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use linkforge::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     max_links: 5,
///     min_spacing_words: 400,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum number of links to place in one document.
    ///
    /// Default: `10`
    pub max_links: usize,

    /// Minimum words a paragraph needs to be eligible for candidates.
    ///
    /// Shorter paragraphs stay in the span sequence for offset bookkeeping
    /// but never host a link.
    ///
    /// Default: `12`
    pub min_paragraph_words: usize,

    /// Minimum words in an anchor window.
    ///
    /// Default: `3`
    pub min_window_words: usize,

    /// Maximum words in an anchor window.
    ///
    /// Default: `7`
    pub max_window_words: usize,

    /// Minimum cumulative-word-count distance between any two placed links.
    ///
    /// Default: `250`
    pub min_spacing_words: usize,

    /// Minimum character length for an anchor phrase at injection time.
    ///
    /// Anything shorter is too prone to spurious whole-word matches.
    ///
    /// Default: `4`
    pub min_anchor_chars: usize,

    /// Weight applied to the window's stem overlap ratio.
    ///
    /// Default: `40.0`
    pub overlap_ratio_weight: f64,

    /// Weight applied to the window's absolute stem overlap count.
    ///
    /// Default: `8.0`
    pub overlap_count_weight: f64,

    /// Bonus for windows of 4-6 words (natural phrase length).
    ///
    /// Default: `6.0`
    pub mid_length_bonus: f64,

    /// Bonus for 7-word windows, smaller than `mid_length_bonus`.
    ///
    /// Three-word windows get no length bonus at all.
    ///
    /// Default: `2.0`
    pub long_length_bonus: f64,

    /// Per-stem bonus for overlap with the page title specifically.
    ///
    /// Title matches weigh more than generic keyword matches.
    ///
    /// Default: `5.0`
    pub title_stem_bonus: f64,

    /// Minimum window score; below this the title-run fallback is tried.
    ///
    /// Default: `15.0`
    pub score_floor: f64,

    /// Absolute minimum score a fallback title-run match must clear.
    ///
    /// Default: `10.0`
    pub fallback_min_score: f64,

    /// Per-word score for a verbatim title run found by the fallback search.
    ///
    /// Default: `5.0`
    pub fallback_word_score: f64,

    /// Characters of surrounding text kept on each side of a context snippet.
    ///
    /// Default: `60`
    pub snippet_radius: usize,

    /// Upper bound of the clamped display score on a `LinkDecision`.
    ///
    /// Default: `100.0`
    pub max_display_score: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_links: 10,
            min_paragraph_words: 12,
            min_window_words: 3,
            max_window_words: 7,
            min_spacing_words: 250,
            min_anchor_chars: 4,
            overlap_ratio_weight: 40.0,
            overlap_count_weight: 8.0,
            mid_length_bonus: 6.0,
            long_length_bonus: 2.0,
            title_stem_bonus: 5.0,
            score_floor: 15.0,
            fallback_min_score: 10.0,
            fallback_word_score: 5.0,
            snippet_radius: 60,
            max_display_score: 100.0,
        }
    }
}
