//! The link placement engine: catalog state plus the public operations.
//!
//! One invocation is one synchronous function call over in-memory strings;
//! there is no I/O and no suspension point. The only persistent state is the
//! site-page catalog, held as an atomically replaceable snapshot: readers
//! clone the `Arc` once at call start, `set_catalog` swaps the whole value,
//! and in-flight readers keep working against the old snapshot.

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::candidate::generate_candidates;
use crate::catalog::SitePage;
use crate::injector;
use crate::options::Options;
use crate::paragraph::extract_paragraphs;
use crate::selector::{select_candidates, LinkDecision};
use crate::stem::{HeuristicStemmer, Normalizer};

/// Internal-link placement engine.
///
/// Stateless across calls except for the site-page catalog, which is set
/// once and reused until replaced wholesale.
pub struct LinkEngine {
    options: Options,
    normalizer: Box<dyn Normalizer>,
    catalog: RwLock<Arc<[SitePage]>>,
}

impl Default for LinkEngine {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl LinkEngine {
    /// Create an engine with the given options and an empty catalog.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            normalizer: Box::new(HeuristicStemmer),
            catalog: RwLock::new(Arc::from(Vec::<SitePage>::new())),
        }
    }

    /// Substitute the token normalizer, e.g. a dictionary-backed stemmer.
    ///
    /// Scoring and selection are untouched by the substitution.
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: Box<dyn Normalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Replace the destination catalog wholesale.
    ///
    /// The previous snapshot stays alive for any in-flight invocation that
    /// already took a reference to it.
    pub fn set_catalog(&self, pages: Vec<SitePage>) {
        let snapshot: Arc<[SitePage]> = Arc::from(pages);
        match self.catalog.write() {
            Ok(mut guard) => *guard = snapshot,
            Err(poisoned) => *poisoned.into_inner() = snapshot,
        }
        debug!("catalog replaced");
    }

    /// The catalog snapshot currently in effect.
    #[must_use]
    pub fn catalog_snapshot(&self) -> Arc<[SitePage]> {
        match self.catalog.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Find link opportunities in article HTML.
    ///
    /// Pure with respect to the document: no side effects beyond logging.
    /// `max_links` overrides the configured maximum for this call. An empty
    /// catalog or an HTML body without paragraph blocks yields an empty
    /// list; this function never fails.
    #[must_use]
    pub fn find_link_opportunities(
        &self,
        html: &str,
        max_links: Option<usize>,
    ) -> Vec<LinkDecision> {
        let catalog = self.catalog_snapshot();
        if catalog.is_empty() {
            return Vec::new();
        }

        let spans = extract_paragraphs(html);
        if spans.is_empty() {
            return Vec::new();
        }

        let candidates =
            generate_candidates(&spans, &catalog, &self.options, self.normalizer.as_ref());
        let max = max_links.unwrap_or(self.options.max_links);
        let decisions = select_candidates(&candidates, &spans, max, &self.options);

        debug!(
            paragraphs = spans.len(),
            pages = catalog.len(),
            candidates = candidates.len(),
            decisions = decisions.len(),
            "link opportunity search complete"
        );
        decisions
    }

    /// Rewrite HTML to insert the decided links.
    #[must_use]
    pub fn inject_links(&self, html: &str, decisions: &[LinkDecision]) -> String {
        injector::inject_links(html, decisions, self.options.min_anchor_chars)
    }

    /// Count anchor tags already present in an HTML document.
    #[must_use]
    pub fn count_existing_links(html: &str) -> usize {
        injector::count_existing_links(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Vec<SitePage> {
        vec![
            SitePage::new(
                "https://example.com/guides/sourdough-baking",
                "Sourdough Baking Guide",
            ),
            SitePage::new(
                "https://example.com/guides/bread-flour",
                "Choosing Bread Flour",
            ),
        ]
    }

    #[test]
    fn empty_catalog_yields_no_decisions() {
        let engine = LinkEngine::default();
        let html = "<p>The complete guide to sourdough baking requires patience and the right flour</p>";
        assert!(engine.find_link_opportunities(html, None).is_empty());
    }

    #[test]
    fn no_paragraphs_yields_no_decisions() {
        let engine = LinkEngine::default();
        engine.set_catalog(sample_catalog());
        assert!(engine
            .find_link_opportunities("<div>no paragraph markup</div>", None)
            .is_empty());
    }

    #[test]
    fn finds_and_injects_links() {
        let engine = LinkEngine::default();
        engine.set_catalog(sample_catalog());

        let html = "<p>The complete guide to sourdough baking requires patience and the right flour</p>";
        let decisions = engine.find_link_opportunities(html, None);
        assert_eq!(decisions.len(), 1);

        let rewritten = engine.inject_links(html, &decisions);
        assert_eq!(LinkEngine::count_existing_links(&rewritten), 1);
        assert!(rewritten.contains("https://example.com/guides/sourdough-baking"));
    }

    #[test]
    fn max_links_override_caps_results() {
        let engine = LinkEngine::default();
        engine.set_catalog(sample_catalog());
        let html = "<p>The complete guide to sourdough baking requires patience and the right flour</p>";
        assert!(engine.find_link_opportunities(html, Some(0)).is_empty());
    }

    #[test]
    fn catalog_snapshot_survives_replacement() {
        let engine = LinkEngine::default();
        engine.set_catalog(sample_catalog());
        let snapshot = engine.catalog_snapshot();
        engine.set_catalog(Vec::new());
        // The old snapshot is untouched by the swap
        assert_eq!(snapshot.len(), 2);
        assert!(engine.catalog_snapshot().is_empty());
    }

    #[test]
    fn relinking_after_injection_is_idempotent() {
        let engine = LinkEngine::default();
        engine.set_catalog(sample_catalog());

        let html = "<p>The complete guide to sourdough baking requires patience and the right flour</p>";
        let decisions = engine.find_link_opportunities(html, None);
        let rewritten = engine.inject_links(html, &decisions);

        // The just-linked paragraph now carries anchor markup and is
        // excluded from candidate generation.
        assert!(engine.find_link_opportunities(&rewritten, None).is_empty());
    }
}
