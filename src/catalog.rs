//! Site-page catalog types and keyword derivation.
//!
//! A `SitePage` is a crawlable destination supplied by an external sitemap
//! importer. Pages are immutable for the duration of a run; the engine holds
//! them behind an `Arc` snapshot and never copies or mutates them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Result;
use crate::patterns::SLUG_SEPARATOR;
use crate::stem::Normalizer;

/// A crawlable destination page that anchors may point to.
///
/// `url` is the unique key; two catalog entries with the same URL are the
/// same destination as far as the one-link-per-page constraint is concerned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SitePage {
    /// Absolute URL of the page. Unique key within a catalog.
    pub url: String,

    /// Page title, the primary source of target stems.
    pub title: String,

    /// Short keyword phrases supplied by the importer.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// URL slug, if the importer resolved one.
    #[serde(default)]
    pub slug: Option<String>,

    /// Meta description, a secondary stem source.
    #[serde(default)]
    pub description: Option<String>,
}

impl SitePage {
    /// Create a page from a URL and title, the minimum a catalog entry needs.
    #[must_use]
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// The slug to derive keywords from: the explicit field when present,
    /// otherwise the last non-empty segment of the URL path.
    ///
    /// A URL that fails to parse yields `None` - the slug keyword source is
    /// simply excluded, never an error that aborts the page's candidate
    /// search.
    #[must_use]
    pub fn effective_slug(&self) -> Option<String> {
        if let Some(slug) = &self.slug {
            if !slug.trim().is_empty() {
                return Some(slug.trim().to_string());
            }
        }
        let parsed = Url::parse(&self.url).ok()?;
        parsed
            .path_segments()?
            .filter(|s| !s.is_empty())
            .next_back()
            .map(ToString::to_string)
    }

    /// Build the target stem set for this page: title stems plus keyword,
    /// slug, and description stems.
    ///
    /// Returns `(title_stems, target_stems)` so scoring can weight title
    /// overlap separately. `target_stems` is a superset of `title_stems`.
    #[must_use]
    pub fn target_stems(&self, normalizer: &dyn Normalizer) -> (HashSet<String>, HashSet<String>) {
        let title_stems = normalizer.stems(&self.title);
        let mut target = title_stems.clone();

        for keyword in &self.keywords {
            target.extend(normalizer.stems(keyword));
        }
        if let Some(slug) = self.effective_slug() {
            let slug_text = SLUG_SEPARATOR.replace_all(&slug, " ");
            target.extend(normalizer.stems(&slug_text));
        }
        if let Some(description) = &self.description {
            target.extend(normalizer.stems(description));
        }

        (title_stems, target)
    }
}

/// Deserialize a catalog from the JSON the sitemap importer produces.
///
/// Expects a JSON array of page objects; unknown fields are ignored and
/// optional fields may be absent.
pub fn pages_from_json(json: &str) -> Result<Vec<SitePage>> {
    let pages: Vec<SitePage> = serde_json::from_str(json)?;
    Ok(pages)
}
