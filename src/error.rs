//! Error types for linkforge.
//!
//! The linking pipeline itself never fails: malformed input degrades to
//! partial or empty results. Errors exist only at the catalog-loading
//! boundary, where callers hand us serialized page data.

/// Error type for catalog operations.
///
/// Page URLs are deliberately not validated here: target URLs may be
/// relative, and an unparseable URL only excludes the slug keyword source
/// during candidate generation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Catalog JSON could not be deserialized.
    #[error("catalog deserialization failed: {0}")]
    CatalogParse(#[from] serde_json::Error),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;
