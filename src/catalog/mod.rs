//! Catalog read contract and entry types.
//!
//! The router never embeds storage logic; it depends on the three read
//! capabilities of [`CatalogLookup`], implemented by the storage
//! collaborator. [`MemoryCatalog`] is a complete in-memory implementation
//! used by the CLI and tests.

pub mod memory;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use memory::MemoryCatalog;

/// One product in the catalog, read-only to the router.
///
/// `attributes` (brand, category, aisle/shelf location fields) are opaque to
/// the router and passed through unchanged when a match is returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Opaque unique identifier.
    pub product_id: String,
    /// Display name of the product.
    pub canonical_name: String,
    /// Alternate strings users might use for this product. Not required to
    /// be unique across products.
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// Opaque passthrough fields.
    #[serde(default)]
    pub attributes: serde_json::Value,
}

impl CatalogEntry {
    /// Create an entry with no synonyms and no attributes.
    pub fn new<S: Into<String>, T: Into<String>>(product_id: S, canonical_name: T) -> Self {
        CatalogEntry {
            product_id: product_id.into(),
            canonical_name: canonical_name.into(),
            synonyms: Vec::new(),
            attributes: serde_json::Value::Null,
        }
    }

    /// Add synonyms.
    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = synonyms.into_iter().map(Into::into).collect();
        self
    }

    /// Attach opaque attributes.
    pub fn with_attributes(mut self, attributes: serde_json::Value) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Read interface the extractor needs from the storage collaborator.
///
/// All arguments are already normalized (see
/// [`normalize`](crate::analysis::normalize)). Implementations report
/// failures as errors; the extractor never folds a failed lookup into an
/// empty result.
pub trait CatalogLookup: Send + Sync {
    /// Entry whose normalized canonical name equals `normalized_name`.
    fn lookup_exact_name(&self, normalized_name: &str) -> Result<Option<CatalogEntry>>;

    /// Entries with a synonym equal to `normalized_synonym`. Several products
    /// may share a synonym.
    fn lookup_exact_synonym(&self, normalized_synonym: &str) -> Result<Vec<CatalogEntry>>;

    /// Entries to score for similarity against `normalized_text`. May be a
    /// full scan or a pre-filtered candidate set; the extractor assumes
    /// nothing about size or ordering and handles an empty listing.
    fn list_candidates_for_similarity(&self, normalized_text: &str) -> Result<Vec<CatalogEntry>>;
}
