//! In-memory catalog implementation.

use std::path::Path;

use ahash::AHashMap;

use crate::analysis::normalize;
use crate::catalog::{CatalogEntry, CatalogLookup};
use crate::error::{Result, WayfinderError};

/// An in-memory [`CatalogLookup`] backed by normalized name and synonym
/// indexes.
///
/// Entries keep their insertion order, and the similarity listing is a full
/// scan in that order, so extraction over a `MemoryCatalog` is fully
/// deterministic. Suitable for tests, the CLI, and small deployments; a real
/// storage collaborator implements [`CatalogLookup`] against its own backend.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    entries: Vec<CatalogEntry>,
    /// normalized canonical name -> index of the first entry with that name
    by_name: AHashMap<String, usize>,
    /// normalized synonym -> indexes of every entry carrying it
    by_synonym: AHashMap<String, Vec<usize>>,
}

impl MemoryCatalog {
    /// Build a catalog from entries.
    pub fn new<I: IntoIterator<Item = CatalogEntry>>(entries: I) -> Self {
        let mut catalog = MemoryCatalog::default();
        for entry in entries {
            catalog.push(entry);
        }
        catalog
    }

    /// Load a catalog from a JSON file containing an array of entries.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            WayfinderError::catalog(format!(
                "failed to read catalog file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let entries: Vec<CatalogEntry> = serde_json::from_str(&content).map_err(|e| {
            WayfinderError::catalog(format!(
                "failed to parse catalog file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self::new(entries))
    }

    fn push(&mut self, entry: CatalogEntry) {
        let idx = self.entries.len();

        // First entry wins a normalized-name collision; lookup_exact_name
        // returns at most one entry.
        let name = normalize(&entry.canonical_name);
        if !name.is_empty() {
            self.by_name.entry(name).or_insert(idx);
        }

        for synonym in &entry.synonyms {
            let synonym = normalize(synonym);
            if !synonym.is_empty() {
                self.by_synonym.entry(synonym).or_default().push(idx);
            }
        }

        self.entries.push(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CatalogLookup for MemoryCatalog {
    fn lookup_exact_name(&self, normalized_name: &str) -> Result<Option<CatalogEntry>> {
        Ok(self
            .by_name
            .get(normalized_name)
            .map(|&idx| self.entries[idx].clone()))
    }

    fn lookup_exact_synonym(&self, normalized_synonym: &str) -> Result<Vec<CatalogEntry>> {
        Ok(self
            .by_synonym
            .get(normalized_synonym)
            .map(|indexes| indexes.iter().map(|&idx| self.entries[idx].clone()).collect())
            .unwrap_or_default())
    }

    fn list_candidates_for_similarity(&self, _normalized_text: &str) -> Result<Vec<CatalogEntry>> {
        // Full scan; small catalogs don't warrant a prefilter.
        Ok(self.entries.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample() -> MemoryCatalog {
        MemoryCatalog::new(vec![
            CatalogEntry::new("p1", "Whole Milk").with_synonyms(["milk", "vitamin d milk"]),
            CatalogEntry::new("p2", "Skim Milk").with_synonyms(["milk"]),
            CatalogEntry::new("p3", "Greek Yogurt"),
        ])
    }

    #[test]
    fn test_lookup_exact_name() {
        let catalog = sample();
        let hit = catalog.lookup_exact_name("whole milk").unwrap();
        assert_eq!(hit.unwrap().product_id, "p1");
        assert!(catalog.lookup_exact_name("oat milk").unwrap().is_none());
    }

    #[test]
    fn test_name_is_normalized_at_build() {
        let catalog = MemoryCatalog::new(vec![CatalogEntry::new("p1", "  Gluten-Free Bread! ")]);
        let hit = catalog.lookup_exact_name("gluten-free bread").unwrap();
        assert!(hit.is_some());
    }

    #[test]
    fn test_shared_synonym_returns_all_products() {
        let catalog = sample();
        let hits = catalog.lookup_exact_synonym("milk").unwrap();
        let ids: Vec<&str> = hits.iter().map(|e| e.product_id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn test_similarity_listing_full_scan() {
        let catalog = sample();
        let listing = catalog.list_candidates_for_similarity("anything").unwrap();
        assert_eq!(listing.len(), 3);
        assert_eq!(listing[0].product_id, "p1");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = MemoryCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.lookup_exact_name("milk").unwrap().is_none());
        assert!(catalog.lookup_exact_synonym("milk").unwrap().is_empty());
        assert!(catalog.list_candidates_for_similarity("milk").unwrap().is_empty());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"product_id": "p1", "canonical_name": "Oat Milk", "synonyms": ["oatmilk"]}}]"#
        )
        .unwrap();

        let catalog = MemoryCatalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.lookup_exact_synonym("oatmilk").unwrap()[0].product_id,
            "p1"
        );
    }

    #[test]
    fn test_from_file_errors_are_catalog_errors() {
        let err = MemoryCatalog::from_file("/nonexistent/catalog.json");
        assert!(matches!(err, Err(WayfinderError::Catalog(_))));
    }
}
