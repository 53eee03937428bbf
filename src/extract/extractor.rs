//! The product extractor and its candidate type.

use std::cmp::Ordering;
use std::sync::Arc;

use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::{normalize, phrase_windows};
use crate::catalog::{CatalogEntry, CatalogLookup};
use crate::config::RouterConfig;
use crate::error::Result;
use crate::extract::strategy::MatchStrategy;
use crate::similarity::{levenshtein_ratio, trigram_similarity};

/// A catalog product the extractor believes the query might refer to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// Identity of the matched catalog entry.
    pub product_id: String,
    /// Display name of the matched catalog entry.
    pub display_name: String,
    /// Which strategy produced this candidate.
    pub strategy: MatchStrategy,
    /// Strategy-specific confidence in [0, 1].
    pub confidence: f64,
    /// The query phrase that produced the match.
    pub matched_text: String,
    /// Opaque attributes passed through from the catalog entry.
    pub attributes: serde_json::Value,
}

impl MatchCandidate {
    fn from_entry(
        entry: &CatalogEntry,
        strategy: MatchStrategy,
        confidence: f64,
        matched_text: &str,
    ) -> Self {
        MatchCandidate {
            product_id: entry.product_id.clone(),
            display_name: entry.canonical_name.clone(),
            strategy,
            confidence,
            matched_text: matched_text.to_string(),
            attributes: entry.attributes.clone(),
        }
    }
}

impl Eq for MatchCandidate {}

impl Ord for MatchCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Descending confidence, then ascending product id so that equal
        // scores order identically across runs.
        other
            .confidence
            .partial_cmp(&self.confidence)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.product_id.cmp(&other.product_id))
    }
}

impl PartialOrd for MatchCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Extracts product candidates from normalized text using four strategies.
///
/// Strategies run in priority order — exact name, exact synonym, fuzzy,
/// trigram — and their outputs are merged per `product_id`, keeping the
/// single highest-confidence candidate per product (earlier strategies win
/// equal scores). The final list is sorted by descending confidence with
/// ascending-id tie-breaks and truncated to the configured top-N, so output
/// is byte-identical across runs for a fixed catalog state.
pub struct ProductExtractor {
    catalog: Arc<dyn CatalogLookup>,
    config: RouterConfig,
}

impl std::fmt::Debug for ProductExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductExtractor")
            .field("config", &self.config)
            .finish()
    }
}

impl ProductExtractor {
    /// Create an extractor over the given catalog.
    pub fn new(catalog: Arc<dyn CatalogLookup>, config: RouterConfig) -> Self {
        ProductExtractor { catalog, config }
    }

    /// Extract ranked candidates from normalized text.
    ///
    /// Catalog failures propagate as errors; an empty result means the
    /// catalog answered and nothing matched.
    pub fn extract(&self, normalized_text: &str) -> Result<Vec<MatchCandidate>> {
        if normalized_text.is_empty() {
            return Ok(Vec::new());
        }

        let phrases = phrase_windows(normalized_text, self.config.max_phrase_words);

        let mut candidates = Vec::new();
        candidates.extend(self.exact_name_in(&phrases)?);
        candidates.extend(self.exact_synonym_in(&phrases)?);

        let entries = self.catalog.list_candidates_for_similarity(normalized_text)?;
        candidates.extend(self.fuzzy_in(&phrases, &entries));
        candidates.extend(self.trigram_in(&phrases, &entries));

        debug!(
            "extraction over {} phrases produced {} raw candidates",
            phrases.len(),
            candidates.len()
        );

        Ok(self.dedup_and_rank(candidates))
    }

    /// Run only the exact-name strategy. Exposed so callers can inspect one
    /// strategy without invoking the others.
    pub fn exact_name_matches(&self, normalized_text: &str) -> Result<Vec<MatchCandidate>> {
        let phrases = phrase_windows(normalized_text, self.config.max_phrase_words);
        self.exact_name_in(&phrases)
    }

    /// Run only the exact-synonym strategy.
    pub fn exact_synonym_matches(&self, normalized_text: &str) -> Result<Vec<MatchCandidate>> {
        let phrases = phrase_windows(normalized_text, self.config.max_phrase_words);
        self.exact_synonym_in(&phrases)
    }

    /// Run only the fuzzy strategy.
    pub fn fuzzy_matches(&self, normalized_text: &str) -> Result<Vec<MatchCandidate>> {
        let phrases = phrase_windows(normalized_text, self.config.max_phrase_words);
        let entries = self.catalog.list_candidates_for_similarity(normalized_text)?;
        Ok(self.fuzzy_in(&phrases, &entries))
    }

    /// Run only the trigram strategy.
    pub fn trigram_matches(&self, normalized_text: &str) -> Result<Vec<MatchCandidate>> {
        let phrases = phrase_windows(normalized_text, self.config.max_phrase_words);
        let entries = self.catalog.list_candidates_for_similarity(normalized_text)?;
        Ok(self.trigram_in(&phrases, &entries))
    }

    fn exact_name_in(&self, phrases: &[String]) -> Result<Vec<MatchCandidate>> {
        let mut candidates = Vec::new();
        for phrase in phrases {
            if let Some(entry) = self.catalog.lookup_exact_name(phrase)? {
                candidates.push(MatchCandidate::from_entry(
                    &entry,
                    MatchStrategy::ExactName,
                    1.0,
                    phrase,
                ));
            }
        }
        Ok(candidates)
    }

    fn exact_synonym_in(&self, phrases: &[String]) -> Result<Vec<MatchCandidate>> {
        let mut candidates = Vec::new();
        for phrase in phrases {
            for entry in self.catalog.lookup_exact_synonym(phrase)? {
                candidates.push(MatchCandidate::from_entry(
                    &entry,
                    MatchStrategy::ExactSynonym,
                    self.config.synonym_confidence,
                    phrase,
                ));
            }
        }
        Ok(candidates)
    }

    fn fuzzy_in(&self, phrases: &[String], entries: &[CatalogEntry]) -> Vec<MatchCandidate> {
        self.similarity_pass(
            phrases,
            entries,
            MatchStrategy::Fuzzy,
            self.config.fuzzy_threshold,
            self.config.fuzzy_weight,
            levenshtein_ratio,
        )
    }

    fn trigram_in(&self, phrases: &[String], entries: &[CatalogEntry]) -> Vec<MatchCandidate> {
        self.similarity_pass(
            phrases,
            entries,
            MatchStrategy::Trigram,
            self.config.trigram_threshold,
            self.config.trigram_weight,
            trigram_similarity,
        )
    }

    /// Score every entry against every phrase with the given measure; keep
    /// entries whose best similarity clears the threshold.
    fn similarity_pass(
        &self,
        phrases: &[String],
        entries: &[CatalogEntry],
        strategy: MatchStrategy,
        threshold: f64,
        weight: f64,
        measure: fn(&str, &str) -> f64,
    ) -> Vec<MatchCandidate> {
        let mut candidates = Vec::new();

        for entry in entries {
            let mut targets = vec![normalize(&entry.canonical_name)];
            targets.extend(entry.synonyms.iter().map(|s| normalize(s)));

            let mut best_similarity = 0.0;
            let mut best_phrase: Option<&str> = None;

            for phrase in phrases {
                for target in &targets {
                    if target.is_empty() {
                        continue;
                    }
                    let similarity = measure(phrase, target);
                    // Strictly greater keeps the earliest phrase on ties,
                    // which keeps matched_text deterministic.
                    if similarity > best_similarity {
                        best_similarity = similarity;
                        best_phrase = Some(phrase.as_str());
                    }
                }
            }

            if best_similarity >= threshold {
                if let Some(phrase) = best_phrase {
                    candidates.push(MatchCandidate::from_entry(
                        entry,
                        strategy,
                        best_similarity * weight,
                        phrase,
                    ));
                }
            }
        }

        candidates
    }

    /// Collapse duplicates per product (max confidence wins, earlier
    /// strategies win ties), sort, and truncate to top-N.
    fn dedup_and_rank(&self, candidates: Vec<MatchCandidate>) -> Vec<MatchCandidate> {
        let mut best: AHashMap<String, MatchCandidate> = AHashMap::new();

        for candidate in candidates {
            match best.get(&candidate.product_id) {
                Some(existing) if existing.confidence >= candidate.confidence => {}
                _ => {
                    best.insert(candidate.product_id.clone(), candidate);
                }
            }
        }

        let mut ranked: Vec<MatchCandidate> = best.into_iter().map(|(_, c)| c).collect();
        ranked.sort();
        ranked.truncate(self.config.max_candidates);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;

    fn extractor(entries: Vec<CatalogEntry>) -> ProductExtractor {
        ProductExtractor::new(
            Arc::new(MemoryCatalog::new(entries)),
            RouterConfig::default(),
        )
    }

    fn sample_entries() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("p1", "Whole Milk").with_synonyms(["milk", "whole-fat milk"]),
            CatalogEntry::new("p2", "Peanut Butter").with_synonyms(["pb"]),
            CatalogEntry::new("p3", "Greek Yogurt"),
        ]
    }

    #[test]
    fn test_exact_name_match() {
        let ex = extractor(sample_entries());
        let candidates = ex.extract("where is the whole milk").unwrap();

        assert_eq!(candidates[0].product_id, "p1");
        assert_eq!(candidates[0].strategy, MatchStrategy::ExactName);
        assert_eq!(candidates[0].confidence, 1.0);
        assert_eq!(candidates[0].matched_text, "whole milk");
    }

    #[test]
    fn test_exact_synonym_match() {
        let ex = extractor(sample_entries());
        let candidates = ex.exact_synonym_matches("do you have pb").unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].product_id, "p2");
        assert_eq!(candidates[0].strategy, MatchStrategy::ExactSynonym);
        assert!((candidates[0].confidence - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_name_beats_synonym_for_same_product() {
        // "milk" is a synonym of p1 and "whole milk" its name; the exact-name
        // candidate must survive dedup.
        let ex = extractor(sample_entries());
        let candidates = ex.extract("whole milk").unwrap();

        let p1: Vec<&MatchCandidate> =
            candidates.iter().filter(|c| c.product_id == "p1").collect();
        assert_eq!(p1.len(), 1);
        assert_eq!(p1[0].strategy, MatchStrategy::ExactName);
        assert_eq!(p1[0].confidence, 1.0);
    }

    #[test]
    fn test_fuzzy_catches_typo() {
        let ex = extractor(sample_entries());
        let candidates = ex.fuzzy_matches("greek yogart").unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].product_id, "p3");
        assert_eq!(candidates[0].strategy, MatchStrategy::Fuzzy);
        assert!(candidates[0].confidence >= 0.7 * 0.8);
        assert!(candidates[0].confidence <= 0.8);
    }

    #[test]
    fn test_trigram_catches_partial() {
        let ex = extractor(vec![CatalogEntry::new("p9", "Strawberries")]);
        let candidates = ex.trigram_matches("strawberrie").unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].strategy, MatchStrategy::Trigram);
    }

    #[test]
    fn test_no_duplicate_product_ids() {
        let ex = extractor(sample_entries());
        let candidates = ex.extract("whole milk milk pb").unwrap();

        let mut ids: Vec<&str> = candidates.iter().map(|c| c.product_id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_ordering_and_cap() {
        let ex = ProductExtractor::new(
            Arc::new(MemoryCatalog::new(vec![
                CatalogEntry::new("a", "Apple Juice"),
                CatalogEntry::new("b", "Apple Jam"),
                CatalogEntry::new("c", "Apple Pie"),
                CatalogEntry::new("d", "Apple Cider"),
            ])),
            RouterConfig::default(),
        );
        let candidates = ex.extract("apple juice").unwrap();

        assert!(candidates.len() <= 3);
        for pair in candidates.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
        assert_eq!(candidates[0].product_id, "a");
    }

    #[test]
    fn test_tie_broken_by_product_id() {
        // Two products sharing the synonym get identical confidence; order
        // must fall back to ascending id.
        let ex = extractor(vec![
            CatalogEntry::new("z9", "Cola Zero").with_synonyms(["soda"]),
            CatalogEntry::new("a1", "Cola Classic").with_synonyms(["soda"]),
        ]);
        let candidates = ex.extract("soda").unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].confidence, candidates[1].confidence);
        assert_eq!(candidates[0].product_id, "a1");
        assert_eq!(candidates[1].product_id, "z9");
    }

    #[test]
    fn test_empty_text_and_empty_catalog() {
        let ex = extractor(sample_entries());
        assert!(ex.extract("").unwrap().is_empty());

        let empty = extractor(vec![]);
        assert!(empty.extract("whole milk").unwrap().is_empty());
    }

    #[test]
    fn test_attributes_passed_through() {
        let ex = extractor(vec![
            CatalogEntry::new("p1", "Whole Milk")
                .with_attributes(serde_json::json!({"aisle": 4, "brand": "Acme"})),
        ]);
        let candidates = ex.extract("whole milk").unwrap();
        assert_eq!(candidates[0].attributes["aisle"], 4);
        assert_eq!(candidates[0].attributes["brand"], "Acme");
    }

    #[test]
    fn test_deterministic() {
        let entries = sample_entries();
        let ex = extractor(entries.clone());
        let a = ex.extract("greek yogurt and milk").unwrap();
        let b = ex.extract("greek yogurt and milk").unwrap();
        assert_eq!(a, b);

        let ex2 = extractor(entries);
        let c = ex2.extract("greek yogurt and milk").unwrap();
        assert_eq!(a, c);
    }
}
