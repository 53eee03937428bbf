//! The query router: normalization, classification, extraction, and the
//! disambiguation decision, assembled into one response object.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use wayfinder::catalog::{CatalogEntry, MemoryCatalog};
//! use wayfinder::classify::Intent;
//! use wayfinder::config::RouterConfig;
//! use wayfinder::router::QueryRouter;
//!
//! # fn main() -> wayfinder::error::Result<()> {
//! let catalog = Arc::new(MemoryCatalog::new(vec![
//!     CatalogEntry::new("sku-42", "Whole Milk"),
//! ]));
//! let router = QueryRouter::new(catalog, RouterConfig::default())?;
//!
//! let result = router.route("where is the whole milk?")?;
//! assert_eq!(result.intent, Intent::Location);
//! assert_eq!(result.candidates[0].display_name, "Whole Milk");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::{TextNormalizer, tokenize};
use crate::catalog::CatalogLookup;
use crate::classify::{Intent, IntentClassifier, IntentPrediction};
use crate::config::RouterConfig;
use crate::error::Result;
use crate::extract::{MatchCandidate, ProductExtractor};
use crate::keywords::{KeywordDictionary, KeywordHandle};

/// The router's output for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// The classified intent.
    pub intent: Intent,
    /// Confidence of the classified intent, in [0, 1].
    pub intent_confidence: f64,
    /// Product candidates, descending by confidence, capped at the
    /// configured top-N. Returned even when `intent` is
    /// [`Intent::None`] — informational for the caller.
    pub candidates: Vec<MatchCandidate>,
    /// Whether the top candidates are too close in confidence to pick one
    /// automatically.
    pub disambiguation_needed: bool,
}

impl ClassificationResult {
    /// The result for empty or unscorable input.
    fn unroutable() -> Self {
        ClassificationResult {
            intent: Intent::None,
            intent_confidence: 0.0,
            candidates: Vec::new(),
            disambiguation_needed: false,
        }
    }
}

/// Diagnostic view of one routing decision, for operators and the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteExplanation {
    /// The normalized form of the query.
    pub normalized_text: String,
    /// The full classification result.
    pub result: ClassificationResult,
    /// Raw (pre-normalization) location score.
    pub location_score: f64,
    /// Raw (pre-normalization) information score.
    pub information_score: f64,
    /// Normalized location confidence.
    pub location_confidence: f64,
    /// Normalized information confidence.
    pub information_confidence: f64,
    /// Location terms that matched, with weights.
    pub location_matches: Vec<(String, f64)>,
    /// Information terms that matched, with weights.
    pub information_matches: Vec<(String, f64)>,
    /// Whether a negation term was present.
    pub negated: bool,
}

/// Routes raw utterances to an intent plus product candidates.
///
/// Stateless per call: each `route` invocation takes an immutable keyword
/// snapshot, runs the classifier and extractor independently on the
/// normalized text, and builds a fresh [`ClassificationResult`]. Any number
/// of calls may run concurrently; the only blocking operation is the catalog
/// lookup inside extraction.
pub struct QueryRouter {
    normalizer: TextNormalizer,
    keywords: KeywordHandle,
    extractor: ProductExtractor,
    config: RouterConfig,
}

impl std::fmt::Debug for QueryRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryRouter")
            .field("config", &self.config)
            .finish()
    }
}

impl QueryRouter {
    /// Create a router with the built-in keyword vocabulary.
    ///
    /// Fails fast on invalid configuration; no query is ever routed against
    /// an unvalidated config.
    pub fn new(catalog: Arc<dyn CatalogLookup>, config: RouterConfig) -> Result<Self> {
        Self::with_keywords(catalog, config, KeywordDictionary::new())
    }

    /// Create a router with a custom keyword dictionary.
    pub fn with_keywords(
        catalog: Arc<dyn CatalogLookup>,
        config: RouterConfig,
        keywords: KeywordDictionary,
    ) -> Result<Self> {
        config.validate()?;
        Ok(QueryRouter {
            normalizer: TextNormalizer::new(),
            keywords: KeywordHandle::new(keywords),
            extractor: ProductExtractor::new(catalog, config.clone()),
            config,
        })
    }

    /// Atomically replace the keyword vocabulary for subsequent queries.
    /// In-flight queries keep the snapshot they already hold.
    pub fn swap_keywords(&self, keywords: KeywordDictionary) {
        self.keywords.swap(keywords);
    }

    /// Route a raw utterance.
    ///
    /// Malformed input normalizes to the empty string and yields intent
    /// `none`, zero candidates, no disambiguation. Catalog failures
    /// propagate as errors, distinct from "no products matched".
    pub fn route(&self, raw_text: &str) -> Result<ClassificationResult> {
        let normalized = self.normalizer.normalize(raw_text);
        if normalized.is_empty() {
            return Ok(ClassificationResult::unroutable());
        }

        let (prediction, candidates) = self.classify_and_extract(&normalized)?;
        Ok(self.assemble(prediction, candidates))
    }

    /// Route a raw utterance and report how the decision was made.
    pub fn explain(&self, raw_text: &str) -> Result<RouteExplanation> {
        let normalized = self.normalizer.normalize(raw_text);
        let keywords = self.keywords.snapshot();
        let classifier = IntentClassifier::new(keywords.clone(), &self.config);

        if normalized.is_empty() {
            return Ok(RouteExplanation {
                normalized_text: normalized,
                result: ClassificationResult::unroutable(),
                location_score: 0.0,
                information_score: 0.0,
                location_confidence: 0.0,
                information_confidence: 0.0,
                location_matches: Vec::new(),
                information_matches: Vec::new(),
                negated: false,
            });
        }

        let prediction = classifier.classify(&normalized);
        let candidates = self.extractor.extract(&normalized)?;

        let stems = classifier.stem_tokens(&tokenize(&normalized));
        let location_matches = keywords.location_matches(&stems);
        let information_matches = keywords.information_matches(&stems);

        let explanation = RouteExplanation {
            normalized_text: normalized,
            location_score: prediction.scores.location,
            information_score: prediction.scores.information,
            location_confidence: prediction.location_confidence,
            information_confidence: prediction.information_confidence,
            negated: prediction.scores.negated,
            location_matches,
            information_matches,
            result: self.assemble(prediction, candidates),
        };
        Ok(explanation)
    }

    /// Classifier and extractor are independent over the same normalized
    /// text, so they run on both halves of a rayon join.
    fn classify_and_extract(
        &self,
        normalized: &str,
    ) -> Result<(IntentPrediction, Vec<MatchCandidate>)> {
        let keywords = self.keywords.snapshot();
        let classifier = IntentClassifier::new(keywords, &self.config);

        let (prediction, candidates) = rayon::join(
            || classifier.classify(normalized),
            || self.extractor.extract(normalized),
        );

        Ok((prediction, candidates?))
    }

    fn assemble(
        &self,
        prediction: IntentPrediction,
        candidates: Vec<MatchCandidate>,
    ) -> ClassificationResult {
        let disambiguation_needed = self.needs_disambiguation(&candidates);

        debug!(
            "routed intent={} confidence={:.3} candidates={} disambiguation={}",
            prediction.intent,
            prediction.confidence,
            candidates.len(),
            disambiguation_needed
        );

        ClassificationResult {
            intent: prediction.intent,
            intent_confidence: prediction.confidence,
            candidates,
            disambiguation_needed,
        }
    }

    /// More than one plausible product, and the top two are too close to
    /// tell apart with confidence: ask the user.
    fn needs_disambiguation(&self, candidates: &[MatchCandidate]) -> bool {
        if candidates.len() < 2 {
            return false;
        }

        let top = candidates[0].confidence;
        let second = candidates[1].confidence;

        top >= self.config.acceptance_threshold
            && second >= self.config.acceptance_threshold
            && (top - second) <= self.config.closeness_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogEntry, MemoryCatalog};

    fn router(entries: Vec<CatalogEntry>) -> QueryRouter {
        QueryRouter::new(
            Arc::new(MemoryCatalog::new(entries)),
            RouterConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_invalid_config_fails_at_construction() {
        let result = QueryRouter::new(
            Arc::new(MemoryCatalog::default()),
            RouterConfig {
                acceptance_threshold: 2.0,
                ..Default::default()
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_input_unroutable() {
        let r = router(vec![CatalogEntry::new("p1", "Whole Milk")]);
        for input in ["", "   ", "?!..."] {
            let result = r.route(input).unwrap();
            assert_eq!(result.intent, Intent::None);
            assert_eq!(result.intent_confidence, 0.0);
            assert!(result.candidates.is_empty());
            assert!(!result.disambiguation_needed);
        }
    }

    #[test]
    fn test_candidates_returned_for_none_intent() {
        let r = router(vec![CatalogEntry::new("p1", "Whole Milk")]);
        let result = r.route("whole milk").unwrap();
        // No intent keywords, but the product still surfaces.
        assert_eq!(result.intent, Intent::None);
        assert_eq!(result.candidates.len(), 1);
    }

    #[test]
    fn test_single_candidate_never_disambiguates() {
        let r = router(vec![CatalogEntry::new("p1", "Whole Milk")]);
        let result = r.route("where is the whole milk").unwrap();
        assert!(!result.disambiguation_needed);
    }

    #[test]
    fn test_close_candidates_disambiguate() {
        // Both yogurts carry the synonym the user actually said: exact name
        // at 1.0 vs exact synonym at 0.9, a 0.1 gap inside the closeness
        // window.
        let r = router(vec![
            CatalogEntry::new("p1", "Greek Yogurt").with_synonyms(["greek yogurt lite"]),
            CatalogEntry::new("p2", "Greek Yogurt Lite").with_synonyms(["greek yogurt"]),
        ]);
        let result = r.route("greek yogurt").unwrap();

        assert!(result.candidates.len() >= 2);
        let gap = result.candidates[0].confidence - result.candidates[1].confidence;
        assert!(gap <= 0.15);
        assert!(result.disambiguation_needed);
    }

    #[test]
    fn test_explain_reports_matches() {
        let r = router(vec![CatalogEntry::new("p1", "Whole Milk")]);
        let explanation = r.explain("where is the whole milk").unwrap();

        assert_eq!(explanation.normalized_text, "where is the whole milk");
        assert!(explanation.location_score > 0.0);
        assert!(
            explanation
                .location_matches
                .iter()
                .any(|(term, _)| term == "where")
        );
        assert!(explanation.information_matches.is_empty());
        assert!(!explanation.negated);
        assert_eq!(explanation.result.intent, Intent::Location);
    }

    #[test]
    fn test_explain_empty_input() {
        let r = router(vec![]);
        let explanation = r.explain("").unwrap();
        assert_eq!(explanation.result.intent, Intent::None);
        assert!(explanation.location_matches.is_empty());
    }

    #[test]
    fn test_swap_keywords_changes_routing() {
        let r = router(vec![]);
        assert_eq!(r.route("zorp the milk").unwrap().intent, Intent::None);

        let custom = KeywordDictionary::from_parts(
            vec![("zorp".to_string(), 1.0)],
            vec![],
            vec![],
        )
        .unwrap();
        r.swap_keywords(custom);

        assert_eq!(r.route("zorp the milk").unwrap().intent, Intent::Location);
    }

    #[test]
    fn test_result_serializes() {
        let r = router(vec![CatalogEntry::new("p1", "Whole Milk")]);
        let result = r.route("where is the whole milk").unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""intent":"location""#));
    }
}
