//! Router configuration.
//!
//! Every tunable has a default; all of them can be changed without code
//! changes (the CLI accepts a JSON config file). Validation runs once at
//! router construction, so a bad configuration is never discovered mid-query.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WayfinderError};

/// Tunable thresholds and weights for classification and extraction.
///
/// The defaults are empirically tuned constants, not semantic guarantees;
/// re-tune them against a labeled evaluation set for a new deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Minimum intent confidence; below this on both intents the query is
    /// unroutable.
    pub min_intent_confidence: f64,
    /// Multiplier (< 1) applied to the stronger raw score when a negation
    /// term is present.
    pub negation_penalty: f64,
    /// Smoothing constant `k` in the saturating normalization
    /// `score / (score + k)`.
    pub score_smoothing: f64,
    /// Confidence assigned to exact synonym matches. Kept slightly below the
    /// 1.0 of exact name matches.
    pub synonym_confidence: f64,
    /// Multiplier applied to fuzzy similarity scores.
    pub fuzzy_weight: f64,
    /// Minimum fuzzy similarity for a candidate to be kept.
    pub fuzzy_threshold: f64,
    /// Multiplier applied to trigram similarity scores.
    pub trigram_weight: f64,
    /// Minimum trigram similarity for a candidate to be kept.
    pub trigram_threshold: f64,
    /// Maximum number of candidates returned per query.
    pub max_candidates: usize,
    /// Longest word window matched against the catalog.
    pub max_phrase_words: usize,
    /// Minimum top-candidate confidence before disambiguation is considered.
    pub acceptance_threshold: f64,
    /// Maximum top-1/top-2 confidence gap that still counts as "too close to
    /// call".
    pub closeness_threshold: f64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        RouterConfig {
            min_intent_confidence: 0.3,
            negation_penalty: 0.3,
            score_smoothing: 1.0,
            synonym_confidence: 0.9,
            fuzzy_weight: 0.8,
            fuzzy_threshold: 0.7,
            trigram_weight: 0.7,
            trigram_threshold: 0.6,
            max_candidates: 3,
            max_phrase_words: 4,
            acceptance_threshold: 0.5,
            closeness_threshold: 0.15,
        }
    }
}

impl RouterConfig {
    /// Validate all fields, failing fast on out-of-range values.
    pub fn validate(&self) -> Result<()> {
        let unit_fields = [
            ("min_intent_confidence", self.min_intent_confidence),
            ("negation_penalty", self.negation_penalty),
            ("synonym_confidence", self.synonym_confidence),
            ("fuzzy_weight", self.fuzzy_weight),
            ("fuzzy_threshold", self.fuzzy_threshold),
            ("trigram_weight", self.trigram_weight),
            ("trigram_threshold", self.trigram_threshold),
            ("acceptance_threshold", self.acceptance_threshold),
            ("closeness_threshold", self.closeness_threshold),
        ];
        for (name, value) in unit_fields {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(WayfinderError::invalid_config(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }

        if !self.score_smoothing.is_finite() || self.score_smoothing <= 0.0 {
            return Err(WayfinderError::invalid_config(format!(
                "score_smoothing must be positive, got {}",
                self.score_smoothing
            )));
        }
        if self.max_candidates == 0 {
            return Err(WayfinderError::invalid_config(
                "max_candidates must be at least 1",
            ));
        }
        if self.max_phrase_words == 0 {
            return Err(WayfinderError::invalid_config(
                "max_phrase_words must be at least 1",
            ));
        }

        Ok(())
    }
}
