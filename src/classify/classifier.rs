//! Weighted keyword intent classifier.

use std::sync::Arc;

use log::debug;

use crate::analysis::{LightStemmer, Stemmer, tokenize};
use crate::classify::intent::{Intent, IntentPrediction, IntentScores};
use crate::config::RouterConfig;
use crate::keywords::KeywordDictionary;

/// Keyword-based intent classifier.
///
/// Scores each stemmed token against the location and information
/// dictionaries, applies the negation penalty to the apparently-stronger
/// intent, and normalizes both scores with a saturating function. Pure
/// computation over an immutable dictionary snapshot; safe for unlimited
/// concurrent callers.
pub struct IntentClassifier {
    keywords: Arc<KeywordDictionary>,
    stemmer: LightStemmer,
    negation_penalty: f64,
    score_smoothing: f64,
    min_confidence: f64,
}

impl std::fmt::Debug for IntentClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentClassifier")
            .field("negation_penalty", &self.negation_penalty)
            .field("score_smoothing", &self.score_smoothing)
            .field("min_confidence", &self.min_confidence)
            .finish()
    }
}

impl IntentClassifier {
    /// Create a classifier over a dictionary snapshot.
    pub fn new(keywords: Arc<KeywordDictionary>, config: &RouterConfig) -> Self {
        IntentClassifier {
            keywords,
            stemmer: LightStemmer::new(),
            negation_penalty: config.negation_penalty,
            score_smoothing: config.score_smoothing,
            min_confidence: config.min_intent_confidence,
        }
    }

    /// Classify normalized text.
    ///
    /// Empty input and pure-negation input both produce [`Intent::None`].
    pub fn classify(&self, normalized_text: &str) -> IntentPrediction {
        let tokens = tokenize(normalized_text);
        if tokens.is_empty() {
            return IntentPrediction::none();
        }

        let scores = self.accumulate(&tokens);
        self.decide(scores)
    }

    /// Stem tokens the way the classifier does. Shared with explain output
    /// so reported matches agree with scoring.
    pub fn stem_tokens(&self, tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| self.stemmer.stem(t)).collect()
    }

    fn accumulate(&self, tokens: &[&str]) -> IntentScores {
        let mut location = 0.0;
        let mut information = 0.0;
        let mut negated = false;

        for token in tokens {
            // Negation markers are contractions and particles; matched
            // unstemmed.
            if self.keywords.is_negation(token) {
                negated = true;
            }

            let stem = self.stemmer.stem(token);
            // A token may feed both scores when the dictionaries overlap.
            if let Some(weight) = self.keywords.location_weight(&stem) {
                location += weight;
            }
            if let Some(weight) = self.keywords.information_weight(&stem) {
                information += weight;
            }
        }

        if negated {
            // Negation suppresses confidence in the apparently-stronger
            // intent ("I don't want the location"). On an exact nonzero tie
            // neither side is stronger, so both are suppressed.
            if location > information {
                location *= self.negation_penalty;
            } else if information > location {
                information *= self.negation_penalty;
            } else {
                location *= self.negation_penalty;
                information *= self.negation_penalty;
            }
        }

        IntentScores {
            location,
            information,
            negated,
        }
    }

    fn decide(&self, scores: IntentScores) -> IntentPrediction {
        let location_confidence = self.saturate(scores.location);
        let information_confidence = self.saturate(scores.information);

        let (intent, confidence) = if location_confidence < self.min_confidence
            && information_confidence < self.min_confidence
        {
            (Intent::None, location_confidence.max(information_confidence))
        } else if location_confidence >= information_confidence {
            // Exact tie prefers location: product lookup is the cheaper,
            // faster-resolving path for an ambiguous retail query.
            (Intent::Location, location_confidence)
        } else {
            (Intent::Information, information_confidence)
        };

        debug!(
            "classified intent={} confidence={:.3} (loc={:.3} info={:.3} negated={})",
            intent, confidence, location_confidence, information_confidence, scores.negated
        );

        IntentPrediction {
            intent,
            confidence,
            location_confidence,
            information_confidence,
            scores,
        }
    }

    /// Saturating normalization into [0, 1): `score / (score + k)`.
    fn saturate(&self, score: f64) -> f64 {
        if score <= 0.0 {
            return 0.0;
        }
        score / (score + self.score_smoothing)
    }
}
