//! Intent types and intermediate scoring state.

use serde::{Deserialize, Serialize};

/// Coarse category of what the user wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Product location query ("where is the milk").
    Location,
    /// Product information query ("ingredients in peanut butter").
    Information,
    /// Unclassifiable; the caller treats the query as unroutable.
    None,
}

impl Intent {
    /// Stable string form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Location => "location",
            Intent::Information => "information",
            Intent::None => "none",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw accumulated scores before normalization.
///
/// An explicit struct rather than an open map so the scoring algorithm is
/// type-checked and testable in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IntentScores {
    /// Sum of matched location term weights, after any negation penalty.
    pub location: f64,
    /// Sum of matched information term weights, after any negation penalty.
    pub information: f64,
    /// Whether a negation term was present.
    pub negated: bool,
}

/// Classifier output for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentPrediction {
    /// The chosen intent.
    pub intent: Intent,
    /// Confidence of the chosen intent, in [0, 1]. For [`Intent::None`] this
    /// is the higher of the two sub-threshold confidences (0 for empty
    /// input), so callers can log how close an unroutable query was.
    pub confidence: f64,
    /// Normalized location confidence, in [0, 1].
    pub location_confidence: f64,
    /// Normalized information confidence, in [0, 1].
    pub information_confidence: f64,
    /// Raw scores and negation flag.
    pub scores: IntentScores,
}

impl IntentPrediction {
    /// The prediction for empty or unscorable input.
    pub fn none() -> Self {
        IntentPrediction {
            intent: Intent::None,
            confidence: 0.0,
            location_confidence: 0.0,
            information_confidence: 0.0,
            scores: IntentScores::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_serde_form() {
        assert_eq!(serde_json::to_string(&Intent::Location).unwrap(), r#""location""#);
        assert_eq!(serde_json::to_string(&Intent::None).unwrap(), r#""none""#);
        assert_eq!(Intent::Information.to_string(), "information");
    }

    #[test]
    fn test_none_prediction() {
        let p = IntentPrediction::none();
        assert_eq!(p.intent, Intent::None);
        assert_eq!(p.confidence, 0.0);
        assert!(!p.scores.negated);
    }
}
