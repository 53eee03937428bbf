//! The closed set of matching strategies.

use serde::{Deserialize, Serialize};

/// How a candidate was matched.
///
/// The set is closed on purpose: each strategy has its own confidence
/// weighting, and the extractor merges their outputs per product. Priority
/// (for equal confidence) follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// The query contains the entry's normalized canonical name.
    ExactName,
    /// The query contains one of the entry's normalized synonyms.
    ExactSynonym,
    /// Token-level edit-distance similarity above the fuzzy threshold.
    Fuzzy,
    /// Character-trigram overlap above the trigram threshold.
    Trigram,
}

impl MatchStrategy {
    /// Stable string form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStrategy::ExactName => "exact_name",
            MatchStrategy::ExactSynonym => "exact_synonym",
            MatchStrategy::Fuzzy => "fuzzy",
            MatchStrategy::Trigram => "trigram",
        }
    }
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
