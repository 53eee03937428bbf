//! Keyword dictionary construction, lookup, and file loading.

use std::collections::HashMap;
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use serde::Deserialize;

use crate::analysis::{LightStemmer, Stemmer};
use crate::error::{Result, WayfinderError};
use crate::keywords::defaults;

/// On-disk dictionary format.
///
/// ```json
/// {
///   "location": { "aisle": 1.0, "shelf": 1.0 },
///   "information": { "ingredient": 1.0 },
///   "negation": ["not", "don't"]
/// }
/// ```
#[derive(Debug, Deserialize)]
struct KeywordFile {
    #[serde(default)]
    location: HashMap<String, f64>,
    #[serde(default)]
    information: HashMap<String, f64>,
    #[serde(default)]
    negation: Vec<String>,
}

/// Immutable weighted term sets for intent classification.
///
/// Terms are stored stemmed; lookups expect stemmed tokens. Negation terms
/// are stored verbatim and matched against unstemmed tokens, since
/// contractions don't inflect.
#[derive(Debug, Clone)]
pub struct KeywordDictionary {
    location: AHashMap<String, f64>,
    information: AHashMap<String, f64>,
    negation: AHashSet<String>,
}

impl Default for KeywordDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordDictionary {
    /// Create a dictionary seeded with the built-in retail vocabulary.
    pub fn new() -> Self {
        Self::from_parts(
            defaults::LOCATION_TERMS.iter().map(|&(t, w)| (t.to_string(), w)),
            defaults::INFORMATION_TERMS.iter().map(|&(t, w)| (t.to_string(), w)),
            defaults::NEGATION_TERMS.iter().map(|&t| t.to_string()),
        )
        .expect("built-in vocabulary must validate")
    }

    /// Build a dictionary from raw term/weight pairs.
    ///
    /// Terms are stemmed; when two terms collapse to the same stem the higher
    /// weight wins. Fails fast on non-finite or non-positive weights and on
    /// empty terms, so a bad vocabulary is caught before any query routes.
    pub fn from_parts<L, I, N>(location: L, information: I, negation: N) -> Result<Self>
    where
        L: IntoIterator<Item = (String, f64)>,
        I: IntoIterator<Item = (String, f64)>,
        N: IntoIterator<Item = String>,
    {
        let stemmer = LightStemmer::new();

        let location = Self::build_weighted(location, &stemmer)?;
        let information = Self::build_weighted(information, &stemmer)?;

        let mut negation_set = AHashSet::new();
        for term in negation {
            if term.trim().is_empty() {
                return Err(WayfinderError::invalid_config("empty negation term"));
            }
            negation_set.insert(term.to_lowercase());
        }

        Ok(KeywordDictionary {
            location,
            information,
            negation: negation_set,
        })
    }

    fn build_weighted<T>(terms: T, stemmer: &LightStemmer) -> Result<AHashMap<String, f64>>
    where
        T: IntoIterator<Item = (String, f64)>,
    {
        let mut map = AHashMap::new();
        for (term, weight) in terms {
            if term.trim().is_empty() {
                return Err(WayfinderError::invalid_config("empty keyword term"));
            }
            if !weight.is_finite() || weight <= 0.0 {
                return Err(WayfinderError::invalid_config(format!(
                    "keyword '{term}' has invalid weight {weight}"
                )));
            }
            let stem = stemmer.stem(&term.to_lowercase());
            let entry = map.entry(stem).or_insert(weight);
            if weight > *entry {
                *entry = weight;
            }
        }
        Ok(map)
    }

    /// Load a dictionary from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            WayfinderError::analysis(format!(
                "failed to read keyword dictionary '{}': {}",
                path.display(),
                e
            ))
        })?;

        let file: KeywordFile = serde_json::from_str(&content).map_err(|e| {
            WayfinderError::analysis(format!(
                "failed to parse keyword dictionary '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_parts(file.location, file.information, file.negation)
    }

    /// Weight of a stemmed token as a location cue, if any.
    pub fn location_weight(&self, stem: &str) -> Option<f64> {
        self.location.get(stem).copied()
    }

    /// Weight of a stemmed token as an information cue, if any.
    pub fn information_weight(&self, stem: &str) -> Option<f64> {
        self.information.get(stem).copied()
    }

    /// Whether a token is a negation marker. Checked against the unstemmed
    /// token.
    pub fn is_negation(&self, token: &str) -> bool {
        self.negation.contains(token)
    }

    /// Location terms that match the given stemmed tokens, with weights.
    /// Drives explain output; not on the scoring hot path.
    pub fn location_matches(&self, stems: &[String]) -> Vec<(String, f64)> {
        Self::matches_in(&self.location, stems)
    }

    /// Information terms that match the given stemmed tokens, with weights.
    pub fn information_matches(&self, stems: &[String]) -> Vec<(String, f64)> {
        Self::matches_in(&self.information, stems)
    }

    fn matches_in(map: &AHashMap<String, f64>, stems: &[String]) -> Vec<(String, f64)> {
        let mut matches: Vec<(String, f64)> = stems
            .iter()
            .filter_map(|s| map.get(s).map(|&w| (s.clone(), w)))
            .collect();
        matches.sort_by(|a, b| a.0.cmp(&b.0));
        matches.dedup_by(|a, b| a.0 == b.0);
        matches
    }

    /// Number of location terms.
    pub fn location_len(&self) -> usize {
        self.location.len()
    }

    /// Number of information terms.
    pub fn information_len(&self) -> usize {
        self.information.len()
    }

    /// Number of negation terms.
    pub fn negation_len(&self) -> usize {
        self.negation.len()
    }
}
