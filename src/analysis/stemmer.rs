//! Light stemming for keyword matching.
//!
//! The classifier compares query tokens against dictionary terms by stem, so
//! "aisles" hits a dictionary entry seeded as "aisle". The stemmer is
//! intentionally shallow: plural suffixes and a small irregulars table. Both
//! sides of every comparison (dictionary terms at build time, query tokens at
//! classify time) run through the same stemmer, so consistency matters more
//! than linguistic precision.

use ahash::AHashMap;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Irregular plurals that the suffix rules would mangle.
const IRREGULARS: &[(&str, &str)] = &[
    ("shelves", "shelf"),
    ("knives", "knife"),
    ("loaves", "loaf"),
    ("halves", "half"),
    ("children", "child"),
];

/// A light suffix stemmer for English retail vocabulary.
///
/// Rules, first match wins:
/// 1. irregulars table ("shelves" -> "shelf")
/// 2. `-ies` -> `-y` ("allergies" -> "allergy")
/// 3. `-sses` -> `-ss` ("glasses" -> "glass")
/// 4. trailing `-s` dropped unless the word ends in `-ss` or `-us`
///    ("aisles" -> "aisle", but "glass" and "hummus" are untouched)
#[derive(Debug, Clone)]
pub struct LightStemmer {
    irregulars: AHashMap<&'static str, &'static str>,
}

impl Default for LightStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl LightStemmer {
    /// Create a new light stemmer.
    pub fn new() -> Self {
        LightStemmer {
            irregulars: IRREGULARS.iter().copied().collect(),
        }
    }
}

impl Stemmer for LightStemmer {
    fn stem(&self, word: &str) -> String {
        if let Some(stem) = self.irregulars.get(word) {
            return (*stem).to_string();
        }

        if let Some(base) = word.strip_suffix("ies") {
            if word.len() > 4 {
                return format!("{base}y");
            }
        }

        if let Some(base) = word.strip_suffix("sses") {
            return format!("{base}ss");
        }

        if word.len() > 3
            && word.ends_with('s')
            && !word.ends_with("ss")
            && !word.ends_with("us")
        {
            return word[..word.len() - 1].to_string();
        }

        word.to_string()
    }

    fn name(&self) -> &'static str {
        "light"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_s() {
        let stemmer = LightStemmer::new();
        assert_eq!(stemmer.stem("aisles"), "aisle");
        assert_eq!(stemmer.stem("ingredients"), "ingredient");
        assert_eq!(stemmer.stem("sections"), "section");
    }

    #[test]
    fn test_ies_suffix() {
        let stemmer = LightStemmer::new();
        assert_eq!(stemmer.stem("allergies"), "allergy");
        assert_eq!(stemmer.stem("dairies"), "dairy");
        // Too short for the rule
        assert_eq!(stemmer.stem("pies"), "pie");
    }

    #[test]
    fn test_sses_suffix() {
        let stemmer = LightStemmer::new();
        assert_eq!(stemmer.stem("glasses"), "glass");
    }

    #[test]
    fn test_irregulars() {
        let stemmer = LightStemmer::new();
        assert_eq!(stemmer.stem("shelves"), "shelf");
        assert_eq!(stemmer.stem("loaves"), "loaf");
    }

    #[test]
    fn test_untouched_words() {
        let stemmer = LightStemmer::new();
        assert_eq!(stemmer.stem("milk"), "milk");
        assert_eq!(stemmer.stem("glass"), "glass");
        assert_eq!(stemmer.stem("hummus"), "hummus");
        // Short words never lose their s
        assert_eq!(stemmer.stem("gas"), "gas");
        assert_eq!(stemmer.stem("is"), "is");
    }

    #[test]
    fn test_stemmer_name() {
        assert_eq!(LightStemmer::new().name(), "light");
    }
}
