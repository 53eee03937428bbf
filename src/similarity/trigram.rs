//! Character-trigram similarity.
//!
//! Trigram overlap is robust to the typos that hurt edit distance most:
//! transposed characters, dropped word boundaries, partial words. Spaces are
//! removed before shingling so "whole milk" and "wholemilk" produce the same
//! trigram set. Shingles are taken over grapheme clusters, not bytes, so
//! accented and multi-byte characters shingle correctly.
//!
//! # Examples
//!
//! ```
//! use wayfinder::similarity::trigram_similarity;
//!
//! let sim = trigram_similarity("greek yogurt", "greek yogurt lite");
//! assert!(sim > 0.6);
//! assert_eq!(trigram_similarity("milk", "milk"), 1.0);
//! ```

use ahash::AHashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Extract the set of overlapping 3-grapheme shingles from text.
///
/// Whitespace is stripped first. Text shorter than three graphemes yields an
/// empty set.
pub fn trigram_set(text: &str) -> AHashSet<String> {
    let compact: String = text.split_whitespace().collect();
    let graphemes: Vec<&str> = compact.graphemes(true).collect();

    let mut shingles = AHashSet::new();
    if graphemes.len() < 3 {
        return shingles;
    }

    for window in graphemes.windows(3) {
        shingles.insert(window.concat());
    }
    shingles
}

/// Jaccard coefficient over the trigram sets of two strings, in [0.0, 1.0].
///
/// Returns 0.0 when either side is too short to produce a shingle; the
/// exact-match strategies cover short strings.
pub fn trigram_similarity(text1: &str, text2: &str) -> f64 {
    let set1 = trigram_set(text1);
    let set2 = trigram_set(text2);

    if set1.is_empty() || set2.is_empty() {
        return 0.0;
    }

    let intersection = set1.intersection(&set2).count();
    let union = set1.union(&set2).count();

    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigram_set() {
        let set = trigram_set("milk");
        assert_eq!(set.len(), 2);
        assert!(set.contains("mil"));
        assert!(set.contains("ilk"));
    }

    #[test]
    fn test_spaces_removed() {
        assert_eq!(trigram_set("whole milk"), trigram_set("wholemilk"));
    }

    #[test]
    fn test_short_text() {
        assert!(trigram_set("ab").is_empty());
        assert_eq!(trigram_similarity("ab", "abc"), 0.0);
        assert_eq!(trigram_similarity("", ""), 0.0);
    }

    #[test]
    fn test_identical_strings() {
        assert_eq!(trigram_similarity("peanut butter", "peanut butter"), 1.0);
    }

    #[test]
    fn test_disjoint_strings() {
        assert_eq!(trigram_similarity("milk", "xyzw"), 0.0);
    }

    #[test]
    fn test_typo_tolerance() {
        // Transposition keeps most shingles intact
        let sim = trigram_similarity("yogurt", "yogrut");
        assert!(sim > 0.0 && sim < 1.0);

        let close = trigram_similarity("greek yogurt", "greek yogurt lite");
        let far = trigram_similarity("greek yogurt", "orange juice");
        assert!(close > far);
    }

    #[test]
    fn test_similarity_bounds() {
        let samples = ["", "ab", "milk", "whole milk 2%", "日本語のテスト"];
        for a in samples {
            for b in samples {
                let s = trigram_similarity(a, b);
                assert!((0.0..=1.0).contains(&s), "similarity out of bounds for {a:?}/{b:?}");
            }
        }
    }
}
