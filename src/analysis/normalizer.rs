//! Text normalization for query and catalog strings.
//!
//! Normalization is a total, deterministic function: lowercase, strip
//! punctuation except hyphens and apostrophes that sit inside a word,
//! collapse whitespace runs, trim. Malformed input (all punctuation, control
//! characters) normalizes to the empty string rather than erroring.
//!
//! # Examples
//!
//! ```
//! use wayfinder::analysis::normalize;
//!
//! assert_eq!(normalize("Where's the Gluten-Free bread?!"), "where's the gluten-free bread");
//! assert_eq!(normalize("  milk   --  2%  "), "milk 2");
//! ```

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Anything that is not a word character, whitespace, hyphen, or
    /// apostrophe becomes a space before tokenization.
    static ref PUNCTUATION: Regex = Regex::new(r"[^\w\s'-]").unwrap();
}

/// Normalize raw text for matching.
///
/// Hyphens and apostrophes survive only when they are internal to a word
/// ("gluten-free", "don't"); leading and trailing ones are trimmed per token.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stripped = PUNCTUATION.replace_all(&lowered, " ");

    let mut out = String::with_capacity(stripped.len());
    for word in stripped.split_whitespace() {
        let word = word.trim_matches(|c| c == '-' || c == '\'');
        if word.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// A reusable normalizer handle.
///
/// [`normalize`] is a free function; this type exists so components that want
/// an injected normalization step (the router, the in-memory catalog) can
/// hold one without reaching for the free function directly.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        TextNormalizer
    }

    /// Normalize the given text.
    pub fn normalize(&self, raw: &str) -> String {
        normalize(raw)
    }
}
