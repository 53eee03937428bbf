//! Tokenization of normalized text.
//!
//! Input is expected to already be normalized (see
//! [`normalize`](crate::analysis::normalize)), so tokens are separated by
//! exactly one space and splitting on whitespace is lossless.

/// Split normalized text into word tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Generate contiguous word windows of length 1..=`max_words`.
///
/// Product references can span several tokens ("whole milk", "greek yogurt
/// lite"), so the extractor matches every window against the catalog, not
/// just single words. Windows are produced left to right, shortest first at
/// each start position, which keeps downstream scoring deterministic.
///
/// # Examples
///
/// ```
/// use wayfinder::analysis::phrase_windows;
///
/// let phrases = phrase_windows("greek yogurt lite", 2);
/// assert_eq!(
///     phrases,
///     vec!["greek", "greek yogurt", "yogurt", "yogurt lite", "lite"]
/// );
/// ```
pub fn phrase_windows(text: &str, max_words: usize) -> Vec<String> {
    let words = tokenize(text);
    let mut phrases = Vec::new();

    for start in 0..words.len() {
        let end_limit = (start + max_words).min(words.len());
        for end in start + 1..=end_limit {
            phrases.push(words[start..end].join(" "));
        }
    }

    phrases
}
