//! Text analysis pipeline: normalization, stemming, and tokenization.
//!
//! Every string that reaches the classifier or the extractor goes through
//! [`normalize`] first, so downstream code can assume lowercase text with
//! single-space word separation and no stray punctuation.

pub mod normalizer;
pub mod stemmer;
pub mod tokenizer;

pub use normalizer::{TextNormalizer, normalize};
pub use stemmer::{LightStemmer, Stemmer};
pub use tokenizer::{phrase_windows, tokenize};
