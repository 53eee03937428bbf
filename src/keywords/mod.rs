//! Weighted keyword dictionaries for intent classification.
//!
//! Three term sets drive the classifier: location cues, information cues, and
//! negation markers. Dictionaries are immutable once built; vocabulary hot
//! reload is an atomic snapshot swap through [`KeywordHandle`], never
//! in-place mutation visible to concurrent readers.

pub mod defaults;
pub mod dictionary;
pub mod handle;

pub use dictionary::KeywordDictionary;
pub use handle::KeywordHandle;
