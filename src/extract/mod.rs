//! Product extraction from normalized queries.
//!
//! Four matching strategies run against the catalog in priority order, their
//! candidates are merged per product (highest confidence wins), and the
//! result is a deterministic, confidence-ranked top-N list.

pub mod extractor;
pub mod strategy;

pub use extractor::{MatchCandidate, ProductExtractor};
pub use strategy::MatchStrategy;
