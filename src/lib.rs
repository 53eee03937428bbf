//! # Wayfinder
//!
//! A natural-language query router for retail assistants.
//!
//! Wayfinder takes a raw user utterance, decides whether it asks for a
//! product's *location* or for product *information* (or neither), extracts
//! the product being referred to using four matching strategies against a
//! catalog of names and synonyms, and flags when the match is too ambiguous
//! to act on without asking the user.
//!
//! ## Features
//!
//! - Pure Rust, no I/O in the core; every call is stateless and freely
//!   parallel
//! - Weighted keyword intent scoring with negation handling
//! - Exact, synonym, fuzzy (edit distance), and character-trigram matching
//! - Calibrated confidences in [0, 1] and deterministic candidate ranking
//! - Pluggable catalog backend behind a three-method read trait
//! - Vocabulary hot reload via atomic snapshot swap

pub mod analysis;
pub mod catalog;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod keywords;
pub mod router;
pub mod similarity;

pub mod prelude {
    //! Convenience re-exports for typical embedders.
    pub use crate::catalog::{CatalogEntry, CatalogLookup, MemoryCatalog};
    pub use crate::classify::Intent;
    pub use crate::config::RouterConfig;
    pub use crate::error::{Result, WayfinderError};
    pub use crate::extract::{MatchCandidate, MatchStrategy};
    pub use crate::router::{ClassificationResult, QueryRouter};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
