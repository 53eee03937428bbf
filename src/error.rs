//! Error types for the Wayfinder library.
//!
//! All errors are represented by the [`WayfinderError`] enum. The taxonomy is
//! narrow because the core is pure computation: configuration problems are
//! caught at construction time, catalog problems are reported by the storage
//! collaborator, and everything else is plumbing.
//!
//! # Examples
//!
//! ```
//! use wayfinder::error::{Result, WayfinderError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WayfinderError::invalid_config("threshold out of range"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Wayfinder operations.
#[derive(Error, Debug)]
pub enum WayfinderError {
    /// Configuration errors (thresholds outside [0,1], non-positive weights).
    /// Raised at construction, never mid-query.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog lookup failures reported by the storage collaborator.
    /// Distinct from "no products matched", which is an empty candidate list.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Text analysis errors (tokenization, dictionary construction).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// I/O errors (catalog or dictionary files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error from an external collaborator.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WayfinderError.
pub type Result<T> = std::result::Result<T, WayfinderError>;

impl WayfinderError {
    /// Create a new configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        WayfinderError::Config(msg.into())
    }

    /// Create a new catalog error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        WayfinderError::Catalog(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        WayfinderError::Analysis(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = WayfinderError::invalid_config("bad threshold");
        assert_eq!(error.to_string(), "Configuration error: bad threshold");

        let error = WayfinderError::catalog("backend unavailable");
        assert_eq!(error.to_string(), "Catalog error: backend unavailable");

        let error = WayfinderError::analysis("empty dictionary");
        assert_eq!(error.to_string(), "Analysis error: empty dictionary");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wayfinder_error = WayfinderError::from(io_error);

        match wayfinder_error {
            WayfinderError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let err: WayfinderError = anyhow::anyhow!("collaborator exploded").into();
        match err {
            WayfinderError::Anyhow(_) => {}
            _ => panic!("Expected anyhow error variant"),
        }
    }
}
