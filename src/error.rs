//! Error types for the Lexis library.
//!
//! Two families of errors exist. [`LexisError`] is what the public query
//! operations return: caller-input and precondition violations such as an
//! empty search term or a random pick from an empty corpus, plus the I/O and
//! configuration failures of the surrounding plumbing. [`DecodeError`]
//! describes why a single corpus element could not be turned into a word; it
//! never leaves the loader, which logs it and moves on.
//!
//! # Examples
//!
//! ```
//! use lexis::error::{LexisError, Result};
//!
//! fn validate(term: &str) -> Result<&str> {
//!     if term.is_empty() {
//!         return Err(LexisError::EmptySearchTerm);
//!     }
//!     Ok(term)
//! }
//!
//! assert!(matches!(validate(""), Err(LexisError::EmptySearchTerm)));
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexis operations.
#[derive(Error, Debug)]
pub enum LexisError {
    /// A term-based search was invoked with an empty term.
    #[error("Search Term cannot be empty")]
    EmptySearchTerm,

    /// A random pick was requested from a corpus with no words.
    #[error("Corpus is empty")]
    EmptyCorpus,

    /// I/O errors (reading the corpus or a config file)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Internal errors (thread pool construction, etc.)
    #[error("Internal error: {0}")]
    Internal(String),

    /// An error wrapped with context, such as the file being read
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexisError.
pub type Result<T> = std::result::Result<T, LexisError>;

impl LexisError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        LexisError::InvalidConfig(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        LexisError::Internal(msg.into())
    }

    /// Whether the error was caused by the caller's input rather than by the
    /// state of the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, LexisError::EmptySearchTerm)
    }
}

/// Why one corpus element failed to decode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The element is not a JSON object.
    #[error("expected a JSON object")]
    NotAnObject,

    /// A required field is absent.
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// A field is present but has the wrong JSON type.
    #[error("field `{0}` has the wrong type")]
    InvalidField(&'static str),

    /// The `wordType` discriminant names no known category.
    #[error("unknown word type `{0}`")]
    UnknownWordType(String),
}

/// Result type alias for decoding a single corpus element.
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexisError::invalid_config("thread_pool_size must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: thread_pool_size must be positive"
        );

        let error = LexisError::internal("pool");
        assert_eq!(error.to_string(), "Internal error: pool");

        assert_eq!(
            LexisError::EmptySearchTerm.to_string(),
            "Search Term cannot be empty"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let lexis_error = LexisError::from(io_error);

        match lexis_error {
            LexisError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_context_error_display() {
        use anyhow::Context;

        let result: Result<()> = Err(LexisError::EmptyCorpus)
            .context("Failed to pick a word")
            .map_err(LexisError::from);

        let error = result.unwrap_err();
        assert!(matches!(error, LexisError::Anyhow(_)));
        assert_eq!(error.to_string(), "Failed to pick a word: Corpus is empty");
    }

    #[test]
    fn test_client_errors() {
        assert!(LexisError::EmptySearchTerm.is_client_error());
        assert!(!LexisError::EmptyCorpus.is_client_error());
    }

    #[test]
    fn test_decode_error_display() {
        assert_eq!(
            DecodeError::MissingField("forms").to_string(),
            "missing field `forms`"
        );
        assert_eq!(
            DecodeError::UnknownWordType("Particle".to_string()).to_string(),
            "unknown word type `Particle`"
        );
    }
}
