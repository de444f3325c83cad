//! Error types for lexmetric operations.
//!
//! This module defines the main error type [`LexmetricError`] which covers
//! setup and I/O failures (fetching, extraction, lexicon loading, report
//! writing), and [`AnalysisError`], the per-document failure returned by
//! [`Analyzer::analyze`](crate::Analyzer::analyze).
//!
//! Per-document errors never abort a batch: the batch driver records them as
//! [`DocumentFailure`](crate::DocumentFailure) values and moves on.
//!
//! # Example
//!
//! ```rust
//! use lexmetric_core::{LexmetricError, Result};
//!
//! fn require_text(text: &str) -> Result<&str> {
//!     if text.trim().is_empty() {
//!         return Err(LexmetricError::NoArticle("empty input".to_string()));
//!     }
//!     Ok(text)
//! }
//! # assert!(require_text("").is_err());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fetching, extraction, lexicon and report operations.
#[derive(Error, Debug)]
pub enum LexmetricError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors, usually an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// The page has none of the expected article markup.
    #[error("No article content found: {0}")]
    NoArticle(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Wraps standard I/O errors for file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A lexicon file or directory could not be used.
    #[error("Lexicon error: {0}")]
    LexiconError(String),

    /// Input list or report CSV errors.
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Input list is structurally valid CSV but misses a required column.
    #[error("Input list error: {0}")]
    InputError(String),

    /// JSON report serialization errors.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for LexmetricError.
///
/// This is a convenience alias for `std::result::Result<T, LexmetricError>`.
pub type Result<T> = std::result::Result<T, LexmetricError>;

/// Failure analyzing a single document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// The normalized text produced no words or no sentences.
    #[error("Document is empty ({words} words, {sentences} sentences)")]
    EmptyDocument { words: usize, sentences: usize },

    /// Any other failure while computing metrics.
    #[error("Analysis failed: {0}")]
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LexmetricError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_http_status_error() {
        let err = LexmetricError::HttpStatus { status: 404, url: "https://example.com/x".to_string() };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("example.com/x"));
    }

    #[test]
    fn test_timeout_error() {
        let err = LexmetricError::Timeout { timeout: 30 };
        assert!(err.to_string().contains("30"));
    }

    #[test]
    fn test_empty_document_error() {
        let err = AnalysisError::EmptyDocument { words: 0, sentences: 1 };
        assert!(err.to_string().contains("0 words"));
        assert!(err.to_string().contains("1 sentences"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: LexmetricError = io.into();
        assert!(matches!(err, LexmetricError::Io(_)));
    }
}
