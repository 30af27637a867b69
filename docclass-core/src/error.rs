//! Error types for docclass.
//!
//! Only `UnsupportedIndustry` is part of the classification contract seen by
//! callers of [`DocumentClassifier::classify`](crate::DocumentClassifier::classify).
//! `UnsupportedFiletype` is raised by the extraction router and absorbed by the
//! classifier as `"unknown file"`. The remaining variants describe failures of
//! the surrounding machinery (engines, I/O, configuration) and are fatal to
//! the request that hit them.

use crate::types::MediaGuess;
use thiserror::Error;

/// Result type alias using `ClassifyError`.
pub type Result<T> = std::result::Result<T, ClassifyError>;

#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The requested industry has no entry in the rule set.
    #[error("Unsupported industry: {0}")]
    UnsupportedIndustry(String),

    /// The filename did not resolve to a media type with an extractor.
    #[error("Unsupported filetype: {0}")]
    UnsupportedFiletype(MediaGuess),

    /// An extraction engine failed for a reason other than the file type.
    #[error("{backend} extraction failed: {message}")]
    Extraction { backend: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The rule set could not be parsed or is structurally invalid.
    #[error("Invalid classifier rules: {0}")]
    Rules(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ClassifyError {
    pub fn extraction(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Extraction {
            backend: backend.into(),
            message: message.into(),
        }
    }

    /// True for the one error kind that signals a caller mistake rather than
    /// a processing failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::UnsupportedIndustry(_))
    }
}
