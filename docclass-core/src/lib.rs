// docclass Core Library
//
// Classifies uploaded images and PDFs into document types by matching the
// extracted text against industry-scoped keyword rules.

pub mod classifier;
pub mod config;
pub mod error;
pub mod extractors;
pub mod mime;
pub mod rules;
pub mod types;

// Re-export main types and functions for easy use
pub use classifier::{first_match, DocumentClassifier};
pub use config::{ClassifierConfig, OcrConfig};
pub use error::{ClassifyError, Result};
pub use extractors::{ExtractionRouter, OcrBackend, PdfBackend, Route, TextExtractor};
pub use rules::{DocumentRule, IndustryRules, RuleSet};
pub use types::*;

// Re-export backends for direct use
#[cfg(feature = "tesseract-backend")]
pub use extractors::TesseractBackend;

#[cfg(feature = "lopdf-backend")]
pub use extractors::LopdfBackend;
