//! PDF Extractor
//!
//! Pulls text out of PDF uploads page by page through a pluggable backend,
//! drops pages that produced nothing and joins the rest with newlines.

pub mod backends;

use crate::error::Result;
use crate::extractors::extractor::TextExtractor;
use std::sync::Arc;

pub use backends::PdfBackend;

#[cfg(feature = "lopdf-backend")]
pub use backends::LopdfBackend;

/// PDF extractor with pluggable backend
pub struct PdfExtractor {
    backend: Arc<dyn PdfBackend>,
}

impl PdfExtractor {
    pub fn new(backend: Arc<dyn PdfBackend>) -> Self {
        Self { backend }
    }

    /// Get the backend name for logging
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }
}

impl TextExtractor for PdfExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        let pages = self.backend.page_texts(bytes)?;
        let total = pages.len();

        let texts: Vec<String> = pages
            .into_iter()
            .flatten()
            .filter(|text| !text.is_empty())
            .collect();

        tracing::debug!(
            backend = self.backend.name(),
            pages = total,
            pages_with_text = texts.len(),
            "pdf text extracted"
        );
        Ok(texts.join("\n"))
    }

    fn name(&self) -> &str {
        "PdfExtractor"
    }
}
