//! Image Extractor
//!
//! Runs an OCR backend over JPEG/PNG uploads and joins the detected text
//! regions, one per line, in the order the backend reported them.

pub mod backends;

use crate::error::Result;
use crate::extractors::extractor::TextExtractor;
use std::sync::Arc;

pub use backends::OcrBackend;

#[cfg(feature = "tesseract-backend")]
pub use backends::TesseractBackend;

/// Image extractor with pluggable OCR backend
///
/// The backend is shared: one loaded engine serves every concurrent request.
pub struct ImageExtractor {
    backend: Arc<dyn OcrBackend>,
}

impl ImageExtractor {
    pub fn new(backend: Arc<dyn OcrBackend>) -> Self {
        Self { backend }
    }

    /// Get the backend name for logging
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }
}

impl TextExtractor for ImageExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        let regions = self.backend.recognize(bytes)?;
        tracing::debug!(
            backend = self.backend.name(),
            regions = regions.len(),
            "ocr finished"
        );
        Ok(regions.join("\n"))
    }

    fn name(&self) -> &str {
        "ImageExtractor"
    }
}
