//! PDF Backend trait
//!
//! Defines the interface that all PDF text backends must implement.

use crate::error::Result;

/// Backend trait for PDF text extraction
///
/// Returns one entry per page, in page order. `None` marks a page that
/// yielded no text; the extractor decides what to do with it.
pub trait PdfBackend: Send + Sync {
    /// Extract per-page text from PDF bytes
    fn page_texts(&self, pdf_bytes: &[u8]) -> Result<Vec<Option<String>>>;

    /// Backend identifier for logging/debugging
    fn name(&self) -> &str;
}

#[cfg(feature = "lopdf-backend")]
pub mod lopdf_backend;

#[cfg(feature = "lopdf-backend")]
pub use lopdf_backend::LopdfBackend;
