//! OCR Backend trait
//!
//! Defines the interface that all OCR engines must implement.

use crate::error::Result;

/// Backend trait for image OCR
///
/// Implementations must be safe to call from several threads at once; the
/// extractor holds a single shared instance.
pub trait OcrBackend: Send + Sync {
    /// Recognize text in encoded image bytes (PNG, JPEG)
    ///
    /// Returns the detected text regions in detection order.
    fn recognize(&self, image_bytes: &[u8]) -> Result<Vec<String>>;

    /// Backend identifier for logging/debugging
    fn name(&self) -> &str;

    /// Check if backend is ready (engine installed, models present)
    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(feature = "tesseract-backend")]
pub mod tesseract;

#[cfg(feature = "tesseract-backend")]
pub use tesseract::TesseractBackend;
