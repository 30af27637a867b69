//! Extraction Router
//!
//! Picks an extractor from the upload's filename alone. Caller-supplied
//! content types are ignored and the bytes are only read by the extractor
//! that was chosen.

use crate::error::{ClassifyError, Result};
use crate::extractors::extractor::TextExtractor;
use crate::extractors::image::{ImageExtractor, OcrBackend};
use crate::extractors::pdf::{PdfBackend, PdfExtractor};
use crate::mime::{guess_media_type, JPEG_MIME_TYPE, PDF_MIME_TYPE, PNG_MIME_TYPE};
use crate::types::{ExtractionOutcome, MediaGuess, UploadedFile};
use std::sync::Arc;

#[cfg(all(feature = "tesseract-backend", feature = "lopdf-backend"))]
use crate::config::OcrConfig;

/// Where a filename sends its upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Image,
    Pdf,
    Unsupported(MediaGuess),
}

pub struct ExtractionRouter {
    image: ImageExtractor,
    pdf: PdfExtractor,
}

impl ExtractionRouter {
    pub fn new(ocr: Arc<dyn OcrBackend>, pdf: Arc<dyn PdfBackend>) -> Self {
        Self {
            image: ImageExtractor::new(ocr),
            pdf: PdfExtractor::new(pdf),
        }
    }

    /// Router wired to the default engines: tesseract for images, lopdf for PDFs
    #[cfg(all(feature = "tesseract-backend", feature = "lopdf-backend"))]
    pub fn from_config(config: &OcrConfig) -> Self {
        use crate::extractors::image::TesseractBackend;
        use crate::extractors::pdf::LopdfBackend;

        Self::new(
            Arc::new(TesseractBackend::with_config(config)),
            Arc::new(LopdfBackend::new()),
        )
    }

    /// Decide the route for a filename.
    ///
    /// JPEG and PNG go to OCR, PDF to page extraction. Anything else,
    /// including a supported type under a compression suffix such as
    /// `scan.pdf.gz`, is unsupported.
    pub fn route(filename: &str) -> Route {
        let guess = guess_media_type(filename);
        match guess.plain_media_type() {
            Some(JPEG_MIME_TYPE | PNG_MIME_TYPE) => Route::Image,
            Some(PDF_MIME_TYPE) => Route::Pdf,
            _ => Route::Unsupported(guess),
        }
    }

    /// Extract the upload's text, failing with `UnsupportedFiletype` before
    /// any bytes are read when no extractor handles the filename.
    pub fn file_to_text(&self, file: UploadedFile) -> Result<String> {
        let extractor: &dyn TextExtractor = match Self::route(file.filename()) {
            Route::Image => &self.image,
            Route::Pdf => &self.pdf,
            Route::Unsupported(guess) => return Err(ClassifyError::UnsupportedFiletype(guess)),
        };

        tracing::debug!(
            filename = file.filename(),
            extractor = extractor.name(),
            "routing upload"
        );
        extractor.extract_file(file)
    }

    /// Like [`file_to_text`](Self::file_to_text), with the unsupported case
    /// folded into the outcome instead of the error.
    pub fn extract(&self, file: UploadedFile) -> Result<ExtractionOutcome> {
        match self.file_to_text(file) {
            Ok(text) => Ok(ExtractionOutcome::Text(text)),
            Err(ClassifyError::UnsupportedFiletype(guess)) => {
                Ok(ExtractionOutcome::Unsupported(guess))
            }
            Err(e) => Err(e),
        }
    }

    pub fn image_backend_name(&self) -> &str {
        self.image.backend_name()
    }

    pub fn pdf_backend_name(&self) -> &str {
        self.pdf.backend_name()
    }
}
