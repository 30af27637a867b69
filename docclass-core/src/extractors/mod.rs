//! Text Extractors
//!
//! This module turns an uploaded file into plain text, or reports that no
//! extractor handles its type.
//!
//! ## Architecture
//!
//! ```text
//! UploadedFile (filename + bytes)
//!     ↓
//! [ExtractionRouter]  filename → media type → route
//!     ↓                         ↓
//! [ImageExtractor]        [PdfExtractor]
//!  OcrBackend regions      PdfBackend pages
//!     ↓                         ↓
//!            extracted text
//! ```
//!
//! ## Available Backends
//!
//! - `TesseractBackend` - OCR via the `tesseract` executable
//! - `LopdfBackend` - in-process PDF text extraction

pub mod extractor;
pub mod image;
pub mod pdf;
pub mod router;

// Re-export main types
pub use extractor::TextExtractor;
pub use image::{ImageExtractor, OcrBackend};
pub use pdf::{PdfBackend, PdfExtractor};
pub use router::{ExtractionRouter, Route};

// Re-export backends
#[cfg(feature = "tesseract-backend")]
pub use image::TesseractBackend;

#[cfg(feature = "lopdf-backend")]
pub use pdf::LopdfBackend;
