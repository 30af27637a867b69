// Extractor abstraction
//
// This module defines the boundary between format handling (bytes -> text)
// and classification (text -> document type). Everything downstream of an
// extractor only ever sees a `String`.

use crate::error::Result;
use crate::types::UploadedFile;

/// Converts the bytes of one supported format into plain text.
pub trait TextExtractor: Send + Sync {
    /// Extract text from the raw file bytes
    fn extract_text(&self, bytes: &[u8]) -> Result<String>;

    /// Convenience method: drain an upload and extract from its bytes
    ///
    /// The upload is consumed; it cannot be read a second time.
    fn extract_file(&self, file: UploadedFile) -> Result<String> {
        let bytes = file.read_to_end()?;
        self.extract_text(&bytes)
    }

    /// Get extractor name for debugging/logging
    fn name(&self) -> &str;
}
