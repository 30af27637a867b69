//! lopdf Backend for PDF text extraction
//!
//! Pure Rust, in-process. Handles PDFs with a text layer; scanned PDFs
//! without one come back as pages with no text.

use super::PdfBackend;
use crate::error::{ClassifyError, Result};
use lopdf::Document;

#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for LopdfBackend {
    fn page_texts(&self, pdf_bytes: &[u8]) -> Result<Vec<Option<String>>> {
        let document = Document::load_mem(pdf_bytes)
            .map_err(|e| ClassifyError::extraction(self.name(), e.to_string()))?;

        // get_pages is keyed by 1-based page number, so iteration is page order
        let pages: Vec<Option<String>> = document
            .get_pages()
            .keys()
            .map(|&page_number| match document.extract_text(&[page_number]) {
                Ok(text) => non_blank(text),
                Err(e) => {
                    tracing::warn!(
                        page = page_number,
                        error = %e,
                        "skipping page without decodable text"
                    );
                    None
                }
            })
            .collect();

        Ok(pages)
    }

    fn name(&self) -> &str {
        "lopdf"
    }
}

fn non_blank(text: String) -> Option<String> {
    let trimmed = text.trim_end();
    if trimmed.trim_start().is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
