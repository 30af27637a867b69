use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

/// Sentinel document type returned when no rule matched or the file's text
/// could not be extracted.
pub const UNKNOWN_FILE: &str = "unknown file";

// ===== REQUEST TYPES =====

/// An uploaded file: a filename plus a byte source that can be read once.
///
/// `read_to_end` consumes the handle, so the single-shot nature of upload
/// streams is enforced by ownership rather than documented and hoped for.
pub struct UploadedFile {
    filename: String,
    source: Box<dyn Read + Send>,
}

impl UploadedFile {
    pub fn from_reader(filename: impl Into<String>, reader: impl Read + Send + 'static) -> Self {
        Self {
            filename: filename.into(),
            source: Box::new(reader),
        }
    }

    pub fn from_bytes(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self::from_reader(filename, Cursor::new(bytes.into()))
    }

    /// Open a file on disk. The filename is the path's final component, which
    /// is what an upload form would have carried.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::from_reader(filename, file))
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Drain the byte source. The handle is gone afterwards.
    pub fn read_to_end(mut self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.source.read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("filename", &self.filename)
            .finish_non_exhaustive()
    }
}

// ===== EXTRACTION TYPES =====

/// Raw result of filename-based media type inference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaGuess {
    /// e.g. `application/pdf`; `None` for unknown extensions
    pub media_type: Option<String>,
    /// Compression/transfer encoding suffix, e.g. `gzip` for `.gz`
    pub encoding: Option<String>,
}

impl MediaGuess {
    pub fn new(media_type: Option<&str>, encoding: Option<&str>) -> Self {
        Self {
            media_type: media_type.map(str::to_string),
            encoding: encoding.map(str::to_string),
        }
    }

    /// The media type, but only when no encoding wraps it.
    pub fn plain_media_type(&self) -> Option<&str> {
        match self.encoding {
            Some(_) => None,
            None => self.media_type.as_deref(),
        }
    }
}

impl fmt::Display for MediaGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})",
            self.media_type.as_deref().unwrap_or("None"),
            self.encoding.as_deref().unwrap_or("None")
        )
    }
}

/// What the extraction router produced for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Text(String),
    /// No extractor handles this file; carries the inference for diagnostics.
    Unsupported(MediaGuess),
}

// ===== CLASSIFICATION TYPES =====

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// A document type name from the rule set, or [`UNKNOWN_FILE`].
    pub document_type: String,
}

impl ClassificationResult {
    pub fn matched(document_type: impl Into<String>) -> Self {
        Self {
            document_type: document_type.into(),
        }
    }

    pub fn unknown() -> Self {
        Self::matched(UNKNOWN_FILE)
    }

    pub fn is_unknown(&self) -> bool {
        self.document_type == UNKNOWN_FILE
    }

    pub fn as_str(&self) -> &str {
        &self.document_type
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.document_type)
    }
}
