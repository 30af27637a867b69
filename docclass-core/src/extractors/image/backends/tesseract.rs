//! Tesseract OCR backend
//!
//! Writes the image bytes to a scratch file and runs the `tesseract`
//! executable on it. Every call gets its own scratch file, so concurrent
//! calls never share state.

use super::OcrBackend;
use crate::config::OcrConfig;
use crate::error::{ClassifyError, Result};
use std::io::Write;
use std::path::Path;
use std::process::Command;

pub struct TesseractBackend {
    binary: String,
    language: String,
}

impl TesseractBackend {
    /// Create a backend using `tesseract` from PATH with English models
    pub fn new() -> Self {
        Self::with_config(&OcrConfig::default())
    }

    pub fn with_config(config: &OcrConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            language: config.language.clone(),
        }
    }

    fn run_tesseract(&self, image_path: &Path) -> Result<String> {
        let output = Command::new(&self.binary)
            .arg(image_path)
            .arg("stdout")
            .args(["-l", &self.language])
            .output();

        match output {
            Ok(output) if output.status.success() => {
                Ok(String::from_utf8_lossy(&output.stdout).into_owned())
            }
            Ok(output) => Err(ClassifyError::extraction(
                self.name(),
                format!(
                    "{} exited with {}: {}",
                    self.binary,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            )),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ClassifyError::extraction(
                self.name(),
                format!("{} not found (install tesseract-ocr)", self.binary),
            )),
            Err(e) => Err(ClassifyError::Io(e)),
        }
    }
}

impl Default for TesseractBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrBackend for TesseractBackend {
    fn recognize(&self, image_bytes: &[u8]) -> Result<Vec<String>> {
        let mut scratch = tempfile::Builder::new()
            .prefix("docclass-ocr-")
            .tempfile()?;
        scratch.write_all(image_bytes)?;
        scratch.flush()?;

        let stdout = self.run_tesseract(scratch.path())?;
        Ok(split_regions(&stdout))
    }

    fn name(&self) -> &str {
        "tesseract"
    }

    fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}

/// One region per non-blank output line. Tesseract terminates each page
/// with a form feed, which the trim removes.
fn split_regions(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
