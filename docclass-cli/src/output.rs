//! Per-file result rendering for stdout.

use anyhow::Result;
use clap::ValueEnum;
use docclass_core::ClassificationResult;
use serde::Serialize;
use std::fmt::Display;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line
    Json,
    /// `<file>: <document type>`
    Text,
}

/// Outcome for one input file. Exactly one of `file_class`/`error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    pub fn classified(path: &Path, result: &ClassificationResult) -> Self {
        Self {
            file: path.display().to_string(),
            file_class: Some(result.document_type.clone()),
            error: None,
        }
    }

    pub fn failed(path: &Path, error: impl Display) -> Self {
        Self {
            file: path.display().to_string(),
            file_class: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Json => serde_json::to_string(self)?,
            OutputFormat::Text => match (&self.file_class, &self.error) {
                (Some(file_class), _) => format!("{}: {}", self.file, file_class),
                (None, Some(error)) => format!("{}: error: {}", self.file, error),
                (None, None) => self.file.clone(),
            },
        })
    }
}
