use crate::error::{ClassifyError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// Default value functions for serde
fn default_rules_path() -> PathBuf {
    PathBuf::from("classifier_rules.yaml")
}

fn default_max_upload_bytes() -> u64 {
    5_000_000 // 5 MB
}

fn default_ocr_language() -> String {
    "eng".to_string()
}

fn default_ocr_binary() -> String {
    "tesseract".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// YAML file holding the industry → document type → keywords rules
    #[serde(default = "default_rules_path")]
    pub rules_path: PathBuf,
    /// Uploads larger than this are rejected before classification
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
    /// OCR engine settings for image uploads
    #[serde(default)]
    pub ocr: OcrConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Tesseract language code(s), e.g. "eng" or "eng+fra"
    #[serde(default = "default_ocr_language")]
    pub language: String,
    /// Name or path of the tesseract executable
    #[serde(default = "default_ocr_binary")]
    pub binary: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: default_ocr_language(),
            binary: default_ocr_binary(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            rules_path: default_rules_path(),
            max_upload_bytes: default_max_upload_bytes(),
            ocr: OcrConfig::default(),
        }
    }
}

impl ClassifierConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| ClassifyError::Config(format!("{}: {e}", path.display())))
    }

    /// Load config with fallback to default
    pub fn load_with_fallback(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %p.display(),
                    error = %e,
                    "failed to load config, using defaults"
                );
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
