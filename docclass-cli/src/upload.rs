//! Upload gatekeeping - the checks a file must pass before it is handed to
//! the classifier.

use anyhow::{bail, Context, Result};
use docclass_core::UploadedFile;
use std::fs;
use std::path::Path;

/// Open a file for classification, rejecting anything over `max_bytes`.
pub fn open_upload(path: &Path, max_bytes: u64) -> Result<UploadedFile> {
    let metadata =
        fs::metadata(path).with_context(|| format!("cannot read {}", path.display()))?;

    if !metadata.is_file() {
        bail!("{} is not a regular file", path.display());
    }
    if metadata.len() > max_bytes {
        bail!(
            "file too large: {} bytes exceeds the {} byte upload limit",
            metadata.len(),
            max_bytes
        );
    }

    UploadedFile::open(path).with_context(|| format!("cannot open {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_file_within_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invoice_1.pdf");
        fs::write(&path, vec![0u8; 1024]).unwrap();

        let upload = open_upload(&path, 1024).unwrap();
        assert_eq!(upload.filename(), "invoice_1.pdf");
    }

    #[test]
    fn test_rejects_oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.pdf");
        fs::write(&path, vec![0u8; 1025]).unwrap();

        let err = open_upload(&path, 1024).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_rejects_missing_file_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        assert!(open_upload(&dir.path().join("missing.png"), 1024).is_err());
        assert!(open_upload(dir.path(), u64::MAX).is_err());
    }
}
