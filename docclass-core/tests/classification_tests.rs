//! Classification boundary tests: upload + industry in, document type out.
//!
//! The OCR and PDF engines are replaced with in-memory fakes that treat the
//! upload bytes as the text they "recognized", so every test controls the
//! extracted text directly and no tesseract install is needed.
//!
//! - Boundary 1 (router): which engine sees which filename
//! - Boundary 2 (classifier): industry validation, first-match-wins, sentinel

use docclass_core::{
    ClassificationResult, ClassifyError, DocumentClassifier, ExtractionRouter, OcrBackend,
    PdfBackend, RuleSet, UploadedFile, UNKNOWN_FILE,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// ============================================================================
// Fixture helpers
// ============================================================================

// note alternative spellings of licence/license in both document names and keywords
const RULES: &str = r#"
legal:
  licence_agreement: [licence, license]
  statement_of_particulars: [statement]
medical:
  license_to_practice: [licence, license]
  doctors_statement: [statement]
retail: {}
"#;

/// OCR fake: each line of the upload is one detected region.
#[derive(Default)]
struct EchoOcr {
    calls: AtomicUsize,
}

impl OcrBackend for EchoOcr {
    fn recognize(&self, image_bytes: &[u8]) -> docclass_core::Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(String::from_utf8_lossy(image_bytes)
            .lines()
            .map(str::to_string)
            .collect())
    }

    fn name(&self) -> &str {
        "echo-ocr"
    }
}

/// PDF fake: pages are separated by form feeds; blank pages have no text.
/// Uploads starting with `CORRUPT` fail the way an unparseable PDF would.
#[derive(Default)]
struct EchoPdf {
    calls: AtomicUsize,
}

impl PdfBackend for EchoPdf {
    fn page_texts(&self, pdf_bytes: &[u8]) -> docclass_core::Result<Vec<Option<String>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let content = String::from_utf8_lossy(pdf_bytes);
        if content.starts_with("CORRUPT") {
            return Err(ClassifyError::extraction(self.name(), "invalid file header"));
        }
        if content.is_empty() {
            return Ok(Vec::new());
        }
        Ok(content
            .split('\x0c')
            .map(|page| Some(page.to_string()).filter(|p| !p.trim().is_empty()))
            .collect())
    }

    fn name(&self) -> &str {
        "echo-pdf"
    }
}

struct Harness {
    classifier: DocumentClassifier,
    ocr: Arc<EchoOcr>,
    pdf: Arc<EchoPdf>,
}

impl Harness {
    fn new() -> Self {
        Self::with_rules(RULES)
    }

    fn with_rules(yaml: &str) -> Self {
        let ocr = Arc::new(EchoOcr::default());
        let pdf = Arc::new(EchoPdf::default());
        let router = ExtractionRouter::new(ocr.clone(), pdf.clone());
        let rules = Arc::new(RuleSet::from_yaml_str(yaml).expect("test rules should parse"));
        Self {
            classifier: DocumentClassifier::new(rules, router),
            ocr,
            pdf,
        }
    }

    fn classify(
        &self,
        filename: &str,
        content: &str,
        industry: &str,
    ) -> Result<String, ClassifyError> {
        let file = UploadedFile::from_bytes(filename, content.as_bytes().to_vec());
        self.classifier
            .classify(file, industry)
            .map(|result| result.document_type)
    }

    fn engine_calls(&self) -> usize {
        self.ocr.calls.load(Ordering::SeqCst) + self.pdf.calls.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Boundary 2: classification outcomes
// ============================================================================

mod classification {
    use super::*;

    #[test]
    fn documented_examples() {
        let h = Harness::new();
        let cases = [
            ("legal", "This license is made between...", "licence_agreement"),
            ("legal", "Employee statement of particulars", "statement_of_particulars"),
            ("legal", "This is unrelated content", UNKNOWN_FILE),
            ("medical", "LICENCE to practice medicine", "license_to_practice"),
            ("medical", "Doctor's statement confirms diagnosis", "doctors_statement"),
            ("medical", "This is something else entirely", UNKNOWN_FILE),
            // retail has no document types
            ("retail", "Receipt for purchase 5/02/12 £29.19", UNKNOWN_FILE),
            // empty file
            ("legal", "", UNKNOWN_FILE),
        ];

        for (industry, content, expected) in cases {
            assert_eq!(
                h.classify("upload.pdf", content, industry).unwrap(),
                expected,
                "industry={industry} content={content:?}"
            );
        }
    }

    #[test]
    fn first_document_type_wins_over_later_matches() {
        let h = Harness::new();
        let result = h
            .classify("agreement.pdf", "Statement of terms for this Licence", "legal")
            .unwrap();
        assert_eq!(result, "licence_agreement");
    }

    #[test]
    fn same_text_different_industry_different_label() {
        let h = Harness::new();
        assert_eq!(h.classify("a.png", "license", "legal").unwrap(), "licence_agreement");
        assert_eq!(h.classify("a.png", "license", "medical").unwrap(), "license_to_practice");
    }

    #[test]
    fn empty_industry_is_always_unknown() {
        let h = Harness::new();
        for content in ["", "licence", "statement", "invoice"] {
            assert_eq!(h.classify("r.jpg", content, "retail").unwrap(), UNKNOWN_FILE);
        }
    }

    #[test]
    fn keyword_on_later_pdf_page_still_matches() {
        let h = Harness::new();
        let pdf = "Cover page\x0c\x0cSchedule 2: statement of particulars";
        assert_eq!(h.classify("contract.pdf", pdf, "legal").unwrap(), "statement_of_particulars");
    }

    #[test]
    fn keyword_split_across_ocr_regions_does_not_match() {
        let h = Harness::new();
        // regions are joined with newlines, so "state" + "ment" is not "statement"
        assert_eq!(h.classify("scan.png", "state\nment", "legal").unwrap(), UNKNOWN_FILE);
    }

    #[test]
    fn classify_text_skips_extraction() {
        let h = Harness::new();
        let result = h.classifier.classify_text("LICENSE", "legal").unwrap();
        assert_eq!(result, ClassificationResult::matched("licence_agreement"));
        assert_eq!(h.engine_calls(), 0);
    }

    #[test]
    fn classifier_exposes_the_rules_it_was_built_with() {
        let h = Harness::new();
        assert_eq!(h.classifier.rules().industries(), vec!["legal", "medical", "retail"]);
        assert!(h.classifier.rules().contains("legal"));
        assert!(!h.classifier.rules().contains("blah"));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let h = Harness::new();
        let first = h.classify("doc.pdf", "Doctor's statement", "medical").unwrap();
        let second = h.classify("doc.pdf", "Doctor's statement", "medical").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn concurrent_requests_share_one_classifier() {
        let h = Arc::new(Harness::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let h = Arc::clone(&h);
                std::thread::spawn(move || {
                    let (content, expected) = if i % 2 == 0 {
                        ("licence", "licence_agreement")
                    } else {
                        ("statement", "statement_of_particulars")
                    };
                    assert_eq!(h.classify("f.pdf", content, "legal").unwrap(), expected);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(h.engine_calls(), 8);
    }
}

// ============================================================================
// Boundary 2: errors and the unknown-file policy
// ============================================================================

mod failure_modes {
    use super::*;

    #[test]
    fn unsupported_industry_is_an_error() {
        let h = Harness::new();
        let err = h.classify("a.pdf", "licence", "blah").unwrap_err();
        assert!(matches!(err, ClassifyError::UnsupportedIndustry(ref i) if i == "blah"));
        assert!(err.is_client_error());
    }

    #[test]
    fn industry_lookup_is_case_sensitive() {
        let h = Harness::new();
        assert!(h.classify("a.pdf", "licence", "Legal").is_err());
    }

    #[test]
    fn unsupported_industry_never_touches_the_file() {
        let h = Harness::new();
        for name in ["a.pdf", "a.png", "a.mp3"] {
            assert!(h.classify(name, "licence", "blah").is_err());
        }
        assert_eq!(h.engine_calls(), 0);
    }

    #[test]
    fn unsupported_filetype_is_unknown_not_error() {
        let h = Harness::new();
        for name in ["song.mp3", "doc.pdf.gz", "sample.png.zip", "notes.txt"] {
            assert_eq!(
                h.classify(name, "This license is made between...", "legal").unwrap(),
                UNKNOWN_FILE,
                "{name}"
            );
        }
        assert_eq!(h.engine_calls(), 0);
    }

    #[test]
    fn unsupported_industry_checked_before_filetype() {
        let h = Harness::new();
        let err = h.classify("song.mp3", "", "blah").unwrap_err();
        assert!(matches!(err, ClassifyError::UnsupportedIndustry(_)));
    }

    #[test]
    fn engine_failure_propagates() {
        let h = Harness::new();
        let err = h.classify("broken.pdf", "CORRUPT bytes", "legal").unwrap_err();
        assert!(matches!(err, ClassifyError::Extraction { .. }));
        assert!(!err.is_client_error());
    }

    #[test]
    fn pdf_without_pages_is_unknown() {
        let h = Harness::new();
        assert_eq!(h.classify("empty.pdf", "", "legal").unwrap(), UNKNOWN_FILE);
    }
}

// ============================================================================
// Boundary 1: routing by filename
// ============================================================================

mod routing {
    use super::*;

    #[test]
    fn pdf_filenames_use_pdf_engine() {
        let h = Harness::new();
        h.classify("a.pdf", "x", "legal").unwrap();
        assert_eq!(h.pdf.calls.load(Ordering::SeqCst), 1);
        assert_eq!(h.ocr.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn image_filenames_use_ocr_engine() {
        let h = Harness::new();
        for name in ["a.png", "a.jpg", "a.jpeg"] {
            h.classify(name, "x", "legal").unwrap();
        }
        assert_eq!(h.ocr.calls.load(Ordering::SeqCst), 3);
        assert_eq!(h.pdf.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn rules_loaded_from_disk_classify_the_same() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classifier_rules.yaml");
        std::fs::write(&path, RULES).unwrap();

        let rules = Arc::new(RuleSet::load_from_file(&path).unwrap());
        let router =
            ExtractionRouter::new(Arc::new(EchoOcr::default()), Arc::new(EchoPdf::default()));
        let classifier = DocumentClassifier::new(rules, router);

        let file = UploadedFile::from_bytes("licence.png", b"DRIVING LICENSE".to_vec());
        let result = classifier.classify(file, "legal").unwrap();
        assert_eq!(result.document_type, "licence_agreement");
    }
}

// ============================================================================
// Sample rules shipped at the repository root
// ============================================================================

mod sample_rules {
    use super::*;
    use std::path::PathBuf;

    fn sample_rules_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../classifier_rules.yaml")
    }

    #[test]
    fn sample_rules_parse() {
        let rules =
            RuleSet::load_from_file(&sample_rules_path()).expect("sample rules should parse");
        for industry in ["government", "accounting", "legal", "medical", "retail"] {
            assert!(rules.contains(industry), "missing {industry}");
        }
        assert!(rules.get("retail").unwrap().is_empty());
    }

    #[test]
    fn sample_rules_classify_typical_documents() {
        let rules = Arc::new(RuleSet::load_from_file(&sample_rules_path()).unwrap());
        let router =
            ExtractionRouter::new(Arc::new(EchoOcr::default()), Arc::new(EchoPdf::default()));
        let classifier = DocumentClassifier::new(rules, router);

        let cases = [
            (
                "drivers_license_1.jpg",
                "DRIVING LICENCE\n1. MORGAN\n2. SARAH",
                "government",
                "drivers_licence",
            ),
            (
                "bank_statement_1.pdf",
                "Your Bank Statement\nSort code 12-34-56",
                "accounting",
                "bank_statement",
            ),
            ("invoice_1.pdf", "INVOICE #1042\nAmount due: $120.00", "accounting", "invoice"),
        ];

        for (filename, content, industry, expected) in cases {
            let file = UploadedFile::from_bytes(filename, content.as_bytes().to_vec());
            let result = classifier.classify(file, industry).unwrap();
            assert_eq!(result.document_type, expected, "{filename}");
        }
    }
}
