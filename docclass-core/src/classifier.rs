use crate::error::{ClassifyError, Result};
use crate::extractors::ExtractionRouter;
use crate::rules::{IndustryRules, RuleSet};
use crate::types::*;
use std::sync::Arc;

/// Rule-based document classifier.
///
/// Holds the process-wide rule set (read-only once built) and the extraction
/// router. `classify` takes `&self` and keeps no per-request state, so one
/// classifier can serve concurrent requests.
pub struct DocumentClassifier {
    rules: Arc<RuleSet>,
    router: ExtractionRouter,
}

impl DocumentClassifier {
    pub fn new(rules: Arc<RuleSet>, router: ExtractionRouter) -> Self {
        Self { rules, router }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Classify an upload for an industry.
    ///
    /// Fails only with `UnsupportedIndustry`, checked before the file is
    /// touched. A file type with no extractor classifies as `"unknown file"`.
    /// Engine failures (corrupt PDF, missing OCR binary) propagate as
    /// `Extraction`/`Io` errors.
    pub fn classify(&self, file: UploadedFile, industry: &str) -> Result<ClassificationResult> {
        let span = tracing::info_span!("classify", filename = file.filename(), industry);
        let _enter = span.enter();

        let industry_rules = self.industry_rules(industry)?;

        let text = match self.router.extract(file)? {
            ExtractionOutcome::Text(text) => text,
            ExtractionOutcome::Unsupported(guess) => {
                tracing::warn!(detected = %guess, "unsupported filetype, classifying as unknown");
                return Ok(ClassificationResult::unknown());
            }
        };

        let result = match first_match(industry_rules, &text) {
            Some(document_type) => ClassificationResult::matched(document_type),
            None => ClassificationResult::unknown(),
        };
        tracing::info!(document_type = result.as_str(), "classified");
        Ok(result)
    }

    /// Classify text that was already extracted.
    pub fn classify_text(&self, text: &str, industry: &str) -> Result<ClassificationResult> {
        let industry_rules = self.industry_rules(industry)?;
        Ok(first_match(industry_rules, text)
            .map(|document_type| ClassificationResult::matched(document_type))
            .unwrap_or_else(ClassificationResult::unknown))
    }

    fn industry_rules(&self, industry: &str) -> Result<&IndustryRules> {
        self.rules
            .get(industry)
            .ok_or_else(|| ClassifyError::UnsupportedIndustry(industry.to_string()))
    }
}

/// First document type, in declared order, with any keyword occurring in
/// `text`. Comparison is case-insensitive substring containment; later
/// document types are never consulted once one matches.
pub fn first_match<'r>(rules: &'r IndustryRules, text: &str) -> Option<&'r str> {
    let haystack = text.to_lowercase();

    rules
        .iter()
        .find(|rule| {
            let hit = rule
                .keywords
                .iter()
                .filter(|keyword| !keyword.is_empty())
                .find(|keyword| haystack.contains(&keyword.to_lowercase()));
            tracing::debug!(
                document_type = %rule.document_type,
                keyword = hit.map(String::as_str),
                matched = hit.is_some(),
                "rule evaluated"
            );
            hit.is_some()
        })
        .map(|rule| rule.document_type.as_str())
}
