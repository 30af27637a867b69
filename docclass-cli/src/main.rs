use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Import from docclass-core
use docclass_core::{ClassifierConfig, DocumentClassifier, ExtractionRouter, OcrConfig, RuleSet};

// Import CLI utilities
use docclass::{open_upload, FileReport, OutputFormat};

/// Exit status for a request naming an industry with no rules
const EXIT_UNSUPPORTED_INDUSTRY: i32 = 2;

#[derive(Parser)]
#[command(name = "docclass")]
#[command(about = "Classify images and PDFs into document types using industry keyword rules")]
struct Args {
    /// Files to classify (PDF, PNG or JPEG)
    #[arg(required_unless_present = "list_industries")]
    files: Vec<PathBuf>,

    /// Industry whose rules apply (e.g. legal, accounting)
    #[arg(short, long, required_unless_present = "list_industries")]
    industry: Option<String>,

    /// Path to the rules file (YAML); overrides `rules_path` from the config
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// Path to custom config file (YAML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Print the industries defined in the rules file and exit
    #[arg(long)]
    list_industries: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "docclass=debug,docclass_core=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClassifierConfig::load_with_fallback(args.config.as_deref());
    let rules_path = args.rules.clone().unwrap_or_else(|| config.rules_path.clone());
    let rules = RuleSet::load_from_file(&rules_path)
        .with_context(|| format!("failed to load rules from {}", rules_path.display()))?;

    if args.list_industries {
        for industry in rules.industries() {
            println!("{industry}");
        }
        return Ok(());
    }

    let industry = args.industry.as_deref().context("--industry is required")?;
    let classifier = DocumentClassifier::new(Arc::new(rules), create_router(&config.ocr)?);
    if !classifier.rules().contains(industry) {
        eprintln!("❌ Unsupported industry: {industry}");
        eprintln!("   Available: {}", classifier.rules().industries().join(", "));
        std::process::exit(EXIT_UNSUPPORTED_INDUSTRY);
    }

    let mut failures = 0usize;
    for path in &args.files {
        let outcome = open_upload(path, config.max_upload_bytes)
            .and_then(|file| classifier.classify(file, industry).map_err(anyhow::Error::from));

        let report = match outcome {
            Ok(result) => FileReport::classified(path, &result),
            Err(e) => {
                tracing::debug!(file = %path.display(), error = %e, "classification failed");
                FileReport::failed(path, format!("{e:#}"))
            }
        };
        if report.is_failure() {
            failures += 1;
        }
        println!("{}", report.render(args.format)?);
    }

    if failures > 0 {
        eprintln!("❌ {failures} of {} file(s) could not be classified", args.files.len());
        std::process::exit(1);
    }

    Ok(())
}

/// Create the extraction router with tesseract OCR and lopdf PDF backends
#[cfg(all(feature = "tesseract-backend", feature = "lopdf-backend"))]
fn create_router(ocr: &OcrConfig) -> Result<ExtractionRouter> {
    use docclass_core::{OcrBackend, TesseractBackend};

    if !TesseractBackend::with_config(ocr).is_available() {
        tracing::warn!(
            binary = %ocr.binary,
            "tesseract is not available; image uploads will fail (install tesseract-ocr)"
        );
    }
    Ok(ExtractionRouter::from_config(ocr))
}

/// Fallback when no backend is compiled in
#[cfg(not(all(feature = "tesseract-backend", feature = "lopdf-backend")))]
fn create_router(_ocr: &OcrConfig) -> Result<ExtractionRouter> {
    Err(anyhow::anyhow!(
        "No extraction backends compiled in!\n\
         Compile with: --features tesseract-backend,lopdf-backend"
    ))
}
