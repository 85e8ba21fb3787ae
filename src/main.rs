// src/main.rs
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use litigation_extractor::config::{ExtractionConfig, RolePolicyKind};
use litigation_extractor::extractors::LitigationExtractor;
use litigation_extractor::pipeline::{process_document, ProcessedDocument};
use litigation_extractor::policy::{self, BankPolicy};
use litigation_extractor::storage::StorageManager;
use litigation_extractor::utils::{self, match_debug, AppError};

/// Command Line Interface for the litigation section extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Report files to process (.pdf, or .json page lists)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Bank whose policy parameters are evaluated
    #[arg(short, long, default_value = "RHB Bank")]
    bank: String,

    /// Output directory for extracted content
    #[arg(short, long, default_value = "./output")]
    output_dir: PathBuf,

    /// JSON file with markers, patterns and role policy (defaults otherwise)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Characters searched either side of each case number
    #[arg(long, env = "LITIGATION_WINDOW_RADIUS")]
    window_radius: Option<usize>,

    /// How case roles are decided
    #[arg(long, value_enum)]
    role_policy: Option<RolePolicyKind>,

    /// Company name to look for under the name-match role policy
    #[arg(long)]
    company_name: Option<String>,

    /// Also save each located section's raw text
    #[arg(long)]
    save_text: bool,

    /// Debug mode - verbose logs and annotated section HTML
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    /// File config (or defaults) with command-line overrides applied.
    fn extraction_config(&self) -> Result<ExtractionConfig, AppError> {
        let mut config = match &self.config {
            Some(path) => ExtractionConfig::load(path)?,
            None => ExtractionConfig::default(),
        };
        if let Some(radius) = self.window_radius {
            config.window_radius = radius;
        }
        if let Some(policy) = self.role_policy {
            config.role_policy = policy;
        }
        if let Some(name) = &self.company_name {
            config.company_name = Some(name.clone());
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Parse CLI Arguments and setup logging (reads RUST_LOG env var)
    let args = Args::parse();
    utils::logging::setup_logging(if args.debug { "debug" } else { "info" });
    tracing::info!("Starting processing for args: {:?}", args);

    // 2. Resolve configuration; bad patterns or policies fail here, before any work
    let config = args.extraction_config()?;
    let bank = policy::bank_policy(&args.bank)?;
    let extractor = Arc::new(LitigationExtractor::from_config(&config)?);
    tracing::info!(
        "Evaluating for {} with role policy {:?} and window radius {}",
        bank.bank,
        extractor.role_policy(),
        extractor.window_radius()
    );

    // 3. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;

    // 4. Each document is an independent unit of work
    let handles: Vec<_> = args
        .inputs
        .iter()
        .cloned()
        .map(|path| {
            let extractor = Arc::clone(&extractor);
            tokio::spawn(async move { process_document(&path, extractor).await })
        })
        .collect();

    // 5. Collect results in input order
    let mut success_count = 0;
    let mut failure_count = 0;

    for (path, handle) in args.inputs.iter().zip(handles) {
        let outcome = match handle.await {
            Ok(result) => result,
            Err(e) => Err(AppError::Processing(format!("task for {} panicked: {}", path.display(), e))),
        };

        match outcome {
            Ok(doc) => match write_outputs(&args, &storage, bank, &extractor, &doc) {
                Ok(()) => success_count += 1,
                Err(e) => {
                    tracing::error!("Failed to save outputs for {}: {}", path.display(), e);
                    failure_count += 1;
                }
            },
            Err(e) => {
                tracing::error!("Failed to process {}: {}", path.display(), e);
                failure_count += 1;
            }
        }
    }

    tracing::info!("Processing finished. Success: {}, Failures: {}", success_count, failure_count);

    if success_count == 0 && failure_count > 0 {
        return Err(AppError::Processing(format!(
            "Failed to process any of {} documents",
            failure_count
        )));
    }

    Ok(())
}

/// Evaluates the bank policy for one document and writes its output files.
fn write_outputs(
    args: &Args,
    storage: &StorageManager,
    bank: &BankPolicy,
    extractor: &LitigationExtractor,
    doc: &ProcessedDocument,
) -> Result<(), AppError> {
    let stem = doc.stem();
    let report = &doc.report;

    if report.section_not_found() {
        tracing::warn!("{}: litigation section not found", doc.path.display());
    } else if report.cases.is_empty() {
        tracing::info!("{}: litigation section found but no legal cases", doc.path.display());
    }

    let evaluation = policy::evaluate(bank, report);
    for row in &evaluation {
        tracing::info!(
            "[{}] {}. {} ({}): {:?} {}",
            bank.bank,
            row.index,
            row.parameter,
            row.kind,
            row.status,
            row.detail
        );
    }

    storage.save_cases(&stem, report)?;
    storage.save_report(&stem, bank.bank, report, &evaluation)?;

    if args.save_text {
        storage.save_section_text(&stem, report)?;
    }

    if args.debug {
        let debug_path = storage.document_dir(&stem)?.join("debug").join("sections_annotated.html");
        // Debug output is best effort
        if let Err(e) = match_debug::save_sections_debug_html(&report.sections, extractor.patterns(), &debug_path) {
            tracing::warn!("Failed to create debug HTML: {}", e);
        }
    }

    Ok(())
}
