//! Thin CLI over the complaint classifier.
//!
//! Takes one free-text complaint, prints the Stage-1 standardization and the
//! Stage-2 taxonomy category (suggested and effective, with an optional
//! clinician override code). Exits non-zero on empty input or when the
//! reference data fails to load.

use anyhow::{bail, Context};
use clap::Parser;
use consult_pipeline::ConsultationPipeline;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "consult",
    about = "Classify a free-text complaint into a standardized descriptor and taxonomy category"
)]
struct Cli {
    /// Free-text complaint, e.g. "I've had a fever and cough for three days."
    complaint: String,

    /// Clinician override for the effective taxonomy category code
    #[arg(long, value_name = "CODE")]
    r#override: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if cli.complaint.trim().is_empty() {
        bail!("complaint text is empty");
    }

    let pipeline =
        ConsultationPipeline::with_defaults().context("failed to load reference data")?;
    let report = pipeline
        .classify_complaint(&cli.complaint, cli.r#override.as_deref())
        .await
        .context("classification failed")?;

    println!("=== Stage-1: Standardization ===");
    println!("Code: {}", report.complaint.code);
    println!("Text: {}", report.complaint.text);
    println!();
    println!("=== Stage-2: Taxonomy ===");
    println!(
        "Suggested: {} - {}",
        report.result.suggested, report.suggested_name
    );
    if report.result.is_overridden() {
        println!(
            "Effective (overridden): {} - {}",
            report.result.effective, report.effective_name
        );
    } else {
        println!(
            "Effective: {} - {}",
            report.result.effective, report.effective_name
        );
    }
    Ok(())
}
