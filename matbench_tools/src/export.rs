//! `export_results_md`: converts a CSV experiment log into a Markdown table.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use matbench_core::{config::ExportSettings, load_records, markdown::write_record_set, BenchError};

#[derive(Debug, Parser)]
#[command(
    name = "export_results_md",
    about = "Convert CSV experiment logs to Markdown tables.",
    version
)]
pub struct ExportArgs {
    /// Input CSV file path.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output Markdown file path (defaults to <input>.md).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl From<ExportArgs> for ExportSettings {
    fn from(args: ExportArgs) -> Self {
        Self {
            input: args.input,
            output: args.output,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub rows: usize,
    pub output: PathBuf,
}

/// Loads `settings.input` and writes it as a Markdown table.
///
/// A missing input or a log without data rows fails before any output file is created. A file
/// holding only a header row counts as empty.
pub fn run(settings: &ExportSettings) -> Result<ExportReport> {
    let records = load_records(&settings.input)?;
    if records.is_empty() {
        return Err(BenchError::EmptyInput.into());
    }

    let output = settings.output_path();
    write_record_set(&records, &output)?;
    println!("Wrote {} rows to {}", records.len(), output.display());
    tracing::info!(
        input = %settings.input.display(),
        output = %output.display(),
        rows = records.len(),
        "exported Markdown table"
    );

    Ok(ExportReport {
        rows: records.len(),
        output,
    })
}
