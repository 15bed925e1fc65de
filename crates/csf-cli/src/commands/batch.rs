//! Batch command - extract every constancia in a folder into one table.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use csf_core::constancia::batch::has_pdf_extension;
use csf_core::constancia::{list_candidates, BatchProcessor, BatchReport};
use csf_core::PdfTextSource;

use super::config;
use crate::output::{self, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Folder containing PDF files, or a glob pattern
    #[arg(required = true)]
    input: String,

    /// Output file (default: from config, in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Exit with an error if any file could not be read
    #[arg(long)]
    strict: bool,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = config::load(config_path)?;

    let files = collect_files(&args.input)?;
    if files.is_empty() {
        anyhow::bail!("No PDF files found in {}", args.input);
    }

    println!(
        "{} Found {} PDF files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%)")
            .unwrap()
            .progress_chars("=>-"),
    );

    let processor = BatchProcessor::new(PdfTextSource::new(config.pdf.decrypt_with_empty_password));
    let report = processor.run(&files, |progress| pb.set_position(progress.processed as u64));
    pb.finish_with_message("Complete");

    let format = args.format.unwrap_or_else(|| config.export.format.into());
    let output_path = output::with_extension(
        args.output
            .unwrap_or_else(|| PathBuf::from(&config.export.default_file_name)),
        format,
    );
    output::write_records(&report.records, &output_path, format, &config.export)?;
    debug!("Wrote {} records to {}", report.records.len(), output_path.display());

    print_summary(&report, &output_path, start);

    let failed = report.failures().count();
    if failed > 0 && (args.strict || config.batch.strict) {
        anyhow::bail!("{} files could not be read", failed);
    }

    Ok(())
}

/// A folder lists its PDFs; anything else is treated as a glob pattern.
fn collect_files(input: &str) -> anyhow::Result<Vec<PathBuf>> {
    let path = Path::new(input);
    if path.is_dir() {
        return Ok(list_candidates(path)?);
    }

    Ok(readable_entries(glob(input)?)
        .into_iter()
        .filter(|p| p.is_file() && has_pdf_extension(p))
        .collect())
}

/// Paths from a glob walk, logging the entries that could not be read.
fn readable_entries<E: fmt::Display>(
    entries: impl IntoIterator<Item = Result<PathBuf, E>>,
) -> Vec<PathBuf> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping unreadable glob entry: {}", e);
                None
            }
        })
        .collect()
}

fn print_summary(report: &BatchReport, output_path: &Path, start: Instant) {
    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        report.total,
        start.elapsed()
    );
    println!(
        "   {} extracted, {} not fiscal, {} failed",
        style(report.records.len()).green(),
        style(report.not_fiscal().count()).yellow(),
        style(report.failures().count()).red()
    );
    println!(
        "{} Results saved to {}",
        style("✓").green(),
        output_path.display()
    );

    if report.has_failures() {
        println!();
        println!("{}", style("Failed files:").red());
        for skipped in report.failures() {
            println!("  - {}: {}", skipped.file_name, skipped.reason);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_files_from_folder() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.pdf"), b"").unwrap();
        fs::write(dir.path().join("b.txt"), b"").unwrap();

        let files = collect_files(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_collect_files_from_glob() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("2024_a.pdf"), b"").unwrap();
        fs::write(dir.path().join("2023_b.pdf"), b"").unwrap();
        fs::write(dir.path().join("2024_c.txt"), b"").unwrap();

        let pattern = format!("{}/2024_*", dir.path().display());
        let files = collect_files(&pattern).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("2024_a.pdf"));
    }

    #[test]
    fn test_readable_entries_drops_errors() {
        let entries = vec![
            Ok(PathBuf::from("a.pdf")),
            Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied)),
            Ok(PathBuf::from("b.pdf")),
        ];
        assert_eq!(
            readable_entries(entries),
            vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")]
        );
    }
}
