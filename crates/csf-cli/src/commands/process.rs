//! Process command - extract fields from a single constancia.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use csf_core::constancia::{BatchProcessor, FileOutcome, SkipReason};
use csf_core::{PdfTextSource, Record};

use super::config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: ProcessFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ProcessFormat {
    /// Aligned "field: value" lines
    Text,
    /// JSON object
    Json,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = config::load(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let processor = BatchProcessor::new(PdfTextSource::new(config.pdf.decrypt_with_empty_password));
    match processor.process_file(&args.input) {
        FileOutcome::Record(record) => {
            let output = match args.format {
                ProcessFormat::Text => format_record_text(&record),
                ProcessFormat::Json => serde_json::to_string_pretty(&record)?,
            };
            println!("{}", output);
            Ok(())
        }
        FileOutcome::Skipped(SkipReason::NotFiscal) => {
            println!(
                "{} {} is not a Constancia de Situación Fiscal",
                style("ℹ").yellow(),
                args.input.display()
            );
            Ok(())
        }
        FileOutcome::Skipped(reason) => {
            anyhow::bail!("{}: {}", args.input.display(), reason)
        }
    }
}

fn format_record_text(record: &Record) -> String {
    let header = record.header();
    let width = header.iter().map(|h| h.chars().count()).max().unwrap_or(0);

    header
        .iter()
        .zip(record.values())
        .map(|(name, value)| {
            let pad = width - name.chars().count();
            format!("{}:{} {}", name, " ".repeat(pad), value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record_text_aligned() {
        let record =
            csf_core::process_text("a.pdf", "CONSTANCIA DE SITUACIÓN FISCAL\nCURP:\nAAAA\n").unwrap();
        let text = format_record_text(&record);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), record.header().len());
        assert!(lines[0].starts_with("Archivo:"));
        assert!(lines[0].ends_with(" a.pdf"));
        assert!(lines[2].starts_with("CURP:"));
        assert!(lines[2].ends_with(" AAAA"));

        // Values start in the same column
        let column = |line: &str| line.chars().count() - line.split(' ').last().unwrap().chars().count();
        assert_eq!(column(lines[0]), column(lines[2]));
    }
}
