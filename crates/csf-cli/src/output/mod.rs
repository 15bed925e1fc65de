//! Tabular export of extracted records.

pub mod delimited;
pub mod json;
pub mod xlsx;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use csf_core::models::config::ExportConfig;
use csf_core::{ExportFormat, FieldCatalog, Record, FILE_NAME_KEY};

/// Export format selectable on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Excel workbook
    Xlsx,
    /// Comma separated values
    Csv,
    /// JSON array of records
    Json,
}

impl From<ExportFormat> for OutputFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Xlsx => OutputFormat::Xlsx,
            ExportFormat::Csv => OutputFormat::Csv,
            ExportFormat::Json => OutputFormat::Json,
        }
    }
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Column names shared by every record: file name, then the catalog fields.
pub fn header() -> Vec<&'static str> {
    std::iter::once(FILE_NAME_KEY)
        .chain(FieldCatalog::builtin().names())
        .collect()
}

/// Append the format's extension unless the path already ends with it.
pub fn with_extension(path: PathBuf, format: OutputFormat) -> PathBuf {
    let ext = format.extension();
    let has_ext = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext));

    if has_ext {
        path
    } else {
        let mut name = path.into_os_string();
        name.push(".");
        name.push(ext);
        PathBuf::from(name)
    }
}

/// Write all records to `path` in the given format.
pub fn write_records(
    records: &[Record],
    path: &Path,
    format: OutputFormat,
    config: &ExportConfig,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Xlsx => xlsx::write(records, path, &config.sheet_name),
        OutputFormat::Csv => delimited::write(records, BufWriter::new(File::create(path)?)),
        OutputFormat::Json => json::write(records, BufWriter::new(File::create(path)?)),
    }
}
