//! Batch processing of constancia files into records.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::classify::is_fiscal_document;
use super::extractor::FieldExtractor;
use super::normalize::normalize;
use crate::error::Result;
use crate::models::record::Record;
use crate::pdf::TextSource;

/// Why a file produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Text was read but the fiscal marker is absent.
    NotFiscal,
    /// The text source failed (corrupt, encrypted, unreadable, ...).
    TextExtraction(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotFiscal => write!(f, "not a fiscal document"),
            SkipReason::TextExtraction(msg) => write!(f, "text extraction failed: {}", msg),
        }
    }
}

/// A file that did not contribute a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub file_name: String,
    pub reason: SkipReason,
}

/// Outcome of processing a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Record(Record),
    Skipped(SkipReason),
}

/// Files processed so far out of the batch total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub processed: usize,
    pub total: usize,
}

impl Progress {
    /// Completed share in `0.0..=1.0`. An empty batch counts as complete.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.processed as f64 / self.total as f64
        }
    }

    /// Whole percentage, rounded down.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            100
        } else {
            (self.processed * 100 / self.total) as u8
        }
    }
}

/// Records and skips of a finished batch, in input order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedFile>,
    pub total: usize,
}

impl BatchReport {
    /// Files whose text could not be obtained.
    pub fn failures(&self) -> impl Iterator<Item = &SkippedFile> {
        self.skipped
            .iter()
            .filter(|s| matches!(s.reason, SkipReason::TextExtraction(_)))
    }

    /// Files that were read but are not constancias.
    pub fn not_fiscal(&self) -> impl Iterator<Item = &SkippedFile> {
        self.skipped
            .iter()
            .filter(|s| s.reason == SkipReason::NotFiscal)
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// Classify, normalize and extract one document's text.
///
/// Returns `None` when the text is not a fiscal document.
pub fn process_text(file_name: &str, raw: &str) -> Option<Record> {
    process_text_with(&FieldExtractor::new(), file_name, raw)
}

fn process_text_with(
    extractor: &FieldExtractor<'_>,
    file_name: &str,
    raw: &str,
) -> Option<Record> {
    if !is_fiscal_document(raw) {
        return None;
    }
    let fields = extractor.extract(&normalize(raw));
    Some(Record::new(file_name, fields))
}

/// PDF files directly inside `folder`, in directory listing order.
pub fn list_candidates(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();
    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        if path.is_file() && has_pdf_extension(&path) {
            candidates.push(path);
        }
    }
    debug!("Found {} PDF files in {}", candidates.len(), folder.display());
    Ok(candidates)
}

/// Case-insensitive `.pdf` check.
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Runs the pipeline over a list of files using a [`TextSource`].
pub struct BatchProcessor<'a, S> {
    source: S,
    extractor: FieldExtractor<'a>,
}

impl<S: TextSource> BatchProcessor<'static, S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            extractor: FieldExtractor::new(),
        }
    }
}

impl<'a, S: TextSource> BatchProcessor<'a, S> {
    /// Use a different extractor (e.g. a custom catalog).
    pub fn with_extractor<'b>(self, extractor: FieldExtractor<'b>) -> BatchProcessor<'b, S> {
        BatchProcessor {
            source: self.source,
            extractor,
        }
    }

    /// Process one file.
    pub fn process_file(&self, path: &Path) -> FileOutcome {
        let file_name = display_name(path);
        let raw = match self.source.extract_text(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return FileOutcome::Skipped(SkipReason::TextExtraction(e.to_string()));
            }
        };

        match process_text_with(&self.extractor, &file_name, &raw) {
            Some(record) => FileOutcome::Record(record),
            None => {
                debug!("Skipping {}: not a fiscal document", file_name);
                FileOutcome::Skipped(SkipReason::NotFiscal)
            }
        }
    }

    /// Process every path in order, reporting progress after each file.
    ///
    /// Never stops early: failures are collected in [`BatchReport::skipped`].
    pub fn run<P, F>(&self, paths: &[P], mut on_progress: F) -> BatchReport
    where
        P: AsRef<Path>,
        F: FnMut(Progress),
    {
        let total = paths.len();
        let mut report = BatchReport {
            total,
            ..Default::default()
        };

        for (i, path) in paths.iter().enumerate() {
            let path = path.as_ref();
            match self.process_file(path) {
                FileOutcome::Record(record) => report.records.push(record),
                FileOutcome::Skipped(reason) => report.skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    file_name: display_name(path),
                    reason,
                }),
            }
            on_progress(Progress {
                processed: i + 1,
                total,
            });
        }

        info!(
            "Batch complete: {} records, {} not fiscal, {} failed",
            report.records.len(),
            report.not_fiscal().count(),
            report.failures().count()
        );
        report
    }
}
