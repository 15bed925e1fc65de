//! PDF text module.

mod extractor;

pub use extractor::{PdfExtractor, PdfTextSource};

use std::path::Path;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;
}

/// Anything that can turn a file on disk into its document text.
///
/// The batch orchestrator only talks to this trait, so tests can feed
/// canned text without touching real PDFs.
pub trait TextSource {
    /// Return the full concatenated text of the file at `path`.
    fn extract_text(&self, path: &Path) -> Result<String>;
}
