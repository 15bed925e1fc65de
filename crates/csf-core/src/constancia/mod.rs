//! Field extraction for SAT "Constancia de Situación Fiscal" documents.
//!
//! Pipeline per document: [`is_fiscal_document`] gate, [`normalize`],
//! then [`FieldExtractor::extract`]. [`BatchProcessor`] folds a list of
//! files into a [`BatchReport`].

pub mod batch;
pub mod catalog;
pub mod classify;
pub mod extractor;
pub mod normalize;

pub use batch::{
    list_candidates, process_text, BatchProcessor, BatchReport, FileOutcome, Progress,
    SkipReason, SkippedFile,
};
pub use catalog::{FieldCatalog, FieldRule};
pub use classify::{is_fiscal_document, FISCAL_MARKER};
pub use extractor::{extract_fields, FieldExtractor};
pub use normalize::normalize;
