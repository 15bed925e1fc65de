//! Core library for Constancia de Situación Fiscal processing.
//!
//! This crate provides:
//! - PDF text extraction behind the [`TextSource`] trait
//! - Text normalization and rule-based field extraction
//! - Batch processing into uniform records for tabular export

pub mod error;
pub mod models;
pub mod pdf;
pub mod constancia;

pub use error::{CsfError, PdfError, Result};
pub use models::config::{CsfConfig, ExportFormat};
pub use models::record::{FieldMap, Record, FILE_NAME_KEY, NOT_AVAILABLE};
pub use pdf::{PdfExtractor, PdfProcessor, PdfTextSource, TextSource};
pub use constancia::{
    extract_fields, is_fiscal_document, normalize, process_text, BatchProcessor, BatchReport,
    FieldCatalog, FieldExtractor, Progress, SkipReason,
};
