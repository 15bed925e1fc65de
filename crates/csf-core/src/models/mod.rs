//! Data models for extraction results and configuration.

pub mod config;
pub mod record;

pub use config::{CsfConfig, ExportFormat};
pub use record::{FieldMap, Record, FILE_NAME_KEY, NOT_AVAILABLE};
