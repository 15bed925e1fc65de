//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CsfError, Result};

/// Main configuration for the csf pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CsfConfig {
    /// Batch processing configuration.
    pub batch: BatchConfig,

    /// PDF text extraction configuration.
    pub pdf: PdfConfig,

    /// Export configuration.
    pub export: ExportConfig,
}

/// Batch processing configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Exit with an error after the export when any file failed text extraction.
    pub strict: bool,
}

/// PDF text extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Retry encrypted PDFs with the empty user password.
    pub decrypt_with_empty_password: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            decrypt_with_empty_password: true,
        }
    }
}

/// Tabular export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Excel workbook.
    #[default]
    Xlsx,
    /// Comma separated values.
    Csv,
    /// JSON array of records.
    Json,
}

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Default export format.
    pub format: ExportFormat,

    /// Worksheet name for xlsx exports.
    pub sheet_name: String,

    /// File name (without extension) used when no output path is given.
    pub default_file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Xlsx,
            sheet_name: "Constancias".to_string(),
            default_file_name: "constancias".to_string(),
        }
    }
}

impl CsfConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| CsfError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| CsfError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
