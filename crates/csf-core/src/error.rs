//! Error types for the csf-core library.

use thiserror::Error;

/// Main error type for the csf library.
///
/// Per-file PDF failures are reported through [`PdfError`] instead.
#[derive(Error, Debug)]
pub enum CsfError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A field rule could not be compiled.
    #[error("invalid rule for {name}: {reason}")]
    InvalidRule { name: String, reason: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to obtaining text from a PDF file.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The file could not be read.
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the csf library.
pub type Result<T> = std::result::Result<T, CsfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CsfError::InvalidRule {
            name: "RFC".into(),
            reason: "pattern has no capture group".into(),
        };
        assert_eq!(err.to_string(), "invalid rule for RFC: pattern has no capture group");

        let err: CsfError = std::io::Error::from(std::io::ErrorKind::NotFound).into();
        assert!(matches!(err, CsfError::Io(_)));

        assert_eq!(PdfError::NoPages.to_string(), "PDF has no pages");
    }
}
