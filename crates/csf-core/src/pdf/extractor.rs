//! PDF text extraction using lopdf and pdf-extract.

use std::fs;
use std::panic;
use std::path::Path;

use lopdf::Document;
use tracing::{debug, warn};

use super::{PdfProcessor, Result, TextSource};
use crate::error::PdfError;

/// PDF text extractor using lopdf for loading and pdf-extract for layout text.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
    decrypt_with_empty_password: bool,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
            decrypt_with_empty_password: true,
        }
    }

    /// Set whether encrypted PDFs are retried with the empty user password.
    pub fn with_empty_password_decrypt(mut self, enabled: bool) -> Self {
        self.decrypt_with_empty_password = enabled;
        self
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // SAT issues some constancias "protected" with an empty user password
        if doc.is_encrypted() {
            if !self.decrypt_with_empty_password || doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        if self.document.is_none() {
            return Err(PdfError::Parse("no document loaded".to_string()));
        }
        // pdf-extract panics on some malformed fonts instead of returning an error
        let data = self.raw_data.as_slice();
        match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(data)) {
            Ok(result) => result.map_err(|e| PdfError::TextExtraction(e.to_string())),
            Err(_) => {
                warn!("pdf-extract panicked while decoding page content");
                Err(PdfError::TextExtraction(
                    "PDF content could not be decoded (malformed font or encoding)".to_string(),
                ))
            }
        }
    }
}

/// [`TextSource`] that reads PDF files from disk.
#[derive(Debug, Clone, Copy)]
pub struct PdfTextSource {
    decrypt_with_empty_password: bool,
}

impl PdfTextSource {
    pub fn new(decrypt_with_empty_password: bool) -> Self {
        Self {
            decrypt_with_empty_password,
        }
    }
}

impl Default for PdfTextSource {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TextSource for PdfTextSource {
    fn extract_text(&self, path: &Path) -> Result<String> {
        let data = fs::read(path)?;
        let mut extractor =
            PdfExtractor::new().with_empty_password_decrypt(self.decrypt_with_empty_password);
        extractor.load(&data)?;
        let text = extractor.extract_text()?;
        debug!(
            "Extracted {} chars from {} ({} pages)",
            text.len(),
            path.display(),
            extractor.page_count()
        );
        Ok(text)
    }
}
