//! Document text extraction: uploaded bytes in, flat text out.
//!
//! Extraction is deliberately flat — no structured field parsing. A document
//! with no extractable text layer yields an empty string, which is a valid
//! outcome the rest of the pipeline accepts; only bytes that fail to parse as
//! the declared format are an error.

pub mod docx;
pub mod pdf;

use crate::errors::AppError;

/// Declared format of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Detects the declared format from the uploaded filename extension.
    pub fn from_filename(name: &str) -> Option<Self> {
        let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("pdf") => Some(DocumentFormat::Pdf),
            Some("docx") => Some(DocumentFormat::Docx),
            _ => None,
        }
    }
}

/// Extracts the flat text of a document in its declared format.
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Result<String, AppError> {
    match format {
        DocumentFormat::Pdf => pdf::extract_text(bytes),
        DocumentFormat::Docx => docx::extract_text(bytes),
    }
}
