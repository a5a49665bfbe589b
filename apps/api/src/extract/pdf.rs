//! PDF text-layer extraction.

use crate::errors::AppError;

/// Extracts the text layer of every page in document order.
///
/// Pages without an extractable text layer contribute nothing, so a scanned
/// image-only PDF yields `Ok` with an empty (or whitespace-only) string
/// rather than an error. Bytes that do not parse as a PDF at all are a
/// `DocumentFormat` error.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::DocumentFormat(format!("could not read PDF: {e}")))
}
