//! Text Extractor — turns an uploaded PDF into one plain-text string.

use std::panic;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("not a readable PDF: {0}")]
    Parse(String),

    #[error("PDF parser aborted on malformed input")]
    Aborted,
}

/// Extracts the text of every page in page order.
///
/// Pages with no extractable text are skipped without a placeholder and the
/// concatenation is trimmed of outer whitespace.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    // pdf-extract panics on some malformed inputs instead of returning Err.
    let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
        .map_err(|_| ExtractionError::Aborted)?
        .map_err(|e| ExtractionError::Parse(e.to_string()))?;

    debug!(pages = pages.len(), "Extracted PDF pages");
    Ok(join_pages(pages))
}

/// Concatenates page texts, dropping empty pages, and trims the result.
pub fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut text = String::new();
    for page in pages {
        let page = page.as_ref();
        if !page.is_empty() {
            text.push_str(page);
        }
    }
    text.trim().to_string()
}
