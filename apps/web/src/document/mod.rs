//! PDF text extraction for uploaded resumes.

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

#[cfg(test)]
pub mod test_pdf;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("not a readable PDF: {0}")]
    Parse(#[from] pdf_extract::OutputError),

    #[error("PDF extraction failed: {0}")]
    ExtractorFailed(String),
}

/// Extracts the text layer of every page and joins the pages in order.
///
/// Image-only pages contribute nothing, so a scanned resume yields an empty
/// string rather than an error.
pub fn extract_text(pdf: &[u8]) -> Result<String, DocumentError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(pdf)?;
    debug!("Extracted text from {} page(s)", pages.len());
    Ok(concat_pages(pages))
}

/// Joins page texts in page order, no separator.
pub fn concat_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = String>,
{
    pages.into_iter().collect()
}

/// Runs `extract_text` on the blocking pool.
///
/// The PDF parser panics on some malformed input; the panic is caught at the
/// join handle and reported as an extraction failure.
pub async fn extract_text_blocking(pdf: Bytes) -> Result<String, DocumentError> {
    tokio::task::spawn_blocking(move || extract_text(&pdf))
        .await
        .unwrap_or_else(|e| {
            warn!("PDF extraction task aborted: {e}");
            Err(DocumentError::ExtractorFailed(e.to_string()))
        })
}
