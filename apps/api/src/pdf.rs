//! PDF text extraction. Decoding runs on the blocking pool.

use std::sync::OnceLock;

use bytes::Bytes;
use regex::Regex;
use tracing::{debug, error};

use crate::errors::AppError;

const EXTRACTION_FAILED: &str =
    "Failed to extract text from PDF. Please ensure the file is a valid PDF with readable text.";

/// Extracts and cleans the text of a PDF. A PDF without a text layer yields
/// an empty string; callers decide whether that is an error.
pub async fn extract_text(data: Bytes) -> Result<String, AppError> {
    // pdf-extract may panic on malformed input; the join handle surfaces that as an error.
    let decoded = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&data).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| {
        error!("PDF decoder task failed: {e}");
        AppError::Extraction(EXTRACTION_FAILED.to_string())
    })?
    .map_err(|e| {
        error!("Error extracting text from PDF: {e}");
        AppError::Extraction(EXTRACTION_FAILED.to_string())
    })?;

    let cleaned = clean_text(&decoded);
    debug!("PDF text extracted: {} chars", cleaned.len());
    Ok(cleaned)
}

/// Collapses whitespace runs, drops "Page N of M" markers, trims.
pub fn clean_text(text: &str) -> String {
    static PAGE_MARKER: OnceLock<Regex> = OnceLock::new();
    let page_marker = PAGE_MARKER.get_or_init(|| {
        Regex::new(r"(?i)page \d+ of \d+").expect("page marker pattern is valid")
    });

    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    page_marker.replace_all(&collapsed, "").trim().to_string()
}
