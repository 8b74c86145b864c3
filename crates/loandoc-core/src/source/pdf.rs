//! PDF text-layer extraction.

use tracing::{debug, warn};

use super::Result;
use crate::error::SourceError;

/// Extract the embedded text of a PDF.
///
/// A PDF without a text layer (a scan) yields [`SourceError::NoText`].
pub fn extract_text(data: &[u8]) -> Result<String> {
    let text = pdf_extract::extract_text_from_mem(data)
        .map_err(|e| SourceError::Pdf(e.to_string()))?;

    if text.trim().is_empty() {
        warn!("PDF has no text layer");
        return Err(SourceError::NoText);
    }

    debug!("Extracted {} characters from PDF text layer", text.len());
    Ok(text)
}

