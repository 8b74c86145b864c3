//! Reading document text from files.
//!
//! Only inputs that already carry text are handled here: plain-text files
//! (typically OCR output) and PDFs with a text layer. Scanned images must
//! go through an OCR tool first.

#[cfg(feature = "pdf")]
mod pdf;

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::SourceError;
use crate::models::config::InputConfig;

/// Result type for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Kind of input file, decided by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Plain text.
    Text,
    /// PDF with a text layer.
    Pdf,
    /// Raster image; needs OCR.
    Image,
}

impl DocumentKind {
    /// Detect the kind of a file from its extension. Unknown extensions are
    /// read as text.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "pdf" => Self::Pdf,
            "png" | "jpg" | "jpeg" | "tif" | "tiff" | "bmp" | "gif" | "webp" => Self::Image,
            _ => Self::Text,
        }
    }
}

/// Read the text of a document file.
pub fn read_document(path: &Path, config: &InputConfig) -> Result<String> {
    let kind = DocumentKind::from_path(path);
    debug!("Reading {} as {:?}", path.display(), kind);

    let text = match kind {
        DocumentKind::Text => decode_text(std::fs::read(path)?)?,
        DocumentKind::Pdf if config.read_pdf => read_pdf(path)?,
        DocumentKind::Pdf => {
            return Err(SourceError::Unsupported(
                "PDF reading is disabled in the configuration".to_string(),
            ));
        }
        DocumentKind::Image => {
            return Err(SourceError::Unsupported(format!(
                "{} is an image; run OCR on it and pass the resulting text",
                path.display()
            )));
        }
    };

    ensure_within_limit(&text, config.max_text_bytes)?;
    Ok(text)
}

/// Read document text from any reader, such as stdin.
pub fn read_from<R: Read>(mut reader: R, config: &InputConfig) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let text = decode_text(bytes)?;
    ensure_within_limit(&text, config.max_text_bytes)?;
    Ok(text)
}

/// Reject text longer than `max_bytes` (0 means no limit).
pub fn ensure_within_limit(text: &str, max_bytes: usize) -> Result<()> {
    if max_bytes > 0 && text.len() > max_bytes {
        return Err(SourceError::TooLarge {
            len: text.len(),
            max: max_bytes,
        });
    }
    Ok(())
}

fn decode_text(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| SourceError::NotText)
}

#[cfg(feature = "pdf")]
fn read_pdf(path: &Path) -> Result<String> {
    pdf::extract_text(&std::fs::read(path)?)
}

#[cfg(not(feature = "pdf"))]
fn read_pdf(path: &Path) -> Result<String> {
    Err(SourceError::Unsupported(format!(
        "{}: built without PDF support",
        path.display()
    )))
}
