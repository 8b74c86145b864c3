//! Error types for the loandoc-core library.
//!
//! Extraction and validation never fail: a missing field is the `Not found`
//! sentinel, not an error. Errors only arise while turning a file into text.

use thiserror::Error;

/// Main error type for the loandoc library.
#[derive(Error, Debug)]
pub enum LoandocError {
    /// Failed to obtain document text.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while reading document text from a file or stream.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The input bytes are not valid UTF-8 text.
    #[error("input is not UTF-8 text")]
    NotText,

    /// The document has no extractable text (e.g. a scanned PDF).
    #[error("document has no text layer; run OCR on it first")]
    NoText,

    /// The file type cannot be read directly.
    #[error("unsupported input: {0}")]
    Unsupported(String),

    /// The text exceeds the configured size limit.
    #[error("input is {len} bytes, limit is {max}")]
    TooLarge { len: usize, max: usize },

    /// Failed to read the PDF text layer.
    #[error("failed to extract PDF text: {0}")]
    Pdf(String),

    /// I/O error while reading the input.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the loandoc library.
pub type Result<T> = std::result::Result<T, LoandocError>;
