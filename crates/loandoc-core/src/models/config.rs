//! Configuration structures for the loandoc tools.
//!
//! The extraction engine itself takes no configuration; these settings
//! govern how documents are read and how results are written.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LoandocError, Result};

/// Main configuration for loandoc.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoandocConfig {
    /// Input reading configuration.
    pub input: InputConfig,

    /// Report output configuration.
    pub output: OutputConfig,

    /// Batch processing configuration.
    pub batch: BatchConfig,
}

/// How document text is obtained.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Maximum document text size in bytes (0 = unlimited).
    pub max_text_bytes: usize,

    /// Read the text layer of PDF files.
    pub read_pdf: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_text_bytes: 1024 * 1024,
            read_pdf: true,
        }
    }
}

/// Report format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Csv,
    Text,
}

impl ReportFormat {
    /// File extension used when writing reports to a directory.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

/// How results are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when none is given on the command line.
    pub format: ReportFormat,

    /// Indent JSON reports.
    pub pretty_json: bool,

    /// Embed the raw document text in JSON reports.
    pub include_raw_text: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Json,
            pretty_json: true,
            include_raw_text: false,
        }
    }
}

/// Batch processing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Number of documents processed concurrently.
    pub jobs: usize,

    /// Keep going when a document cannot be read.
    pub continue_on_error: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            jobs: 4,
            continue_on_error: false,
        }
    }
}

impl LoandocConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| LoandocError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| LoandocError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
