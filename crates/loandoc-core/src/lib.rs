//! Core library for loan application field extraction.
//!
//! This crate provides:
//! - Rule-based extraction of the seven application fields from raw document text
//! - Structural validation of every extracted value
//! - A coordinator pairing extracted values with their verdicts
//! - Adapters turning plain-text files and PDF text layers into document text

pub mod error;
pub mod models;
pub mod extraction;
pub mod validation;
pub mod pipeline;
pub mod source;

pub use error::{LoandocError, Result, SourceError};
pub use models::fields::{ExtractedValue, ExtractionResult, FieldKind, FieldMap, VerdictMap, NOT_FOUND};
pub use models::config::LoandocConfig;
pub use extraction::{extract_fields, FieldExtractor};
pub use validation::{validate_fields, validate_value};
pub use pipeline::{apply_corrections, extract_and_validate, ApplicationParser, RuleBasedParser};
