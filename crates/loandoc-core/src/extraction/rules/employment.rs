//! Employment status inference.

use regex::Regex;

use super::patterns::{EMPLOYMENT_LABEL, JOB_TITLE, UNEMPLOYED};
use super::FieldExtractor;
use crate::extraction::normalize_line_endings;
use crate::models::fields::{ExtractedValue, FieldKind};

/// Status reported when the text shows employment.
pub const STATUS_EMPLOYED: &str = "Employed";

/// Status reported when the text says unemployed or shows nothing.
pub const STATUS_UNEMPLOYED: &str = "Unemployed";

/// Employment status extractor.
///
/// Not label driven: an explicit `Unemployed` anywhere wins, then a
/// `Job:`/`Position:`/`Company:` entry means employed. Without either the
/// status defaults to unemployed, so "no information" and "unemployed" read
/// the same.
pub struct EmploymentExtractor {
    evidence: Vec<(&'static Regex, &'static str)>,
}

impl EmploymentExtractor {
    pub fn new() -> Self {
        Self {
            evidence: vec![
                (&*UNEMPLOYED, STATUS_UNEMPLOYED),
                (&*EMPLOYMENT_LABEL, STATUS_EMPLOYED),
            ],
        }
    }
}

impl Default for EmploymentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for EmploymentExtractor {
    fn kind(&self) -> FieldKind {
        FieldKind::EmploymentStatus
    }

    fn extract(&self, text: &str) -> ExtractedValue {
        let status = self
            .evidence
            .iter()
            .find(|(pattern, _)| pattern.is_match(text))
            .map_or(STATUS_UNEMPLOYED, |(_, status)| *status);

        ExtractedValue::Found(status.to_string())
    }
}

/// Infer the employment status from text.
pub fn extract_employment_status(text: &str) -> ExtractedValue {
    EmploymentExtractor::new().extract(text)
}

/// Job title from a `Job:` or `Job Title:` entry, if present.
///
/// Informational only; it has no influence on the employment status.
pub fn extract_job_title(text: &str) -> Option<String> {
    let text = normalize_line_endings(text);
    JOB_TITLE
        .captures(&text)
        .map(|caps| caps[1].trim().trim_end_matches([',', '.']).to_string())
        .filter(|title| !title.is_empty())
}
