//! Applicant name extraction.

use super::cascade::{Cascade, Rule};
use super::patterns::{APPLICANT_NAME_LABEL, FULL_NAME_LABEL, NAME_LABEL};
use super::FieldExtractor;
use crate::models::fields::{ExtractedValue, FieldKind};

/// Applicant name extractor.
///
/// Tries the general `Name` label first, then `Applicant ... Name`, then
/// `Full Name`.
pub struct NameExtractor {
    cascade: Cascade,
}

impl NameExtractor {
    pub fn new() -> Self {
        let cascade = Cascade::new(FieldKind::ApplicantName)
            .rule(Rule::new("name", &NAME_LABEL))
            .rule(Rule::new("applicant name", &APPLICANT_NAME_LABEL))
            .rule(Rule::new("full name", &FULL_NAME_LABEL));

        Self { cascade }
    }

    pub fn cascade(&self) -> &Cascade {
        &self.cascade
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NameExtractor {
    fn kind(&self) -> FieldKind {
        self.cascade.kind()
    }

    fn extract(&self, text: &str) -> ExtractedValue {
        self.cascade.first_match(text)
    }
}

/// Extract the applicant name from text.
pub fn extract_name(text: &str) -> ExtractedValue {
    NameExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(s: &str) -> ExtractedValue {
        ExtractedValue::Found(s.to_string())
    }

    #[test]
    fn test_extract_name_labeled() {
        assert_eq!(extract_name("Name: Jane Doe\nPhone: 555-123-4567\n"), found("Jane Doe"));
        assert_eq!(extract_name("NAME, JOHN SMITH\n"), found("JOHN SMITH"));
    }

    #[test]
    fn test_extract_name_without_punctuation() {
        assert_eq!(extract_name("Name   Maria Lopez  \nAddress: x"), found("Maria Lopez"));
    }

    #[test]
    fn test_extract_name_at_end_of_text() {
        assert_eq!(extract_name("Name: Jane Doe"), found("Jane Doe"));
    }

    #[test]
    fn test_extract_name_crlf_is_handled_by_caller_normalization() {
        let text = crate::extraction::normalize_line_endings("Name: Jane Doe\r\nPhone: 1\r\n");
        assert_eq!(extract_name(&text), found("Jane Doe"));
    }

    #[test]
    fn test_general_label_wins_over_specific_labels() {
        // "Full Name" contains the general label, which has the highest priority,
        // so the leftmost "Name" occurrence decides.
        let text = "Applicant Name: Jane Doe\nFull Name: Janet Doherty\n";
        assert_eq!(extract_name(text), found("Jane Doe"));
    }

    #[test]
    fn test_extract_name_skips_non_alphabetic_values() {
        assert_eq!(extract_name("Name: J4ne D0e\n"), ExtractedValue::NotFound);
        assert_eq!(extract_name("File name: report_01.pdf\n"), ExtractedValue::NotFound);
    }

    #[test]
    fn test_cascade_order() {
        let extractor = NameExtractor::new();
        let names: Vec<&str> = extractor.cascade().rules().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["name", "applicant name", "full name"]);
    }
}
