//! Extraction followed by validation, with key-set reconciliation.

use std::time::Instant;

use tracing::{debug, info};

use crate::extraction::extract_fields;
use crate::models::fields::{ExtractedValue, ExtractionResult, FieldKind, FieldMap, VerdictMap};
use crate::validation::validate_fields;

/// Trait for loan application parsing.
pub trait ApplicationParser {
    /// Parse an application from raw document text.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Stateless parser built on the rule cascades.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedParser;

impl RuleBasedParser {
    pub fn new() -> Self {
        Self
    }
}

impl ApplicationParser for RuleBasedParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        extract_and_validate(text)
    }
}

/// Extract all fields from `text` and validate them.
///
/// Every key of the returned field map has a verdict. Processing never
/// fails: empty or unstructured text gives `Not found` values and `false`
/// verdicts.
pub fn extract_and_validate(text: &str) -> ExtractionResult {
    let start = Instant::now();
    debug!("Extracting fields from {} bytes of text", text.len());

    let fields = extract_fields(text);
    let verdicts = reconcile(&fields, validate_fields(&fields));
    let result = ExtractionResult { fields, verdicts };

    info!(
        "Extracted application: {}/{} fields valid in {:?}",
        result.valid_count(),
        result.fields.len(),
        start.elapsed()
    );

    result
}

/// Apply reviewer corrections on top of extracted values and re-validate.
///
/// Corrections only affect this result; they are never fed back into the
/// extraction rules.
pub fn apply_corrections<I>(fields: &FieldMap, corrections: I) -> ExtractionResult
where
    I: IntoIterator<Item = (FieldKind, String)>,
{
    let mut fields = fields.clone();
    for (kind, value) in corrections {
        debug!("Correcting {} to '{}'", kind, value);
        fields.insert(kind, ExtractedValue::found(value));
    }

    let verdicts = reconcile(&fields, validate_fields(&fields));
    ExtractionResult { fields, verdicts }
}

/// Restrict `verdicts` to exactly the keys of `fields`, marking any field
/// without a verdict as invalid.
fn reconcile(fields: &FieldMap, verdicts: VerdictMap) -> VerdictMap {
    fields
        .keys()
        .map(|kind| (*kind, verdicts.get(kind).copied().unwrap_or(false)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fields::NOT_FOUND;
    use pretty_assertions::assert_eq;

    fn assert_parity(result: &ExtractionResult) {
        let field_keys: Vec<_> = result.fields.keys().collect();
        let verdict_keys: Vec<_> = result.verdicts.keys().collect();
        assert_eq!(field_keys, verdict_keys);
    }

    #[test]
    fn test_contact_details_scenario() {
        let result = extract_and_validate(
            "Name: Jane Doe\nPhone: 555-123-4567\nEmail: jane@example.com\n",
        );
        assert_parity(&result);

        assert_eq!(result.value(FieldKind::ApplicantName).as_str(), "Jane Doe");
        assert!(result.is_valid(FieldKind::ApplicantName));
        assert_eq!(result.value(FieldKind::PhoneNumber).as_str(), "555-123-4567");
        assert!(result.is_valid(FieldKind::PhoneNumber));
        assert_eq!(result.value(FieldKind::Email).as_str(), "jane@example.com");
        assert!(result.is_valid(FieldKind::Email));

        for kind in [FieldKind::Address, FieldKind::Income, FieldKind::LoanAmount] {
            assert_eq!(result.value(kind).as_str(), NOT_FOUND);
            assert!(!result.is_valid(kind));
        }
        assert_eq!(result.value(FieldKind::EmploymentStatus).as_str(), "Unemployed");
        assert!(!result.is_valid(FieldKind::EmploymentStatus));
    }

    #[test]
    fn test_income_scenario() {
        let result = extract_and_validate("Employment details\nIncome: $45,000\n");
        assert_eq!(result.value(FieldKind::Income).as_str(), "$45,000");
        assert!(result.is_valid(FieldKind::Income));
    }

    #[test]
    fn test_loan_amount_scenario() {
        let result = extract_and_validate("Loan Request: Amount: $10,000");
        assert_eq!(result.value(FieldKind::LoanAmount).as_str(), "10000");
        assert!(result.is_valid(FieldKind::LoanAmount));
    }

    #[test]
    fn test_employment_scenarios() {
        let result = extract_and_validate("Job: Engineer\nStatus: Unemployed\n");
        assert_eq!(result.value(FieldKind::EmploymentStatus).as_str(), "Unemployed");
        assert!(!result.is_valid(FieldKind::EmploymentStatus));

        let result = extract_and_validate("Job: Engineer\n");
        assert_eq!(result.value(FieldKind::EmploymentStatus).as_str(), "Employed");
        assert!(result.is_valid(FieldKind::EmploymentStatus));
    }

    #[test]
    fn test_empty_input() {
        let result = extract_and_validate("");
        assert_parity(&result);
        assert_eq!(result.fields.len(), 7);
        assert_eq!(result.valid_count(), 0);

        for kind in FieldKind::ALL {
            assert!(!result.is_valid(kind));
            if kind != FieldKind::EmploymentStatus {
                assert_eq!(result.value(kind), &ExtractedValue::NotFound);
            }
        }
    }

    #[test]
    fn test_sentinel_implies_invalid() {
        let texts = [
            "",
            "Name: Jane Doe\n",
            "Address: 1 Main St, Boston\nIncome: n/a\n",
            "random OCR noise ~~ |||",
        ];
        for text in texts {
            let result = extract_and_validate(text);
            for (kind, value) in &result.fields {
                if !value.is_found() {
                    assert!(!result.is_valid(*kind), "{kind} in {text:?}");
                }
            }
        }
    }

    #[test]
    fn test_reconcile_fills_missing_and_drops_extra() {
        let mut fields = FieldMap::new();
        fields.insert(FieldKind::ApplicantName, ExtractedValue::found("Jane Doe"));
        fields.insert(FieldKind::Email, ExtractedValue::found("jane@example.com"));

        let mut verdicts = VerdictMap::new();
        verdicts.insert(FieldKind::ApplicantName, true);
        verdicts.insert(FieldKind::Income, true);

        let reconciled = reconcile(&fields, verdicts);
        let expected: VerdictMap = [(FieldKind::ApplicantName, true), (FieldKind::Email, false)]
            .into_iter()
            .collect();
        assert_eq!(reconciled, expected);
    }

    #[test]
    fn test_apply_corrections() {
        let extracted = extract_and_validate("Name: Cher\nPhone: 555-123-4567\n");
        assert!(!extracted.is_valid(FieldKind::ApplicantName));

        let corrected = apply_corrections(
            &extracted.fields,
            [
                (FieldKind::ApplicantName, "Cherilyn Sarkisian".to_string()),
                (FieldKind::Income, "  ".to_string()),
            ],
        );
        assert_parity(&corrected);
        assert_eq!(corrected.value(FieldKind::ApplicantName).as_str(), "Cherilyn Sarkisian");
        assert!(corrected.is_valid(FieldKind::ApplicantName));
        assert_eq!(corrected.value(FieldKind::Income), &ExtractedValue::NotFound);
        assert_eq!(corrected.value(FieldKind::PhoneNumber).as_str(), "555-123-4567");

        // The extraction itself is unaffected.
        assert_eq!(
            extract_and_validate("Name: Cher\n").value(FieldKind::ApplicantName).as_str(),
            "Cher"
        );
    }

    #[test]
    fn test_parser_trait() {
        let parser = RuleBasedParser::new();
        let text = "Name: Jane Doe\n";
        assert_eq!(parser.parse(text), extract_and_validate(text));
    }
}
