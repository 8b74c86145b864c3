//! Income and loan amount extraction.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::cascade::{Cascade, PostProcess, Rule};
use super::patterns::{INCOME_LABEL, LOAN_AMOUNT_LABEL};
use super::FieldExtractor;
use crate::models::fields::{ExtractedValue, FieldKind};

/// Income extractor (`Income`, `Salary` or `Annual Salary` label).
///
/// Keeps the currency glyph and one trailing unit word as written, so an
/// OCR-garbled symbol stays visible to validation.
pub struct IncomeExtractor {
    cascade: Cascade,
}

impl IncomeExtractor {
    pub fn new() -> Self {
        let cascade = Cascade::new(FieldKind::Income).rule(Rule::new("income", &INCOME_LABEL));

        Self { cascade }
    }
}

impl Default for IncomeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for IncomeExtractor {
    fn kind(&self) -> FieldKind {
        self.cascade.kind()
    }

    fn extract(&self, text: &str) -> ExtractedValue {
        self.cascade.first_match(text)
    }
}

/// Loan amount extractor (`Loan Request` or `Amount` label).
///
/// The value is returned without thousands separators or dollar sign.
pub struct LoanAmountExtractor {
    cascade: Cascade,
}

impl LoanAmountExtractor {
    pub fn new() -> Self {
        let cascade = Cascade::new(FieldKind::LoanAmount).rule(
            Rule::new("loan amount", &LOAN_AMOUNT_LABEL).with_post(PostProcess::StripAmount),
        );

        Self { cascade }
    }
}

impl Default for LoanAmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for LoanAmountExtractor {
    fn kind(&self) -> FieldKind {
        self.cascade.kind()
    }

    fn extract(&self, text: &str) -> ExtractedValue {
        self.cascade.first_match(text)
    }
}

/// Extract the stated income from text.
pub fn extract_income(text: &str) -> ExtractedValue {
    IncomeExtractor::new().extract(text)
}

/// Extract the requested loan amount from text.
pub fn extract_loan_amount(text: &str) -> ExtractedValue {
    LoanAmountExtractor::new().extract(text)
}

/// Parse an extracted income or loan amount into a number.
///
/// Commas are read as thousands separators and `.` as the decimal point.
/// Reading stops at the first character that cannot be part of an amount,
/// which drops a trailing unit word. Used for reporting only; validity is
/// decided by the validator on the text itself.
pub fn parse_amount(value: &ExtractedValue) -> Option<Decimal> {
    let text = value.value()?;

    let numeric: String = text
        .chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | ' ' | '$' | '§'))
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if !numeric.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    Decimal::from_str(numeric.trim_end_matches('.')).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(s: &str) -> ExtractedValue {
        ExtractedValue::Found(s.to_string())
    }

    #[test]
    fn test_extract_income() {
        assert_eq!(extract_income("Income: $45,000"), found("$45,000"));
        assert_eq!(extract_income("- Income: $84,312\n\n    Loan Request:"), found("$84,312"));
    }

    #[test]
    fn test_extract_income_with_unit_suffix() {
        assert_eq!(extract_income("Annual Salary: 72,500 USD\n"), found("72,500 USD"));
    }

    #[test]
    fn test_extract_income_ocr_currency_glyph() {
        assert_eq!(extract_income("INCOME §52,000\n"), found("§52,000"));
    }

    #[test]
    fn test_extract_income_skips_label_without_amount() {
        let text = "Income:\n- Salary: $50,000\n";
        assert_eq!(extract_income(text), found("$50,000"));
        assert_eq!(extract_income("Income: not disclosed"), ExtractedValue::NotFound);
    }

    #[test]
    fn test_extract_loan_amount_strips_formatting() {
        assert_eq!(extract_loan_amount("Loan Request: Amount: $10,000"), found("10000"));
        assert_eq!(extract_loan_amount("Amount: 5,000.00"), found("5000.00"));
        assert_eq!(extract_loan_amount("LOAN REQUEST 25000"), found("25000"));
    }

    #[test]
    fn test_extract_loan_amount_from_bullets() {
        let text = "Loan Request:\n    - Amount: $12,000\n    - Purpose: Home\n";
        assert_eq!(extract_loan_amount(text), found("12000"));
    }

    #[test]
    fn test_extract_loan_amount_filler_limit() {
        // More than ten filler characters between label and number.
        assert_eq!(
            extract_loan_amount("Amount requested by applicant: 5000"),
            ExtractedValue::NotFound
        );
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(&found("$45,000")), Some(Decimal::from(45000)));
        assert_eq!(parse_amount(&found("72,500 USD")), Some(Decimal::from(72500)));
        assert_eq!(
            parse_amount(&found("5000.00")),
            Some(Decimal::from_str("5000.00").unwrap())
        );
        assert_eq!(parse_amount(&found("§52,000")), Some(Decimal::from(52000)));
        assert_eq!(parse_amount(&found("USD")), None);
        assert_eq!(parse_amount(&found("1.2.3")), None);
        assert_eq!(parse_amount(&ExtractedValue::NotFound), None);
    }
}
