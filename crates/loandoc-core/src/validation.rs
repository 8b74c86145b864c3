//! Structural validation of extracted fields.
//!
//! Each field is judged on its own value only; the document text is never
//! consulted again and no field is compared with another.

use lazy_static::lazy_static;
use regex::Regex;

use crate::extraction::rules::employment::STATUS_EMPLOYED;
use crate::models::fields::{ExtractedValue, FieldKind, FieldMap, VerdictMap, NOT_FOUND};

lazy_static! {
    static ref PHONE_SHAPE: Regex = Regex::new(r"^[\d\s+\-()]{7,15}$").unwrap();
    static ref EMAIL_SHAPE: Regex = Regex::new(r"^[^@]+@[^@]+\.[^@]+$").unwrap();
    static ref AMOUNT_SHAPE: Regex = Regex::new(r"^[$\d,\s.]+$").unwrap();
}

/// Validate every field kind.
///
/// The result has a verdict for each kind in [`FieldKind::ALL`]; a kind
/// missing from `fields` is invalid.
pub fn validate_fields(fields: &FieldMap) -> VerdictMap {
    FieldKind::ALL
        .into_iter()
        .map(|kind| {
            let valid = fields
                .get(&kind)
                .is_some_and(|value| validate_value(kind, value));
            (kind, valid)
        })
        .collect()
}

/// Validate one extracted value. The sentinel is never valid.
pub fn validate_value(kind: FieldKind, value: &ExtractedValue) -> bool {
    let Some(text) = value.value().filter(|text| *text != NOT_FOUND) else {
        return false;
    };

    match kind {
        FieldKind::ApplicantName => text.split_whitespace().count() >= 2,
        FieldKind::Address => text.split_whitespace().count() >= 3,
        FieldKind::PhoneNumber => PHONE_SHAPE.is_match(text),
        FieldKind::Email => EMAIL_SHAPE.is_match(text),
        FieldKind::Income | FieldKind::LoanAmount => AMOUNT_SHAPE.is_match(text),
        FieldKind::EmploymentStatus => text == STATUS_EMPLOYED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn check(kind: FieldKind, text: &str) -> bool {
        validate_value(kind, &ExtractedValue::found(text))
    }

    #[test]
    fn test_sentinel_is_always_invalid() {
        for kind in FieldKind::ALL {
            assert!(!validate_value(kind, &ExtractedValue::NotFound), "{kind}");
            assert!(!check(kind, NOT_FOUND), "{kind}");
        }
    }

    #[test]
    fn test_name_needs_two_tokens() {
        assert!(check(FieldKind::ApplicantName, "Jane Doe"));
        assert!(check(FieldKind::ApplicantName, "Mary Ann van Dyke"));
        assert!(!check(FieldKind::ApplicantName, "Cher"));
    }

    #[test]
    fn test_address_needs_three_tokens() {
        assert!(check(FieldKind::Address, "1 Main St"));
        assert!(!check(FieldKind::Address, "Springfield, IL"));
    }

    #[test]
    fn test_phone_shape() {
        assert!(check(FieldKind::PhoneNumber, "555-123-4567"));
        assert!(check(FieldKind::PhoneNumber, "+1 (555) 123-45"));
        assert!(!check(FieldKind::PhoneNumber, "555-12"));
        assert!(!check(FieldKind::PhoneNumber, "+1 (555) 123-4567"));
        assert!(!check(FieldKind::PhoneNumber, "555-CALL-NOW"));
    }

    #[test]
    fn test_email_shape() {
        assert!(check(FieldKind::Email, "jane@example.com"));
        assert!(!check(FieldKind::Email, "jane@localhost"));
        assert!(!check(FieldKind::Email, "jane@@example.com"));
        assert!(!check(FieldKind::Email, "jane.example.com"));
    }

    #[test]
    fn test_amount_composition() {
        assert!(check(FieldKind::Income, "$45,000"));
        assert!(check(FieldKind::Income, "45 000.00"));
        assert!(!check(FieldKind::Income, "72,500 USD"));
        assert!(!check(FieldKind::Income, "§52,000"));
        assert!(check(FieldKind::LoanAmount, "10000"));
        assert!(!check(FieldKind::LoanAmount, "ten thousand"));
    }

    #[test]
    fn test_only_employed_is_valid() {
        assert!(check(FieldKind::EmploymentStatus, "Employed"));
        assert!(!check(FieldKind::EmploymentStatus, "Unemployed"));
        assert!(!check(FieldKind::EmploymentStatus, "employed"));
    }

    #[test]
    fn test_missing_keys_are_invalid() {
        let mut fields = FieldMap::new();
        fields.insert(FieldKind::Email, ExtractedValue::found("jane@example.com"));

        let verdicts = validate_fields(&fields);
        let keys: Vec<FieldKind> = verdicts.keys().copied().collect();
        assert_eq!(keys, FieldKind::ALL.to_vec());
        assert_eq!(verdicts.values().filter(|v| **v).count(), 1);
        assert!(verdicts[&FieldKind::Email]);
    }

    #[test]
    fn test_validation_is_repeatable() {
        let fields = crate::extraction::extract_fields("Name: Jane Doe\nIncome: $1,000\n");
        assert_eq!(validate_fields(&fields), validate_fields(&fields));
    }
}
