//! Phone number extraction.

use super::cascade::{Cascade, Rule};
use super::patterns::PHONE_LABEL;
use super::FieldExtractor;
use crate::models::fields::{ExtractedValue, FieldKind};

/// Phone number extractor (`Phone`, `Contact` or `Mobile` label).
pub struct PhoneExtractor {
    cascade: Cascade,
}

impl PhoneExtractor {
    pub fn new() -> Self {
        let cascade = Cascade::new(FieldKind::PhoneNumber).rule(Rule::new("phone", &PHONE_LABEL));

        Self { cascade }
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PhoneExtractor {
    fn kind(&self) -> FieldKind {
        self.cascade.kind()
    }

    fn extract(&self, text: &str) -> ExtractedValue {
        self.cascade.first_match(text)
    }
}

/// Extract the phone number from text.
pub fn extract_phone(text: &str) -> ExtractedValue {
    PhoneExtractor::new().extract(text)
}
