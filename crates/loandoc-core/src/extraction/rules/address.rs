//! Residential address extraction.

use super::cascade::{Cascade, PostProcess, Rule};
use super::patterns::ADDRESS_LABEL;
use super::FieldExtractor;
use crate::models::fields::{ExtractedValue, FieldKind};

/// Address extractor.
///
/// Captures the line after an `Address` or `Residence` label together with
/// any continuation lines made only of word characters, spaces, commas,
/// hyphens and periods. A line containing other punctuation (such as the
/// next `Label:`) ends the address.
pub struct AddressExtractor {
    cascade: Cascade,
}

impl AddressExtractor {
    pub fn new() -> Self {
        let cascade = Cascade::new(FieldKind::Address)
            .rule(Rule::new("address", &ADDRESS_LABEL).with_post(PostProcess::JoinLines));

        Self { cascade }
    }
}

impl Default for AddressExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AddressExtractor {
    fn kind(&self) -> FieldKind {
        self.cascade.kind()
    }

    fn extract(&self, text: &str) -> ExtractedValue {
        self.cascade.first_match(text)
    }
}

/// Extract the applicant address from text.
pub fn extract_address(text: &str) -> ExtractedValue {
    AddressExtractor::new().extract(text)
}
