//! Email address extraction.

use super::cascade::{Cascade, Rule};
use super::patterns::EMAIL;
use super::FieldExtractor;
use crate::models::fields::{ExtractedValue, FieldKind};

/// Email extractor. Needs no label: the first address-shaped substring wins.
pub struct EmailExtractor {
    cascade: Cascade,
}

impl EmailExtractor {
    pub fn new() -> Self {
        let cascade = Cascade::new(FieldKind::Email).rule(Rule::new("email", &EMAIL));

        Self { cascade }
    }
}

impl Default for EmailExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for EmailExtractor {
    fn kind(&self) -> FieldKind {
        self.cascade.kind()
    }

    fn extract(&self, text: &str) -> ExtractedValue {
        self.cascade.first_match(text)
    }
}

/// Extract the first email address from text.
pub fn extract_email(text: &str) -> ExtractedValue {
    EmailExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(s: &str) -> ExtractedValue {
        ExtractedValue::Found(s.to_string())
    }

    #[test]
    fn test_extract_email_unlabeled() {
        assert_eq!(
            extract_email("reach me at jane.doe+loans@mail.example.co.uk today"),
            found("jane.doe+loans@mail.example.co.uk")
        );
    }

    #[test]
    fn test_extract_first_email() {
        let text = "Email: first@example.com\nAlt: second@example.org";
        assert_eq!(extract_email(text), found("first@example.com"));
    }

    #[test]
    fn test_extract_email_requires_dot_in_domain() {
        assert_eq!(extract_email("user@localhost"), ExtractedValue::NotFound);
        assert_eq!(extract_email("no email here"), ExtractedValue::NotFound);
    }
}
