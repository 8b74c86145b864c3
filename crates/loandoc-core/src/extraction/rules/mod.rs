//! Rule-based field extractors for loan applications.

pub mod address;
pub mod amounts;
pub mod cascade;
pub mod email;
pub mod employment;
pub mod name;
pub mod patterns;
pub mod phone;

pub use address::{extract_address, AddressExtractor};
pub use amounts::{extract_income, extract_loan_amount, parse_amount, IncomeExtractor, LoanAmountExtractor};
pub use cascade::{Cascade, PostProcess, Rule};
pub use email::{extract_email, EmailExtractor};
pub use employment::{extract_employment_status, extract_job_title, EmploymentExtractor};
pub use name::{extract_name, NameExtractor};
pub use phone::{extract_phone, PhoneExtractor};

use crate::models::fields::{ExtractedValue, FieldKind};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The field this extractor produces.
    fn kind(&self) -> FieldKind;

    /// Extract the field from document text.
    ///
    /// Never fails: a field that cannot be located is [`ExtractedValue::NotFound`].
    fn extract(&self, text: &str) -> ExtractedValue;
}

/// Extractor responsible for a field kind.
pub fn extractor_for(kind: FieldKind) -> Box<dyn FieldExtractor> {
    match kind {
        FieldKind::ApplicantName => Box::new(NameExtractor::new()),
        FieldKind::Address => Box::new(AddressExtractor::new()),
        FieldKind::PhoneNumber => Box::new(PhoneExtractor::new()),
        FieldKind::Email => Box::new(EmailExtractor::new()),
        FieldKind::Income => Box::new(IncomeExtractor::new()),
        FieldKind::LoanAmount => Box::new(LoanAmountExtractor::new()),
        FieldKind::EmploymentStatus => Box::new(EmploymentExtractor::new()),
    }
}
