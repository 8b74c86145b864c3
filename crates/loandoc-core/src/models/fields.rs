//! Field kinds, extracted values and the paired extraction result.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Public sentinel written in place of a value when no pattern matched.
///
/// Consumers compare against this exact string, so it is part of the output
/// contract and must not change.
pub const NOT_FOUND: &str = "Not found";

static MISSING: ExtractedValue = ExtractedValue::NotFound;

/// The fixed set of semantic fields read from a loan application.
///
/// Declaration order is the canonical output order of every field map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    ApplicantName,
    Address,
    PhoneNumber,
    Email,
    Income,
    LoanAmount,
    EmploymentStatus,
}

impl FieldKind {
    /// All field kinds in output order.
    pub const ALL: [FieldKind; 7] = [
        FieldKind::ApplicantName,
        FieldKind::Address,
        FieldKind::PhoneNumber,
        FieldKind::Email,
        FieldKind::Income,
        FieldKind::LoanAmount,
        FieldKind::EmploymentStatus,
    ];

    /// Wire name of the field (`applicant_name`, `phone_number`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApplicantName => "applicant_name",
            Self::Address => "address",
            Self::PhoneNumber => "phone_number",
            Self::Email => "email",
            Self::Income => "income",
            Self::LoanAmount => "loan_amount",
            Self::EmploymentStatus => "employment_status",
        }
    }

    /// Human-readable title for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ApplicantName => "Applicant Name",
            Self::Address => "Address",
            Self::PhoneNumber => "Phone Number",
            Self::Email => "Email",
            Self::Income => "Income",
            Self::LoanAmount => "Loan Amount",
            Self::EmploymentStatus => "Employment Status",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| format!("unknown field: {}", s))
    }
}

/// Best-guess value of one field, or the explicit absence of one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedValue {
    /// A non-empty, trimmed value.
    Found(String),
    /// No pattern in the field's cascade matched.
    NotFound,
}

impl ExtractedValue {
    /// Build a value from raw captured text.
    ///
    /// Text that trims to nothing becomes [`ExtractedValue::NotFound`], so a
    /// `Found` value is never empty.
    pub fn found(text: impl AsRef<str>) -> Self {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            Self::NotFound
        } else {
            Self::Found(trimmed.to_string())
        }
    }

    /// The value as text; the sentinel for a missing value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Found(value) => value,
            Self::NotFound => NOT_FOUND,
        }
    }

    /// The value, if one was found.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl fmt::Display for ExtractedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ExtractedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ExtractedValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == NOT_FOUND {
            Ok(Self::NotFound)
        } else {
            Ok(Self::found(raw))
        }
    }
}

/// Extracted values keyed by field kind, in canonical order.
pub type FieldMap = BTreeMap<FieldKind, ExtractedValue>;

/// Validation verdicts keyed by field kind, in canonical order.
pub type VerdictMap = BTreeMap<FieldKind, bool>;

/// Extracted values paired with their verdicts over the same key set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Extracted value per field.
    pub fields: FieldMap,
    /// Structural validity per field.
    pub verdicts: VerdictMap,
}

impl ExtractionResult {
    /// Value extracted for a field; `NotFound` if the key is absent.
    pub fn value(&self, kind: FieldKind) -> &ExtractedValue {
        self.fields.get(&kind).unwrap_or(&MISSING)
    }

    /// Verdict for a field; `false` if the key is absent.
    pub fn is_valid(&self, kind: FieldKind) -> bool {
        self.verdicts.get(&kind).copied().unwrap_or(false)
    }

    /// Number of fields that passed validation.
    pub fn valid_count(&self) -> usize {
        self.verdicts.values().filter(|valid| **valid).count()
    }

    /// Fields that failed validation, in canonical order.
    pub fn invalid_fields(&self) -> Vec<FieldKind> {
        self.verdicts
            .iter()
            .filter(|(_, valid)| !**valid)
            .map(|(kind, _)| *kind)
            .collect()
    }

    pub fn all_valid(&self) -> bool {
        !self.verdicts.is_empty() && self.verdicts.values().all(|valid| *valid)
    }
}
