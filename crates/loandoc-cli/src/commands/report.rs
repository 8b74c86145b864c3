//! Report model and output formatting shared by `process` and `batch`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use loandoc_core::extraction::rules::amounts::parse_amount;
use loandoc_core::extraction::rules::employment::extract_job_title;
use loandoc_core::models::config::ReportFormat;
use loandoc_core::{apply_corrections, ExtractionResult, FieldKind};

/// Output format selected on the command line.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output (field,value,valid)
    Csv,
    /// Plain text table
    Text,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Csv => ReportFormat::Csv,
            OutputFormat::Text => ReportFormat::Text,
        }
    }
}

/// Everything reported for one document.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// File name, or `stdin`.
    pub source: String,

    /// When the document was processed.
    pub processed_at: DateTime<Utc>,

    /// Values and verdicts as extracted.
    #[serde(flatten)]
    pub extracted: ExtractionResult,

    /// Job title, when the document lists one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    /// Numeric income, read from the final income value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_value: Option<Decimal>,

    /// Numeric loan amount, read from the final loan amount value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_amount_value: Option<Decimal>,

    /// Values and verdicts after reviewer corrections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrected: Option<ExtractionResult>,

    /// The document text the fields were read from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

impl Report {
    pub fn new(source: impl Into<String>, text: &str, extracted: ExtractionResult) -> Self {
        let mut report = Self {
            source: source.into(),
            processed_at: Utc::now(),
            extracted,
            job_title: extract_job_title(text),
            income_value: None,
            loan_amount_value: None,
            corrected: None,
            raw_text: None,
        };
        report.parse_amounts();
        report
    }

    pub fn with_raw_text(mut self, text: &str) -> Self {
        self.raw_text = Some(text.to_string());
        self
    }

    /// Attach reviewer corrections; does nothing when there are none.
    pub fn with_corrections(mut self, corrections: Vec<(FieldKind, String)>) -> Self {
        if !corrections.is_empty() {
            self.corrected = Some(apply_corrections(&self.extracted.fields, corrections));
            self.parse_amounts();
        }
        self
    }

    fn parse_amounts(&mut self) {
        let result = self.final_result();
        let income = parse_amount(result.value(FieldKind::Income));
        let loan_amount = parse_amount(result.value(FieldKind::LoanAmount));

        self.income_value = income;
        self.loan_amount_value = loan_amount;
    }

    /// The result to act on: corrected if corrections were given.
    pub fn final_result(&self) -> &ExtractionResult {
        self.corrected.as_ref().unwrap_or(&self.extracted)
    }
}

/// Render a report in the requested format.
pub fn format_report(report: &Report, format: ReportFormat, pretty: bool) -> anyhow::Result<String> {
    match format {
        ReportFormat::Json if pretty => Ok(serde_json::to_string_pretty(report)?),
        ReportFormat::Json => Ok(serde_json::to_string(report)?),
        ReportFormat::Csv => format_csv(report),
        ReportFormat::Text => Ok(format_text(report)),
    }
}

fn format_csv(report: &Report) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    let result = report.final_result();

    wtr.write_record(["field", "value", "valid"])?;

    for (kind, value) in &result.fields {
        wtr.write_record([
            kind.as_str(),
            value.as_str(),
            if result.is_valid(*kind) { "true" } else { "false" },
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(report: &Report) -> String {
    let result = report.final_result();
    let mut output = String::new();

    output.push_str(&format!("Document: {}\n\n", report.source));
    output.push_str(&format!("{:<20} {:<50} {}\n", "Field", "Value", "Valid"));

    for (kind, value) in &result.fields {
        let corrected = report.corrected.is_some()
            && report.extracted.value(*kind) != value;

        output.push_str(&format!(
            "{:<20} {:<50} {}{}\n",
            kind.label(),
            value.as_str(),
            if result.is_valid(*kind) { "yes" } else { "no" },
            if corrected { " (corrected)" } else { "" },
        ));
    }

    if let Some(title) = &report.job_title {
        output.push_str(&format!("\nJob title: {}\n", title));
    }
    if let Some(income) = report.income_value {
        output.push_str(&format!("Income amount: {}\n", income));
    }
    if let Some(loan_amount) = report.loan_amount_value {
        output.push_str(&format!("Loan amount: {}\n", loan_amount));
    }

    output.push_str(&format!(
        "\n{}/{} fields valid\n",
        result.valid_count(),
        result.fields.len()
    ));

    output
}
