//! Common regex patterns for loan application extraction.
//!
//! Every labelled pattern accepts `:`, `,` or bare whitespace between label
//! and value, since OCR output often drops punctuation. Patterns run against
//! text whose line endings are already normalized to `\n`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Applicant name: a run of alphabetic words ending the line
    pub static ref NAME_LABEL: Regex = Regex::new(
        r"(?im)Name[:,\s]\s*([A-Za-z]+(?:[ \t]+[A-Za-z]+)*)[ \t]*$"
    ).unwrap();

    pub static ref APPLICANT_NAME_LABEL: Regex = Regex::new(
        r"(?ims)Applicant.*?Name[:,\s]\s*([A-Za-z]+(?:[ \t]+[A-Za-z]+)*)[ \t]*$"
    ).unwrap();

    pub static ref FULL_NAME_LABEL: Regex = Regex::new(
        r"(?im)Full\s+Name[:,\s]\s*([A-Za-z]+(?:[ \t]+[A-Za-z]+)*)[ \t]*$"
    ).unwrap();

    // Address: one or more whole lines of word characters and , . -
    pub static ref ADDRESS_LABEL: Regex = Regex::new(
        r"(?im)(?:Address|Residence)[:,\s]\s*([\w,.\-][\w ,.\-\t]*(?:\n[ \t]*[\w,.\-][\w ,.\-\t]*)*)$"
    ).unwrap();

    // Phone: 7-15 characters of digits, spaces, + - ( )
    pub static ref PHONE_LABEL: Regex = Regex::new(
        r"(?i)(?:Phone|Contact|Mobile)[:,\s]\s*([+\d \-()]{7,15})"
    ).unwrap();

    // Email: unlabelled, first address-shaped substring
    pub static ref EMAIL: Regex = Regex::new(
        r"([a-zA-Z0-9_.+\-]+@[a-zA-Z0-9\-]+\.[a-zA-Z0-9\-.]+)"
    ).unwrap();

    // Income: currency run plus an optional unit word. `§` is a common OCR
    // misreading of `$`.
    pub static ref INCOME_LABEL: Regex = Regex::new(
        r"(?i)(?:Income|Salary|Annual\s+Salary)[:\s]*([$§\d,.]+(?:[ \t]?\w+)?)"
    ).unwrap();

    // Loan amount: up to 10 filler characters between label and number
    pub static ref LOAN_AMOUNT_LABEL: Regex = Regex::new(
        r"(?i)(?:Loan\s*Request|Amount)[^\d$]{0,10}(\$?\d[\d,.]*)"
    ).unwrap();

    // Employment evidence
    pub static ref UNEMPLOYED: Regex = Regex::new(
        r"(?i)\bUnemployed\b"
    ).unwrap();

    pub static ref EMPLOYMENT_LABEL: Regex = Regex::new(
        r"(?i)(?:Job|Position|Company)[:\-]"
    ).unwrap();

    pub static ref JOB_TITLE: Regex = Regex::new(
        r"(?im)\bJob(?:\s+Title)?[ \t]*[:\-][ \t]*([A-Za-z][A-Za-z ,.'&/\-]*)$"
    ).unwrap();

    // Line endings
    pub static ref LINE_BREAK: Regex = Regex::new(r"\r\n?").unwrap();
}
