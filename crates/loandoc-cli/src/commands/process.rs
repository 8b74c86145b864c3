//! Process command - extract and validate fields of a single document.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use loandoc_core::models::config::ReportFormat;
use loandoc_core::source::{read_document, read_from};
use loandoc_core::{ApplicationParser, FieldKind, RuleBasedParser};

use super::config::load_config;
use super::report::{format_report, OutputFormat, Report};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (text or PDF), or '-' to read text from stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Correct a field after extraction, e.g. --correct "applicant_name=Jane Doe"
    #[arg(long = "correct", value_name = "FIELD=VALUE", value_parser = parse_correction)]
    corrections: Vec<(FieldKind, String)>,

    /// Print the document text before the report (to stderr)
    #[arg(long)]
    show_text: bool,

    /// Include the document text in JSON output
    #[arg(long)]
    include_text: bool,

    /// Exit with an error when any field fails validation
    #[arg(long)]
    fail_on_invalid: bool,
}

/// Parse a `FIELD=VALUE` correction.
pub fn parse_correction(s: &str) -> Result<(FieldKind, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", s))?;

    Ok((field.parse()?, value.to_string()))
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let (source, text) = if args.input == Path::new("-") {
        ("stdin".to_string(), read_from(std::io::stdin().lock(), &config.input)?)
    } else {
        if !args.input.exists() {
            anyhow::bail!("Input file not found: {}", args.input.display());
        }
        info!("Processing file: {}", args.input.display());

        let name = args
            .input
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string();
        (name, read_document(&args.input, &config.input)?)
    };

    if args.show_text {
        eprintln!("{}", style("Document text:").bold());
        eprintln!("{}", text);
        eprintln!();
    }

    let result = RuleBasedParser::new().parse(&text);

    let mut report = Report::new(source, &text, result).with_corrections(args.corrections);
    if args.include_text || config.output.include_raw_text {
        report = report.with_raw_text(&text);
    }

    let format: ReportFormat = args.format.map(Into::into).unwrap_or(config.output.format);
    let output = format_report(&report, format, config.output.pretty_json)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    let final_result = report.final_result();
    if args.fail_on_invalid && !final_result.all_valid() {
        let invalid: Vec<&str> = final_result
            .invalid_fields()
            .iter()
            .map(|kind| kind.as_str())
            .collect();
        anyhow::bail!("Fields failed validation: {}", invalid.join(", "));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_correction() {
        assert_eq!(
            parse_correction("applicant_name=Jane Q Public"),
            Ok((FieldKind::ApplicantName, "Jane Q Public".to_string()))
        );
        assert_eq!(
            parse_correction("income=$1,000=ish"),
            Ok((FieldKind::Income, "$1,000=ish".to_string()))
        );
        assert!(parse_correction("income").is_err());
        assert!(parse_correction("salary=100").is_err());
    }
}
