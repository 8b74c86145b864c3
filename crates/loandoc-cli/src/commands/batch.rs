//! Batch processing command for multiple documents.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use futures_util::stream::{self, StreamExt};
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use loandoc_core::models::config::{InputConfig, ReportFormat};
use loandoc_core::source::{read_document, DocumentKind};
use loandoc_core::{ApplicationParser, FieldKind, RuleBasedParser, SourceError};

use super::config::load_config;
use super::report::{format_report, OutputFormat, Report};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-document reports
    #[arg(short = 'd', long)]
    output_dir: Option<PathBuf>,

    /// Output format for each document (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers (default: from config)
    #[arg(short = 'j', long)]
    jobs: Option<usize>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    report: Option<Report>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let jobs = args.jobs.unwrap_or(config.batch.jobs).max(1);
    let continue_on_error = args.continue_on_error || config.batch.continue_on_error;
    let format: ReportFormat = args.format.map(Into::into).unwrap_or(config.output.format);

    // Expand glob pattern
    let mut files: Vec<PathBuf> = Vec::new();
    for path in glob(&args.input)?.filter_map(|r| r.ok()).filter(|p| p.is_file()) {
        if DocumentKind::from_path(&path) == DocumentKind::Image {
            warn!("Skipping image {}; run OCR on it first", path.display());
            continue;
        }
        files.push(path);
    }

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    // Documents are independent, so each runs on its own blocking task.
    // `buffered` keeps results in input order.
    let include_raw_text = config.output.include_raw_text;
    let results: Vec<ProcessResult> = stream::iter(files)
        .map(|path| {
            let input = config.input.clone();
            let pb = pb.clone();
            async move {
                let file_start = Instant::now();
                let task_path = path.clone();
                let joined = tokio::task::spawn_blocking(move || {
                    process_single_file(&task_path, &input, include_raw_text)
                })
                .await;

                let processing_time_ms = file_start.elapsed().as_millis() as u64;
                pb.inc(1);

                match joined {
                    Ok(Ok(report)) => ProcessResult {
                        path,
                        report: Some(report),
                        error: None,
                        processing_time_ms,
                    },
                    Ok(Err(e)) => ProcessResult {
                        path,
                        report: None,
                        error: Some(e.to_string()),
                        processing_time_ms,
                    },
                    Err(e) => ProcessResult {
                        path,
                        report: None,
                        error: Some(format!("worker failed: {}", e)),
                        processing_time_ms,
                    },
                }
            }
        })
        .buffered(jobs)
        .collect()
        .await;

    pb.finish_and_clear();

    for result in &results {
        if let Some(error_msg) = &result.error {
            if continue_on_error {
                warn!("Failed to process {}: {}", result.path.display(), error_msg);
            } else {
                error!("Failed to process {}: {}", result.path.display(), error_msg);
                anyhow::bail!("Processing failed: {}", error_msg);
            }
        }
    }

    // Write outputs
    for result in &results {
        let name = display_name(&result.path);

        match &result.report {
            Some(report) => {
                let extracted = &report.extracted;
                println!(
                    "{} {} ({}/{} fields valid)",
                    style("✓").green(),
                    name,
                    extracted.valid_count(),
                    extracted.fields.len()
                );

                if let Some(output_dir) = &args.output_dir {
                    let stem = result
                        .path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("application");
                    let output_path = output_dir.join(format!("{}.{}", stem, format.extension()));

                    let content = format_report(report, format, config.output.pretty_json)?;
                    fs::write(&output_path, content)?;
                    debug!("Wrote output to {}", output_path.display());
                }
            }
            None => {
                println!(
                    "{} {} ({})",
                    style("✗").red(),
                    name,
                    result.error.as_deref().unwrap_or("unknown error")
                );
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed = results.iter().filter(|r| r.error.is_some()).count();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    if failed > 0 {
        println!("{} {} files failed", style("⚠").yellow(), failed);
    }

    Ok(())
}

fn process_single_file(
    path: &Path,
    input: &InputConfig,
    include_raw_text: bool,
) -> Result<Report, SourceError> {
    let text = read_document(path, input)?;
    let result = RuleBasedParser::new().parse(&text);

    let report = Report::new(display_name(path), &text, result);
    Ok(if include_raw_text {
        report.with_raw_text(&text)
    } else {
        report
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_string()
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["filename", "status"];
    header.extend(FieldKind::ALL.iter().map(|kind| kind.as_str()));
    header.extend(["valid_count", "processing_time_ms", "error"]);
    wtr.write_record(&header)?;

    for result in results {
        let mut record = vec![display_name(&result.path)];

        match &result.report {
            Some(report) => {
                let extracted = &report.extracted;
                record.push("success".to_string());
                record.extend(
                    FieldKind::ALL
                        .iter()
                        .map(|kind| extracted.value(*kind).as_str().to_string()),
                );
                record.push(extracted.valid_count().to_string());
            }
            None => {
                record.push("error".to_string());
                record.extend(FieldKind::ALL.iter().map(|_| String::new()));
                record.push(String::new());
            }
        }

        record.push(result.processing_time_ms.to_string());
        record.push(result.error.clone().unwrap_or_default());
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
