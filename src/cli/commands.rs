use std::path::{Path, PathBuf};

use crate::baseline::check::{BaselineStatus, check_baseline};
use crate::report::console::format_console_report;
use crate::report::junit::generate_junit_xml;
use crate::report::report_model::{Summary, write_summary};
use crate::results::aggregate::aggregate_files;
use crate::results::discovery::find_result_files;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

/// Name of the summary file written into the results root.
pub const SUMMARY_FILE_NAME: &str = "summary.json";

/// What the summarize run decided. Only `Regression` maps to a non-zero
/// process exit, and only `main` performs that exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Passed,
    Regression,
}

// ============================================================================
// summarize subcommand
// ============================================================================

/// Discover, aggregate, persist, and gate. Returns the gate outcome; every
/// skip branch of the baseline check counts as `Passed`.
pub fn cmd_summarize(
    results_dir: &str,
    baseline_path: &str,
    format: Option<&str>,
    output: Option<&str>,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<GateOutcome, Box<dyn std::error::Error>> {
    let root = Path::new(results_dir);
    let summary_path = root.join(SUMMARY_FILE_NAME);

    let mut files = find_result_files(root)?;
    // A previous run's summary would otherwise feed back into the totals
    files.retain(|p| p != &summary_path);

    tracer.log(&TraceEvent::now("discover").with_path(results_dir).with_files(files.len()));

    if files.is_empty() {
        println!("No test result JSON files found in {}/", results_dir);
        return Ok(GateOutcome::Passed);
    }

    if verbose > 0 {
        eprintln!("Aggregating {} result files...", files.len());
    }

    let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let aggregation = aggregate_files(&files, &base_dir);

    for skipped in &aggregation.skipped {
        eprintln!(
            "Warning: skipping invalid JSON {}: {}",
            skipped.path.display(),
            skipped.reason
        );
        tracer.log(
            &TraceEvent::now("skip")
                .with_path(skipped.path.display())
                .with_skip_reason(&skipped.reason),
        );
    }

    if verbose > 0 {
        for detail in &aggregation.details {
            eprintln!("  Parsed: {} ({} tests)", detail.path, detail.total);
        }
    }
    for detail in &aggregation.details {
        tracer.log(
            &TraceEvent::now("parse")
                .with_path(&detail.path)
                .with_counts(detail.total, detail.failed),
        );
    }

    let summary = Summary::from_details(aggregation.details);
    let json = write_summary(&summary, &summary_path)?;

    println!("Summary written to {}", summary_path.display());
    println!("{}", json);
    tracer.log(
        &TraceEvent::now("write")
            .with_path(summary_path.display())
            .with_counts(summary.total_tests, summary.total_failed),
    );

    // Optional extra rendering on top of the JSON echo
    if let Some(format) = format {
        let rendered = match format {
            "junit" => generate_junit_xml(&summary),
            _ => format_console_report(&summary),
        };
        match output {
            Some(path) => std::fs::write(path, &rendered)?,
            None => print!("{}", rendered),
        }
    }

    let status = check_baseline(Path::new(baseline_path), summary.total_tests);
    tracer.log(&TraceEvent::now("baseline").with_baseline_status(status.label()));

    match status {
        BaselineStatus::NotConfigured => {
            println!("No {} present — skipping baseline check.", baseline_path);
            Ok(GateOutcome::Passed)
        }
        BaselineStatus::Unreadable { reason } => {
            eprintln!("Warning: could not read {}: {}", baseline_path, reason);
            Ok(GateOutcome::Passed)
        }
        BaselineStatus::NotSet => {
            println!("Baseline file present but baseline_total_tests not set.");
            Ok(GateOutcome::Passed)
        }
        BaselineStatus::Passed { baseline, .. } => {
            println!("Baseline total tests: {}", baseline);
            println!("Baseline check passed.");
            Ok(GateOutcome::Passed)
        }
        BaselineStatus::Regression { baseline, total } => {
            println!("Baseline total tests: {}", baseline);
            eprintln!(
                "FAIL: total tests decreased: {} < baseline {}",
                total, baseline
            );
            Ok(GateOutcome::Regression)
        }
    }
}

// ============================================================================
// report subcommand
// ============================================================================

/// Render a previously written summary file. No scanning, no gate.
pub fn cmd_report(
    summary_path: &str,
    format: &str,
    output: Option<&str>,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    if verbose > 0 {
        eprintln!("Reading summary from {}...", summary_path);
    }

    let content = std::fs::read_to_string(summary_path)?;
    let summary: Summary = serde_json::from_str(&content)?;

    let rendered = match format {
        "junit" => generate_junit_xml(&summary),
        "json" => summary.to_pretty_json()?,
        _ => format_console_report(&summary),
    };

    match output {
        Some(path) => std::fs::write(path, &rendered)?,
        None => print!("{}", rendered),
    }

    Ok(())
}
