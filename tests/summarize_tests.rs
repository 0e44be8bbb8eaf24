mod common;

use std::path::{Path, PathBuf};

use common::utils::{temp_dir, write_file};
use test_summary::cli::commands::{GateOutcome, cmd_report, cmd_summarize};
use test_summary::report::report_model::Summary;
use test_summary::trace::logger::TraceLogger;

// ============================================================================
// Helpers
// ============================================================================

fn run(results_dir: &Path, baseline: &Path) -> GateOutcome {
    cmd_summarize(
        results_dir.to_str().unwrap(),
        baseline.to_str().unwrap(),
        None,
        None,
        0,
        &TraceLogger::disabled(),
    )
    .unwrap()
}

fn read_summary(results_dir: &Path) -> Summary {
    let content = std::fs::read_to_string(results_dir.join("summary.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

fn scratch(name: &str) -> (PathBuf, PathBuf, PathBuf) {
    let dir = temp_dir(name);
    let results = dir.join("test-results");
    let baseline = dir.join("baseline.json");
    (dir, results, baseline)
}

// ============================================================================
// 1. Full pipeline without a baseline
// ============================================================================

#[test]
fn summarize_writes_summary_and_passes_without_baseline() {
    let (dir, results, baseline) = scratch("e2e-basic");
    write_file(&results, "unit.json", r#"{"totalTests": 12, "failedTests": 3}"#);
    write_file(&results, "nested/e2e.json", r#"{"numTotalTestsExecuted": 8}"#);

    let outcome = run(&results, &baseline);
    assert_eq!(outcome, GateOutcome::Passed);

    let summary = read_summary(&results);
    assert_eq!(summary.total_files, 2);
    assert_eq!(summary.total_tests, 20);
    assert_eq!(summary.total_failed, 3);
    assert_eq!(summary.total_passed, 17);
    assert_eq!(summary.details.len(), 2);

    // Aggregate invariants hold over the details
    assert_eq!(
        summary.total_tests,
        summary.details.iter().map(|d| d.total).sum::<i64>()
    );
    assert_eq!(
        summary.total_failed,
        summary.details.iter().map(|d| d.failed).sum::<i64>()
    );
    assert_eq!(summary.total_passed, summary.total_tests - summary.total_failed);

    let _ = std::fs::remove_dir_all(&dir);
}

// ============================================================================
// 2. Malformed input files are excluded, not fatal
// ============================================================================

#[test]
fn summarize_reflects_only_valid_files() {
    let (dir, results, baseline) = scratch("e2e-malformed");
    write_file(&results, "good.json", r#"{"totalTests": 5, "failedTests": 1}"#);
    write_file(&results, "bad.json", "{not json at all");

    let outcome = run(&results, &baseline);
    assert_eq!(outcome, GateOutcome::Passed);

    let summary = read_summary(&results);
    assert_eq!(summary.total_files, 1);
    assert_eq!(summary.total_tests, 5);
    assert_eq!(summary.details.len(), 1);
    assert!(summary.details[0].path.ends_with("good.json"));

    let _ = std::fs::remove_dir_all(&dir);
}

// ============================================================================
// 3. No input files — success, and no summary written
// ============================================================================

#[test]
fn summarize_no_files_writes_nothing() {
    let (dir, results, baseline) = scratch("e2e-empty");
    write_file(&results, "notes.txt", "nothing to see");

    let outcome = run(&results, &baseline);
    assert_eq!(outcome, GateOutcome::Passed);
    assert!(!results.join("summary.json").exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn summarize_missing_results_root_is_success() {
    let (dir, results, baseline) = scratch("e2e-missing-root");

    let outcome = run(&results, &baseline);
    assert_eq!(outcome, GateOutcome::Passed);
    assert!(!results.exists());

    let _ = std::fs::remove_dir_all(&dir);
}

// ============================================================================
// 4. Regression gate
// ============================================================================

#[test]
fn summarize_regression_gate_trips() {
    let (dir, results, baseline) = scratch("e2e-regression");
    write_file(&results, "unit.json", r#"{"totalTests": 8}"#);
    write_file(&dir, "baseline.json", r#"{"baseline_total_tests": 10}"#);

    let outcome = run(&results, &baseline);
    assert_eq!(outcome, GateOutcome::Regression);

    // The summary is still written before the gate fires
    assert_eq!(read_summary(&results).total_tests, 8);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn summarize_baseline_pass_at_floor() {
    let (dir, results, baseline) = scratch("e2e-baseline-equal");
    write_file(&results, "unit.json", r#"{"totalTests": 10}"#);
    write_file(&dir, "baseline.json", r#"{"baseline_total_tests": 10}"#);

    assert_eq!(run(&results, &baseline), GateOutcome::Passed);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn summarize_malformed_baseline_does_not_gate() {
    let (dir, results, baseline) = scratch("e2e-baseline-malformed");
    write_file(&results, "unit.json", r#"{"totalTests": 1}"#);
    write_file(&dir, "baseline.json", "{broken");

    assert_eq!(run(&results, &baseline), GateOutcome::Passed);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn summarize_baseline_without_field_does_not_gate() {
    let (dir, results, baseline) = scratch("e2e-baseline-unset");
    write_file(&results, "unit.json", r#"{"totalTests": 1}"#);
    write_file(&dir, "baseline.json", "{}");

    assert_eq!(run(&results, &baseline), GateOutcome::Passed);

    let _ = std::fs::remove_dir_all(&dir);
}

// ============================================================================
// 5. Idempotence — reruns differ only in the timestamp
// ============================================================================

#[test]
fn summarize_reruns_are_idempotent_except_timestamp() {
    let (dir, results, baseline) = scratch("e2e-idempotent");
    write_file(&results, "a.json", r#"{"totalTests": 4, "failedTests": 1}"#);
    write_file(&results, "b.json", r#"{"totalTests": 6}"#);

    run(&results, &baseline);
    let mut first: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(results.join("summary.json")).unwrap())
            .unwrap();

    // Second run sees the first run's summary.json on disk; it must not
    // feed back into the totals.
    run(&results, &baseline);
    let mut second: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(results.join("summary.json")).unwrap())
            .unwrap();

    first.as_object_mut().unwrap().remove("timestamp");
    second.as_object_mut().unwrap().remove("timestamp");
    assert_eq!(first, second);

    let _ = std::fs::remove_dir_all(&dir);
}

// ============================================================================
// 6. Trace log
// ============================================================================

#[test]
fn summarize_trace_log_records_run() {
    let (dir, results, baseline) = scratch("e2e-trace");
    write_file(&results, "good.json", r#"{"totalTests": 3}"#);
    write_file(&results, "bad.json", "{oops");
    let trace_path = dir.join("run-trace.jsonl");

    let outcome = cmd_summarize(
        results.to_str().unwrap(),
        baseline.to_str().unwrap(),
        None,
        None,
        0,
        &TraceLogger::new(trace_path.to_str().unwrap()),
    )
    .unwrap();
    assert_eq!(outcome, GateOutcome::Passed);

    let content = std::fs::read_to_string(&trace_path).unwrap();
    let stages: Vec<String> = content
        .lines()
        .map(|line| {
            let event: serde_json::Value = serde_json::from_str(line).unwrap();
            event["stage"].as_str().unwrap().to_string()
        })
        .collect();
    assert!(stages.contains(&"discover".to_string()));
    assert!(stages.contains(&"parse".to_string()));
    assert!(stages.contains(&"skip".to_string()));
    assert!(stages.contains(&"write".to_string()));
    assert!(stages.contains(&"baseline".to_string()));

    let _ = std::fs::remove_dir_all(&dir);
}

// ============================================================================
// 7. Extra rendering
// ============================================================================

#[test]
fn summarize_renders_junit_to_file() {
    let (dir, results, baseline) = scratch("e2e-junit");
    write_file(&results, "unit.json", r#"{"totalTests": 2, "failedTests": 1}"#);
    let report_path = dir.join("report.xml");

    let outcome = cmd_summarize(
        results.to_str().unwrap(),
        baseline.to_str().unwrap(),
        Some("junit"),
        report_path.to_str(),
        0,
        &TraceLogger::disabled(),
    )
    .unwrap();
    assert_eq!(outcome, GateOutcome::Passed);

    let xml = std::fs::read_to_string(&report_path).unwrap();
    assert!(xml.contains("<testsuite"));
    assert!(xml.contains("tests=\"2\""));
    assert!(xml.contains("failures=\"1\""));

    let _ = std::fs::remove_dir_all(&dir);
}

// ============================================================================
// 8. report subcommand
// ============================================================================

#[test]
fn report_renders_existing_summary() {
    let (dir, results, baseline) = scratch("e2e-report");
    write_file(&results, "unit.json", r#"{"totalTests": 7, "failedTests": 2}"#);
    run(&results, &baseline);

    let out_path = dir.join("report.txt");
    cmd_report(
        results.join("summary.json").to_str().unwrap(),
        "console",
        out_path.to_str(),
        0,
    )
    .unwrap();

    let rendered = std::fs::read_to_string(&out_path).unwrap();
    assert!(rendered.contains("=== Results: 5 passed, 2 failed (7 total, 1 files) ==="));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn report_missing_summary_is_error() {
    let (dir, _results, _baseline) = scratch("e2e-report-missing");
    let missing = dir.join("nope/summary.json");
    assert!(cmd_report(missing.to_str().unwrap(), "console", None, 0).is_err());
    let _ = std::fs::remove_dir_all(&dir);
}
