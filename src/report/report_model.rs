use std::fs;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::results::error::SummaryError;

// ============================================================================
// Run summary — aggregates per-file test counts
// ============================================================================

/// Per-input-file breakdown retained in the summary for traceability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileDetail {
    /// Report file path, relative to the invocation directory when possible
    pub path: String,

    /// Total tests recorded by the file
    pub total: i64,

    /// Failed tests recorded by the file
    pub failed: i64,

    /// Derived `total - failed`; negative when the file is inconsistent
    pub passed: i64,
}

/// Aggregated summary of one summarizer run.
///
/// Built from a `Vec<FileDetail>` via `from_details()`. Written to
/// `summary.json` and consumed by the console and JUnit reporters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// ISO-8601 UTC timestamp of the run
    pub timestamp: String,

    /// Number of successfully parsed input files
    pub total_files: usize,

    /// Sum of per-file totals
    pub total_tests: i64,

    /// Sum of per-file passed counts
    pub total_passed: i64,

    /// Sum of per-file failed counts
    pub total_failed: i64,

    /// Per-file breakdowns in discovery order
    pub details: Vec<FileDetail>,
}

impl Summary {
    /// Build a summary from per-file details.
    ///
    /// Automatically computes the file count and the total/passed/failed
    /// sums, and stamps the current time.
    pub fn from_details(details: Vec<FileDetail>) -> Self {
        let total_tests = details.iter().map(|d| d.total).sum();
        let total_failed = details.iter().map(|d| d.failed).sum();
        let total_passed = details.iter().map(|d| d.passed).sum();
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            total_files: details.len(),
            total_tests,
            total_passed,
            total_failed,
            details,
        }
    }

    /// Whether any input file recorded a failing test.
    pub fn has_failures(&self) -> bool {
        self.total_failed > 0
    }

    /// Pretty-printed JSON (2-space indentation), as written to disk and
    /// echoed to stdout.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Write the summary to `path`, creating the containing directory if
/// needed. Overwrites unconditionally. Returns the JSON that was written.
pub fn write_summary(summary: &Summary, path: &Path) -> Result<String, SummaryError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SummaryError::Io {
            context: format!("creating {}", parent.display()),
            source: e,
        })?;
    }

    let json = summary.to_pretty_json().map_err(|e| SummaryError::JsonSerialize {
        context: "encoding summary".to_string(),
        source: e,
    })?;

    fs::write(path, &json).map_err(|e| SummaryError::Io {
        context: format!("writing {}", path.display()),
        source: e,
    })?;

    Ok(json)
}
