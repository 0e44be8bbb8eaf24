use std::fs;
use std::path::Path;

use crate::baseline::baseline_model::Baseline;

// ============================================================================
// Regression gate — compare the aggregate against a stored floor
// ============================================================================

/// Outcome of the baseline comparison.
///
/// Only `Regression` maps to a non-zero process exit; every other variant is
/// a skip or a pass. The check is best-effort: a broken baseline file never
/// fails the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BaselineStatus {
    /// No baseline file at the given path; comparison skipped
    NotConfigured,

    /// Baseline file exists but could not be read or decoded
    Unreadable { reason: String },

    /// Baseline file decoded but `baseline_total_tests` is missing or
    /// non-numeric; no comparison performed
    NotSet,

    /// Aggregate meets or exceeds the floor
    Passed { baseline: f64, total: i64 },

    /// Aggregate fell below the floor
    Regression { baseline: f64, total: i64 },
}

impl BaselineStatus {
    /// Short lowercase label, used for trace events.
    pub fn label(&self) -> &'static str {
        match self {
            BaselineStatus::NotConfigured => "not_configured",
            BaselineStatus::Unreadable { .. } => "unreadable",
            BaselineStatus::NotSet => "not_set",
            BaselineStatus::Passed { .. } => "passed",
            BaselineStatus::Regression { .. } => "regression",
        }
    }
}

/// Compare the aggregate total against the baseline file at `path`.
///
/// Never returns an error: every failure mode collapses into a skip variant
/// the caller reports and moves past.
pub fn check_baseline(path: &Path, total_tests: i64) -> BaselineStatus {
    if !path.exists() {
        return BaselineStatus::NotConfigured;
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            return BaselineStatus::Unreadable {
                reason: e.to_string(),
            };
        }
    };

    let baseline: Baseline = match serde_json::from_str(&content) {
        Ok(baseline) => baseline,
        Err(e) => {
            return BaselineStatus::Unreadable {
                reason: e.to_string(),
            };
        }
    };

    match baseline.total_tests() {
        None => BaselineStatus::NotSet,
        Some(floor) => {
            if (total_tests as f64) < floor {
                BaselineStatus::Regression {
                    baseline: floor,
                    total: total_tests,
                }
            } else {
                BaselineStatus::Passed {
                    baseline: floor,
                    total: total_tests,
                }
            }
        }
    }
}
