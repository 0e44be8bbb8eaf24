use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// One machine-readable run event, appended as a JSONL line when tracing is
/// enabled. Stages: `discover`, `parse`, `skip`, `write`, `baseline`.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub stage: String,

    pub path: Option<String>,

    pub files: Option<usize>,
    pub total: Option<i64>,
    pub failed: Option<i64>,

    pub skip_reason: Option<String>,
    pub baseline_status: Option<String>,
}

impl TraceEvent {
    pub fn now(stage: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis(),
            stage: stage.to_string(),
            path: None,
            files: None,
            total: None,
            failed: None,
            skip_reason: None,
            baseline_status: None,
        }
    }

    pub fn with_path(mut self, path: impl ToString) -> Self {
        self.path = Some(path.to_string());
        self
    }

    pub fn with_files(mut self, files: usize) -> Self {
        self.files = Some(files);
        self
    }

    pub fn with_counts(mut self, total: i64, failed: i64) -> Self {
        self.total = Some(total);
        self.failed = Some(failed);
        self
    }

    pub fn with_skip_reason(mut self, reason: impl ToString) -> Self {
        self.skip_reason = Some(reason.to_string());
        self
    }

    pub fn with_baseline_status(mut self, status: impl ToString) -> Self {
        self.baseline_status = Some(status.to_string());
        self
    }
}
