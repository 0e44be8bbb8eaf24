use serde_json::Value;

/// Source keys for the total test count, resolved in order; the first key
/// present in the report wins. Both spellings show up in real reporter
/// output.
pub const TOTAL_TESTS_KEYS: [&str; 2] = ["totalTests", "numTotalTestsExecuted"];

/// Source keys for the failed test count: a single canonical key, resolved
/// through the same alias mechanism as the total.
pub const FAILED_TESTS_KEYS: [&str; 1] = ["failedTests"];

/// Counts extracted from one test-report JSON file.
///
/// Extraction is deliberately lenient: a missing or non-integer count is 0,
/// and any JSON document that decodes at all (including non-objects) yields
/// a record. Only undecodable files are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestReportRecord {
    pub total: i64,
    pub failed: i64,
}

impl TestReportRecord {
    /// Extract counts from a decoded JSON document.
    pub fn from_value(value: &Value) -> Self {
        Self {
            total: count_field(value, &TOTAL_TESTS_KEYS),
            failed: count_field(value, &FAILED_TESTS_KEYS),
        }
    }

    /// Derived count. Not clamped: an inconsistent report can push it negative.
    pub fn passed(&self) -> i64 {
        self.total - self.failed
    }
}

/// Decode one report file's contents.
pub fn parse_record(content: &str) -> Result<TestReportRecord, serde_json::Error> {
    let value: Value = serde_json::from_str(content)?;
    Ok(TestReportRecord::from_value(&value))
}

/// Resolve a count through an ordered alias list. The first key present
/// wins; a present but non-integer value counts as 0.
fn count_field(value: &Value, keys: &[&str]) -> i64 {
    keys.iter()
        .find_map(|key| value.get(*key))
        .and_then(Value::as_i64)
        .unwrap_or(0)
}
