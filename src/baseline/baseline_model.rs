use serde::Deserialize;
use serde_json::Value;

/// A previously recorded total test count used as a regression floor.
///
/// Read-only input: this tool never writes the baseline file. The field is
/// kept as a raw JSON value so "absent" and "present but non-numeric" stay
/// distinguishable; both mean the gate is not armed.
#[derive(Debug, Clone, Deserialize)]
pub struct Baseline {
    pub baseline_total_tests: Option<Value>,
}

impl Baseline {
    /// The regression floor, when the field holds a number (integer or
    /// fractional).
    pub fn total_tests(&self) -> Option<f64> {
        self.baseline_total_tests.as_ref().and_then(Value::as_f64)
    }
}
