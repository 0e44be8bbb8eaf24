use crate::report::report_model::Summary;

// ============================================================================
// JUnit XML reporter — standard CI integration format
// ============================================================================

/// Generate a JUnit XML report for CI systems (Jenkins, GitHub Actions,
/// GitLab CI). Each input report file becomes one `<testcase>`; the
/// suite-level attributes carry the aggregate test counts.
///
/// Produces standard JUnit XML:
/// ```xml
/// <?xml version="1.0" encoding="UTF-8"?>
/// <testsuite name="test-summary" tests="20" failures="2">
///   <testcase name="test-results/unit.json" classname="test-summary" />
///   <testcase name="test-results/e2e.json" classname="test-summary">
///     <failure message="2 test(s) failed" type="TestFailure">8 total, 6 passed, 2 failed</failure>
///   </testcase>
/// </testsuite>
/// ```
pub fn generate_junit_xml(summary: &Summary) -> String {
    let mut cases = String::new();
    for detail in &summary.details {
        if detail.failed > 0 {
            let failure_message = format!("{} test(s) failed", detail.failed);
            let failure_body = format!(
                "{} total, {} passed, {} failed",
                detail.total, detail.passed, detail.failed
            );
            cases.push_str(&format!(
                "  <testcase name=\"{name}\" classname=\"test-summary\">\n    <failure message=\"{message}\" type=\"TestFailure\">{body}</failure>\n  </testcase>\n",
                name = escape_xml(&detail.path),
                message = escape_xml(&failure_message),
                body = escape_xml(&failure_body),
            ));
        } else {
            cases.push_str(&format!(
                "  <testcase name=\"{}\" classname=\"test-summary\" />\n",
                escape_xml(&detail.path)
            ));
        }
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<testsuite name=\"test-summary\" tests=\"{tests}\" failures=\"{failures}\" timestamp=\"{timestamp}\">\n{cases}</testsuite>\n",
        tests = summary.total_tests,
        failures = summary.total_failed,
        timestamp = escape_xml(&summary.timestamp),
        cases = cases,
    )
}

/// Escape XML special characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
