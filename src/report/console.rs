use crate::report::report_model::Summary;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format a run summary for terminal output.
///
/// Produces output like:
/// ```text
/// === Test Result Summary ===
///
/// ✓ PASS  test-results/unit.json (12 tests, 0 failed)
/// ✗ FAIL  test-results/e2e.json (8 tests, 2 failed)
///
/// === Results: 18 passed, 2 failed (20 total, 2 files) ===
/// ```
pub fn format_console_report(summary: &Summary) -> String {
    let mut out = String::new();

    out.push_str("=== Test Result Summary ===\n\n");

    for detail in &summary.details {
        let marker = if detail.failed > 0 {
            "\u{2717} FAIL"
        } else {
            "\u{2713} PASS"
        };

        out.push_str(&format!(
            "{}  {} ({} tests, {} failed)\n",
            marker, detail.path, detail.total, detail.failed
        ));

        // A negative passed count means the file's own numbers disagree
        if detail.passed < 0 {
            out.push_str(&format!(
                "    [WARN] inconsistent counts: {} failed out of {} total\n",
                detail.failed, detail.total
            ));
        }
    }

    out.push_str(&format!(
        "\n=== Results: {} passed, {} failed ({} total, {} files) ===\n",
        summary.total_passed, summary.total_failed, summary.total_tests, summary.total_files
    ));

    out
}
