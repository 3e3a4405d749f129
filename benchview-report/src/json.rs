//! JSON Output

use crate::report::Report;

/// Generate a prettified JSON report.
///
/// Serializes the rendered report (display strings, not raw metrics) so other
/// tools can consume exactly what a reader sees.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
