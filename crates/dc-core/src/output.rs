//! Run-report rendering.

use dc_common::OutputFormat;

use crate::compare::CompareReport;

/// Render the run report for stdout in the requested format.
pub fn render_report(report: &CompareReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .unwrap_or_else(|_| r#"{"error":"serialization_failed"}"#.to_string()),
        OutputFormat::Summary => {
            let output = report
                .output
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string());
            format!(
                "{}: {} pairs compared, {} skipped -> {}",
                report.measure, report.pairs_compared, report.pairs_skipped, output
            )
        }
    }
}
