//! Rendering reports for stdout.

use anyhow::{Context, Result};
use kalkulator_core::{EvaluationReport, Outcome};

use crate::config::OutputFormat;

/// Render a single report.
///
/// Text output is just the result or the notification message, the same
/// line the calculator screen would show.
pub fn render_report(report: &EvaluationReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.outcome.text().to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to serialize report as JSON")
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(report).context("Failed to serialize report as YAML")
        }
    }
}

/// Render a batch of reports.
///
/// Text output has one line per request, e.g. `4 + 2 = 6` or
/// `5 ÷ 0: Nie można dzielić przez 0`.
pub fn render_reports(reports: &[EvaluationReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(text_line)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(reports).context("Failed to serialize reports as JSON")
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(reports).context("Failed to serialize reports as YAML")
        }
    }
}

fn text_line(report: &EvaluationReport) -> String {
    let request = &report.request;
    let expression = format!(
        "{} {} {}",
        request.operand1.trim(),
        request.operation,
        request.operand2.trim()
    );

    match &report.outcome {
        Outcome::Value { display } => format!("{} = {}", expression, display),
        Outcome::Rejected { message, .. } => format!("{}: {}", expression, message),
    }
}
