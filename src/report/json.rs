//! JSON report formatter.
//!
//! Formats the checklist report as machine-readable JSON for tooling
//! integration.

use std::io::Write;

use serde::Serialize;

use super::{CheckStatus, ChecklistReport};

/// Formats the checklist report as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    checks: Vec<JsonCheck>,
    summary: JsonSummary,
    passed: bool,
}

#[derive(Serialize)]
struct JsonCheck {
    name: String,
    passed: bool,
    details: Vec<JsonDetail>,
}

#[derive(Serialize)]
struct JsonDetail {
    status: String,
    message: String,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    passed: usize,
    failed: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }

    fn status_to_string(status: CheckStatus) -> &'static str {
        match status {
            CheckStatus::Ok => "ok",
            CheckStatus::Error => "error",
            CheckStatus::Warning => "warning",
            CheckStatus::Info => "info",
        }
    }

    /// Write the report as pretty-printed JSON.
    pub fn format<W: Write>(
        &self,
        report: &ChecklistReport,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let checks: Vec<_> = report
            .results()
            .iter()
            .map(|r| JsonCheck {
                name: r.name.clone(),
                passed: r.passed,
                details: r
                    .details
                    .iter()
                    .map(|d| JsonDetail {
                        status: Self::status_to_string(d.status).to_string(),
                        message: d.message.clone(),
                    })
                    .collect(),
            })
            .collect();

        let passed_count = report.results().iter().filter(|r| r.passed).count();
        let summary = JsonSummary {
            total: report.len(),
            passed: passed_count,
            failed: report.len() - passed_count,
        };

        let output = JsonOutput {
            checks,
            summary,
            passed: report.passed(),
        };

        serde_json::to_writer_pretty(writer, &output).map_err(std::io::Error::other)?;

        Ok(())
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
