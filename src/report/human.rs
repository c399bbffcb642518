//! Human-readable report formatter.
//!
//! Formats the checklist report for terminal display with optional
//! color support: one section per check, then the summary table and the
//! final verdict.

use std::io::Write;

use super::ChecklistReport;
use crate::ui::{OutputMode, ShipshapeTheme, StatusKind, SummaryTable};

/// Formats the checklist report for human consumption.
pub struct HumanFormatter {
    theme: ShipshapeTheme,
    mode: OutputMode,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool, mode: OutputMode) -> Self {
        let theme = if use_color {
            ShipshapeTheme::new()
        } else {
            ShipshapeTheme::plain()
        };
        Self { theme, mode }
    }

    /// Write the formatted report.
    pub fn format<W: Write>(
        &self,
        report: &ChecklistReport,
        writer: &mut W,
    ) -> std::io::Result<()> {
        if self.mode.shows_details() {
            writeln!(
                writer,
                "{}",
                self.theme.format_header("Verifying project scaffolding")
            )?;
            writeln!(writer)?;

            for result in report.results() {
                writeln!(writer, "{}", self.theme.format_section(&result.name))?;
                for detail in &result.details {
                    let kind = StatusKind::from(detail.status);
                    writeln!(writer, "  {}", kind.format(&self.theme, &detail.message))?;
                }
                writeln!(writer)?;
            }
        }

        let mut table = SummaryTable::new();
        for result in report.results() {
            let kind = if result.passed {
                StatusKind::Ok
            } else {
                StatusKind::Failed
            };
            table.add_row(&result.name, kind.bracketed());
        }
        writeln!(writer, "{}", table.render())?;

        if report.passed() {
            writeln!(writer, "{}", self.theme.format_success("All checks passed"))?;
        } else {
            let failed = report.results().iter().filter(|r| !r.passed).count();
            writeln!(
                writer,
                "{}",
                self.theme
                    .format_error(&format!("{} check(s) failed", failed))
            )?;
        }

        Ok(())
    }
}
