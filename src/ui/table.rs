//! Summary table rendering.

/// Two-column table for the per-check summary.
#[derive(Debug, Default)]
pub struct SummaryTable {
    rows: Vec<(String, String)>,
}

impl SummaryTable {
    /// Create an empty summary table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a check row: display name and status marker.
    pub fn add_row(&mut self, name: &str, status: &str) {
        self.rows.push((name.to_string(), status.to_string()));
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> (usize, usize) {
        let name_width = self
            .rows
            .iter()
            .map(|(name, _)| name.len())
            .chain(["Check".len()])
            .max()
            .unwrap_or(0);
        let status_width = self
            .rows
            .iter()
            .map(|(_, status)| status.len())
            .chain(["Status".len()])
            .max()
            .unwrap_or(0);
        (name_width, status_width)
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let (name_width, status_width) = self.column_widths();
        let border = |left: char, mid: char, right: char| {
            format!(
                "{}{}{}{}{}",
                left,
                "─".repeat(name_width + 2),
                mid,
                "─".repeat(status_width + 2),
                right
            )
        };
        let row = |name: &str, status: &str| {
            format!(
                "│ {:name_width$} │ {:status_width$} │",
                name, status
            )
        };

        let mut lines = vec![
            border('┌', '┬', '┐'),
            row("Check", "Status"),
            border('├', '┼', '┤'),
        ];
        for (name, status) in &self.rows {
            lines.push(row(name, status));
        }
        lines.push(border('└', '┴', '┘'));

        lines.join("\n")
    }
}
