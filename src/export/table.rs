//! Plain-text table for printing a report to a terminal.

use crate::report::Report;

use super::row::{cells, clip, COLUMNS};

const MAX_CELL_WIDTH: usize = 60;

/// Renders the report as a left-aligned, space-padded text table.
///
/// Cells wider than 60 characters are truncated with `...`.
pub fn render_table(report: &Report) -> String {
    let rows: Vec<Vec<String>> = std::iter::once(COLUMNS.map(String::from).to_vec())
        .chain(
            report
                .iter()
                .map(|r| cells(r).iter().map(|c| clip(&c.to_text(), MAX_CELL_WIDTH).into_owned()).collect()),
        )
        .collect();

    let mut widths = [0usize; COLUMNS.len()];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagespeed::Strategy;
    use crate::report::{ScoreResult, Scores};

    #[test]
    fn test_render_table_header_and_rows() {
        let report = Report::from(vec![ScoreResult::scored(
            "https://a.test",
            Strategy::Mobile,
            Scores {
                performance: Some(0.95),
                ..Scores::default()
            },
        )]);
        let table = render_table(&report);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("URL"));
        assert!(lines[1].starts_with("https://a.test"));
        assert!(lines[1].contains("95%"));
        assert!(lines[1].contains("N/A"));
    }

    #[test]
    fn test_render_table_clips_long_cells() {
        let long_url = format!("https://a.test/{}", "x".repeat(100));
        let report = Report::from(vec![ScoreResult::failed(
            long_url.as_str(),
            Strategy::Mobile,
            "HTTP 404 Not Found",
        )]);
        let table = render_table(&report);
        let row = table.lines().nth(1).unwrap();
        assert!(!row.contains(&long_url));
        assert!(row.contains(&format!("{}...", &long_url[..MAX_CELL_WIDTH - 3])));
    }
}
