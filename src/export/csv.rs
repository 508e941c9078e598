//! CSV rendering.

use csv::Writer;

use crate::error_handling::ExportError;
use crate::report::Report;

use super::row::{cells, COLUMNS};

/// Renders the report as CSV, header row first. Scores are written as
/// whole percentages ("95%").
pub fn export_csv(report: &Report) -> Result<Vec<u8>, ExportError> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(COLUMNS)?;

    for result in report {
        writer.write_record(cells(result).iter().map(|cell| cell.to_text()))?;
    }

    writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}
