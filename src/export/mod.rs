//! Report export.
//!
//! Renders a [`Report`] into spreadsheet bytes (XLSX or CSV) or a text table.
//! Every format writes the same twelve columns, with absent fields shown as
//! `N/A`.

mod csv;
mod row;
mod table;
mod types;
mod xlsx;

pub use self::csv::export_csv;
pub use row::COLUMNS;
pub use table::render_table;
pub use types::ExportFormat;
pub use xlsx::export_xlsx;

use crate::error_handling::ExportError;
use crate::report::Report;

/// Renders `report` in the requested format.
pub fn export(report: &Report, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    log::debug!(
        "Exporting {} rows as {} ({})",
        report.len(),
        format,
        format.mime_type()
    );
    match format {
        ExportFormat::Xlsx => export_xlsx(report),
        ExportFormat::Csv => export_csv(report),
    }
}
