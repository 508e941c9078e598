//! XLSX rendering.

use rust_xlsxwriter::{Format, Workbook};

use crate::config::NOT_AVAILABLE;
use crate::error_handling::ExportError;
use crate::report::Report;

use super::row::{cells, clip, Cell, COLUMNS};

const SHEET_NAME: &str = "PageSpeed";

/// Longest string Excel stores in one cell.
const MAX_CELL_CHARS: usize = 32_767;

/// Column widths in characters, aligned with `COLUMNS`.
const COLUMN_WIDTHS: [f64; 12] = [
    48.0, 10.0, 13.0, 13.0, 15.0, 8.0, 10.0, 10.0, 10.0, 10.0, 60.0, 40.0,
];

/// Renders the report as an in-memory XLSX workbook.
///
/// Scores are stored as their raw 0-1 value with a percent number format.
/// Text longer than Excel's cell limit is clipped so one oversized URL or
/// error message cannot fail the whole export.
pub fn export_xlsx(report: &Report) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let header_fmt = Format::new().set_bold();
    let percent_fmt = Format::new().set_num_format("0%");

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;

        for (col, header) in (0u16..).zip(COLUMNS) {
            sheet.write_string_with_format(0, col, header, &header_fmt)?;
            sheet.set_column_width(col, COLUMN_WIDTHS[col as usize])?;
        }

        for (row, result) in (1u32..).zip(report) {
            for (col, cell) in (0u16..).zip(cells(result)) {
                match cell {
                    Cell::Text(text) => {
                        sheet.write_string(row, col, clip(text, MAX_CELL_CHARS))?;
                    }
                    Cell::Score(score) => {
                        sheet.write_number_with_format(row, col, score, &percent_fmt)?;
                    }
                    Cell::Missing => {
                        sheet.write_string(row, col, NOT_AVAILABLE)?;
                    }
                    Cell::Empty => {}
                }
            }
        }

        sheet.set_freeze_panes(1, 0)?;
    }

    Ok(workbook.save_to_buffer()?)
}
