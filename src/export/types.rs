//! Export format selection.

use std::fmt;

use clap::ValueEnum;

use crate::config::{CSV_MIME_TYPE, XLSX_MIME_TYPE};

/// Output format for a rendered report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Excel workbook, one worksheet
    Xlsx,
    /// Comma-separated values
    Csv,
}

impl ExportFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => XLSX_MIME_TYPE,
            ExportFormat::Csv => CSV_MIME_TYPE,
        }
    }

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
