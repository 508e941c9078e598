//! Turns an input source into the ordered list of URLs to score.

use crate::error_handling::BatchError;

use super::table::Table;

/// Where the URLs come from.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// A spreadsheet or delimited file.
    Table(Table),
    /// Free text, one URL per line.
    Text(String),
}

/// Resolves a source into URLs: trimmed, empty and missing entries dropped,
/// order and duplicates kept. URL syntax is not checked here; a malformed
/// entry fails later as an error row.
///
/// # Errors
///
/// `BatchError::MalformedInput` when a table has no columns.
pub fn resolve(source: &InputSource) -> Result<Vec<String>, BatchError> {
    match source {
        InputSource::Table(table) => {
            let column = table.url_column().ok_or_else(|| {
                BatchError::MalformedInput("the table has no columns".to_string())
            })?;
            log::debug!("Reading URLs from column {:?}", column);
            Ok(table
                .column_values(column)
                .into_iter()
                .filter_map(clean)
                .collect())
        }
        InputSource::Text(text) => Ok(text.lines().map(Some).filter_map(clean).collect()),
    }
}

fn clean(entry: Option<&str>) -> Option<String> {
    let trimmed = entry?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
