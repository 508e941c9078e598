//! Reads an input file (or stdin) into an [`InputSource`].

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tokio::io::AsyncReadExt;

use crate::error_handling::BatchError;

use super::source::InputSource;
use super::table::Table;

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Loads `path` by extension: spreadsheets read their first worksheet,
/// `.csv`/`.tsv` are parsed as delimited text, anything else (and `-` for
/// stdin) is free text with one URL per line.
///
/// # Errors
///
/// `BatchError::MalformedInput` naming the path when the file cannot be read
/// or parsed.
pub async fn load_source(path: &Path) -> Result<InputSource, BatchError> {
    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .map_err(|e| malformed(path, e))?;
        return Ok(InputSource::Text(text));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        ext if SPREADSHEET_EXTENSIONS.contains(&ext) => {
            let owned = path.to_path_buf();
            let table = tokio::task::spawn_blocking(move || read_workbook(&owned))
                .await
                .map_err(|e| malformed(path, e))??;
            Ok(InputSource::Table(table))
        }
        "csv" => Ok(InputSource::Table(read_delimited(path, b',').await?)),
        "tsv" => Ok(InputSource::Table(read_delimited(path, b'\t').await?)),
        _ => {
            let text = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| malformed(path, e))?;
            Ok(InputSource::Text(text))
        }
    }
}

fn read_workbook(path: &Path) -> Result<Table, BatchError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| malformed(path, e))?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(|e| malformed(path, e))?,
        None => return Ok(Table::default()),
    };

    log::debug!(
        "Read worksheet from {} ({} rows x {} columns)",
        path.display(),
        range.height(),
        range.width()
    );

    Ok(Table::from_rows(
        range
            .rows()
            .map(|row| row.iter().map(cell_text).collect())
            .collect(),
    ))
}

/// Spreadsheet cell as text; blank and error cells are missing.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        other => Some(other.to_string()),
    }
}

async fn read_delimited(path: &Path, delimiter: u8) -> Result<Table, BatchError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| malformed(path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes.as_slice());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| malformed(path, e))?;
        rows.push(
            record
                .iter()
                .map(|field| (!field.is_empty()).then(|| field.to_string()))
                .collect(),
        );
    }
    Ok(Table::from_rows(rows))
}

fn malformed(path: &Path, cause: impl std::fmt::Display) -> BatchError {
    BatchError::MalformedInput(format!("failed to read {}: {}", path.display(), cause))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::Empty), None);
        assert_eq!(
            cell_text(&Data::String("https://a.test".into())),
            Some("https://a.test".to_string())
        );
        assert_eq!(cell_text(&Data::Int(42)), Some("42".to_string()));
        assert_eq!(cell_text(&Data::Bool(true)), Some("true".to_string()));
    }

    #[tokio::test]
    async fn test_load_csv_is_table() {
        let file = temp_file(".csv", "Name,URL\nhome,https://a.test\nblog,\n");
        let source = load_source(file.path()).await.unwrap();
        let InputSource::Table(table) = source else {
            panic!("expected a table");
        };
        assert_eq!(table.headers(), &["Name".to_string(), "URL".to_string()]);
        assert_eq!(table.column_count(), 2);
    }

    #[tokio::test]
    async fn test_load_tsv_is_table() {
        let file = temp_file(".TSV", "URL\tNotes\nhttps://a.test\tx\n");
        let source = load_source(file.path()).await.unwrap();
        assert!(matches!(source, InputSource::Table(_)));
    }

    #[tokio::test]
    async fn test_load_other_extension_is_text() {
        let file = temp_file(".txt", "https://a.test\nhttps://b.test\n");
        let source = load_source(file.path()).await.unwrap();
        assert_eq!(
            source,
            InputSource::Text("https://a.test\nhttps://b.test\n".to_string())
        );
    }

    #[tokio::test]
    async fn test_load_missing_file_is_malformed() {
        let result = load_source(Path::new("/nonexistent/urls.csv")).await;
        match result {
            Err(BatchError::MalformedInput(msg)) => assert!(msg.contains("urls.csv")),
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_corrupt_workbook_is_malformed() {
        let file = temp_file(".xlsx", "this is not a zip archive");
        let result = load_source(file.path()).await;
        assert!(matches!(result, Err(BatchError::MalformedInput(_))));
    }
}
