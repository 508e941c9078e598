//! Tabular input and URL column detection.

use crate::config::URL_COLUMN_HEADER;

/// A tabular dataset: a header row plus data rows of optional cells.
///
/// `None` is the dataset's "missing" value (an empty spreadsheet cell).
/// Rows may be ragged; absent trailing cells read as missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

/// Which column holds the URLs, and whether the header row is data.
///
/// Decision table, first match wins:
///
/// | Condition                                   | Result          |
/// |---------------------------------------------|-----------------|
/// | no columns                                  | none (error)    |
/// | a header equals `URL` (trimmed, any case)   | `Named(i)`      |
/// | first header is itself an http(s) URL       | `FirstHeaderless` |
/// | otherwise                                   | `First`         |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlColumn {
    /// The column headed `URL`, at this index.
    Named(usize),
    /// The first column; its header is a title, not data.
    First,
    /// The first column, and the "header" row is already a URL.
    FirstHeaderless,
}

impl UrlColumn {
    pub fn index(&self) -> usize {
        match self {
            UrlColumn::Named(index) => *index,
            UrlColumn::First | UrlColumn::FirstHeaderless => 0,
        }
    }
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { headers, rows }
    }

    /// Treats the first row as the header row.
    pub fn from_rows(rows: Vec<Vec<Option<String>>>) -> Self {
        let mut rows = rows.into_iter();
        let headers = rows
            .next()
            .map(|header| header.into_iter().map(Option::unwrap_or_default).collect())
            .unwrap_or_default();
        Self {
            headers,
            rows: rows.collect(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Widest of the header row and every data row.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    pub fn url_column(&self) -> Option<UrlColumn> {
        if self.column_count() == 0 {
            return None;
        }

        if let Some(index) = self
            .headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(URL_COLUMN_HEADER))
        {
            return Some(UrlColumn::Named(index));
        }

        match self.headers.first() {
            Some(header) if looks_like_url(header) => Some(UrlColumn::FirstHeaderless),
            _ => Some(UrlColumn::First),
        }
    }

    /// Cells of one column, top to bottom, including the header when the
    /// column's decision says the header row is data.
    pub fn column_values(&self, column: UrlColumn) -> Vec<Option<&str>> {
        let index = column.index();
        let header = match column {
            UrlColumn::FirstHeaderless => Some(self.headers.get(index).map(String::as_str)),
            UrlColumn::Named(_) | UrlColumn::First => None,
        };
        header
            .into_iter()
            .chain(
                self.rows
                    .iter()
                    .map(|row| row.get(index).and_then(|cell| cell.as_deref())),
            )
            .collect()
    }
}

fn looks_like_url(value: &str) -> bool {
    url::Url::parse(value.trim())
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}
