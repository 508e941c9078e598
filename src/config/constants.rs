//! Configuration constants.
//!
//! This module defines the constants used throughout the application, including
//! the scoring endpoint, timeouts, report markers and MIME types.

/// PageSpeed Insights v5 endpoint.
///
/// Every scoring request is a single GET against this URL with the `url`,
/// `strategy` and `key` query parameters. Overridable via `Config::endpoint`
/// so tests can point the builder at a mock server.
pub const PAGESPEED_ENDPOINT: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

/// Per-request timeout in seconds.
///
/// A Lighthouse run on the remote side routinely takes 10-30s for a heavy page,
/// so this is far more generous than a plain page fetch would need.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for requests to the scoring endpoint.
pub const DEFAULT_USER_AGENT: &str = concat!("pagespeed_report/", env!("CARGO_PKG_VERSION"));

/// Audits scoring below this threshold are listed under "Improvement Areas".
pub const IMPROVEMENT_THRESHOLD: f64 = 0.9;

/// Separator used when joining improvement area titles.
pub const IMPROVEMENT_SEPARATOR: &str = "; ";

/// Rendered when a response carried audits but none of them need improvement.
pub const NO_IMPROVEMENTS: &str = "None";

/// Rendered in exports for every absent field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Default output path for the report.
pub const DEFAULT_OUTPUT_PATH: &str = "./pagespeed_report.xlsx";

/// Environment variable the CLI reads the API key from.
pub const API_KEY_ENV: &str = "PAGESPEED_API_KEY";

/// MIME type of the XLSX export.
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// MIME type of the CSV export.
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Header (trimmed, ASCII case-insensitive) that marks the URL column of a table.
pub const URL_COLUMN_HEADER: &str = "URL";
