//! Error type definitions.
//!
//! This module defines the batch-level errors that stop a run before any request
//! is made, the per-request failures that end up in a report row, and the
//! error/warning categories counted in processing statistics.

use std::error::Error as StdError;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors that abort a batch before any scoring request is made.
///
/// These are reported once, and no partial report is produced.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The input source has no usable column, or could not be read or parsed.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The API key is absent or blank.
    #[error("Missing API key: pass --api-key or set PAGESPEED_API_KEY")]
    MissingCredential,
}

/// Errors raised while rendering a report into bytes.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The spreadsheet writer failed.
    #[error("XLSX export error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// The CSV writer failed.
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the CSV buffer failed.
    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a single scoring request produced no scores.
///
/// Its `Display` output is what lands in the report's Error column, so none of
/// the variants may carry the request URL (which includes the API key).
#[derive(Error, Debug)]
pub enum RequestFailure {
    /// The request never produced a response (DNS, connect, timeout, body read).
    #[error("{}", describe_chain(.0))]
    Transport(ReqwestError),

    /// The endpoint answered with a non-2xx status.
    #[error("HTTP {status}{}", message_suffix(.message))]
    Status {
        /// Response status
        status: StatusCode,
        /// `error.message` from the endpoint's JSON error body, when present
        message: Option<String>,
    },

    /// The endpoint answered 2xx but the body is not JSON.
    #[error("Invalid JSON response: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl From<ReqwestError> for RequestFailure {
    fn from(err: ReqwestError) -> Self {
        // reqwest embeds the full request URL, key included, in its message
        RequestFailure::Transport(err.without_url())
    }
}

fn message_suffix(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {m}"),
        None => String::new(),
    }
}

/// Joins an error with its sources, e.g. `error sending request: operation timed out`.
fn describe_chain(err: &ReqwestError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

/// Categories of per-request failures, counted in processing statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Transport errors
    HttpRequestBuilderError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestOtherError,
    // Status errors returned by the scoring endpoint
    HttpRequestBadRequest,          // 400 - usually an unreachable or invalid page URL
    HttpRequestForbidden,           // 403 - key rejected or API not enabled
    HttpRequestTooManyRequests,     // 429 - quota exhausted
    HttpRequestInternalServerError, // 500 - Lighthouse run failed
    HttpRequestServiceUnavailable,  // 503
    HttpRequestOtherStatus,
    // Body errors
    InvalidJsonResponse,
}

/// Fields that were absent from an otherwise successful response.
///
/// These never fail a row; they are tracked only to explain `N/A` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)] // All variants start with "Missing"
pub enum WarningType {
    MissingCategoryScore,
    MissingMetric,
    MissingAudits,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestBadRequest => "Bad Request (400)",
            ErrorType::HttpRequestForbidden => "Forbidden (403)",
            ErrorType::HttpRequestTooManyRequests => "Too Many Requests (429)",
            ErrorType::HttpRequestInternalServerError => "Internal Server Error (500)",
            ErrorType::HttpRequestServiceUnavailable => "Service Unavailable (503)",
            ErrorType::HttpRequestOtherStatus => "Other HTTP status",
            ErrorType::InvalidJsonResponse => "Invalid JSON response",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingCategoryScore => "Missing category score",
            WarningType::MissingMetric => "Missing metric display value",
            WarningType::MissingAudits => "Missing audits",
        }
    }
}
