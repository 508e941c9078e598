//! Error categorization.
//!
//! Maps per-request failures onto `ErrorType` so statistics can report how many
//! rows failed for which reason.

use reqwest::StatusCode;

use super::stats::ProcessingStats;
use super::types::{ErrorType, RequestFailure};

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Only transport-level errors reach this function; status codes are checked
/// explicitly by the caller and categorized with `categorize_status`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if let Some(status) = error.status() {
        return categorize_status(status);
    }

    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_body() || error.is_decode() {
        ErrorType::HttpRequestBodyError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Categorizes a non-2xx status returned by the scoring endpoint.
pub fn categorize_status(status: StatusCode) -> ErrorType {
    match status.as_u16() {
        400 => ErrorType::HttpRequestBadRequest,
        403 => ErrorType::HttpRequestForbidden,
        429 => ErrorType::HttpRequestTooManyRequests,
        500 => ErrorType::HttpRequestInternalServerError,
        503 => ErrorType::HttpRequestServiceUnavailable,
        _ => ErrorType::HttpRequestOtherStatus,
    }
}

/// Categorizes any per-request failure.
pub fn categorize_failure(failure: &RequestFailure) -> ErrorType {
    match failure {
        RequestFailure::Transport(e) => categorize_reqwest_error(e),
        RequestFailure::Status { status, .. } => categorize_status(*status),
        RequestFailure::InvalidBody(_) => ErrorType::InvalidJsonResponse,
    }
}

/// Records a failure in the processing statistics.
pub fn update_error_stats(stats: &ProcessingStats, failure: &RequestFailure) {
    stats.increment_error(categorize_failure(failure));
}
