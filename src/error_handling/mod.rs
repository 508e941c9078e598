//! Error handling and processing statistics.
//!
//! This module provides:
//! - Batch-level errors (`BatchError`) that stop a run before any request
//! - Per-request failures (`RequestFailure`) that become error rows
//! - Failure categorization and counting for end-of-run statistics
//!
//! Statistics are categorized into:
//! - **Errors**: requests that produced an error row
//! - **Warnings**: fields missing from a successful response (rendered `N/A`)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::update_error_stats;
pub use stats::ProcessingStats;
pub use types::{
    BatchError, ErrorType, ExportError, InitializationError, RequestFailure, WarningType,
};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        for warning_type in WarningType::iter() {
            assert_eq!(stats.get_warning_count(warning_type), 0);
        }
    }

    #[test]
    fn test_processing_stats_increment() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::HttpRequestTimeoutError);
        assert_eq!(stats.get_error_count(ErrorType::HttpRequestTimeoutError), 1);

        stats.increment_warning(WarningType::MissingAudits);
        assert_eq!(stats.get_warning_count(WarningType::MissingAudits), 1);
    }

    #[test]
    fn test_processing_stats_totals() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::HttpRequestTimeoutError);
        stats.increment_error(ErrorType::InvalidJsonResponse);
        stats.increment_warning(WarningType::MissingMetric);

        assert_eq!(stats.total_errors(), 2);
        assert_eq!(stats.total_warnings(), 1);
    }
}
