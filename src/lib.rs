//! pagespeed_report library: bulk PageSpeed Insights reporting
//!
//! This library resolves a list of page URLs from a spreadsheet, delimited file
//! or plain text, scores each one with the PageSpeed Insights API, and assembles
//! the results into a fixed-shape report that exports to XLSX or CSV. A failed
//! request becomes an error row; it never aborts the batch.
//!
//! # Example
//!
//! ```no_run
//! use pagespeed_report::{run_report, Config, Strategy};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("urls.xlsx"),
//!     api_key: std::env::var("PAGESPEED_API_KEY")?,
//!     strategy: Strategy::Desktop,
//!     ..Default::default()
//! };
//!
//! let summary = run_report(config).await?;
//! println!("Scored {} URLs: {} succeeded, {} failed",
//!          summary.total_urls, summary.successful, summary.failed);
//! # Ok(())
//! # }
//! ```
//!
//! The pieces can also be used on their own:
//!
//! ```no_run
//! use pagespeed_report::{export, resolve, ExportFormat, InputSource, ReportBuilder, Strategy};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let urls = resolve(&InputSource::Text("https://example.com\n".into()))?;
//! let builder = ReportBuilder::new(
//!     Arc::new(reqwest::Client::new()),
//!     pagespeed_report::config::PAGESPEED_ENDPOINT,
//! );
//! let report = builder.build(&urls, Strategy::Mobile, "my-key").await?;
//! let bytes = export(&report, ExportFormat::Xlsx)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod input;
pub mod pagespeed;
pub mod report;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{
    BatchError, ErrorType, ExportError, InitializationError, ProcessingStats, RequestFailure,
    WarningType,
};
pub use export::{export, render_table, ExportFormat};
pub use input::{load_source, resolve, InputSource, Table, UrlColumn};
pub use pagespeed::{ScoreRequest, Strategy};
pub use report::{Outcome, Report, ReportBuilder, ScoreResult, Scores};
pub use run::{run_report, ReportSummary};

// Internal run module (load, score, export, write)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use std::path::PathBuf;
    use std::time::Instant;

    use crate::app::{print_error_statistics, print_simple_summary};
    use crate::config::Config;
    use crate::export::export;
    use crate::input::{load_source, resolve};
    use crate::report::{ensure_credential, Report, ReportBuilder};

    /// Results of a report run.
    #[derive(Debug, Clone)]
    pub struct ReportSummary {
        /// The report that was exported, one row per input URL
        pub report: Report,
        /// Total number of URLs scored
        pub total_urls: usize,
        /// Number of URLs that produced scores
        pub successful: usize,
        /// Number of URLs that produced error rows
        pub failed: usize,
        /// Where the exported report was written
        pub output: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a report with the provided configuration.
    ///
    /// This is the main entry point for the library. It reads URLs from the
    /// input file, scores them one at a time, and writes the exported report
    /// to `config.output`.
    ///
    /// # Errors
    ///
    /// Fails before any request is made on a blank API key
    /// (`BatchError::MissingCredential`) or unreadable input
    /// (`BatchError::MalformedInput`); both can be recovered with
    /// `anyhow::Error::downcast_ref`. Also fails if the report cannot be
    /// rendered or written. Per-URL failures are rows, not errors.
    pub async fn run_report(config: Config) -> Result<ReportSummary> {
        let start_time = Instant::now();

        ensure_credential(&config.api_key)?;

        let source = load_source(&config.file).await?;
        let urls = resolve(&source)?;
        info!("Resolved {} URL(s) from {}", urls.len(), config.file.display());

        let builder =
            ReportBuilder::from_config(&config).context("Failed to initialize HTTP client")?;
        let report = builder
            .build(&urls, config.strategy, &config.api_key)
            .await?;

        let bytes = export(&report, config.format).context("Failed to render report")?;
        tokio::fs::write(&config.output, &bytes)
            .await
            .with_context(|| format!("Failed to write report to {}", config.output.display()))?;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        print_error_statistics(builder.stats());
        print_simple_summary(
            report.len(),
            report.succeeded(),
            report.failed(),
            elapsed_seconds,
            &config.output,
        );

        Ok(ReportSummary {
            total_urls: report.len(),
            successful: report.succeeded(),
            failed: report.failed(),
            report,
            output: config.output,
            elapsed_seconds,
        })
    }
}
