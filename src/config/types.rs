//! Configuration types.
//!
//! This module defines enums and structs used to configure a report run. The
//! library `Config` carries no CLI dependencies and can be built programmatically.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_OUTPUT_PATH, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, PAGESPEED_ENDPOINT,
};
use crate::export::ExportFormat;
use crate::pagespeed::Strategy;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use pagespeed_report::{Config, Strategy};
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("urls.xlsx"),
///     api_key: "my-key".to_string(),
///     strategy: Strategy::Desktop,
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct Config {
    /// File to read URLs from (`-` reads plain text from stdin)
    pub file: PathBuf,

    /// Where the report is written
    pub output: PathBuf,

    /// Report file format
    pub format: ExportFormat,

    /// Device profile the scoring endpoint simulates
    pub strategy: Strategy,

    /// Credential passed through as the `key` query parameter
    pub api_key: String,

    /// Scoring endpoint URL
    pub endpoint: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("file", &self.file)
            .field("output", &self.output)
            .field("format", &self.format)
            .field("strategy", &self.strategy)
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("urls.xlsx"),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            format: ExportFormat::Xlsx,
            strategy: Strategy::Mobile,
            api_key: String::new(),
            endpoint: PAGESPEED_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
