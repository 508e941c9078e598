//! Command-line options.

use std::path::PathBuf;

use clap::Parser;

use crate::config::constants::{
    API_KEY_ENV, DEFAULT_OUTPUT_PATH, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    PAGESPEED_ENDPOINT,
};
use crate::config::types::{Config, LogFormat, LogLevel};
use crate::export::ExportFormat;
use crate::pagespeed::Strategy;

/// Command-line options.
///
/// Converted into the library `Config` before anything runs, so the core never
/// reads CLI or environment state itself.
///
/// # Examples
///
/// ```bash
/// # Score every URL in the "URL" column (or first column) of a spreadsheet
/// pagespeed_report urls.xlsx --api-key $KEY
///
/// # Desktop profile, CSV output, URLs from stdin
/// cat urls.txt | pagespeed_report - --strategy desktop --format csv -o report.csv
/// ```
#[derive(Parser)]
#[command(
    name = "pagespeed_report",
    about = "Runs PageSpeed Insights over a list of URLs and writes the scores to a spreadsheet."
)]
pub struct Opt {
    /// Input file: .xlsx/.xls/.ods, .csv/.tsv, or plain text (one URL per line). Use - for stdin
    #[arg(value_parser)]
    pub file: PathBuf,

    /// Device profile: mobile|desktop
    #[arg(long, value_enum, default_value_t = Strategy::Mobile)]
    pub strategy: Strategy,

    /// PageSpeed Insights API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true, default_value = "")]
    pub api_key: String,

    /// Output path for the report
    #[arg(short, long, value_parser, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Report format: xlsx|csv
    #[arg(long, value_enum, default_value_t = ExportFormat::Xlsx)]
    pub format: ExportFormat,

    /// Scoring endpoint URL
    #[arg(long, default_value = PAGESPEED_ENDPOINT)]
    pub endpoint: String,

    /// Per-request timeout in seconds (at least 1)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Also print the report table to stdout
    #[arg(long)]
    pub print: bool,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Config {
            file: opt.file,
            output: opt.output,
            format: opt.format,
            strategy: opt.strategy,
            api_key: opt.api_key,
            endpoint: opt.endpoint,
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
