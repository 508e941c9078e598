//! Logger initialization.
//!
//! Every record passes through [`redact_api_keys`] before it is written, so a
//! request URL that reaches a log line (from this crate or a dependency) never
//! carries the PageSpeed key.

use std::borrow::Cow;
use std::io::Write;
use std::sync::LazyLock;

use colored::{ColoredString, Colorize};
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};
use regex::Regex;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// `key=<value>` as it appears in a query string.
static KEY_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(key)=[^&\s"'#]+"#).expect("key parameter pattern is valid")
});

const REDACTED: &str = "<redacted>";

/// Replaces the value of every `key=` query parameter in `message`.
pub fn redact_api_keys(message: &str) -> Cow<'_, str> {
    KEY_PARAM.replace_all(message, format!("${{1}}={}", REDACTED))
}

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first and `level` overrides it, so `--log-level` always
/// wins for this crate. HTTP internals stay at Info.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug pagespeed_report urls.xlsx
/// RUST_LOG=pagespeed_report=debug,reqwest=info pagespeed_report urls.xlsx --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("pagespeed_report", level);

    match format {
        LogFormat::Json => builder.format(write_json),
        LogFormat::Plain => builder.format(write_plain),
    };

    builder.try_init().map_err(InitializationError::from)
}

fn write_json(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    writeln!(buf, "{}", json_line(record, chrono::Utc::now().timestamp_millis()))
}

fn json_line(record: &Record, ts: i64) -> String {
    serde_json::json!({
        "ts": ts,
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": redact_api_keys(&record.args().to_string()),
    })
    .to_string()
}

fn write_plain(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    writeln!(buf, "{}", plain_line(record))
}

fn plain_line(record: &Record) -> String {
    let (emoji, level) = level_style(record.level());
    format!(
        "{} {} [{}] {}",
        emoji,
        record.target().cyan(),
        level,
        redact_api_keys(&record.args().to_string())
    )
}

fn level_style(level: Level) -> (&'static str, ColoredString) {
    let name = level.as_str();
    match level {
        Level::Error => ("❌", name.red()),
        Level::Warn => ("⚠️", name.yellow()),
        Level::Info => ("✔️", name.green()),
        Level::Debug => ("🔍", name.blue()),
        Level::Trace => ("🔬", name.purple()),
    }
}
