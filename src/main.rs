//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `pagespeed_report` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use pagespeed_report::config::Opt;
use pagespeed_report::initialization::init_logger_with;
use pagespeed_report::{render_table, run_report, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting PAGESPEED_API_KEY in .env without exporting it manually
    // Try loading from current directory first, then from the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let opt = Opt::parse();
    let print = opt.print;
    let config = Config::from(opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_report(config).await {
        Ok(summary) => {
            if print {
                print!("{}", render_table(&summary.report));
            }
            println!(
                "✅ Scored {} URL{} ({} succeeded, {} failed) in {:.1}s",
                summary.total_urls,
                if summary.total_urls == 1 { "" } else { "s" },
                summary.successful,
                summary.failed,
                summary.elapsed_seconds
            );
            println!("Report saved to {}", summary.output.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("pagespeed_report error: {:#}", e);
            process::exit(1);
        }
    }
}
