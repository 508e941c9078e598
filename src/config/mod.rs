//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoint, timeouts, report markers)
//! - Library configuration types
//! - CLI option parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::Opt;
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
