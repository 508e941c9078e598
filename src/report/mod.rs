//! Report assembly.
//!
//! `ReportBuilder::build` turns an ordered list of URLs into a `Report` with
//! exactly one `ScoreResult` per URL, at the same index, whether the request
//! for it succeeded or not.

mod builder;
mod types;

pub use builder::{ensure_credential, ReportBuilder};
pub use types::{Outcome, Report, ScoreResult, Scores};
