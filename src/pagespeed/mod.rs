//! PageSpeed Insights client side: request types, the HTTP call, and response
//! normalization.

mod extract;
mod fetch;
pub mod json_path;
mod request;

pub use extract::extract_scores;
pub use fetch::fetch_scores;
pub use request::{ScoreRequest, Strategy};
