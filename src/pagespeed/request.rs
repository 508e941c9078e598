//! Scoring request types.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

/// Device profile the scoring endpoint simulates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Strategy {
    /// Mobile device emulation (default)
    Mobile,
    /// Desktop emulation
    Desktop,
}

impl Strategy {
    /// Lower-cased form expected by the endpoint's `strategy` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Mobile => "mobile",
            Strategy::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(Strategy::Mobile),
            "desktop" => Ok(Strategy::Desktop),
            other => Err(format!("Unknown strategy: {other}")),
        }
    }
}

/// One outbound scoring call.
///
/// Borrows from the batch: the URL from the resolved input, the key from the
/// caller. Never logged as a whole; `Debug` hides the key.
#[derive(Clone, Copy)]
pub struct ScoreRequest<'a> {
    pub url: &'a str,
    pub strategy: Strategy,
    pub api_key: &'a str,
}

impl<'a> ScoreRequest<'a> {
    pub fn new(url: &'a str, strategy: Strategy, api_key: &'a str) -> Self {
        Self {
            url,
            strategy,
            api_key,
        }
    }

    /// Query parameters sent to the endpoint.
    pub fn query(&self) -> [(&'static str, &str); 3] {
        [
            ("url", self.url),
            ("strategy", self.strategy.as_str()),
            ("key", self.api_key),
        ]
    }
}

impl fmt::Debug for ScoreRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoreRequest")
            .field("url", &self.url)
            .field("strategy", &self.strategy)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
