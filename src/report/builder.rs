//! Batch orchestration: one scoring request per URL, one row per request.

use std::sync::Arc;
use std::time::Instant;

use log::{debug, info, warn};

use crate::app::log_progress;
use crate::config::Config;
use crate::error_handling::{
    update_error_stats, BatchError, InitializationError, ProcessingStats, WarningType,
};
use crate::initialization::init_client;
use crate::pagespeed::{extract_scores, fetch_scores, ScoreRequest, Strategy};

use super::types::{Report, ScoreResult, Scores};

/// Fails with `MissingCredential` when the key is empty or whitespace.
pub fn ensure_credential(api_key: &str) -> Result<(), BatchError> {
    if api_key.trim().is_empty() {
        Err(BatchError::MissingCredential)
    } else {
        Ok(())
    }
}

/// Builds reports against one scoring endpoint.
///
/// Holds the HTTP client and the endpoint; strategy and key are passed per
/// batch so nothing is read from ambient state.
pub struct ReportBuilder {
    client: Arc<reqwest::Client>,
    endpoint: String,
    stats: ProcessingStats,
}

impl ReportBuilder {
    pub fn new(client: Arc<reqwest::Client>, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            stats: ProcessingStats::new(),
        }
    }

    /// Creates a builder with an HTTP client configured from `config`.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        Ok(Self::new(client, config.endpoint.clone()))
    }

    /// Failure and gap counts accumulated over every batch this builder ran.
    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }

    /// Scores every URL in order and returns one row per URL.
    ///
    /// # Errors
    ///
    /// Returns `BatchError::MissingCredential` for a blank key, before any
    /// request is made. Per-URL failures never surface here; they become
    /// error rows.
    pub async fn build(
        &self,
        urls: &[String],
        strategy: Strategy,
        api_key: &str,
    ) -> Result<Report, BatchError> {
        ensure_credential(api_key)?;

        let total = urls.len();
        let start_time = Instant::now();
        let mut report = Report::with_capacity(total);

        info!("Scoring {} URL(s) with the {} strategy", total, strategy);

        for (index, url) in urls.iter().enumerate() {
            info!("[{}/{}] {}", index + 1, total, url);
            let request = ScoreRequest::new(url, strategy, api_key);
            report.push(self.score(&request).await);
        }

        log_progress(start_time, report.succeeded(), report.failed());
        Ok(report)
    }

    /// Runs one request and normalizes whatever happened into a row.
    async fn score(&self, request: &ScoreRequest<'_>) -> ScoreResult {
        match fetch_scores(&self.client, &self.endpoint, request).await {
            Ok(body) => {
                let scores = extract_scores(&body);
                self.record_gaps(request.url, &scores);
                ScoreResult::scored(request.url, request.strategy, scores)
            }
            Err(failure) => {
                warn!("Failed to score {}: {}", request.url, failure);
                update_error_stats(&self.stats, &failure);
                ScoreResult::failed(request.url, request.strategy, failure.to_string())
            }
        }
    }

    fn record_gaps(&self, url: &str, scores: &Scores) {
        let missing_categories = scores.categories().iter().filter(|s| s.is_none()).count();
        let missing_metrics = scores.metrics().iter().filter(|m| m.is_none()).count();

        for _ in 0..missing_categories {
            self.stats.increment_warning(WarningType::MissingCategoryScore);
        }
        for _ in 0..missing_metrics {
            self.stats.increment_warning(WarningType::MissingMetric);
        }
        if scores.improvement_areas.is_none() {
            self.stats.increment_warning(WarningType::MissingAudits);
        }

        if missing_categories + missing_metrics > 0 || scores.improvement_areas.is_none() {
            debug!(
                "Incomplete response for {}: {} category score(s) and {} metric(s) missing{}",
                url,
                missing_categories,
                missing_metrics,
                if scores.improvement_areas.is_none() {
                    ", no audits"
                } else {
                    ""
                }
            );
        }
    }
}
