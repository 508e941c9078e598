//! The single HTTP call made per URL.

use log::{debug, trace};
use reqwest::Client;
use serde_json::Value;

use super::json_path::lookup_str;
use super::request::ScoreRequest;
use crate::error_handling::RequestFailure;

/// Issues one GET to the scoring endpoint and parses the body as JSON.
///
/// No retry. A transport error, a non-2xx status, or a body that is not JSON
/// all come back as `RequestFailure`; anything else is handed to extraction
/// as-is, however incomplete.
pub async fn fetch_scores(
    client: &Client,
    endpoint: &str,
    request: &ScoreRequest<'_>,
) -> Result<Value, RequestFailure> {
    debug!(
        "Requesting {} scores for {}",
        request.strategy,
        request.url
    );

    let response = client
        .get(endpoint)
        .query(&request.query())
        .send()
        .await?;

    let status = response.status();
    trace!("Scoring endpoint answered {status} for {}", request.url);

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RequestFailure::Status {
            status,
            message: api_error_message(&body),
        });
    }

    let body = response.text().await?;
    debug!("Body length for {}: {} bytes", request.url, body.len());
    Ok(serde_json::from_str(&body)?)
}

/// `error.message` from a Google API error body, if the body has one.
fn api_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    lookup_str(&value, &["error", "message"])
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}
