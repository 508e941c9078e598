// Shared test helpers: PageSpeed response fixtures, mock endpoint setup and
// temporary input files.

use std::io::Write;

use pagespeed_report::{Config, ReportBuilder};
use serde_json::{json, Value};
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// API key used against the mock endpoint.
#[allow(dead_code)]
pub const TEST_KEY: &str = "test-key-123";

/// Path the mock scoring endpoint is mounted on.
#[allow(dead_code)]
pub const ENDPOINT_PATH: &str = "/pagespeedonline/v5/runPagespeed";

/// Endpoint URL for a running mock server.
#[allow(dead_code)]
pub fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), ENDPOINT_PATH)
}

/// A realistic PageSpeed response with every reported field present.
#[allow(dead_code)]
pub fn pagespeed_body(performance: f64) -> Value {
    json!({
        "id": "https://example.com/",
        "lighthouseResult": {
            "categories": {
                "performance": { "id": "performance", "score": performance },
                "accessibility": { "id": "accessibility", "score": 0.88 },
                "best-practices": { "id": "best-practices", "score": 1.0 },
                "seo": { "id": "seo", "score": 0.92 }
            },
            "audits": {
                "first-contentful-paint": {
                    "title": "First Contentful Paint",
                    "score": 0.95,
                    "scoreDisplayMode": "numeric",
                    "displayValue": "1.1 s"
                },
                "largest-contentful-paint": {
                    "title": "Largest Contentful Paint",
                    "score": 0.62,
                    "scoreDisplayMode": "numeric",
                    "displayValue": "3.4 s"
                },
                "cumulative-layout-shift": {
                    "title": "Cumulative Layout Shift",
                    "score": 1,
                    "scoreDisplayMode": "numeric",
                    "displayValue": "0.01"
                },
                "interactive": {
                    "title": "Time to Interactive",
                    "score": 0.8,
                    "scoreDisplayMode": "numeric",
                    "displayValue": "4.0 s"
                },
                "uses-https": {
                    "title": "Uses HTTPS",
                    "score": 0,
                    "scoreDisplayMode": "binary"
                }
            }
        }
    })
}

/// Mounts a 200 response for one page URL.
#[allow(dead_code)]
pub async fn mount_scores(server: &MockServer, page_url: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(ENDPOINT_PATH))
        .and(query_param("url", page_url))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mounts an arbitrary response for one page URL.
#[allow(dead_code)]
pub async fn mount_response(server: &MockServer, page_url: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(ENDPOINT_PATH))
        .and(query_param("url", page_url))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Config pointing at the mock server with the given request timeout.
#[allow(dead_code)]
pub fn test_config(server: &MockServer, timeout_seconds: u64) -> Config {
    Config {
        api_key: TEST_KEY.to_string(),
        endpoint: endpoint(server),
        timeout_seconds,
        ..Config::default()
    }
}

/// Report builder pointing at the mock server.
#[allow(dead_code)]
pub fn test_builder(server: &MockServer, timeout_seconds: u64) -> ReportBuilder {
    ReportBuilder::from_config(&test_config(server, timeout_seconds))
        .expect("Failed to create report builder")
}

/// Writes `contents` to a temp file with the given suffix (e.g. ".csv").
#[allow(dead_code)]
pub fn write_temp(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}
