//! Flattens a PageSpeed Insights response into report fields.
//!
//! Lookups are independent: a missing `categories` block does not affect the
//! metrics, and a missing `audits` block does not affect the scores.

use serde_json::Value;

use super::json_path::{lookup, lookup_f64, lookup_str};
use crate::config::{IMPROVEMENT_SEPARATOR, IMPROVEMENT_THRESHOLD, NO_IMPROVEMENTS};
use crate::report::Scores;

const LIGHTHOUSE_RESULT: &str = "lighthouseResult";

const CATEGORY_PERFORMANCE: &str = "performance";
const CATEGORY_ACCESSIBILITY: &str = "accessibility";
const CATEGORY_BEST_PRACTICES: &str = "best-practices";
const CATEGORY_SEO: &str = "seo";

const AUDIT_FCP: &str = "first-contentful-paint";
const AUDIT_LCP: &str = "largest-contentful-paint";
const AUDIT_CLS: &str = "cumulative-layout-shift";
const AUDIT_TTI: &str = "interactive";

/// Extracts every report field from a parsed response body.
pub fn extract_scores(body: &Value) -> Scores {
    Scores {
        performance: category_score(body, CATEGORY_PERFORMANCE),
        accessibility: category_score(body, CATEGORY_ACCESSIBILITY),
        best_practices: category_score(body, CATEGORY_BEST_PRACTICES),
        seo: category_score(body, CATEGORY_SEO),
        first_contentful_paint: display_value(body, AUDIT_FCP),
        largest_contentful_paint: display_value(body, AUDIT_LCP),
        cumulative_layout_shift: display_value(body, AUDIT_CLS),
        time_to_interactive: display_value(body, AUDIT_TTI),
        improvement_areas: improvement_areas(body),
    }
}

/// `lighthouseResult.categories.<id>.score`, kept only when inside [0, 1].
fn category_score(body: &Value, id: &str) -> Option<f64> {
    lookup_f64(body, &[LIGHTHOUSE_RESULT, "categories", id, "score"])
        .filter(|score| (0.0..=1.0).contains(score))
}

/// `lighthouseResult.audits.<id>.displayValue`.
fn display_value(body: &Value, id: &str) -> Option<String> {
    lookup_str(body, &[LIGHTHOUSE_RESULT, "audits", id, "displayValue"]).map(str::to_owned)
}

/// Titles of numeric-mode audits scoring below the threshold, in response order.
///
/// Absent when the response has no `audits` object at all, `"None"` when it
/// has audits but none qualify.
fn improvement_areas(body: &Value) -> Option<String> {
    let audits = lookup(body, &[LIGHTHOUSE_RESULT, "audits"])?.as_object()?;

    let titles: Vec<&str> = audits
        .values()
        .filter(|audit| lookup_str(audit, &["scoreDisplayMode"]) == Some("numeric"))
        .filter(|audit| lookup_f64(audit, &["score"]).is_some_and(|s| s < IMPROVEMENT_THRESHOLD))
        .filter_map(|audit| lookup_str(audit, &["title"]))
        .collect();

    if titles.is_empty() {
        Some(NO_IMPROVEMENTS.to_string())
    } else {
        Some(titles.join(IMPROVEMENT_SEPARATOR))
    }
}
