//! Report data model.

use crate::pagespeed::Strategy;

/// Fields extracted from a successful scoring response.
///
/// Every field is independently optional: `None` means the response did not
/// carry it, and it is rendered as `N/A` on export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scores {
    /// Performance category score in [0, 1]
    pub performance: Option<f64>,
    /// Accessibility category score in [0, 1]
    pub accessibility: Option<f64>,
    /// Best Practices category score in [0, 1]
    pub best_practices: Option<f64>,
    /// SEO category score in [0, 1]
    pub seo: Option<f64>,
    /// First Contentful Paint, as displayed by Lighthouse (e.g. "1.2 s")
    pub first_contentful_paint: Option<String>,
    /// Largest Contentful Paint
    pub largest_contentful_paint: Option<String>,
    /// Cumulative Layout Shift
    pub cumulative_layout_shift: Option<String>,
    /// Time to Interactive
    pub time_to_interactive: Option<String>,
    /// Titles of numeric audits scoring below the improvement threshold,
    /// joined with "; ", or "None" when no audit needs improvement
    pub improvement_areas: Option<String>,
}

impl Scores {
    /// The four category scores, in report column order.
    pub fn categories(&self) -> [Option<f64>; 4] {
        [
            self.performance,
            self.accessibility,
            self.best_practices,
            self.seo,
        ]
    }

    /// The display metrics, in report column order.
    pub fn metrics(&self) -> [Option<&str>; 4] {
        [
            self.first_contentful_paint.as_deref(),
            self.largest_contentful_paint.as_deref(),
            self.cumulative_layout_shift.as_deref(),
            self.time_to_interactive.as_deref(),
        ]
    }
}

/// What one scoring request produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The request succeeded and its body parsed as JSON.
    Scored(Scores),
    /// The request failed; carries the message shown in the Error column.
    Failed(String),
}

/// One report row: the normalized outcome of scoring one URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub url: String,
    pub strategy: Strategy,
    pub outcome: Outcome,
}

impl ScoreResult {
    pub fn scored(url: impl Into<String>, strategy: Strategy, scores: Scores) -> Self {
        Self {
            url: url.into(),
            strategy,
            outcome: Outcome::Scored(scores),
        }
    }

    pub fn failed(url: impl Into<String>, strategy: Strategy, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            strategy,
            outcome: Outcome::Failed(error.into()),
        }
    }

    /// Extracted fields, or `None` for an error row.
    pub fn scores(&self) -> Option<&Scores> {
        match &self.outcome {
            Outcome::Scored(scores) => Some(scores),
            Outcome::Failed(_) => None,
        }
    }

    /// Error message, or `None` for a success row.
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Scored(_) => None,
            Outcome::Failed(message) => Some(message),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Scored(_))
    }

    /// Performance score, absent on error rows and when the response lacked it.
    pub fn performance(&self) -> Option<f64> {
        self.scores().and_then(|s| s.performance)
    }
}

/// The terminal artifact of one batch: one row per resolved input URL, in
/// input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    rows: Vec<ScoreResult>,
}

impl Report {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, row: ScoreResult) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ScoreResult] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoreResult> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows that carry scores.
    pub fn succeeded(&self) -> usize {
        self.rows.iter().filter(|r| r.is_success()).count()
    }

    /// Number of error rows.
    pub fn failed(&self) -> usize {
        self.len() - self.succeeded()
    }
}

impl From<Vec<ScoreResult>> for Report {
    fn from(rows: Vec<ScoreResult>) -> Self {
        Self { rows }
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a ScoreResult;
    type IntoIter = std::slice::Iter<'a, ScoreResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
