//! Flattens a [`ScoreResult`] into report cells.

use std::borrow::Cow;

use crate::config::NOT_AVAILABLE;
use crate::report::{Outcome, ScoreResult};

/// Report column headers, in order.
pub const COLUMNS: [&str; 12] = [
    "URL",
    "Strategy",
    "Performance",
    "Accessibility",
    "Best Practices",
    "SEO",
    "FCP",
    "LCP",
    "CLS",
    "TTI",
    "Improvement Areas",
    "Error",
];

/// One report cell before it is written to a sink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    /// Category score in [0, 1].
    Score(f64),
    /// Field absent from the response; written as `N/A`.
    Missing,
    /// Deliberately blank (the Error cell of a success row).
    Empty,
}

impl Cell<'_> {
    /// Plain-text rendering shared by the CSV and table sinks.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Text(text) => text.to_string(),
            Cell::Score(score) => format!("{:.0}%", score * 100.0),
            Cell::Missing => NOT_AVAILABLE.to_string(),
            Cell::Empty => String::new(),
        }
    }
}

/// Cuts `text` to at most `max_chars` characters, ending in `...` when cut.
pub fn clip(text: &str, max_chars: usize) -> Cow<'_, str> {
    if text.chars().count() <= max_chars {
        return Cow::Borrowed(text);
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    Cow::Owned(format!("{}...", kept))
}

fn text_or_missing(value: Option<&str>) -> Cell<'_> {
    value.map_or(Cell::Missing, Cell::Text)
}

/// Cells for one row, aligned with [`COLUMNS`].
pub fn cells(result: &ScoreResult) -> [Cell<'_>; 12] {
    let url = Cell::Text(&result.url);
    let strategy = Cell::Text(result.strategy.as_str());

    match &result.outcome {
        Outcome::Scored(scores) => {
            let [performance, accessibility, best_practices, seo] =
                scores.categories().map(|s| s.map_or(Cell::Missing, Cell::Score));
            let [fcp, lcp, cls, tti] = scores.metrics().map(text_or_missing);
            [
                url,
                strategy,
                performance,
                accessibility,
                best_practices,
                seo,
                fcp,
                lcp,
                cls,
                tti,
                text_or_missing(scores.improvement_areas.as_deref()),
                Cell::Empty,
            ]
        }
        Outcome::Failed(error) => {
            let mut row = [Cell::Missing; 12];
            row[0] = url;
            row[1] = strategy;
            row[11] = Cell::Text(error);
            row
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagespeed::Strategy;
    use crate::report::Scores;

    #[test]
    fn test_cells_success_row() {
        let result = ScoreResult::scored(
            "https://a.test",
            Strategy::Desktop,
            Scores {
                performance: Some(0.95),
                first_contentful_paint: Some("1.2 s".into()),
                improvement_areas: Some("None".into()),
                ..Scores::default()
            },
        );
        let row = cells(&result);
        assert_eq!(row[0], Cell::Text("https://a.test"));
        assert_eq!(row[1], Cell::Text("desktop"));
        assert_eq!(row[2], Cell::Score(0.95));
        assert_eq!(row[3], Cell::Missing);
        assert_eq!(row[6], Cell::Text("1.2 s"));
        assert_eq!(row[7], Cell::Missing);
        assert_eq!(row[10], Cell::Text("None"));
        assert_eq!(row[11], Cell::Empty);
    }

    #[test]
    fn test_cells_failed_row() {
        let result = ScoreResult::failed("bad", Strategy::Mobile, "HTTP 500 Internal Server Error");
        let row = cells(&result);
        assert_eq!(row[0], Cell::Text("bad"));
        assert!(row[2..11].iter().all(|c| *c == Cell::Missing));
        assert_eq!(row[11], Cell::Text("HTTP 500 Internal Server Error"));
    }

    #[test]
    fn test_to_text() {
        assert_eq!(Cell::Score(0.95).to_text(), "95%");
        assert_eq!(Cell::Score(0.0).to_text(), "0%");
        assert_eq!(Cell::Missing.to_text(), "N/A");
        assert_eq!(Cell::Empty.to_text(), "");
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip("short", 10), "short");
        assert!(matches!(clip("exactly10!", 10), Cow::Borrowed(_)));
        let clipped = clip("abcdefghijkl", 8);
        assert_eq!(clipped, "abcde...");
        assert_eq!(clip("ééééé", 4).chars().count(), 4);
    }
}
