//! XLSX export tests: the workbook is read back with calamine.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use pagespeed_report::{export, ExportFormat, Report, ScoreResult, Scores, Strategy};

fn read_back(bytes: Vec<u8>) -> Vec<Vec<Data>> {
    let mut workbook: Xlsx<_> =
        calamine::open_workbook_from_rs(Cursor::new(bytes)).expect("valid workbook");
    let range = workbook
        .worksheet_range_at(0)
        .expect("one worksheet")
        .expect("readable worksheet");
    range.rows().map(|row| row.to_vec()).collect()
}

fn text(cell: &Data) -> String {
    cell.to_string()
}

fn sample_report() -> Report {
    Report::from(vec![
        ScoreResult::scored(
            "https://a.test",
            Strategy::Mobile,
            Scores {
                performance: Some(0.95),
                accessibility: Some(0.8),
                best_practices: Some(1.0),
                seo: Some(0.5),
                first_contentful_paint: Some("1.1 s".into()),
                largest_contentful_paint: Some("2.0 s".into()),
                cumulative_layout_shift: Some("0.02".into()),
                time_to_interactive: Some("3.0 s".into()),
                improvement_areas: Some("Speed Index".into()),
            },
        ),
        ScoreResult::scored(
            "https://b.test",
            Strategy::Mobile,
            Scores {
                performance: Some(0.4),
                ..Scores::default()
            },
        ),
        ScoreResult::failed("https://c.test", Strategy::Mobile, "HTTP 500 Internal Server Error"),
    ])
}

#[test]
fn test_xlsx_header_row() {
    let rows = read_back(export(&sample_report(), ExportFormat::Xlsx).unwrap());
    let headers: Vec<String> = rows[0].iter().map(text).collect();
    assert_eq!(
        headers,
        vec![
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
            "Error"
        ]
    );
}

#[test]
fn test_xlsx_success_row() {
    let rows = read_back(export(&sample_report(), ExportFormat::Xlsx).unwrap());
    let row = &rows[1];
    assert_eq!(text(&row[0]), "https://a.test");
    assert_eq!(text(&row[1]), "mobile");
    assert_eq!(row[2], Data::Float(0.95));
    assert_eq!(row[5], Data::Float(0.5));
    assert_eq!(text(&row[6]), "1.1 s");
    assert_eq!(text(&row[10]), "Speed Index");
    assert_eq!(row[11], Data::Empty);
}

#[test]
fn test_xlsx_absent_fields_are_marked() {
    let rows = read_back(export(&sample_report(), ExportFormat::Xlsx).unwrap());
    let partial = &rows[2];
    assert_eq!(partial[2], Data::Float(0.4));
    for cell in &partial[3..11] {
        assert_eq!(text(cell), "N/A");
    }

    let failed = &rows[3];
    assert_eq!(text(&failed[0]), "https://c.test");
    for cell in &failed[2..11] {
        assert_eq!(text(cell), "N/A");
    }
    assert_eq!(text(&failed[11]), "HTTP 500 Internal Server Error");
}

#[test]
fn test_xlsx_empty_report_has_only_headers() {
    let rows = read_back(export(&Report::default(), ExportFormat::Xlsx).unwrap());
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_csv_and_xlsx_agree_on_row_count() {
    let report = sample_report();
    let csv = String::from_utf8(export(&report, ExportFormat::Csv).unwrap()).unwrap();
    let xlsx = read_back(export(&report, ExportFormat::Xlsx).unwrap());
    assert_eq!(csv.lines().count(), xlsx.len());
}

#[test]
fn test_xlsx_clips_oversized_cells() {
    let long_url = format!("https://example.com/{}", "a".repeat(33_000));
    let report = Report::from(vec![
        ScoreResult::scored("https://ok.test", Strategy::Mobile, Scores::default()),
        ScoreResult::failed(long_url.as_str(), Strategy::Mobile, "HTTP 400 Bad Request"),
    ]);

    let bytes = export(&report, ExportFormat::Xlsx).expect("oversized cells are clipped");
    let rows = read_back(bytes);
    assert_eq!(rows.len(), 3);
    assert_eq!(text(&rows[1][0]), "https://ok.test");

    let clipped = text(&rows[2][0]);
    assert_eq!(clipped.chars().count(), 32_767);
    assert!(clipped.starts_with("https://example.com/aaa"));
    assert!(clipped.ends_with("..."));
    assert_eq!(text(&rows[2][11]), "HTTP 400 Bad Request");
}
