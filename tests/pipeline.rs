#![warn(clippy::pedantic)]

use beamplot::{
    build_diagram, extract_station_series, load_sheet, ColumnError, WorkbookError,
    BMD_TITLE, DISTANCE_COLUMN, MOMENT_COLUMN, SFD_TITLE, SHEAR_COLUMN,
};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

/// The five-station example: a point load at midspan of a 4 m member.
const MIDSPAN_STATIONS: [(f64, f64, f64); 5] = [
    (0.0, 0.0, 0.0),
    (1.0, 10.0, 5.0),
    (2.0, 0.0, 10.0),
    (3.0, -10.0, 5.0),
    (4.0, 0.0, 0.0),
];

/// Unique path under the system temp directory for one fixture workbook.
fn fixture_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("beamplot-{name}-{}.xlsx", std::process::id()))
}

/// Author a single-sheet fixture workbook with the given headers and rows.
///
/// The sheet keeps `rust_xlsxwriter`'s default name, `Sheet1`.
fn write_fixture(name: &str, headers: &[&str], stations: &[&[f64]]) -> PathBuf {
    let path = fixture_path(name);
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (column, header) in headers.iter().enumerate() {
        sheet
            .write_string(0, u16::try_from(column).expect("few columns"), *header)
            .expect("header cell writes");
    }
    for (row, station) in stations.iter().enumerate() {
        for (column, value) in station.iter().enumerate() {
            sheet
                .write_number(
                    u32::try_from(row + 1).expect("few rows"),
                    u16::try_from(column).expect("few columns"),
                    *value,
                )
                .expect("data cell writes");
        }
    }

    workbook.save(&path).expect("fixture workbook saves");
    path
}

/// Fixture holding the full midspan scenario under the standard headers.
fn midspan_fixture(name: &str) -> PathBuf {
    let rows: Vec<Vec<f64>> = MIDSPAN_STATIONS
        .iter()
        .map(|&(x, v, m)| vec![x, v, m])
        .collect();
    let rows: Vec<&[f64]> = rows.iter().map(Vec::as_slice).collect();
    write_fixture(name, &[DISTANCE_COLUMN, SHEAR_COLUMN, MOMENT_COLUMN], &rows)
}

#[test]
fn loads_table_with_source_headers_and_row_count() {
    let path = midspan_fixture("load");
    let table = load_sheet(&path, "Sheet1").expect("well-formed fixture loads");

    let headers: Vec<&str> = table.headers().iter().map(String::as_str).collect();
    assert_eq!(headers, vec![DISTANCE_COLUMN, SHEAR_COLUMN, MOMENT_COLUMN]);
    assert_eq!(table.row_count(), MIDSPAN_STATIONS.len());
    let _ = std::fs::remove_file(path);
}

#[test]
fn extraction_preserves_row_alignment_end_to_end() {
    let path = midspan_fixture("extract");
    let table = load_sheet(&path, "Sheet1").expect("well-formed fixture loads");
    let series = extract_station_series(&table).expect("all columns present");

    for (index, &(x, v, m)) in MIDSPAN_STATIONS.iter().enumerate() {
        assert_eq!(series.distance[index], x);
        assert_eq!(series.shear[index], v);
        assert_eq!(series.moment[index], m);
    }
    let _ = std::fs::remove_file(path);
}

#[test]
fn missing_file_fails_before_rendering() {
    let path = fixture_path("does-not-exist");
    let error = load_sheet(&path, "Sheet1").expect_err("missing workbook is rejected");
    assert!(matches!(
        error,
        WorkbookError::FileNotFound { path: reported } if reported == path
    ));
}

#[test]
fn missing_sheet_fails_before_rendering() {
    let path = midspan_fixture("sheet");
    let error = load_sheet(&path, "Results").expect_err("unknown sheet is rejected");
    assert!(matches!(
        error,
        WorkbookError::SheetNotFound { sheet } if sheet == "Results"
    ));
    let _ = std::fs::remove_file(path);
}

#[test]
fn malformed_workbook_is_rejected() {
    let path = fixture_path("malformed");
    std::fs::write(&path, b"not a workbook").expect("plain file writes");
    let error = load_sheet(&path, "Sheet1").expect_err("non-xlsx content is rejected");
    assert!(matches!(error, WorkbookError::Malformed { .. }));
    let _ = std::fs::remove_file(path);
}

#[test]
fn missing_column_blocks_the_chart() {
    let rows: Vec<Vec<f64>> = MIDSPAN_STATIONS.iter().map(|&(x, v, _)| vec![x, v]).collect();
    let rows: Vec<&[f64]> = rows.iter().map(Vec::as_slice).collect();
    let path = write_fixture("missing-column", &[DISTANCE_COLUMN, SHEAR_COLUMN], &rows);

    let table = load_sheet(&path, "Sheet1").expect("fixture loads without the moment column");
    let error = extract_station_series(&table).expect_err("moment column is absent");
    assert_eq!(
        error,
        ColumnError::Missing {
            column: MOMENT_COLUMN.to_string(),
        }
    );
    let _ = std::fs::remove_file(path);
}

#[test]
fn midspan_scenario_renders_both_panels() {
    let path = midspan_fixture("render");
    let table = load_sheet(&path, "Sheet1").expect("well-formed fixture loads");
    let series = extract_station_series(&table).expect("all columns present");
    let figure: serde_json::Value =
        serde_json::from_str(&build_diagram(&series).to_json()).expect("figure serializes");

    let traces = figure["data"].as_array().expect("two traces");
    assert_eq!(traces.len(), 2);
    assert_eq!(traces[0]["x"], serde_json::json!([0.0, 1.0, 2.0, 3.0, 4.0]));
    assert_eq!(traces[0]["y"], serde_json::json!([0.0, 10.0, 0.0, -10.0, 0.0]));
    assert_eq!(traces[1]["y"], serde_json::json!([0.0, 5.0, 10.0, 5.0, 0.0]));

    let annotations = figure["layout"]["annotations"]
        .as_array()
        .expect("panel titles present");
    assert_eq!(annotations[0]["text"], SFD_TITLE);
    assert_eq!(annotations[1]["text"], BMD_TITLE);
    assert_eq!(
        figure["layout"]["shapes"].as_array().expect("zero lines").len(),
        2
    );
    let _ = std::fs::remove_file(path);
}

#[test]
fn single_station_workbook_still_renders() {
    let path = write_fixture(
        "single",
        &[DISTANCE_COLUMN, SHEAR_COLUMN, MOMENT_COLUMN],
        &[&[0.0, 0.0, 0.0]],
    );
    let table = load_sheet(&path, "Sheet1").expect("single-row fixture loads");
    let series = extract_station_series(&table).expect("all columns present");
    assert_eq!(series.distance.len(), 1);

    let figure: serde_json::Value =
        serde_json::from_str(&build_diagram(&series).to_json()).expect("figure serializes");
    assert_eq!(figure["data"].as_array().expect("two traces").len(), 2);
    let _ = std::fs::remove_file(path);
}

#[test]
fn written_chart_is_a_standalone_html_document() {
    let series = beamplot::StationSeries {
        distance: vec![0.0, 4.0],
        shear: vec![10.0, -10.0],
        moment: vec![0.0, 0.0],
    };
    let out = std::env::temp_dir().join(format!("beamplot-out-{}.html", std::process::id()));
    beamplot::write_html(&build_diagram(&series), Path::new(&out)).expect("chart HTML writes");

    let html = std::fs::read_to_string(&out).expect("chart HTML reads back");
    assert!(html.contains("<html"));
    assert!(html.contains(SFD_TITLE));
    let _ = std::fs::remove_file(out);
}
