//! Textual preview of a loaded station table.

use crate::station::{CellValue, StationTable};
use std::fmt::Write;

/// Render the first `limit` rows of a table as an aligned textual preview.
///
/// The preview is printed before extraction so users can sanity-check the
/// headers and the first few stations against the workbook they supplied,
/// much like inspecting the head of a data frame.
#[must_use]
pub fn render_preview(table: &StationTable, limit: usize) -> String {
    let shown = table.row_count().min(limit);
    let mut output = String::new();

    writeln!(
        &mut output,
        "Station table preview (first {shown} of {} rows)",
        table.row_count()
    )
    .expect("writing to string cannot fail");

    // Column widths follow the widest of header and shown cells so the
    // preview stays readable for long headers and short values alike.
    let widths: Vec<usize> = table
        .headers()
        .iter()
        .enumerate()
        .map(|(column, header)| {
            table.rows()[..shown]
                .iter()
                .map(|row| row.get(column).map_or(0, |cell| cell_text(cell).len()))
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header_line: Vec<String> = table
        .headers()
        .iter()
        .zip(&widths)
        .map(|(header, width)| format!("{header:<width$}"))
        .collect();
    writeln!(&mut output, "{}", header_line.join(" | "))
        .expect("writing to string cannot fail");

    for row in &table.rows()[..shown] {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(column, width)| {
                let text = row.get(column).map_or_else(String::new, cell_text);
                format!("{text:<width$}")
            })
            .collect();
        writeln!(&mut output, "{}", cells.join(" | ")).expect("writing to string cannot fail");
    }

    output
}

/// Plain-text rendering of one cell.
fn cell_text(cell: &CellValue) -> String {
    match cell {
        CellValue::Number(value) => value.to_string(),
        CellValue::Text(text) => text.clone(),
        CellValue::Empty => String::new(),
    }
}
