//! Workbook loading: materialize one sheet as a [`StationTable`].

use crate::errors::WorkbookError;
use crate::station::{CellValue, StationTable};
use calamine::{open_workbook, Data, DataType, Reader, Xlsx, XlsxError};
use log::{debug, info};
use std::path::Path;

/// Load one sheet of an `.xlsx` workbook as a row-oriented table.
///
/// Headers are taken from the sheet's first row; every later row becomes one
/// data row. The loader reads the file and nothing else — it performs no
/// column or length validation, leaving the sheet's content to the extraction
/// step.
///
/// # Errors
///
/// Returns [`WorkbookError::FileNotFound`] if the path does not resolve,
/// [`WorkbookError::SheetNotFound`] if the named sheet is absent and
/// [`WorkbookError::Malformed`] if the file is not a well-formed workbook.
pub fn load_sheet(path: &Path, sheet: &str) -> Result<StationTable, WorkbookError> {
    // Resolve the path up front so a missing file reports its name instead of
    // surfacing as an opaque parser error.
    if !path.exists() {
        return Err(WorkbookError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|source| WorkbookError::Malformed { source })?;
    debug!("workbook sheets: {:?}", workbook.sheet_names());

    let range = workbook.worksheet_range(sheet).map_err(|source| match source {
        XlsxError::WorksheetNotFound(name) => WorkbookError::SheetNotFound { sheet: name },
        other => WorkbookError::Malformed { source: other },
    })?;

    let mut sheet_rows = range.rows();
    let headers: Vec<String> = sheet_rows
        .next()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .unwrap_or_default();
    let rows: Vec<Vec<CellValue>> = sheet_rows
        .map(|row| row.iter().map(cell_value).collect())
        .collect();

    info!(
        "loaded {} data rows with {} columns from sheet {sheet:?}",
        rows.len(),
        headers.len()
    );
    Ok(StationTable::new(headers, rows))
}

/// Convert one spreadsheet cell into the table's cell model.
fn cell_value(cell: &Data) -> CellValue {
    // `as_f64` covers integer, float and date-serial cells, matching the
    // numeric coercion spreadsheet readers conventionally perform.
    if let Some(number) = cell.as_f64() {
        CellValue::Number(number)
    } else if cell.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(cell.to_string())
    }
}
