//! Tabular data model for beam response stations.

use crate::errors::ColumnError;
use serde::{Deserialize, Serialize};

/// Header of the column holding the distance along the member in metres.
pub const DISTANCE_COLUMN: &str = "Distance (m)";

/// Header of the column holding the shear force in kilonewtons.
pub const SHEAR_COLUMN: &str = "SF (kN)";

/// Header of the column holding the bending moment in kilonewton-metres.
pub const MOMENT_COLUMN: &str = "BM (kN-m)";

/// A single spreadsheet cell after loading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// A numeric cell, covering integer, float and date-serial content.
    Number(f64),
    /// A textual cell that could not be read as a number.
    Text(String),
    /// An empty cell.
    Empty,
}

impl CellValue {
    /// Return the numeric content of the cell, if any.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            CellValue::Text(_) | CellValue::Empty => None,
        }
    }
}

/// A row-oriented table materialized from one workbook sheet.
///
/// Headers come from the sheet's first row; every subsequent row becomes one
/// entry in [`rows`](StationTable::rows), index-aligned with the headers. The
/// table carries whatever the sheet contains — whether the three required
/// columns exist with equal length is a precondition on the data source, not
/// something the loader enforces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationTable {
    /// Column headers taken from the sheet's first row.
    headers: Vec<String>,
    /// Data rows in sheet order, one cell per header.
    rows: Vec<Vec<CellValue>>,
}

impl StationTable {
    /// Build a table from headers and data rows.
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { headers, rows }
    }

    /// Column headers in sheet order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in sheet order, excluding the header row.
    #[must_use]
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the column with the given header, if present.
    #[must_use]
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|candidate| candidate == header)
    }
}

/// The three index-aligned numeric series a diagram is drawn from.
///
/// The i-th element of each vector originates from the same table row, so a
/// station is reconstructed by reading all three vectors at one index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationSeries {
    /// Distance along the member in metres, one value per station.
    pub distance: Vec<f64>,
    /// Shear force in kilonewtons, one value per station.
    pub shear: Vec<f64>,
    /// Bending moment in kilonewton-metres, one value per station.
    pub moment: Vec<f64>,
}

/// Extract the distance, shear force and bending moment series from a table.
///
/// Row order is preserved and the three series stay index-aligned with the
/// source rows. There is no fallback header resolution: the table must carry
/// the exact headers [`DISTANCE_COLUMN`], [`SHEAR_COLUMN`] and
/// [`MOMENT_COLUMN`].
///
/// # Errors
///
/// Returns [`ColumnError::Missing`] if a required column is absent and
/// [`ColumnError::NonNumeric`] if a required cell holds no numeric value.
pub fn extract_station_series(table: &StationTable) -> Result<StationSeries, ColumnError> {
    Ok(StationSeries {
        distance: numeric_column(table, DISTANCE_COLUMN)?,
        shear: numeric_column(table, SHEAR_COLUMN)?,
        moment: numeric_column(table, MOMENT_COLUMN)?,
    })
}

/// Collect one named column as numbers, preserving row order.
fn numeric_column(table: &StationTable, header: &str) -> Result<Vec<f64>, ColumnError> {
    let index = table.column_index(header).ok_or_else(|| ColumnError::Missing {
        column: header.to_string(),
    })?;

    let mut values = Vec::with_capacity(table.row_count());
    for (row, cells) in table.rows().iter().enumerate() {
        let value = cells
            .get(index)
            .and_then(CellValue::as_number)
            .ok_or_else(|| ColumnError::NonNumeric {
                column: header.to_string(),
                row,
            })?;
        values.push(value);
    }
    Ok(values)
}
