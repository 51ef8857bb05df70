//! Error types produced while loading, extracting or rendering beam data.

use std::path::PathBuf;
use thiserror::Error;

/// Error returned when a workbook cannot be opened or a sheet materialized.
///
/// Each variant names the resource that failed so the command line diagnostic
/// tells the user exactly which file or sheet to fix.
#[derive(Debug, Error)]
pub enum WorkbookError {
    /// Returned when the workbook path does not resolve to an existing file.
    #[error("workbook {path:?} does not exist")]
    FileNotFound {
        /// Path that failed to resolve.
        path: PathBuf,
    },
    /// Returned when the requested sheet is absent from the workbook.
    #[error("sheet {sheet:?} does not exist in this workbook")]
    SheetNotFound {
        /// Name of the missing sheet.
        sheet: String,
    },
    /// Returned when the file exists but is not a well-formed workbook.
    #[error("workbook could not be parsed: {source}")]
    Malformed {
        /// Underlying parser error.
        #[source]
        source: calamine::XlsxError,
    },
}

/// Error returned when a required column cannot be extracted from a table.
///
/// There is no fallback column-name resolution and no type coercion beyond
/// what the loader already performed, so both variants are terminal.
///
/// # Examples
///
/// ```
/// use beamplot::{extract_station_series, ColumnError, StationTable};
///
/// let table = StationTable::new(vec!["Distance (m)".to_string()], vec![]);
/// let error = extract_station_series(&table).expect_err("shear column is absent");
/// assert_eq!(
///     error,
///     ColumnError::Missing {
///         column: "SF (kN)".to_string(),
///     }
/// );
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColumnError {
    /// Returned when a required column is missing from the table.
    #[error("column {column:?} is missing from the table")]
    Missing {
        /// Header of the missing column.
        column: String,
    },
    /// Returned when a required cell does not hold a numeric value.
    #[error("column {column:?} holds a non-numeric value at data row {row}")]
    NonNumeric {
        /// Header of the offending column.
        column: String,
        /// Zero-based data row index of the offending cell.
        row: usize,
    },
}

/// Error returned when a rendered chart cannot be written out.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Returned when the chart HTML cannot be written to the output path.
    #[error("failed to write chart to {path:?}: {source}")]
    Io {
        /// Output path that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
