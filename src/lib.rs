#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod chart;
mod errors;
mod report;
mod station;
mod workbook;

pub use chart::{build_diagram, display, write_html, BMD_TITLE, SFD_TITLE};
pub use errors::{ColumnError, RenderError, WorkbookError};
pub use report::render_preview;
pub use station::{
    extract_station_series, CellValue, StationSeries, StationTable, DISTANCE_COLUMN,
    MOMENT_COLUMN, SHEAR_COLUMN,
};
pub use workbook::load_sheet;
