use beamplot::{
    build_diagram, display, extract_station_series, load_sheet, render_preview, write_html,
};
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

/// Render shear force and bending moment diagrams from a workbook.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Workbook holding the beam response table.
    #[arg(default_value = "SFS_Screening_SFDBMD.xlsx")]
    workbook: PathBuf,

    /// Sheet to load from the workbook.
    #[arg(long, default_value = "Sheet1")]
    sheet: String,

    /// Write the chart to a standalone HTML file instead of opening a browser.
    #[arg(long, value_name = "CHART.html")]
    out: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    // Materialize the requested sheet. The table carries whatever the sheet
    // holds; whether the expected columns exist is checked at extraction.
    let table = load_sheet(&cli.workbook, &cli.sheet)?;

    // Show the head of the table so the user can confirm the workbook holds
    // the data they expect before a browser window opens.
    print!("{}", render_preview(&table, 5));

    // Pull out the three station series and build the stacked diagram pair.
    // See https://en.wikipedia.org/wiki/Shear_and_moment_diagram for the
    // conventions the figure follows.
    let series = extract_station_series(&table)?;
    let figure = build_diagram(&series);

    match cli.out {
        Some(path) => write_html(&figure, &path)?,
        None => display(&figure),
    }

    Ok(())
}
