//! Two-panel diagram construction and output.
//!
//! The layout reproduces the classic presentation of beam diagrams: the Shear
//! Force Diagram stacked above the Bending Moment Diagram on a shared
//! distance axis, each panel with its own zero reference line, grid and
//! legend entry.

use crate::errors::RenderError;
use crate::station::StationSeries;
use log::debug;
use plotly::color::NamedColor;
use plotly::common::{Anchor, DashType, Line, Marker, MarkerSymbol, Mode, Title};
use plotly::layout::{
    Annotation, Axis, GridPattern, Layout, LayoutGrid, RowOrder, Shape, ShapeLine, ShapeType,
};
use plotly::{Plot, Scatter};

/// Title shown above the top (shear force) panel.
pub const SFD_TITLE: &str = "Shear Force Diagram (SFD)";

/// Title shown above the bottom (bending moment) panel.
pub const BMD_TITLE: &str = "Bending Moment Diagram (BMD)";

/// Legend label of the shear force trace.
const SHEAR_LABEL: &str = "Shear Force";

/// Legend label of the bending moment trace.
const MOMENT_LABEL: &str = "Bending Moment";

/// Figure width in pixels; the 10:8 proportion of the figure.
const FIGURE_WIDTH: usize = 1000;

/// Figure height in pixels; the 10:8 proportion of the figure.
const FIGURE_HEIGHT: usize = 800;

/// Paper-coordinate height of the gap row between the two panels.
///
/// With a two-row independent grid the top panel spans roughly
/// `[1 - PANEL_SPAN, 1]` and the bottom panel `[0, PANEL_SPAN]` of the paper,
/// which is where the panel titles anchor.
const PANEL_SPAN: f64 = 0.425;

/// Build the stacked SFD/BMD figure for a set of stations.
///
/// The construction is pure: it never touches a display surface, so tests can
/// inspect the resulting figure as JSON. Series of mismatched or zero length
/// are passed through to the plotting library unchecked and fall back to its
/// default behavior.
#[must_use]
pub fn build_diagram(series: &StationSeries) -> Plot {
    let shear = Scatter::new(series.distance.clone(), series.shear.clone())
        .name(SHEAR_LABEL)
        .mode(Mode::LinesMarkers)
        .marker(Marker::new().symbol(MarkerSymbol::Circle))
        .line(Line::new().color(NamedColor::Blue).dash(DashType::Solid));

    let moment = Scatter::new(series.distance.clone(), series.moment.clone())
        .name(MOMENT_LABEL)
        .mode(Mode::LinesMarkers)
        .marker(Marker::new().symbol(MarkerSymbol::Square))
        .line(Line::new().color(NamedColor::Red).dash(DashType::Solid))
        .x_axis("x2")
        .y_axis("y2");

    let layout = Layout::new()
        .grid(
            LayoutGrid::new()
                .rows(2)
                .columns(1)
                .pattern(GridPattern::Independent)
                .row_order(RowOrder::TopToBottom),
        )
        .width(FIGURE_WIDTH)
        .height(FIGURE_HEIGHT)
        .show_legend(true)
        // The bottom axis matches the top one so both panels pan and zoom as
        // a single distance axis.
        .x_axis(Axis::new().show_grid(true))
        .x_axis2(
            Axis::new()
                .matches("x")
                .title(Title::with_text("Distance (m)"))
                .show_grid(true),
        )
        .y_axis(
            Axis::new()
                .title(Title::with_text("Shear Force (kN)"))
                .show_grid(true),
        )
        .y_axis2(
            Axis::new()
                .title(Title::with_text("Bending Moment (kN-m)"))
                .show_grid(true),
        )
        .shapes(vec![zero_line("y"), zero_line("y2")])
        .annotations(vec![
            panel_title(SFD_TITLE, 1.0),
            panel_title(BMD_TITLE, PANEL_SPAN),
        ]);

    let mut plot = Plot::new();
    plot.add_trace(shear);
    plot.add_trace(moment);
    plot.set_layout(layout);
    debug!(
        "built two-panel figure for {} stations",
        series.distance.len()
    );
    plot
}

/// Black zero-reference line spanning the full width of one panel.
fn zero_line(y_ref: &str) -> Shape {
    Shape::new()
        .shape_type(ShapeType::Line)
        .x_ref("paper")
        .y_ref(y_ref)
        .x0(0.0)
        .x1(1.0)
        .y0(0.0)
        .y1(0.0)
        .line(ShapeLine::new().color(NamedColor::Black).width(1.0))
}

/// Centered title sitting directly above one panel.
fn panel_title(text: &str, y: f64) -> Annotation {
    Annotation::new()
        .text(text)
        .x_ref("paper")
        .y_ref("paper")
        .x(0.5)
        .y(y)
        .x_anchor(Anchor::Center)
        .y_anchor(Anchor::Bottom)
        .show_arrow(false)
}

/// Hand the figure to the host display surface.
///
/// Opens the system browser on the rendered figure; depending on the host
/// environment this may block until the surface is closed. This is the only
/// observable output of the default pipeline.
pub fn display(plot: &Plot) {
    plot.show();
}

/// Write the figure to a standalone HTML file instead of displaying it.
///
/// # Errors
///
/// Returns [`RenderError::Io`] naming the output path if the file cannot be
/// written.
pub fn write_html(plot: &Plot, path: &std::path::Path) -> Result<(), RenderError> {
    std::fs::write(path, plot.to_html()).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })
}
