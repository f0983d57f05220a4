//! Line-chart drawing on the bitmap backend.
//!
//! All report charts are dated line charts of the same size and layout,
//! so a single drawing routine covers them. Axis ranges are computed
//! from the data with a small pad; an empty chart is always a caller
//! bug and fails before any file is created.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

use crate::services::aggregation::SeriesPoint;

/// Output raster size for every chart, in pixels.
pub const CHART_SIZE: (u32, u32) = (800, 400);

/// Padded axis ranges covering every point in every series.
fn plot_ranges(series: &[(&str, &[SeriesPoint])]) -> Option<(Range<NaiveDate>, Range<f64>)> {
    let mut points = series.iter().flat_map(|(_, s)| s.iter());
    let first = points.next()?;

    let mut x_min = first.date;
    let mut x_max = first.date;
    let mut y_min = first.value;
    let mut y_max = first.value;
    for p in points {
        x_min = x_min.min(p.date);
        x_max = x_max.max(p.date);
        y_min = y_min.min(p.value);
        y_max = y_max.max(p.value);
    }

    Some((
        x_min - Duration::days(1)..x_max + Duration::days(1),
        y_min - 2.0..y_max + 2.0,
    ))
}

/// Draw a chart with a single unlabeled line series.
pub fn render_series(path: &Path, title: &str, y_desc: &str, points: &[SeriesPoint]) -> Result<()> {
    render_multi_series(path, title, y_desc, &[("", points)])
}

/// Draw a chart with any number of labeled line series.
///
/// The legend is drawn only when there is more than one series; legend
/// entries keep the order of `series`.
pub fn render_multi_series(
    path: &Path,
    title: &str,
    y_desc: &str,
    series: &[(&str, &[SeriesPoint])],
) -> Result<()> {
    let (x_range, y_range) = plot_ranges(series)
        .with_context(|| format!("No data points to draw: {}", path.display()))?;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc(y_desc)
        .draw()?;

    for (idx, (label, points)) in series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let drawn = chart.draw_series(LineSeries::new(
            points.iter().map(|p| (p.date, p.value)),
            color,
        ))?;
        if series.len() > 1 {
            drawn
                .label(*label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color));
        }
    }

    if series.len() > 1 {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()
        .with_context(|| format!("Failed to write chart: {}", path.display()))?;
    Ok(())
}
