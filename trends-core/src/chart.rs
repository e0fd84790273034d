use chrono::{Duration, NaiveDate};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fmt::Display;
use std::path::Path;

use crate::{error::WeatherError, model::TrendSeries};

const CHART_SIZE: (u32, u32) = (1000, 500);
const CHART_TITLE: &str = "Weather Trends";

/// Render the dual-axis trend chart: average temperature on the left axis,
/// rainfall on the right, dates shared on the x-axis.
///
/// With `output = Some(path)` the chart is written there as a PNG. With
/// `None` it is drawn into an in-memory bitmap, so the render path still
/// runs without touching the filesystem.
///
/// An empty series is rejected up front; callers are expected to skip the
/// chart in that case.
pub fn render_trend_chart(
    series: &TrendSeries,
    output: Option<&Path>,
) -> Result<(), WeatherError> {
    if series.is_empty() {
        return Err(WeatherError::EmptySeries);
    }

    match output {
        Some(path) => {
            let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
            draw(&root, series)
        }
        None => {
            let mut buf = vec![0u8; (CHART_SIZE.0 * CHART_SIZE.1 * 3) as usize];
            let root = BitMapBackend::with_buffer(&mut buf, CHART_SIZE).into_drawing_area();
            draw(&root, series)
        }
    }
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &TrendSeries,
) -> Result<(), WeatherError> {
    root.fill(&WHITE).map_err(chart_err)?;

    let (x_lo, x_hi) = date_bounds(&series.dates);
    let (t_lo, t_hi) = padded_bounds(&series.temps_c);
    let (_, r_hi) = padded_bounds(&series.rain_mm);

    let mut chart = ChartBuilder::on(root)
        .caption(CHART_TITLE, ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(60)
        .y_label_area_size(48)
        .right_y_label_area_size(48)
        .build_cartesian_2d(x_lo..x_hi, t_lo..t_hi)
        .map_err(chart_err)?
        .set_secondary_coord(x_lo..x_hi, 0.0..r_hi);

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Avg Temperature (°C)")
        .x_labels(series.len())
        .x_label_formatter(&|d: &NaiveDate| d.format("%Y-%m-%d").to_string())
        .x_label_style(("sans-serif", 12).into_font().transform(FontTransform::Rotate90))
        .draw()
        .map_err(chart_err)?;

    chart
        .configure_secondary_axes()
        .y_desc("Rainfall (mm)")
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(
            LineSeries::new(
                series.dates.iter().copied().zip(series.temps_c.iter().copied()),
                RED.stroke_width(2),
            )
            .point_size(3),
        )
        .map_err(chart_err)?
        .label("Avg Temperature (°C)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .draw_secondary_series(
            LineSeries::new(
                series.dates.iter().copied().zip(series.rain_mm.iter().copied()),
                BLUE.stroke_width(2),
            )
            .point_size(3),
        )
        .map_err(chart_err)?
        .label("Rainfall (mm)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

fn chart_err(err: impl Display) -> WeatherError {
    WeatherError::Chart(err.to_string())
}

/// Widen a degenerate single-date range so plotters gets a non-empty axis.
fn date_bounds(dates: &[NaiveDate]) -> (NaiveDate, NaiveDate) {
    let lo = dates.iter().min().copied().unwrap_or_default();
    let hi = dates.iter().max().copied().unwrap_or_default();
    if lo == hi { (lo - Duration::days(1), hi + Duration::days(1)) } else { (lo, hi) }
}

/// Min/max with a margin, so flat series still get a visible axis span.
fn padded_bounds(values: &[f64]) -> (f64, f64) {
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((hi - lo) * 0.1).max(1.0);
    (lo - pad, hi + pad)
}
